//! Default-construction policy
//!
//! A `DefaultConfig` decides what a freshly constructed `ComplexNumber`
//! holds when no coordinates are given. It is a plain immutable value: pass
//! it to the code that constructs numbers, or install it process-wide
//! through the [`registry`](crate::registry).
//!
//! The arithmetic operations live here because every result starts as a
//! default-constructed value before its coordinates are set. The free
//! functions, instance methods and operators all forward to these.
//!
//! # Loading from TOML
//!
//! ```toml
//! format = "polar"      # or "rectangular" (the default)
//! modulus = 2.0
//! argument = 90.0
//! ```
//!
//! Rectangular documents use `re` / `im` instead. Missing coordinates are 0.

use serde::Deserialize;

use crate::angle;
use crate::complex::ComplexNumber;
use crate::error::{check_modulus, ComplexError, ComplexResult};
use crate::format::DisplayFormat;

/// Immutable default-construction configuration
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DefaultConfig {
    re: f64,
    im: f64,
    format: DisplayFormat,
}

impl Default for DefaultConfig {
    fn default() -> Self {
        DefaultConfig {
            re: 0.0,
            im: 0.0,
            format: DisplayFormat::Rectangular,
        }
    }
}

/// On-disk shape of a default configuration
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct DefaultsDocument {
    format: Option<String>,
    re: Option<f64>,
    im: Option<f64>,
    modulus: Option<f64>,
    argument: Option<f64>,
}

impl DefaultConfig {
    /// Defaults given in rectangular coordinates; display format `Rectangular`.
    pub fn rectangular(re: f64, im: f64) -> Self {
        DefaultConfig {
            re,
            im,
            format: DisplayFormat::Rectangular,
        }
    }

    /// Defaults given in polar coordinates (argument in degrees); display
    /// format `Polar`. Fails on a negative modulus.
    pub fn polar(modulus: f64, argument: f64) -> ComplexResult<Self> {
        check_modulus(modulus)?;
        let (re, im) = angle::polar_to_rectangular(modulus, argument);
        Ok(DefaultConfig {
            re,
            im,
            format: DisplayFormat::Polar,
        })
    }

    /// Parse a TOML document into a configuration.
    pub fn from_toml_str(source: &str) -> ComplexResult<Self> {
        let doc: DefaultsDocument =
            toml::from_str(source).map_err(|e| ComplexError::config(e.to_string()))?;

        let format = match doc.format.as_deref() {
            Some(name) => name.parse::<DisplayFormat>()?,
            None => DisplayFormat::Rectangular,
        };

        match format {
            DisplayFormat::Rectangular => {
                reject_key("modulus", doc.modulus.is_some(), format)?;
                reject_key("argument", doc.argument.is_some(), format)?;
                Ok(Self::rectangular(
                    doc.re.unwrap_or(0.0),
                    doc.im.unwrap_or(0.0),
                ))
            }
            DisplayFormat::Polar => {
                reject_key("re", doc.re.is_some(), format)?;
                reject_key("im", doc.im.is_some(), format)?;
                Self::polar(doc.modulus.unwrap_or(0.0), doc.argument.unwrap_or(0.0))
            }
        }
    }

    /// Real part, as stored
    pub fn real_part(&self) -> f64 {
        self.re
    }

    /// Imaginary part, as stored
    pub fn imaginary_part(&self) -> f64 {
        self.im
    }

    /// Display format tag
    pub fn display_format(&self) -> DisplayFormat {
        self.format
    }

    /// A new number holding these defaults
    pub fn construct(&self) -> ComplexNumber {
        ComplexNumber::with_parts(self.re, self.im, self.format)
    }

    // ========== Arithmetic ==========

    /// `(a.re + b.re, a.im + b.im)`
    pub fn add(&self, a: &ComplexNumber, b: &ComplexNumber) -> ComplexNumber {
        let mut result = self.construct();
        result.set_rectangular(
            a.real_part() + b.real_part(),
            a.imaginary_part() + b.imaginary_part(),
        );
        result
    }

    /// `(a.re - b.re, a.im - b.im)`
    pub fn sub(&self, a: &ComplexNumber, b: &ComplexNumber) -> ComplexNumber {
        let mut result = self.construct();
        result.set_rectangular(
            a.real_part() - b.real_part(),
            a.imaginary_part() - b.imaginary_part(),
        );
        result
    }

    /// Moduli multiply, arguments add.
    pub fn multiply(&self, a: &ComplexNumber, b: &ComplexNumber) -> ComplexNumber {
        let mut result = self.construct();
        result.assign_polar(a.modulus() * b.modulus(), a.argument() + b.argument());
        result
    }

    /// Moduli divide, arguments subtract.
    ///
    /// A zero divisor is not trapped: the modulus becomes `Inf` or `NaN` and
    /// flows into the components.
    pub fn divide(&self, a: &ComplexNumber, b: &ComplexNumber) -> ComplexNumber {
        let mut result = self.construct();
        result.assign_polar(a.modulus() / b.modulus(), a.argument() - b.argument());
        result
    }

    /// `(a.re, -a.im)`, except on the real axis.
    ///
    /// When `a.im == 0` the result is a plain default-constructed value from
    /// this configuration, not `a`. Callers relying on `conj(x) == x` for
    /// real `x` must not use this.
    pub fn conjugate(&self, a: &ComplexNumber) -> ComplexNumber {
        let mut result = self.construct();
        if a.imaginary_part() != 0.0 {
            result.set_rectangular(a.real_part(), -a.imaginary_part());
        }
        result
    }
}

fn reject_key(key: &str, present: bool, format: DisplayFormat) -> ComplexResult<()> {
    if present {
        Err(ComplexError::config(format!(
            "key `{}` does not apply to {} defaults",
            key, format
        )))
    } else {
        Ok(())
    }
}
