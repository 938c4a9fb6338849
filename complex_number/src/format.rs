//! Display formats and float rendering
//!
//! A `ComplexNumber` renders either as `"<re>+(<im>)i"` or as
//! `"<modulus>*exp(i*<argument>)"`. Component values go through
//! [`format_float`] so whole numbers keep a trailing `.0`.

use std::fmt;
use std::str::FromStr;

use crate::error::{ComplexError, ComplexResult};

/// How a complex number is rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DisplayFormat {
    /// `re+(im)i`
    #[default]
    Rectangular,
    /// `modulus*exp(i*argument)`
    Polar,
}

impl DisplayFormat {
    /// Lower-case name, as accepted by `from_str`
    pub fn as_str(&self) -> &'static str {
        match self {
            DisplayFormat::Rectangular => "rectangular",
            DisplayFormat::Polar => "polar",
        }
    }
}

impl fmt::Display for DisplayFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DisplayFormat {
    type Err = ComplexError;

    /// Case-insensitive. Anything outside the known set is an
    /// `UnsupportedOperation`.
    fn from_str(s: &str) -> ComplexResult<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "rectangular" => Ok(DisplayFormat::Rectangular),
            "polar" => Ok(DisplayFormat::Polar),
            _ => Err(ComplexError::unsupported_operation(format!(
                "unknown display format '{}'",
                s
            ))),
        }
    }
}

/// Format a float for display.
///
/// - `NaN`, `Infinity`, `-Infinity` for non-finite values
/// - whole numbers below 1e15 in magnitude get one decimal (`2.0`, `-0.0`)
/// - everything else uses the shortest round-trip `Display` output
///
/// There is no exponent notation: `1e20` prints as `100000000000000000000`
/// and `1e-7` as `0.0000001`, not `1.0E20` / `1.0E-7`.
pub fn format_float(x: f64) -> String {
    if x.is_nan() {
        return "NaN".to_string();
    }
    if x.is_infinite() {
        return if x > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }

    if x.fract() == 0.0 && x.abs() < 1e15 {
        format!("{:.1}", x)
    } else {
        x.to_string()
    }
}

/// Render rectangular components as `re+(im)i`
pub fn render_rectangular(re: f64, im: f64) -> String {
    format!("{}+({})i", format_float(re), format_float(im))
}

/// Render polar components as `modulus*exp(i*argument)`
pub fn render_polar(modulus: f64, argument: f64) -> String {
    format!("{}*exp(i*{})", format_float(modulus), format_float(argument))
}
