//! The `ComplexNumber` value type
//!
//! Values are stored in rectangular form. Polar input is converted on the
//! way in, so `re` and `im` always describe the same number no matter how it
//! was set. The display format is a rendering hint only and takes no part in
//! equality.

use std::fmt;
use std::ops::{Add, Div, Mul, Sub};

use crate::angle;
use crate::error::{check_modulus, ComplexResult};
use crate::format::{render_polar, render_rectangular, DisplayFormat};
use crate::registry;

/// A complex number with 64-bit components
#[derive(Debug, Clone, Copy)]
pub struct ComplexNumber {
    re: f64,
    im: f64,
    format: DisplayFormat,
}

impl ComplexNumber {
    /// Construct from the current process-wide defaults.
    ///
    /// See [`registry::configure_default_rectangular`] and
    /// [`registry::configure_default_polar`]. Use
    /// [`DefaultConfig::construct`](crate::DefaultConfig::construct) to
    /// construct from an explicit configuration instead.
    pub fn new() -> Self {
        registry::current_defaults().construct()
    }

    /// Construct from rectangular coordinates. The display format is
    /// `Rectangular`.
    pub fn rectangular(re: f64, im: f64) -> Self {
        ComplexNumber {
            re,
            im,
            format: DisplayFormat::Rectangular,
        }
    }

    /// Construct from a modulus and an argument in degrees. The display
    /// format is `Polar`.
    pub fn polar(modulus: f64, argument: f64) -> ComplexResult<Self> {
        check_modulus(modulus)?;
        let (re, im) = angle::polar_to_rectangular(modulus, argument);
        Ok(ComplexNumber {
            re,
            im,
            format: DisplayFormat::Polar,
        })
    }

    pub(crate) fn with_parts(re: f64, im: f64, format: DisplayFormat) -> Self {
        ComplexNumber { re, im, format }
    }

    // ========== Mutation ==========

    /// Overwrite the value with rectangular coordinates.
    pub fn set_rectangular(&mut self, re: f64, im: f64) {
        self.re = re;
        self.im = im;
    }

    /// Overwrite the value with polar coordinates (argument in degrees).
    ///
    /// A negative modulus is rejected and leaves the value untouched.
    pub fn set_polar(&mut self, modulus: f64, argument: f64) -> ComplexResult<()> {
        check_modulus(modulus)?;
        self.assign_polar(modulus, argument);
        Ok(())
    }

    /// Polar assignment for moduli that are known to be valid
    /// (products and quotients of other moduli).
    pub(crate) fn assign_polar(&mut self, modulus: f64, argument: f64) {
        let (re, im) = angle::polar_to_rectangular(modulus, argument);
        self.re = re;
        self.im = im;
    }

    /// Change how the value renders through `Display`.
    pub fn set_display_format(&mut self, format: DisplayFormat) {
        self.format = format;
    }

    // ========== Accessors ==========

    /// Display format tag
    pub fn display_format(&self) -> DisplayFormat {
        self.format
    }

    /// Real part, as stored
    pub fn real_part(&self) -> f64 {
        self.re
    }

    /// Imaginary part, as stored
    pub fn imaginary_part(&self) -> f64 {
        self.im
    }

    /// `sqrt(re² + im²)`
    pub fn modulus(&self) -> f64 {
        angle::modulus(self.re, self.im)
    }

    /// Angle in degrees, in `[0, 360)`. The origin has argument 0.
    pub fn argument(&self) -> f64 {
        angle::argument(self.re, self.im)
    }

    // ========== Arithmetic ==========
    //
    // Each method forwards to the free function of the same name so both
    // spellings produce identical results.

    pub fn add(&self, addend: &ComplexNumber) -> ComplexNumber {
        registry::add(self, addend)
    }

    pub fn sub(&self, subtrahend: &ComplexNumber) -> ComplexNumber {
        registry::sub(self, subtrahend)
    }

    pub fn multiply(&self, factor: &ComplexNumber) -> ComplexNumber {
        registry::multiply(self, factor)
    }

    pub fn divide(&self, divisor: &ComplexNumber) -> ComplexNumber {
        registry::divide(self, divisor)
    }

    /// See [`registry::conjugate`] for the behaviour on the real axis.
    pub fn conjugate(&self) -> ComplexNumber {
        registry::conjugate(self)
    }

    // ========== Rendering ==========

    /// Render in `format`, ignoring the stored display format.
    pub fn to_string_in(&self, format: DisplayFormat) -> String {
        match format {
            DisplayFormat::Rectangular => render_rectangular(self.re, self.im),
            DisplayFormat::Polar => render_polar(self.modulus(), self.argument()),
        }
    }
}

impl Default for ComplexNumber {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ComplexNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_string_in(self.format))
    }
}

/// Exact component comparison; the display format is ignored.
impl PartialEq for ComplexNumber {
    fn eq(&self, other: &Self) -> bool {
        self.re == other.re && self.im == other.im
    }
}

// ========== Operator overloads ==========

impl Add for &ComplexNumber {
    type Output = ComplexNumber;

    fn add(self, rhs: Self) -> ComplexNumber {
        registry::add(self, rhs)
    }
}

impl Sub for &ComplexNumber {
    type Output = ComplexNumber;

    fn sub(self, rhs: Self) -> ComplexNumber {
        registry::sub(self, rhs)
    }
}

impl Mul for &ComplexNumber {
    type Output = ComplexNumber;

    fn mul(self, rhs: Self) -> ComplexNumber {
        registry::multiply(self, rhs)
    }
}

impl Div for &ComplexNumber {
    type Output = ComplexNumber;

    fn div(self, rhs: Self) -> ComplexNumber {
        registry::divide(self, rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ComplexError;

    const EPS: f64 = 1e-9;

    #[test]
    fn test_rectangular_accessors() {
        let z = ComplexNumber::rectangular(3.0, 4.0);
        assert_eq!(z.real_part(), 3.0);
        assert_eq!(z.imaginary_part(), 4.0);
        assert_eq!(z.modulus(), 5.0);
        assert!((z.argument() - 53.13).abs() < 0.01);
        assert_eq!(z.display_format(), DisplayFormat::Rectangular);
    }

    #[test]
    fn test_polar_constructor() {
        let z = ComplexNumber::polar(5.0, 90.0).unwrap();
        assert!(z.real_part().abs() < EPS);
        assert!((z.imaginary_part() - 5.0).abs() < EPS);
        assert_eq!(z.display_format(), DisplayFormat::Polar);

        assert!(matches!(
            ComplexNumber::polar(-1.0, 0.0),
            Err(ComplexError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_set_polar_rejects_negative_modulus_without_change() {
        let mut z = ComplexNumber::rectangular(1.0, 2.0);
        let err = z.set_polar(-1.0, 0.0).unwrap_err();
        assert!(matches!(err, ComplexError::InvalidArgument(_)));
        assert_eq!(z.real_part(), 1.0);
        assert_eq!(z.imaginary_part(), 2.0);
    }

    #[test]
    fn test_set_rectangular_and_polar() {
        let mut z = ComplexNumber::rectangular(0.0, 0.0);
        z.set_rectangular(-1.5, 2.5);
        assert_eq!(z, ComplexNumber::rectangular(-1.5, 2.5));

        z.set_polar(2.0, 180.0).unwrap();
        assert!((z.real_part() + 2.0).abs() < EPS);
        assert!(z.imaginary_part().abs() < EPS);
        // Setting coordinates never touches the display format
        assert_eq!(z.display_format(), DisplayFormat::Rectangular);
    }

    #[test]
    fn test_set_display_format_keeps_value() {
        let mut z = ComplexNumber::rectangular(-2.0, 0.0);
        z.set_display_format(DisplayFormat::Polar);
        assert_eq!(z.real_part(), -2.0);
        assert_eq!(z.imaginary_part(), 0.0);
        assert_eq!(z.to_string(), "2.0*exp(i*180.0)");
    }

    #[test]
    fn test_argument_origin_and_axes() {
        assert_eq!(ComplexNumber::rectangular(0.0, 0.0).argument(), 0.0);
        assert!((ComplexNumber::rectangular(0.0, 1.0).argument() - 90.0).abs() < EPS);
        assert!((ComplexNumber::rectangular(0.0, -1.0).argument() - 270.0).abs() < EPS);
        assert_eq!(ComplexNumber::rectangular(-4.0, 0.0).argument(), 180.0);
    }

    #[test]
    fn test_to_string_in_ignores_stored_format() {
        let z = ComplexNumber::rectangular(2.0, -3.0);
        assert_eq!(z.to_string_in(DisplayFormat::Rectangular), "2.0+(-3.0)i");
        assert_eq!(z.to_string(), "2.0+(-3.0)i");

        let w = ComplexNumber::rectangular(5.0, 0.0);
        assert_eq!(w.to_string_in(DisplayFormat::Polar), "5.0*exp(i*0.0)");
    }

    #[test]
    fn test_equality_ignores_format() {
        let a = ComplexNumber::rectangular(1.0, 2.0);
        let mut b = ComplexNumber::rectangular(1.0, 2.0);
        b.set_display_format(DisplayFormat::Polar);
        assert_eq!(a, b);
        assert_ne!(a, ComplexNumber::rectangular(1.0, 2.0000000001));
    }

    #[test]
    fn test_equality_is_exact() {
        let nan = ComplexNumber::rectangular(f64::NAN, 0.0);
        assert_ne!(nan, nan);
        assert_eq!(
            ComplexNumber::rectangular(0.0, 0.0),
            ComplexNumber::rectangular(-0.0, -0.0)
        );
    }

    #[test]
    fn test_add_sub_values() {
        let a = ComplexNumber::rectangular(1.0, 2.0);
        let b = ComplexNumber::rectangular(3.0, -1.0);
        assert_eq!(a.add(&b), ComplexNumber::rectangular(4.0, 1.0));
        assert_eq!(a.sub(&b), ComplexNumber::rectangular(-2.0, 3.0));
        // Operands are untouched
        assert_eq!(a, ComplexNumber::rectangular(1.0, 2.0));
        assert_eq!(b, ComplexNumber::rectangular(3.0, -1.0));
    }

    #[test]
    fn test_operators_match_methods() {
        let a = ComplexNumber::rectangular(1.5, -2.0);
        let b = ComplexNumber::rectangular(-0.5, 4.0);
        assert_eq!(&a + &b, a.add(&b));
        assert_eq!(&a - &b, a.sub(&b));
        assert_eq!(&a * &b, a.multiply(&b));
        assert_eq!(&a / &b, a.divide(&b));
    }

    #[test]
    fn test_multiply_divide_values() {
        let a = ComplexNumber::rectangular(1.0, 1.0);
        let b = ComplexNumber::rectangular(0.0, 2.0);
        let product = a.multiply(&b);
        assert!((product.real_part() + 2.0).abs() < EPS);
        assert!((product.imaginary_part() - 2.0).abs() < EPS);

        let quotient = product.divide(&b);
        assert!((quotient.real_part() - 1.0).abs() < EPS);
        assert!((quotient.imaginary_part() - 1.0).abs() < EPS);
    }

    #[test]
    fn test_conjugate_off_axis() {
        let z = ComplexNumber::rectangular(2.0, -3.0);
        assert_eq!(z.conjugate(), ComplexNumber::rectangular(2.0, 3.0));
    }
}
