//! Angle helpers
//!
//! Arguments are expressed in degrees throughout the crate. These helpers
//! convert polar input to the rectangular storage form and compute the
//! normalized argument of a rectangular pair.

use std::f64::consts::PI;

/// Degrees to radians
#[inline]
pub fn to_radians(degrees: f64) -> f64 {
    degrees * PI / 180.0
}

/// Radians to degrees
#[inline]
pub fn to_degrees(radians: f64) -> f64 {
    radians * 180.0 / PI
}

/// Convert a polar pair (modulus, argument in degrees) to `(re, im)`.
///
/// No validation happens here; callers check the modulus first.
#[inline]
pub fn polar_to_rectangular(modulus: f64, argument: f64) -> (f64, f64) {
    let radians = to_radians(argument);
    (radians.cos() * modulus, radians.sin() * modulus)
}

/// Magnitude of `(re, im)`
#[inline]
pub fn modulus(re: f64, im: f64) -> f64 {
    (re * re + im * im).sqrt()
}

/// Argument of `(re, im)` in degrees, normalized to `[0, 360)`.
///
/// The origin has argument 0. Everywhere else the value comes from
/// `atan(im / re)` with a half-turn correction when `re < 0`. On the
/// imaginary axis `im / re` is `±Inf`, so the result is 90 or 270.
pub fn argument(re: f64, im: f64) -> f64 {
    if re == 0.0 && im == 0.0 {
        return 0.0;
    }
    let mut degrees = to_degrees((im / re).atan());
    if re < 0.0 {
        degrees += 180.0;
    }
    normalize_degrees(degrees)
}

/// Fold an angle into `[0, 360)` by whole turns.
///
/// Non-finite input is returned unchanged. Angles beyond two turns are
/// reduced with `rem_euclid` first, since stepping by 360 cannot move a
/// float much larger than 360. The upward fold runs last so a tiny negative
/// angle that rounds to 360 after one turn still lands on 0.
pub fn normalize_degrees(mut degrees: f64) -> f64 {
    if !degrees.is_finite() {
        return degrees;
    }
    if degrees.abs() >= 720.0 {
        degrees = degrees.rem_euclid(360.0);
    }
    while degrees < 0.0 {
        degrees += 360.0;
    }
    while degrees >= 360.0 {
        degrees -= 360.0;
    }
    degrees
}
