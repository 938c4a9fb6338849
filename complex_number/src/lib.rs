//! Complex-number value type
//!
//! This crate provides a small complex-number library. It includes:
//!
//! - `ComplexNumber`, stored rectangular, settable from rectangular or
//!   polar (degree) coordinates
//! - `DisplayFormat` for `re+(im)i` / `modulus*exp(i*argument)` rendering
//! - `DefaultConfig`, the policy for default-constructed values
//! - a process-wide default registry with free-function arithmetic
//! - `ComplexError` for error handling

pub mod angle;
pub mod complex;
pub mod defaults;
pub mod error;
pub mod format;
pub mod registry;

/// Prelude module for convenient imports
///
/// # Example
/// ```
/// use complex_number::prelude::*;
///
/// let a = ComplexNumber::rectangular(1.0, 2.0);
/// let b = ComplexNumber::rectangular(3.0, -1.0);
/// assert_eq!(add(&a, &b), ComplexNumber::rectangular(4.0, 1.0));
/// assert_eq!(ComplexNumber::rectangular(2.0, -3.0).to_string(), "2.0+(-3.0)i");
/// ```
pub mod prelude {
    pub use super::complex::ComplexNumber;
    pub use super::defaults::DefaultConfig;
    pub use super::error::{ComplexError, ComplexResult};
    pub use super::format::DisplayFormat;
    pub use super::registry::{
        add, configure_default_polar, configure_default_rectangular, conjugate,
        current_defaults, divide, install_defaults, multiply, reset_defaults, sub,
    };
}

pub use prelude::*;
