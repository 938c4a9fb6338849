//! Error types for complex-number construction and rendering
//!
//! Only two entry points can fail: anything that accepts a modulus, and
//! anything that turns a format name into a `DisplayFormat`. Degenerate
//! floating-point results (infinity, NaN) are never reported as errors.

use thiserror::Error;

/// Complex-number error type
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ComplexError {
    /// A negative modulus was supplied
    #[error("InvalidArgument: {0}")]
    InvalidArgument(String),

    /// A display format outside the known set was requested
    #[error("UnsupportedOperation: {0}")]
    UnsupportedOperation(String),

    /// A default-configuration document could not be read
    #[error("ConfigError: {0}")]
    Config(String),
}

impl ComplexError {
    /// Create an invalid argument error
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        ComplexError::InvalidArgument(msg.into())
    }

    /// Create an unsupported operation error
    pub fn unsupported_operation<S: Into<String>>(msg: S) -> Self {
        ComplexError::UnsupportedOperation(msg.into())
    }

    /// Create a configuration error
    pub fn config<S: Into<String>>(msg: S) -> Self {
        ComplexError::Config(msg.into())
    }
}

/// Result type alias for complex-number operations
pub type ComplexResult<T> = Result<T, ComplexError>;

/// Reject a negative modulus. NaN passes, matching IEEE comparison rules.
pub(crate) fn check_modulus(modulus: f64) -> ComplexResult<()> {
    if modulus < 0.0 {
        Err(ComplexError::invalid_argument(format!(
            "modulus must be greater than or equal to 0, got {}",
            modulus
        )))
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ComplexError::invalid_argument("modulus must be greater than or equal to 0");
        assert_eq!(
            format!("{}", err),
            "InvalidArgument: modulus must be greater than or equal to 0"
        );

        let err = ComplexError::unsupported_operation("unknown display format 'cartesian'");
        assert_eq!(
            format!("{}", err),
            "UnsupportedOperation: unknown display format 'cartesian'"
        );

        let err = ComplexError::config("expected `=`");
        assert_eq!(format!("{}", err), "ConfigError: expected `=`");
    }

    #[test]
    fn test_check_modulus() {
        assert!(check_modulus(0.0).is_ok());
        assert!(check_modulus(5.0).is_ok());
        assert!(check_modulus(f64::INFINITY).is_ok());
        assert!(check_modulus(f64::NAN).is_ok());
        assert!(matches!(
            check_modulus(-1.0),
            Err(ComplexError::InvalidArgument(_))
        ));
        assert!(matches!(
            check_modulus(f64::NEG_INFINITY),
            Err(ComplexError::InvalidArgument(_))
        ));
    }
}
