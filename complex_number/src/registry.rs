//! Process-wide default configuration
//!
//! Holds the `DefaultConfig` used by [`ComplexNumber::new`] and by the free
//! arithmetic functions. Updates only affect values constructed afterwards.
//! Code that wants isolation from other callers should hold its own
//! `DefaultConfig` and use its methods directly.
//!
//! ## Debug Logging
//!
//! Set `COMPLEX_DEFAULTS_DEBUG=1` to trace registry updates on stderr
//! (debug builds only).

use once_cell::sync::Lazy;
use std::sync::RwLock;

use crate::complex::ComplexNumber;
use crate::defaults::DefaultConfig;
use crate::error::ComplexResult;

static DEFAULTS: Lazy<RwLock<DefaultConfig>> =
    Lazy::new(|| RwLock::new(DefaultConfig::default()));

fn defaults_write() -> std::sync::RwLockWriteGuard<'static, DefaultConfig> {
    DEFAULTS
        .write()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
}

fn defaults_read() -> std::sync::RwLockReadGuard<'static, DefaultConfig> {
    DEFAULTS
        .read()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Check if registry tracing is enabled via `COMPLEX_DEFAULTS_DEBUG`.
/// Only available in debug builds.
#[cfg(debug_assertions)]
fn registry_debug_enabled() -> bool {
    use std::sync::OnceLock;
    static ENABLED: OnceLock<bool> = OnceLock::new();
    *ENABLED.get_or_init(|| std::env::var("COMPLEX_DEFAULTS_DEBUG").is_ok())
}

/// Write a registry trace line to stderr (debug builds only).
#[cfg(debug_assertions)]
fn registry_debug_log(args: std::fmt::Arguments<'_>) {
    use std::io::Write;
    let _ = writeln!(std::io::stderr(), "{args}");
}

/// Snapshot of the current process-wide defaults
pub fn current_defaults() -> DefaultConfig {
    *defaults_read()
}

/// Replace the process-wide defaults.
pub fn install_defaults(config: DefaultConfig) {
    *defaults_write() = config;

    #[cfg(debug_assertions)]
    if registry_debug_enabled() {
        registry_debug_log(format_args!("[complex_number] defaults set to {:?}", config));
    }
}

/// Restore `DefaultConfig::default()` as the process-wide defaults.
pub fn reset_defaults() {
    install_defaults(DefaultConfig::default());
}

/// Make `(re, im)` the process-wide defaults, rendered rectangular.
pub fn configure_default_rectangular(re: f64, im: f64) {
    install_defaults(DefaultConfig::rectangular(re, im));
}

/// Make the polar value `(modulus, argument°)` the process-wide defaults,
/// rendered polar.
///
/// A negative modulus fails and leaves the current defaults in place.
pub fn configure_default_polar(modulus: f64, argument: f64) -> ComplexResult<()> {
    install_defaults(DefaultConfig::polar(modulus, argument)?);
    Ok(())
}

// ========== Free-function arithmetic ==========

/// Sum of two numbers
pub fn add(addend1: &ComplexNumber, addend2: &ComplexNumber) -> ComplexNumber {
    current_defaults().add(addend1, addend2)
}

/// Difference of two numbers
pub fn sub(minuend: &ComplexNumber, subtrahend: &ComplexNumber) -> ComplexNumber {
    current_defaults().sub(minuend, subtrahend)
}

/// Product of two numbers
pub fn multiply(factor1: &ComplexNumber, factor2: &ComplexNumber) -> ComplexNumber {
    current_defaults().multiply(factor1, factor2)
}

/// Quotient of two numbers; a zero divisor yields `Inf`/`NaN` components.
pub fn divide(dividend: &ComplexNumber, divisor: &ComplexNumber) -> ComplexNumber {
    current_defaults().divide(dividend, divisor)
}

/// Complex conjugate.
///
/// For a number with zero imaginary part this returns a value built from
/// the current defaults rather than the number itself. See
/// [`DefaultConfig::conjugate`].
pub fn conjugate(number: &ComplexNumber) -> ComplexNumber {
    current_defaults().conjugate(number)
}
