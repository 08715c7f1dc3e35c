//! Core error types for the strada router.
//!
//! This module provides the [`StradaError`] enum and the [`StradaResult`]
//! alias used across the workspace. The taxonomy is intentionally shallow:
//! a path that matches no route, a duplicate pattern, removal of an absent
//! pattern, and repeated init/destroy are all ordinary no-ops rather than
//! errors. What remains is pattern compilation, percent-decoding, and
//! configuration loading.

use thiserror::Error;

/// The primary error type for the strada router.
///
/// # Examples
///
/// ```
/// use strada_core::StradaError;
///
/// let err = StradaError::InvalidPattern("unclosed group".to_string());
/// assert_eq!(err.to_string(), "Invalid pattern: unclosed group");
/// ```
#[derive(Error, Debug)]
pub enum StradaError {
    /// A route pattern failed to compile.
    #[error("Invalid pattern: {0}")]
    InvalidPattern(String),

    /// Percent-decoding produced bytes that are not valid UTF-8.
    #[error("Malformed percent-encoding: {0}")]
    Decode(#[from] std::str::Utf8Error),

    /// A configuration value is missing or invalid.
    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    /// An I/O error occurred while reading configuration.
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

/// A convenience type alias for `Result<T, StradaError>`.
pub type StradaResult<T> = Result<T, StradaError>;
