//! Error types for the shift pay engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while loading rate schedules
//! or handling shift data at the API edge.

use thiserror::Error;

/// The main error type for the shift pay engine.
///
/// All fallible operations in the engine return this error type, making it
/// easy to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use shiftpay_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/rates.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Rate schedule file not found: /missing/rates.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Rate schedule file was not found at the specified path.
    #[error("Rate schedule file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Rate schedule file could not be parsed.
    #[error("Failed to parse rate schedule '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A shift-type tag was not one of `morning`, `afternoon`, or `night`.
    #[error("Invalid shift type: {value}")]
    InvalidShiftType {
        /// The tag that failed to parse.
        value: String,
    },

    /// A rate schedule field had a value the calculator cannot work with.
    #[error("Invalid rate schedule field '{field}': {message}")]
    InvalidRate {
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
