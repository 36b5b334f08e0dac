//! Error types for the Leave Accrual Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate.
//! The calculator itself is total over valid dates; errors only arise at the
//! input boundary (hire date parsing, usage records) and when loading policy
//! configuration.

use thiserror::Error;

/// The main error type for the Leave Accrual Engine.
///
/// # Example
///
/// ```
/// use leave_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/policy.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/policy.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// A hire date was missing or could not be parsed.
    #[error("Invalid hire date '{value}': {message}")]
    InvalidHireDate {
        /// The raw value that was supplied (empty when null).
        value: String,
        /// A description of what made the value invalid.
        message: String,
    },

    /// A leave usage record was inconsistent.
    #[error("Invalid leave usage '{usage_id}': {message}")]
    InvalidUsage {
        /// The ID of the offending usage record.
        usage_id: String,
        /// A description of what made the record invalid.
        message: String,
    },

    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A leave policy value is out of range.
    #[error("Invalid policy field '{field}': {message}")]
    InvalidPolicy {
        /// The offending policy field.
        field: String,
        /// A description of the problem.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
