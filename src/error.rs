//! Error types for the shift engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions the engine can report.

use thiserror::Error;

/// The main error type for the shift engine.
///
/// Validation failures and collaborator failures are kept apart so that a
/// caller can never mistake "could not determine availability" for
/// "available".
///
/// # Example
///
/// ```
/// use shift_engine::error::{EngineError, ErrorKind};
///
/// let error = EngineError::InvalidInput {
///     field: "start_time".to_string(),
///     message: "expected HH:MM, got '9am'".to_string(),
/// };
/// assert_eq!(error.kind(), ErrorKind::InvalidInput);
/// assert_eq!(error.to_string(), "Invalid start_time: expected HH:MM, got '9am'");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// An input value failed structural validation.
    #[error("Invalid {field}: {message}")]
    InvalidInput {
        /// The name of the offending input.
        field: String,
        /// A description of what made the input invalid.
        message: String,
    },

    /// The commitment store could not be read, or the read timed out.
    #[error("Dependency failure: {message}")]
    DependencyFailure {
        /// A description of the failed read.
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
}

/// Coarse classification of an [`EngineError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Local pre-flight validation failed.
    InvalidInput,
    /// The external commitment store failed.
    DependencyFailure,
    /// The service configuration is missing or malformed.
    Configuration,
}

impl EngineError {
    /// Shorthand for building an [`EngineError::InvalidInput`].
    pub fn invalid_input(field: impl Into<String>, message: impl Into<String>) -> Self {
        EngineError::InvalidInput {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Returns the category of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            EngineError::InvalidInput { .. } => ErrorKind::InvalidInput,
            EngineError::DependencyFailure { .. } => ErrorKind::DependencyFailure,
            EngineError::ConfigNotFound { .. } | EngineError::ConfigParseError { .. } => {
                ErrorKind::Configuration
            }
        }
    }
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
