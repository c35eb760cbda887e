//! Error types for the pathkit library.
//!
//! This module provides the error hierarchy for all operations in the
//! pathkit library, using `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Result type alias for operations that may fail with a pathkit error.
///
/// # Examples
///
/// ```
/// use pathkit::{Error, Result};
///
/// fn example_operation() -> Result<String> {
///     Ok("/tmp".to_string())
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the pathkit library.
#[derive(Debug, Error)]
pub enum Error {
    /// An argument violated the contract of a path operation.
    ///
    /// Raised for paths or fragments that are not valid UTF-8, and for
    /// `format` inputs missing a required field.
    #[error("invalid argument '{argument}': {reason}")]
    Argument {
        /// The argument that was rejected.
        argument: String,
        /// The reason the argument was rejected.
        reason: String,
    },

    /// A configuration error occurred.
    #[error("configuration error: {0}")]
    Configuration(#[from] serde_yaml::Error),

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A validation error occurred.
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// The field that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },
}

impl Error {
    /// Build an argument error.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathkit::Error;
    ///
    /// let err = Error::argument("dir", "missing required field");
    /// assert!(err.is_argument());
    /// ```
    #[must_use]
    pub fn argument(argument: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Argument {
            argument: argument.into(),
            reason: reason.into(),
        }
    }

    /// Check if error is an argument contract violation.
    #[must_use]
    pub fn is_argument(&self) -> bool {
        matches!(self, Self::Argument { .. })
    }
}
