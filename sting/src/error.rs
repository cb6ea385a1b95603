//! Error types for the sting library.
//!
//! This module provides the error hierarchy for configuration resolution,
//! using `thiserror` for ergonomic error handling.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for operations that may fail with a sting error.
///
/// # Examples
///
/// ```
/// use sting::{Error, Result};
///
/// fn example_operation() -> Result<&'static str> {
///     Ok("us-west-2")
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the sting library.
///
/// Resolution is one-shot and local, so none of these are retried: every
/// variant except [`Error::ConfigNotFound`] aborts resolution.
#[derive(Debug, Error)]
pub enum Error {
    /// Reading or writing the configuration file failed for a reason other
    /// than the file being absent.
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        /// The file being read or written.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },

    /// The configuration file exists but is not valid YAML for the schema.
    #[error("failed to parse {}: {source}", path.display())]
    Parse {
        /// The malformed file.
        path: PathBuf,
        /// The underlying YAML error.
        #[source]
        source: serde_yaml::Error,
    },

    /// The built-in configuration could not be encoded as YAML.
    #[error("failed to serialize configuration: {0}")]
    Serialize(#[source] serde_yaml::Error),

    /// No configuration file exists at the given path.
    ///
    /// The resolver treats this as "no file layer" and never surfaces it.
    #[error("configuration file not found: {}", path.display())]
    ConfigNotFound {
        /// The path that was probed.
        path: PathBuf,
    },

    /// A resolved value was rejected.
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// The dotted key that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },
}

impl Error {
    /// Check if error indicates the configuration file does not exist.
    ///
    /// # Examples
    ///
    /// ```
    /// use sting::Error;
    /// use std::path::PathBuf;
    ///
    /// let err = Error::ConfigNotFound { path: PathBuf::from("missing.yaml") };
    /// assert!(err.is_not_found());
    /// ```
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::ConfigNotFound { .. })
    }

    /// Check if error came from malformed file content.
    #[must_use]
    pub fn is_parse_error(&self) -> bool {
        matches!(self, Self::Parse { .. })
    }
}
