//! Error types for the cleanpath library.
//!
//! Parsing itself never fails; these errors come from loading configuration
//! and from serializing output.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for operations that may fail with a cleanpath error.
///
/// # Examples
///
/// ```
/// use cleanpath::{Error, Result};
///
/// fn example_operation() -> Result<String> {
///     Ok("C:\\temp".to_string())
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the cleanpath library.
#[derive(Debug, Error)]
pub enum Error {
    /// A file could not be read.
    #[error("invalid path {}: {reason}", path.display())]
    InvalidPath {
        /// The path that could not be read.
        path: PathBuf,
        /// The reason the path is invalid.
        reason: String,
    },

    /// A configuration error occurred.
    #[error("configuration error: {0}")]
    Configuration(#[from] serde_yaml::Error),

    /// Output could not be serialized.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

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
    /// Check if error came from a configuration source.
    ///
    /// # Examples
    ///
    /// ```
    /// use cleanpath::Error;
    ///
    /// let err = Error::Validation {
    ///     field: "CLEANPATH_PLATFORM".into(),
    ///     message: "unknown platform".into(),
    /// };
    /// assert!(err.is_configuration());
    /// ```
    #[must_use]
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            Self::Configuration(_) | Self::Validation { .. } | Self::InvalidPath { .. }
        )
    }
}
