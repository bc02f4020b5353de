//! Error types for the fieldpath library.
//!
//! Parsing has a single structured failure kind, `InvalidPath`; navigation
//! and mutation operations are total and never error. The formatting layer
//! wraps its serializers' errors, using `thiserror` for ergonomic handling.

use thiserror::Error;

/// Result type alias for operations that may fail with a fieldpath error.
///
/// # Examples
///
/// ```
/// use fieldpath::{Path, Result};
///
/// fn parse_city_path() -> Result<Path> {
///     Path::parse("Publisher.Addresses[0].City")
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the fieldpath library.
#[derive(Debug, Error)]
pub enum Error {
    /// A subject string violated the path grammar.
    ///
    /// Parsing is all-or-nothing: this error carries the whole offending
    /// subject and the byte offset where scanning failed, and no partial
    /// path is produced.
    #[error("invalid path {subject:?} at byte {position}: {reason}")]
    InvalidPath {
        /// The subject string that failed to parse.
        subject: String,
        /// Byte offset where scanning failed.
        position: usize,
        /// A short description of the grammar violation.
        reason: String,
    },

    /// A JSON serialization error occurred.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A YAML serialization error occurred.
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl Error {
    /// Check if error indicates an invalid path subject.
    ///
    /// # Examples
    ///
    /// ```
    /// use fieldpath::Path;
    ///
    /// let err = Path::parse("A..B").unwrap_err();
    /// assert!(err.is_invalid_path());
    /// ```
    #[must_use]
    pub fn is_invalid_path(&self) -> bool {
        matches!(self, Self::InvalidPath { .. })
    }
}
