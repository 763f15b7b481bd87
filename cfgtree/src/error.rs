//! Error types for the cfgtree library.
//!
//! Absence of a path is never an error in this crate: lookups report it
//! through `Option`, defaults or `false`. The variants below cover the
//! remaining failure modes, using `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Result type alias for operations that may fail with a cfgtree error.
///
/// # Examples
///
/// ```
/// use cfgtree::{Error, Result};
///
/// fn example_operation() -> Result<u16> {
///     Ok(8080)
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the cfgtree library.
#[derive(Debug, Error)]
pub enum Error {
    /// A query string could not be parsed into a path.
    ///
    /// Raised for the empty string and for any empty segment, i.e. a
    /// leading, trailing or doubled delimiter.
    #[error("malformed query '{query}': {reason}")]
    MalformedQuery {
        /// The rejected query string.
        query: String,
        /// The reason the query was rejected.
        reason: String,
    },

    /// A YAML document could not be parsed into a value.
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// A parsed document holds content a [`Value`](crate::Value) cannot
    /// represent exactly, such as a non-string mapping key.
    #[error("unsupported value: {reason}")]
    UnsupportedValue {
        /// What was rejected.
        reason: String,
    },

    /// A JSON document could not be parsed into a value.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A global logger was already installed.
    #[error("logger error: {0}")]
    Logger(#[from] log::SetLoggerError),
}

impl Error {
    /// Check if error indicates a malformed query.
    ///
    /// # Examples
    ///
    /// ```
    /// use cfgtree::Error;
    ///
    /// let err = Error::MalformedQuery {
    ///     query: "a..b".to_string(),
    ///     reason: "empty segment at position 1".to_string(),
    /// };
    /// assert!(err.is_malformed_query());
    /// ```
    #[must_use]
    pub fn is_malformed_query(&self) -> bool {
        matches!(self, Self::MalformedQuery { .. })
    }
}
