//! Validated dotted paths.
//!
//! A [`Query`] can only be built by parsing, so every resolver operation
//! receives a path with at least one segment and no empty segments.

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// The delimiter between path segments.
pub const DELIMITER: char = '.';

/// A parsed, well-formed path such as `database.connections.default.host`.
///
/// # Examples
///
/// ```
/// use cfgtree::path::Query;
///
/// let query = Query::parse("database.connections.default").unwrap();
/// assert_eq!(query.len(), 3);
/// assert_eq!(query.segments().last().map(String::as_str), Some("default"));
///
/// assert!(Query::parse("").is_err());
/// assert!(Query::parse("a..b").is_err());
/// assert!(Query::parse(".a").is_err());
/// assert!(Query::parse("a.").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Query {
    segments: Vec<String>,
}

impl Query {
    /// Parses a dotted path.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MalformedQuery`] for the empty string and for any
    /// empty segment (leading, trailing or doubled delimiter).
    pub fn parse(query: &str) -> Result<Self> {
        if query.is_empty() {
            return Err(Error::MalformedQuery {
                query: query.to_string(),
                reason: "query is empty".to_string(),
            });
        }

        let mut segments = Vec::new();
        for (position, segment) in query.split(DELIMITER).enumerate() {
            if segment.is_empty() {
                return Err(Error::MalformedQuery {
                    query: query.to_string(),
                    reason: format!("empty segment at position {position}"),
                });
            }
            segments.push(segment.to_string());
        }

        Ok(Self { segments })
    }

    /// Returns the path segments in order.
    #[must_use]
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Returns the number of segments. Always at least one.
    #[must_use]
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Always `false`; present for API symmetry with `len`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Splits off the last segment: `(parents, leaf)`.
    #[must_use]
    pub fn split_leaf(&self) -> (&[String], &str) {
        match self.segments.split_last() {
            Some((leaf, parents)) => (parents, leaf.as_str()),
            None => (self.segments.as_slice(), ""),
        }
    }

    /// Returns `self` followed by `other`.
    ///
    /// # Examples
    ///
    /// ```
    /// use cfgtree::path::Query;
    ///
    /// let mount = Query::parse("services.api").unwrap();
    /// let local = Query::parse("timeout").unwrap();
    /// assert_eq!(mount.join(&local).to_string(), "services.api.timeout");
    /// ```
    #[must_use]
    pub fn join(&self, other: &Query) -> Query {
        let mut segments = Vec::with_capacity(self.len() + other.len());
        segments.extend_from_slice(&self.segments);
        segments.extend_from_slice(&other.segments);
        Query { segments }
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for segment in &self.segments {
            if !first {
                write!(f, "{DELIMITER}")?;
            }
            write!(f, "{segment}")?;
            first = false;
        }
        Ok(())
    }
}

impl FromStr for Query {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for Query {
    type Error = Error;

    fn try_from(value: &str) -> Result<Self> {
        Self::parse(value)
    }
}
