//! Dotted path handling.
//!
//! This module turns query strings such as `database.connections.default`
//! into validated [`Query`] values and resolves them against nested
//! [`Mapping`](crate::Mapping)s.
//!
//! # Key Concepts
//!
//! ## Queries
//!
//! A query is one or more non-empty segments joined by `.`. Parsing rejects
//! the empty string and any empty segment, so `".a"`, `"a."` and `"a..b"`
//! all fail with [`Error::MalformedQuery`](crate::Error::MalformedQuery).
//! Since every resolver operation takes a parsed [`Query`], the policy holds
//! uniformly for reads, existence checks and writes.
//!
//! ## Resolution
//!
//! - **Reads** ([`PathResolver::fetch`], [`PathResolver::exists`]) stop at
//!   the first segment that is missing or not a mapping and report absence.
//! - **Writes** ([`PathResolver::extend`], [`PathResolver::merge`]) create
//!   missing intermediates. An intermediate holding a scalar or sequence is
//!   replaced by an empty mapping; the write wins.
//!
//! # Examples
//!
//! ```
//! use cfgtree::path::{PathResolver, Query};
//! use cfgtree::{Mapping, Value};
//!
//! let mut items = Mapping::new();
//! PathResolver::extend(&mut items, &Query::parse("a").unwrap(), Value::from(1));
//! PathResolver::extend(&mut items, &Query::parse("a.b").unwrap(), Value::from(2));
//!
//! // The scalar at `a` was replaced by a mapping.
//! let a = PathResolver::fetch(&items, &Query::parse("a").unwrap()).unwrap();
//! assert!(a.is_mapping());
//! ```

pub mod query;
pub mod resolver;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

// Re-export key types
pub use query::{Query, DELIMITER};
pub use resolver::PathResolver;
