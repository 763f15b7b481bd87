#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # cfgtree
//!
//! A hierarchical, path-addressed configuration store.
//!
//! Configuration lives in an in-memory tree of nested mappings addressed by
//! dotted queries such as `database.connections.default.host`. A tree can be
//! split into scoped sub-views whose writes flow back to their parent, and
//! populated in bulk from providers.
//!
//! ## Core Types
//!
//! - [`ConfigNode`]: a tree node with get/has/set, `split` and `register`
//! - [`Value`] and [`Mapping`]: the nested value structure
//! - [`Query`] and [`PathResolver`]: dotted path parsing and resolution
//! - [`ConfigProvider`] and [`StaticProvider`]: bulk data suppliers
//! - [`Error`] and [`Result`]: error handling types
//! - [`StderrLogger`] and [`LogLevel`]: an optional `log` backend
//!
//! ## Examples
//!
//! ```
//! use cfgtree::{ConfigNode, Value};
//!
//! let root = ConfigNode::new();
//! let child = root.split("x").unwrap();
//! child.set("y", 5).unwrap();
//!
//! assert_eq!(root.get("x.y").unwrap(), Some(Value::from(5)));
//! assert_eq!(child.get("y").unwrap(), Some(Value::from(5)));
//! assert_eq!(root.get_or("x.z", 0).unwrap(), Value::from(0));
//! ```

pub mod config;
pub mod error;
pub mod logging;
pub mod path;
pub mod value;

// Re-export key types at crate root for convenience
pub use config::{ConfigNode, ConfigProvider, StaticProvider, ValueMerger};
pub use error::{Error, Result};
pub use logging::{init_logger, LogLevel, StderrLogger};
pub use path::{PathResolver, Query};
pub use value::{Mapping, Value};
