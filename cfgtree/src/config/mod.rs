//! Configuration trees for cfgtree.
//!
//! This module provides the stateful side of the library:
//! - [`ConfigNode`]: a node owning nested configuration data
//! - Scoped sub-views via [`ConfigNode::split`], whose writes flow back up
//! - Bulk population from [`ConfigProvider`]s
//! - Deep merging via [`ValueMerger`]
//!
//! # Write Propagation
//!
//! A node created by `split("services.api")` sees the parent's data under
//! `services.api` as its own root. Every `set`, `merge` or `remove` on it is
//! applied locally first, then on the parent at `services.api.<query>`, and
//! so on up the chain until a root is reached. A child keeps its ancestors
//! alive, so dropping an intermediate handle never cuts the chain.
//! Writes on a parent are *not* pushed down into existing children.
//!
//! # Examples
//!
//! Building a tree from a literal with dotted keys:
//!
//! ```
//! use cfgtree::{ConfigNode, Value};
//!
//! let config = ConfigNode::create([
//!     ("database.host", Value::from("localhost")),
//!     ("database.port", Value::from(5432)),
//! ])
//! .unwrap();
//!
//! assert_eq!(config.get_or("database.port", 0).unwrap(), Value::from(5432));
//! assert_eq!(config.get_or("database.user", "postgres").unwrap(), Value::from("postgres"));
//! ```
//!
//! Registering providers on a scoped view:
//!
//! ```
//! use cfgtree::{ConfigNode, StaticProvider, Value};
//!
//! let root = ConfigNode::new();
//! let cache = root.split("cache").unwrap();
//!
//! cache
//!     .register([
//!         StaticProvider::new("ttl", 60),
//!         StaticProvider::from_json("redis", r#"{"host": "r1"}"#).unwrap(),
//!     ])
//!     .unwrap();
//!
//! assert_eq!(root.get("cache.redis.host").unwrap(), Some(Value::from("r1")));
//! ```

pub mod merger;
pub mod node;
pub mod provider;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

// Re-export key types at module root
pub use merger::ValueMerger;
pub use node::ConfigNode;
pub use provider::{ConfigProvider, StaticProvider};
