//! Configuration providers.
//!
//! A provider supplies one payload and the query it should be mounted at.
//! How the payload was obtained is the provider's business; nodes only ask
//! for the two pieces through [`ConfigProvider`].

use crate::error::Result;
use crate::value::Value;

/// A supplier of a `(query, payload)` pair for [`ConfigNode::register`].
///
/// [`ConfigNode::register`]: crate::ConfigNode::register
///
/// # Examples
///
/// ```
/// use cfgtree::{ConfigNode, ConfigProvider, Value};
///
/// struct Defaults;
///
/// impl ConfigProvider for Defaults {
///     fn query(&self) -> &str {
///         "http"
///     }
///
///     fn configuration(&self) -> Value {
///         [("port", 8080), ("workers", 4)].into_iter().collect()
///     }
/// }
///
/// let node = ConfigNode::new();
/// node.register([Defaults]).unwrap();
/// assert_eq!(node.get("http.port").unwrap(), Some(Value::from(8080)));
/// ```
pub trait ConfigProvider {
    /// The query the payload mounts at.
    fn query(&self) -> &str;

    /// The payload to store at [`query`](Self::query).
    fn configuration(&self) -> Value;
}

impl<T: ConfigProvider + ?Sized> ConfigProvider for &T {
    fn query(&self) -> &str {
        (**self).query()
    }

    fn configuration(&self) -> Value {
        (**self).configuration()
    }
}

impl<T: ConfigProvider + ?Sized> ConfigProvider for Box<T> {
    fn query(&self) -> &str {
        (**self).query()
    }

    fn configuration(&self) -> Value {
        (**self).configuration()
    }
}

impl<S: AsRef<str>> ConfigProvider for (S, Value) {
    fn query(&self) -> &str {
        self.0.as_ref()
    }

    fn configuration(&self) -> Value {
        self.1.clone()
    }
}

/// A provider with a fixed query and payload.
///
/// # Examples
///
/// ```
/// use cfgtree::{ConfigProvider, StaticProvider, Value};
///
/// let provider = StaticProvider::from_yaml("database", "host: db.local\nport: 5432\n").unwrap();
/// assert_eq!(provider.query(), "database");
/// assert!(provider.configuration().is_mapping());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct StaticProvider {
    query: String,
    payload: Value,
}

impl StaticProvider {
    /// Creates a provider from a query and a payload.
    #[must_use]
    pub fn new(query: impl Into<String>, payload: impl Into<Value>) -> Self {
        Self {
            query: query.into(),
            payload: payload.into(),
        }
    }

    /// Creates a provider whose payload is parsed from a YAML document.
    ///
    /// # Errors
    ///
    /// Returns an error if the document cannot be parsed.
    pub fn from_yaml(query: impl Into<String>, text: &str) -> Result<Self> {
        Ok(Self::new(query, Value::from_yaml_str(text)?))
    }

    /// Creates a provider whose payload is parsed from a JSON document.
    ///
    /// # Errors
    ///
    /// Returns an error if the document cannot be parsed.
    pub fn from_json(query: impl Into<String>, text: &str) -> Result<Self> {
        Ok(Self::new(query, Value::from_json_str(text)?))
    }
}

impl ConfigProvider for StaticProvider {
    fn query(&self) -> &str {
        &self.query
    }

    fn configuration(&self) -> Value {
        self.payload.clone()
    }
}
