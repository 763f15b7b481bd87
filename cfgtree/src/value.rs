//! The nested value structure stored in configuration nodes.
//!
//! A [`Value`] is a tagged union over scalars, sequences and string-keyed
//! mappings. Path resolution pattern-matches on the tag, so a mapping is the
//! only variant that can be descended into.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A string-keyed mapping of values, kept in key order.
pub type Mapping = BTreeMap<String, Value>;

/// A configuration value.
///
/// Serialization is untagged, so documents deserialize straight into the
/// matching variant. Prefer [`from_yaml_str`](Self::from_yaml_str) and
/// [`from_json_str`](Self::from_json_str) for parsing: they reject content
/// the variants cannot hold exactly instead of coercing it.
///
/// # Examples
///
/// ```
/// use cfgtree::Value;
///
/// let value = Value::from_yaml_str("host: localhost\nport: 5432\n").unwrap();
/// let mapping = value.as_mapping().unwrap();
/// assert_eq!(mapping["host"], Value::from("localhost"));
/// assert_eq!(mapping["port"].as_i64(), Some(5432));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    /// An explicit null. Present, as opposed to absent.
    #[default]
    Null,
    /// A boolean.
    Bool(bool),
    /// A signed integer.
    Integer(i64),
    /// A floating point number.
    Float(f64),
    /// A string.
    String(String),
    /// An ordered list of values.
    Sequence(Vec<Value>),
    /// A nested mapping.
    Mapping(Mapping),
}

impl Value {
    /// Creates an empty mapping value.
    #[must_use]
    pub fn mapping() -> Self {
        Self::Mapping(Mapping::new())
    }

    /// Parses a YAML document into a value.
    ///
    /// Tags are dropped and the tagged content kept.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Yaml`] if the document is invalid, and
    /// [`Error::UnsupportedValue`] for a mapping key that is not a string
    /// (`1: a`) or an integer outside the `i64` range.
    pub fn from_yaml_str(text: &str) -> Result<Self> {
        let raw: serde_yaml::Value = serde_yaml::from_str(text)?;
        Self::try_from(raw)
    }

    /// Parses a JSON document into a value.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Json`] if the document is invalid, and
    /// [`Error::UnsupportedValue`] for an integer outside the `i64` range.
    pub fn from_json_str(text: &str) -> Result<Self> {
        let raw: serde_json::Value = serde_json::from_str(text)?;
        Self::try_from(raw)
    }

    /// Deep-merges `source` into this value; `source` wins on conflicts.
    ///
    /// Two mappings merge key by key, recursively. Any other pair is a plain
    /// replacement, sequences included.
    ///
    /// # Examples
    ///
    /// ```
    /// use cfgtree::Value;
    ///
    /// let mut base = Value::from_yaml_str("pool:\n  min: 1\n  max: 4\n").unwrap();
    /// base.merge(Value::from_yaml_str("pool:\n  max: 8\n").unwrap());
    /// assert_eq!(base.flatten()["pool.min"], Value::from(1));
    /// assert_eq!(base.flatten()["pool.max"], Value::from(8));
    /// ```
    pub fn merge(&mut self, source: Value) {
        match (self, source) {
            (Self::Mapping(target), Self::Mapping(incoming)) => {
                for (key, value) in incoming {
                    match target.get_mut(&key) {
                        Some(existing) => existing.merge(value),
                        None => {
                            target.insert(key, value);
                        }
                    }
                }
            }
            (target, source) => *target = source,
        }
    }

    /// Returns the variant name, for diagnostics.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool(_) => "bool",
            Self::Integer(_) => "integer",
            Self::Float(_) => "float",
            Self::String(_) => "string",
            Self::Sequence(_) => "sequence",
            Self::Mapping(_) => "mapping",
        }
    }

    /// Returns `true` for [`Value::Null`].
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Returns `true` for [`Value::Mapping`].
    #[must_use]
    pub const fn is_mapping(&self) -> bool {
        matches!(self, Self::Mapping(_))
    }

    /// Returns the boolean, if this is one.
    #[must_use]
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Returns the integer, if this is one.
    #[must_use]
    pub const fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Integer(i) => Some(*i),
            _ => None,
        }
    }

    /// Returns the value as a float. Integers are widened.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Float(f) => Some(*f),
            Self::Integer(i) => Some(*i as f64),
            _ => None,
        }
    }

    /// Returns the string slice, if this is a string.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s.as_str()),
            _ => None,
        }
    }

    /// Returns the items, if this is a sequence.
    #[must_use]
    pub fn as_sequence(&self) -> Option<&[Value]> {
        match self {
            Self::Sequence(seq) => Some(seq.as_slice()),
            _ => None,
        }
    }

    /// Returns the mapping, if this is one.
    #[must_use]
    pub const fn as_mapping(&self) -> Option<&Mapping> {
        match self {
            Self::Mapping(map) => Some(map),
            _ => None,
        }
    }

    /// Returns the mapping mutably, if this is one.
    pub fn as_mapping_mut(&mut self) -> Option<&mut Mapping> {
        match self {
            Self::Mapping(map) => Some(map),
            _ => None,
        }
    }

    /// Flattens nested mappings into dotted path / leaf pairs.
    ///
    /// Every non-mapping value is a leaf, and so is an empty mapping. A
    /// non-mapping value at the top level flattens to nothing, since it has no
    /// path.
    ///
    /// # Examples
    ///
    /// ```
    /// use cfgtree::Value;
    ///
    /// let value = Value::from_yaml_str("db:\n  host: x\n  port: 1\n").unwrap();
    /// let flat = value.flatten();
    /// assert_eq!(flat["db.host"], Value::from("x"));
    /// assert_eq!(flat["db.port"], Value::from(1));
    /// ```
    #[must_use]
    pub fn flatten(&self) -> BTreeMap<String, Value> {
        let mut out = BTreeMap::new();
        if let Self::Mapping(map) = self {
            flatten_into(map, None, &mut out);
        }
        out
    }
}

fn flatten_into(map: &Mapping, prefix: Option<&str>, out: &mut BTreeMap<String, Value>) {
    for (key, value) in map {
        let path = match prefix {
            Some(prefix) => format!("{prefix}.{key}"),
            None => key.clone(),
        };
        match value {
            Value::Mapping(inner) if !inner.is_empty() => flatten_into(inner, Some(&path), out),
            leaf => {
                out.insert(path, leaf.clone());
            }
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => write!(f, "null"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Integer(i) => write!(f, "{i}"),
            Self::Float(x) => write!(f, "{x}"),
            Self::String(s) => write!(f, "{s}"),
            Self::Sequence(_) | Self::Mapping(_) => match serde_json::to_string(self) {
                Ok(json) => write!(f, "{json}"),
                Err(_) => Err(fmt::Error),
            },
        }
    }
}

// Conversions

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

macro_rules! from_integer {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Value {
                fn from(i: $ty) -> Self {
                    Self::Integer(i64::from(i))
                }
            }
        )*
    };
}

from_integer!(i8, i16, i32, i64, u8, u16, u32);

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Self::Float(f)
    }
}

impl From<f32> for Value {
    fn from(f: f32) -> Self {
        Self::Float(f64::from(f))
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::String(s)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Self::Sequence(items.into_iter().map(Into::into).collect())
    }
}

impl From<Mapping> for Value {
    fn from(map: Mapping) -> Self {
        Self::Mapping(map)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(opt: Option<T>) -> Self {
        opt.map_or(Self::Null, Into::into)
    }
}

fn out_of_range(number: impl fmt::Display) -> Error {
    Error::UnsupportedValue {
        reason: format!("integer {number} is outside the signed 64-bit range"),
    }
}

impl TryFrom<serde_json::Value> for Value {
    type Error = Error;

    fn try_from(json: serde_json::Value) -> Result<Self> {
        Ok(match json {
            serde_json::Value::Null => Self::Null,
            serde_json::Value::Bool(b) => Self::Bool(b),
            serde_json::Value::Number(n) => match (n.as_i64(), n.as_f64()) {
                (Some(i), _) => Self::Integer(i),
                (None, Some(x)) if n.is_f64() => Self::Float(x),
                _ => return Err(out_of_range(n)),
            },
            serde_json::Value::String(s) => Self::String(s),
            serde_json::Value::Array(items) => Self::Sequence(
                items
                    .into_iter()
                    .map(Self::try_from)
                    .collect::<Result<_>>()?,
            ),
            serde_json::Value::Object(map) => Self::Mapping(
                map.into_iter()
                    .map(|(key, value)| Self::try_from(value).map(|value| (key, value)))
                    .collect::<Result<_>>()?,
            ),
        })
    }
}

impl TryFrom<serde_yaml::Value> for Value {
    type Error = Error;

    fn try_from(yaml: serde_yaml::Value) -> Result<Self> {
        Ok(match yaml {
            serde_yaml::Value::Null => Self::Null,
            serde_yaml::Value::Bool(b) => Self::Bool(b),
            serde_yaml::Value::Number(n) => match (n.as_i64(), n.as_f64()) {
                (Some(i), _) => Self::Integer(i),
                (None, Some(x)) if n.is_f64() => Self::Float(x),
                _ => return Err(out_of_range(n)),
            },
            serde_yaml::Value::String(s) => Self::String(s),
            serde_yaml::Value::Sequence(items) => Self::Sequence(
                items
                    .into_iter()
                    .map(Self::try_from)
                    .collect::<Result<_>>()?,
            ),
            serde_yaml::Value::Mapping(map) => Self::Mapping(
                map.into_iter()
                    .map(|(key, value)| match key {
                        serde_yaml::Value::String(key) => {
                            Self::try_from(value).map(|value| (key, value))
                        }
                        other => Err(Error::UnsupportedValue {
                            reason: format!(
                                "mapping key {} is not a string",
                                serde_json::to_string(&other)
                                    .unwrap_or_else(|_| format!("{other:?}"))
                            ),
                        }),
                    })
                    .collect::<Result<_>>()?,
            ),
            serde_yaml::Value::Tagged(tagged) => Self::try_from(tagged.value)?,
        })
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Value {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self::Mapping(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}
