//! Path resolution over nested mappings.
//!
//! This module provides the `PathResolver` type, which walks a [`Query`]
//! through a [`Mapping`] to read, test, write, merge or remove the leaf.

use crate::path::query::Query;
use crate::value::{Mapping, Value};

/// Stateless path walker over nested mappings.
///
/// Reads treat anything that cannot be descended into as absent. Writes
/// auto-vivify: missing intermediates are created, and an intermediate
/// holding a non-mapping value is replaced by an empty mapping.
///
/// # Examples
///
/// ```
/// use cfgtree::path::{PathResolver, Query};
/// use cfgtree::{Mapping, Value};
///
/// let mut items = Mapping::new();
/// let query = Query::parse("database.connections.default.host").unwrap();
///
/// assert!(!PathResolver::exists(&items, &query));
/// PathResolver::extend(&mut items, &query, Value::from("db.local"));
/// assert_eq!(PathResolver::fetch(&items, &query), Some(&Value::from("db.local")));
/// ```
pub struct PathResolver;

impl PathResolver {
    /// Returns the value stored at `query`, or `None` if the path is absent.
    #[must_use]
    pub fn fetch<'a>(structure: &'a Mapping, query: &Query) -> Option<&'a Value> {
        let (parents, leaf) = query.split_leaf();
        let mut current = structure;
        for segment in parents {
            match current.get(segment) {
                Some(Value::Mapping(inner)) => current = inner,
                _ => return None,
            }
        }
        current.get(leaf)
    }

    /// Returns the value stored at `query`, or `default` if the path is absent.
    ///
    /// # Examples
    ///
    /// ```
    /// use cfgtree::path::{PathResolver, Query};
    /// use cfgtree::{Mapping, Value};
    ///
    /// let items = Mapping::new();
    /// let fallback = Value::from(30);
    /// let query = Query::parse("http.timeout").unwrap();
    /// assert_eq!(PathResolver::fetch_or(&items, &query, &fallback), &fallback);
    /// ```
    #[must_use]
    pub fn fetch_or<'a>(structure: &'a Mapping, query: &Query, default: &'a Value) -> &'a Value {
        Self::fetch(structure, query).unwrap_or(default)
    }

    /// Returns `true` if a leaf is present at `query`, even if it is null.
    #[must_use]
    pub fn exists(structure: &Mapping, query: &Query) -> bool {
        Self::fetch(structure, query).is_some()
    }

    /// Stores `value` at `query`, creating intermediate mappings as needed.
    ///
    /// Returns the value previously stored at the leaf, if any.
    pub fn extend(structure: &mut Mapping, query: &Query, value: Value) -> Option<Value> {
        let (parents, leaf) = query.split_leaf();
        log::trace!("extend '{query}' with {}", value.type_name());
        Self::vivify(structure, parents, query, |container| {
            container.insert(leaf.to_string(), value)
        })
    }

    /// Deep-merges `value` into whatever is stored at `query`.
    ///
    /// Behaves like [`extend`](Self::extend) unless both the stored leaf and
    /// `value` are mappings, in which case they are merged key by key.
    pub fn merge(structure: &mut Mapping, query: &Query, value: Value) {
        let (parents, leaf) = query.split_leaf();
        log::trace!("merge {} into '{query}'", value.type_name());
        Self::vivify(structure, parents, query, |container| {
            match container.get_mut(leaf) {
                Some(existing) => existing.merge(value),
                None => {
                    container.insert(leaf.to_string(), value);
                }
            }
        });
    }

    /// Detaches and returns the leaf at `query`.
    ///
    /// Never creates containers; an absent path returns `None`.
    pub fn remove(structure: &mut Mapping, query: &Query) -> Option<Value> {
        let (parents, leaf) = query.split_leaf();
        let mut current = structure;
        for segment in parents {
            match current.get_mut(segment) {
                Some(Value::Mapping(inner)) => current = inner,
                _ => return None,
            }
        }
        current.remove(leaf)
    }

    /// Walks `parents`, creating or replacing containers, and hands the
    /// mapping that should hold the leaf to `apply`.
    ///
    /// A non-mapping intermediate is rebuilt from scratch: the rest of the
    /// path is vivified in a fresh mapping that then takes the slot.
    fn vivify<F, R>(structure: &mut Mapping, parents: &[String], query: &Query, apply: F) -> R
    where
        F: FnOnce(&mut Mapping) -> R,
    {
        let Some((segment, rest)) = parents.split_first() else {
            return apply(structure);
        };

        match structure.entry(segment.clone()).or_insert_with(Value::mapping) {
            Value::Mapping(inner) => Self::vivify(inner, rest, query, apply),
            slot => {
                log::trace!(
                    "replacing {} at segment '{segment}' of '{query}' with a mapping",
                    slot.type_name()
                );
                let mut fresh = Mapping::new();
                let result = Self::vivify(&mut fresh, rest, query, apply);
                *slot = Value::Mapping(fresh);
                result
            }
        }
    }
}
