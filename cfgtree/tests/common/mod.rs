//! Common test utilities for integration tests.
//!
//! This module provides helper functions and fixture providers for testing
//! the cfgtree library.

use std::cell::Cell;

use cfgtree::{ConfigNode, ConfigProvider, Mapping, Value};

/// Parses a YAML document into a value.
///
/// # Panics
///
/// Panics if the document is invalid. Acceptable in test code where we want
/// to fail fast on broken fixtures.
#[allow(dead_code)]
pub fn yaml(text: &str) -> Value {
    Value::from_yaml_str(text).expect("fixture YAML should parse")
}

/// Parses a YAML document whose top level is a mapping.
#[allow(dead_code)]
pub fn yaml_mapping(text: &str) -> Mapping {
    match yaml(text) {
        Value::Mapping(map) => map,
        other => panic!("fixture should be a mapping, got {}", other.type_name()),
    }
}

/// Creates a root node holding the given YAML document.
#[allow(dead_code)]
pub fn node_from_yaml(text: &str) -> ConfigNode {
    ConfigNode::from_mapping(yaml_mapping(text))
}

/// A provider that counts how often its payload is requested.
///
/// # Examples
///
/// ```no_run
/// # use common::RecordingProvider;
/// let provider = RecordingProvider::new("db", cfgtree::Value::from(1));
/// assert_eq!(provider.calls(), 0);
/// ```
#[allow(dead_code)]
pub struct RecordingProvider {
    query: String,
    payload: Value,
    calls: Cell<usize>,
}

#[allow(dead_code)]
impl RecordingProvider {
    /// Creates a provider mounting `payload` at `query`.
    pub fn new(query: impl Into<String>, payload: impl Into<Value>) -> Self {
        Self {
            query: query.into(),
            payload: payload.into(),
            calls: Cell::new(0),
        }
    }

    /// Returns how many times the payload was requested.
    pub fn calls(&self) -> usize {
        self.calls.get()
    }
}

impl ConfigProvider for RecordingProvider {
    fn query(&self) -> &str {
        &self.query
    }

    fn configuration(&self) -> Value {
        self.calls.set(self.calls.get() + 1);
        self.payload.clone()
    }
}
