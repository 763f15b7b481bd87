//! Property-based tests for configuration nodes and merging.

use super::merger::ValueMerger;
use super::node::ConfigNode;
use crate::value::{Mapping, Value};
use proptest::prelude::*;

fn key_strategy() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9_]{0,7}"
}

fn scalar_strategy() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(Value::Integer),
        "[a-z ]{0,10}".prop_map(Value::String),
    ]
}

// Nested values whose mappings are never empty
fn nested_strategy() -> impl Strategy<Value = Value> {
    scalar_strategy().prop_recursive(4, 32, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..3).prop_map(Value::Sequence),
            prop::collection::btree_map(key_strategy(), inner, 1..4).prop_map(Value::Mapping),
        ]
    })
}

fn mapping_strategy() -> impl Strategy<Value = Mapping> {
    prop::collection::btree_map(key_strategy(), nested_strategy(), 1..5)
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 1000,
        max_shrink_iters: 1000,
        .. ProptestConfig::default()
    })]

    // A write through any chain of splits lands at the joined path on the root
    #[test]
    fn writes_reach_root_through_split_chain(
        mounts in prop::collection::vec(key_strategy(), 1..5),
        local in key_strategy(),
        value in scalar_strategy()
    ) {
        let root = ConfigNode::new();
        let mut chain = vec![root.clone()];
        for mount in &mounts {
            let child = chain.last().unwrap().split(mount).unwrap();
            chain.push(child);
        }

        chain.last().unwrap().set(&local, value.clone()).unwrap();

        let full = format!("{}.{local}", mounts.join("."));
        prop_assert_eq!(root.get(&full).unwrap(), Some(value.clone()));

        // Every intermediate node sees the write under its own suffix
        for (depth, node) in chain.iter().enumerate() {
            let mut suffix: Vec<&str> = mounts[depth..].iter().map(String::as_str).collect();
            suffix.push(&local);
            prop_assert_eq!(node.get(&suffix.join(".")).unwrap(), Some(value.clone()));
        }
    }

    // create(flatten(v)) rebuilds v
    #[test]
    fn create_inverts_flatten(items in mapping_strategy()) {
        let value = Value::Mapping(items);
        let rebuilt = ConfigNode::create(value.flatten()).unwrap();
        prop_assert_eq!(rebuilt.to_value(), value);
    }

    // Split adopts exactly what the parent held at the mount point
    #[test]
    fn split_adopts_subtree(items in mapping_strategy()) {
        let root = ConfigNode::from_mapping(items.clone());
        for (key, value) in &items {
            let child = root.split(key).unwrap();
            match value {
                Value::Mapping(inner) => prop_assert_eq!(&child.items(), inner),
                _ => prop_assert!(child.is_empty()),
            }
        }
    }

    // Merging an empty mapping changes nothing
    #[test]
    fn merge_empty_is_identity(items in mapping_strategy()) {
        let mut merged = Value::Mapping(items.clone());
        ValueMerger::merge_into(&mut merged, Value::mapping());
        prop_assert_eq!(merged, Value::Mapping(items));
    }

    // Merging a value into itself changes nothing
    #[test]
    fn merge_self_is_idempotent(items in mapping_strategy()) {
        let mut merged = Value::Mapping(items.clone());
        ValueMerger::merge_into(&mut merged, Value::Mapping(items.clone()));
        prop_assert_eq!(merged, Value::Mapping(items));
    }

    // Merging into an empty mapping copies the source
    #[test]
    fn merge_into_empty_copies(items in mapping_strategy()) {
        let mut merged = Value::mapping();
        ValueMerger::merge_into(&mut merged, Value::Mapping(items.clone()));
        prop_assert_eq!(merged, Value::Mapping(items));
    }
}
