//! Property-based tests for path parsing and resolution.

use super::query::Query;
use super::resolver::PathResolver;
use crate::value::{Mapping, Value};
use proptest::prelude::*;

// Strategy for generating single path segments
fn segment_strategy() -> impl Strategy<Value = String> {
    "[a-z0-9_-]{1,12}"
}

fn query_strategy() -> impl Strategy<Value = Query> {
    prop::collection::vec(segment_strategy(), 1..6)
        .prop_map(|parts| Query::parse(&parts.join(".")).expect("segments are non-empty"))
}

fn scalar_strategy() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(Value::Integer),
        "[ -~]{0,16}".prop_map(Value::String),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 2000,
        max_shrink_iters: 2000,
        .. ProptestConfig::default()
    })]

    // Display and parse are inverse for well-formed queries
    #[test]
    fn query_display_parse_inverse(query in query_strategy()) {
        let reparsed = Query::parse(&query.to_string()).unwrap();
        prop_assert_eq!(reparsed, query);
    }

    // Any empty segment makes the whole query malformed
    #[test]
    fn query_with_empty_segment_rejected(
        parts in prop::collection::vec(segment_strategy(), 1..5),
        hole in 0..6usize
    ) {
        let mut parts = parts;
        let hole = hole.min(parts.len());
        parts.insert(hole, String::new());
        prop_assert!(Query::parse(&parts.join(".")).unwrap_err().is_malformed_query());
    }

    // extend then fetch returns the written value
    #[test]
    fn extend_fetch_round_trip(query in query_strategy(), value in scalar_strategy()) {
        let mut items = Mapping::new();
        PathResolver::extend(&mut items, &query, value.clone());
        prop_assert_eq!(PathResolver::fetch(&items, &query), Some(&value));
        prop_assert!(PathResolver::exists(&items, &query));
    }

    // The last write to a path wins, whatever was written before along the way
    #[test]
    fn last_write_wins(
        earlier in prop::collection::vec((query_strategy(), scalar_strategy()), 0..8),
        query in query_strategy(),
        value in scalar_strategy()
    ) {
        let mut items = Mapping::new();
        for (q, v) in earlier {
            PathResolver::extend(&mut items, &q, v);
        }
        PathResolver::extend(&mut items, &query, value.clone());
        prop_assert_eq!(PathResolver::fetch(&items, &query), Some(&value));
    }

    // Nothing is present in an empty structure
    #[test]
    fn empty_structure_has_nothing(query in query_strategy()) {
        let items = Mapping::new();
        prop_assert!(!PathResolver::exists(&items, &query));
        let default = Value::from("default");
        prop_assert_eq!(PathResolver::fetch_or(&items, &query, &default), &default);
    }

    // remove undoes extend on an empty structure, leaving only empty containers
    #[test]
    fn remove_after_extend(query in query_strategy(), value in scalar_strategy()) {
        let mut items = Mapping::new();
        PathResolver::extend(&mut items, &query, value.clone());
        prop_assert_eq!(PathResolver::remove(&mut items, &query), Some(value));
        prop_assert!(!PathResolver::exists(&items, &query));
        prop_assert!(Value::Mapping(items).flatten().values().all(|v| *v == Value::mapping()));
    }
}
