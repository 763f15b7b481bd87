//! Deep merging of values.
//!
//! Used when a write should combine with what is already stored rather than
//! replace it.

use crate::value::Value;

/// Merges values according to precedence rules.
///
/// # Examples
///
/// ```
/// use cfgtree::{Value, ValueMerger};
///
/// let mut low = Value::from_yaml_str("db:\n  host: a\n  port: 1\n").unwrap();
/// let high = Value::from_yaml_str("db:\n  host: b\n").unwrap();
///
/// ValueMerger::merge_into(&mut low, high);
/// let flat = low.flatten();
/// assert_eq!(flat["db.host"], Value::from("b"));
/// assert_eq!(flat["db.port"], Value::from(1));
/// ```
pub struct ValueMerger;

impl ValueMerger {
    /// Merge multiple values, lowest precedence first.
    #[must_use]
    pub fn merge<I>(values: I) -> Value
    where
        I: IntoIterator<Item = Value>,
    {
        let mut result = Value::mapping();
        for value in values {
            Self::merge_into(&mut result, value);
        }
        result
    }

    /// Merge `source` into `target` (source overwrites target).
    ///
    /// # Merging Rules
    ///
    /// - Mapping into mapping: key-by-key, recursively
    /// - Anything else: `source` replaces `target`, sequences included
    ///
    /// Same as [`Value::merge`].
    pub fn merge_into(target: &mut Value, source: Value) {
        target.merge(source);
    }
}
