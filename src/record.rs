//! Ordered field map for Cloacal records.
//!
//! This module provides [`Record`], a wrapper around [`IndexMap`] that
//! maintains insertion order for record fields. Order matters in Cloacal:
//! the formatter renders complex fields (blocks and lists) in the order they
//! appeared in the source text.
//!
//! ## Why IndexMap?
//!
//! `Record` uses `IndexMap` instead of `HashMap` to ensure:
//!
//! - **Deterministic output**: Fields format in a consistent order
//! - **Iteration order**: Fields are iterated in insertion order
//! - **Compatibility**: Easier testing and debugging with predictable output
//!
//! ## Examples
//!
//! ```rust
//! use cloacal::{Record, Value};
//!
//! let mut record = Record::new();
//! record.insert("name".to_string(), Value::from("Carlisle"));
//! record.insert("age".to_string(), Value::from("99"));
//!
//! assert_eq!(record.len(), 2);
//! assert_eq!(record.name(), Some("Carlisle"));
//! ```

use crate::Value;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// The reserved field name for a record subject's display name.
pub const NAME_KEY: &str = "name";

/// An ordered map of field names to Cloacal values.
///
/// This is a thin wrapper around [`IndexMap`] that maintains insertion order,
/// which the formatter relies on when rendering complex fields.
///
/// A record is constructed wholesale by [`crate::parse`] from one input text
/// (or built by hand, e.g. via the [`record!`](crate::record!) macro) and is
/// treated as immutable for formatting purposes.
///
/// # Examples
///
/// ```rust
/// use cloacal::{Record, Value};
///
/// let mut record = Record::new();
/// record.insert("first".to_string(), Value::from("1"));
/// record.insert("second".to_string(), Value::from("2"));
///
/// // Iteration maintains insertion order
/// let keys: Vec<_> = record.keys().cloned().collect();
/// assert_eq!(keys, vec!["first", "second"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record(IndexMap<String, Value>);

impl Record {
    /// Creates an empty `Record`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use cloacal::Record;
    ///
    /// let record = Record::new();
    /// assert!(record.is_empty());
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Record(IndexMap::new())
    }

    /// Creates an empty `Record` with the specified capacity.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Record(IndexMap::with_capacity(capacity))
    }

    /// Inserts a field into the record.
    ///
    /// If the record already contained this field name, the old value is
    /// replaced and returned, and the field keeps its original position.
    /// Last write wins for the value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use cloacal::{Record, Value};
    ///
    /// let mut record = Record::new();
    /// assert!(record.insert("key".to_string(), Value::from("a")).is_none());
    /// assert!(record.insert("key".to_string(), Value::from("b")).is_some());
    /// assert_eq!(record.get("key").and_then(|v| v.as_str()), Some("b"));
    /// ```
    pub fn insert(&mut self, key: String, value: Value) -> Option<Value> {
        self.0.insert(key, value)
    }

    /// Returns a reference to the value of the named field.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use cloacal::{Record, Value};
    ///
    /// let mut record = Record::new();
    /// record.insert("ilk".to_string(), Value::from("bird"));
    /// assert_eq!(record.get("ilk").and_then(|v| v.as_str()), Some("bird"));
    /// ```
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Returns the subject's display name, if the reserved `"name"` field is
    /// present.
    ///
    /// The parser only ever stores a scalar under `"name"`; a non-scalar
    /// value placed there by hand is reported as absent.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use cloacal::{Record, Value};
    ///
    /// let mut record = Record::new();
    /// record.insert("name".to_string(), Value::from("Carlisle"));
    /// assert_eq!(record.name(), Some("Carlisle"));
    /// ```
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.0.get(NAME_KEY).and_then(Value::as_str)
    }

    /// Returns the number of fields in the record.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the record contains no fields.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns an iterator over the field names, in insertion order.
    pub fn keys(&self) -> indexmap::map::Keys<'_, String, Value> {
        self.0.keys()
    }

    /// Returns an iterator over the field values, in insertion order.
    pub fn values(&self) -> indexmap::map::Values<'_, String, Value> {
        self.0.values()
    }

    /// Returns an iterator over the fields, in insertion order.
    pub fn iter(&self) -> indexmap::map::Iter<'_, String, Value> {
        self.0.iter()
    }
}

impl From<HashMap<String, Value>> for Record {
    fn from(map: HashMap<String, Value>) -> Self {
        Record(map.into_iter().collect())
    }
}

impl From<Record> for HashMap<String, Value> {
    fn from(record: Record) -> Self {
        record.0.into_iter().collect()
    }
}

impl IntoIterator for Record {
    type Item = (String, Value);
    type IntoIter = indexmap::map::IntoIter<String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Record {
    type Item = (&'a String, &'a Value);
    type IntoIter = indexmap::map::Iter<'a, String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl FromIterator<(String, Value)> for Record {
    fn from_iter<T: IntoIterator<Item = (String, Value)>>(iter: T) -> Self {
        Record(IndexMap::from_iter(iter))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insertion_order_preserved() {
        let mut record = Record::new();
        record.insert("zeta".to_string(), Value::from("1"));
        record.insert("alpha".to_string(), Value::from("2"));
        record.insert("mid".to_string(), Value::from("3"));

        let keys: Vec<_> = record.keys().cloned().collect();
        assert_eq!(keys, vec!["zeta", "alpha", "mid"]);
    }

    #[test]
    fn test_reinsert_keeps_position_replaces_value() {
        let mut record = Record::new();
        record.insert("a".to_string(), Value::from("1"));
        record.insert("b".to_string(), Value::from("2"));
        record.insert("a".to_string(), Value::from("3"));

        let keys: Vec<_> = record.keys().cloned().collect();
        assert_eq!(keys, vec!["a", "b"]);
        assert_eq!(record.get("a").and_then(|v| v.as_str()), Some("3"));
    }

    #[test]
    fn test_name_accessor() {
        let mut record = Record::new();
        assert_eq!(record.name(), None);

        record.insert(NAME_KEY.to_string(), Value::from("Carlisle"));
        assert_eq!(record.name(), Some("Carlisle"));

        record.insert(NAME_KEY.to_string(), Value::EmptyList);
        assert_eq!(record.name(), None);
    }

    #[test]
    fn test_hashmap_roundtrip() {
        let mut record = Record::new();
        record.insert("a".to_string(), Value::from("1"));
        record.insert("b".to_string(), Value::from("2"));

        let map: HashMap<String, Value> = record.clone().into();
        assert_eq!(map.len(), 2);

        let back = Record::from(map);
        assert_eq!(back.len(), 2);
        assert_eq!(back.get("a"), record.get("a"));
    }

    #[test]
    fn test_from_iterator() {
        let record: Record = vec![
            ("a".to_string(), Value::from("1")),
            ("b".to_string(), Value::EmptyList),
        ]
        .into_iter()
        .collect();

        assert_eq!(record.len(), 2);
        assert!(record.get("b").is_some_and(Value::is_empty_list));
    }
}
