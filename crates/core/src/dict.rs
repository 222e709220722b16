//! Dict: the keyword-argument bundle
//!
//! An unordered map from string key to [`Value`]. Cloning a dict deep-copies
//! every nested value; two dicts never alias each other.
//!
//! # Iteration order
//!
//! Backed by `HashMap`, so iteration order is unspecified and may differ
//! between two dicts holding the same entries. Nothing in this crate depends
//! on it except where explicitly noted; rendering sorts keys.
//!
//! # Structural operators
//!
//! [`Dict::merge`] and [`Dict::with_prefix`] are shallow. Nested dicts are
//! copied as opaque values: their keys are not prefixed and their entries are
//! not merged.

use crate::value::Value;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::collections::hash_map;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Dict {
    entries: HashMap<String, Value>,
}

impl Dict {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Dict {
            entries: HashMap::with_capacity(capacity),
        }
    }

    /// Insert or replace `key`
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.entries.insert(key.into(), value.into());
    }

    pub fn has_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Borrow the raw value stored under `key`
    pub fn value(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.entries.remove(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> hash_map::Iter<'_, String, Value> {
        self.entries.iter()
    }

    pub fn keys(&self) -> hash_map::Keys<'_, String, Value> {
        self.entries.keys()
    }

    pub fn into_inner(self) -> HashMap<String, Value> {
        self.entries
    }

    /// Copy of `self` with every entry of `other` inserted on top
    ///
    /// Conflicting keys take `other`'s value wholesale, even when both
    /// sides hold a nested dict. Not commutative when keys overlap.
    pub fn merge(&self, other: &Dict) -> Dict {
        let mut out = self.clone();
        for (key, value) in other.iter() {
            out.entries.insert(key.clone(), value.clone());
        }
        out
    }

    /// Copy of `self` with `prefix` prepended to every top-level key
    ///
    /// Values are copied unchanged. If two source keys ever produced the same
    /// prefixed key the later-iterated one would win, and iteration order is
    /// unspecified. Prepending one fixed prefix is injective on distinct
    /// keys, so this cannot happen and the result has exactly `self.len()`
    /// entries.
    pub fn with_prefix(&self, prefix: &str) -> Dict {
        let mut out = Dict::with_capacity(self.len());
        for (key, value) in self.iter() {
            out.entries.insert(format!("{}{}", prefix, key), value.clone());
        }
        out
    }
}

impl From<HashMap<String, Value>> for Dict {
    fn from(entries: HashMap<String, Value>) -> Self {
        Dict { entries }
    }
}

impl<K: Into<String>, V: Into<Value>, const N: usize> From<[(K, V); N]> for Dict {
    fn from(entries: [(K, V); N]) -> Self {
        entries.into_iter().collect()
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Dict {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Dict {
            entries: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl<K: Into<String>, V: Into<Value>> Extend<(K, V)> for Dict {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (k, v) in iter {
            self.set(k, v);
        }
    }
}

impl IntoIterator for Dict {
    type Item = (String, Value);
    type IntoIter = hash_map::IntoIter<String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a> IntoIterator for &'a Dict {
    type Item = (&'a String, &'a Value);
    type IntoIter = hash_map::Iter<'a, String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_and_has_key() {
        let mut dict = Dict::new();
        dict.set("key1", 1);

        assert!(dict.has_key("key1"));
        assert!(!dict.has_key("key2"));
    }

    #[test]
    fn test_set_replaces() {
        let mut dict = Dict::new();
        dict.set("k", 1);
        dict.set("k", "two");
        assert_eq!(dict.len(), 1);
        assert_eq!(dict.value("k"), Some(&Value::from("two")));
    }

    #[test]
    fn test_remove_clears_key() {
        let mut dict = Dict::from([("a", 1)]);
        assert_eq!(dict.remove("a"), Some(Value::Int(1)));
        assert!(!dict.has_key("a"));
        assert!(dict.is_empty());
    }

    #[test]
    fn test_merge_second_wins() {
        let a = Dict::from([("key1", 1), ("shared", 10)]);
        let b = Dict::from([("key2", 2), ("shared", 20)]);

        let merged = a.merge(&b);
        assert_eq!(merged.len(), 3);
        assert_eq!(merged.value("key1"), Some(&Value::Int(1)));
        assert_eq!(merged.value("key2"), Some(&Value::Int(2)));
        assert_eq!(merged.value("shared"), Some(&Value::Int(20)));

        let reversed = b.merge(&a);
        assert_eq!(reversed.value("shared"), Some(&Value::Int(10)));
        assert_ne!(merged, reversed);
    }

    #[test]
    fn test_merge_is_shallow() {
        let a = Dict::from([("nested", Dict::from([("x", 1), ("y", 2)]))]);
        let b = Dict::from([("nested", Dict::from([("z", 3)]))]);

        let merged = a.merge(&b);
        let nested = merged.value("nested").unwrap().as_dict().unwrap();
        assert_eq!(nested.len(), 1);
        assert!(nested.has_key("z"));
        assert!(!nested.has_key("x"));
    }

    #[test]
    fn test_merge_with_empty_is_identity() {
        let a = Dict::from([("flag", Value::from(true)), ("pi", Value::from(3.1415))]);
        assert_eq!(a.merge(&Dict::new()), a);
        assert_eq!(Dict::new().merge(&a), a);
    }

    #[test]
    fn test_with_prefix() {
        let dict = Dict::from([("key1", 1), ("key2", 2)]);
        let prefixed = dict.with_prefix("pre_");

        assert_eq!(prefixed.len(), 2);
        assert_eq!(prefixed.value("pre_key1"), Some(&Value::Int(1)));
        assert_eq!(prefixed.value("pre_key2"), Some(&Value::Int(2)));
        assert!(!prefixed.has_key("key1"));
    }

    #[test]
    fn test_with_prefix_is_shallow() {
        let dict = Dict::from([("outer", Dict::from([("inner", 1)]))]);
        let prefixed = dict.with_prefix("p.");
        let nested = prefixed.value("p.outer").unwrap().as_dict().unwrap();
        assert!(nested.has_key("inner"));
        assert!(!nested.has_key("p.inner"));
    }

    #[test]
    fn test_with_prefix_keeps_key_count() {
        // Keys that look like they could collide once prefixed
        let dict = Dict::from([("a", 1), ("_a", 2), ("", 3)]);
        let prefixed = dict.with_prefix("_");
        assert_eq!(prefixed.len(), dict.len());
        assert_eq!(prefixed.value("_"), Some(&Value::Int(3)));
        assert_eq!(prefixed.value("_a"), Some(&Value::Int(1)));
        assert_eq!(prefixed.value("__a"), Some(&Value::Int(2)));
    }

    #[test]
    fn test_clone_is_deep() {
        let mut original = Dict::from([("nested", Dict::from([("x", 1)]))]);
        let copy = original.clone();
        original.set("nested", Dict::from([("x", 2)]));

        let nested = copy.value("nested").unwrap().as_dict().unwrap();
        assert_eq!(nested.value("x"), Some(&Value::Int(1)));
    }

    #[test]
    fn test_equality_ignores_insertion_order() {
        let mut a = Dict::new();
        a.set("one", 1);
        a.set("two", 2);
        let mut b = Dict::new();
        b.set("two", 2);
        b.set("one", 1);
        assert_eq!(a, b);
    }

    #[test]
    fn test_equality_is_per_variant() {
        let a = Dict::from([("k", Value::Int(1))]);
        let b = Dict::from([("k", Value::Bool(true))]);
        assert_ne!(a, b);
    }
}
