//! Insertion-only map with first-seen-wins semantics.

use std::collections::HashMap;

/// Map that keeps the first value stored under each key.
///
/// `insert_if_absent` never replaces, so for a given input order the stored
/// value per key is stable. Key iteration follows insertion order.
#[derive(Debug, Clone)]
pub struct FirstSeenMap<V> {
    order: Vec<String>,
    entries: HashMap<String, V>,
}

impl<V> FirstSeenMap<V> {
    pub fn new() -> Self {
        Self {
            order: Vec::new(),
            entries: HashMap::new(),
        }
    }

    /// Store `value` under `key` unless the key was seen before.
    /// Returns `true` when the value was stored.
    pub fn insert_if_absent(&mut self, key: &str, value: V) -> bool {
        if self.entries.contains_key(key) {
            return false;
        }
        self.order.push(key.to_string());
        self.entries.insert(key.to_string(), value);
        true
    }

    pub fn get(&self, key: &str) -> Option<&V> {
        self.entries.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Keys in the order they were first seen.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }
}

impl<V> Default for FirstSeenMap<V> {
    fn default() -> Self {
        Self::new()
    }
}
