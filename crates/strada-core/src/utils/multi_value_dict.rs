//! An insertion-ordered dictionary that can hold multiple values per key.
//!
//! [`MultiValueDict`] backs query-parameter maps where a single key may
//! appear multiple times and where encoding must reproduce keys in the
//! order they were first seen.

use std::collections::HashMap;
use std::hash::Hash;

/// A dictionary that maps keys to lists of values, preserving first-seen
/// key order.
///
/// [`get`](MultiValueDict::get) returns the **last** value for a key, while
/// [`get_list`](MultiValueDict::get_list) returns all values. Iteration
/// yields keys in the order they were first inserted.
///
/// # Examples
///
/// ```
/// use strada_core::utils::MultiValueDict;
///
/// let mut d = MultiValueDict::new();
/// d.append("color".to_string(), "red");
/// d.append("color".to_string(), "blue");
///
/// assert_eq!(d.get(&"color".to_string()), Some(&"blue"));
/// assert_eq!(d.get_list(&"color".to_string()), Some(&vec!["red", "blue"]));
/// ```
#[derive(Debug, Clone)]
pub struct MultiValueDict<K: Eq + Hash + Clone, V> {
    inner: HashMap<K, Vec<V>>,
    // First-seen key order; every key in `order` is present in `inner`.
    order: Vec<K>,
}

impl<K: Eq + Hash + Clone, V> Default for MultiValueDict<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Eq + Hash + Clone, V> MultiValueDict<K, V> {
    /// Creates an empty `MultiValueDict`.
    pub fn new() -> Self {
        Self {
            inner: HashMap::new(),
            order: Vec::new(),
        }
    }

    /// Returns a reference to the **last** value associated with the key,
    /// or `None` if the key is not present.
    pub fn get(&self, key: &K) -> Option<&V> {
        self.inner.get(key).and_then(|v| v.last())
    }

    /// Returns a reference to all values associated with the key,
    /// or `None` if the key is not present.
    pub fn get_list(&self, key: &K) -> Option<&Vec<V>> {
        self.inner.get(key)
    }

    /// Sets the value for a key, replacing any existing values.
    ///
    /// An existing key keeps its original position in the iteration order;
    /// a new key is appended.
    pub fn set(&mut self, key: K, value: V) {
        if !self.inner.contains_key(&key) {
            self.order.push(key.clone());
        }
        self.inner.insert(key, vec![value]);
    }

    /// Appends a value to the list for the given key.
    pub fn append(&mut self, key: K, value: V) {
        if !self.inner.contains_key(&key) {
            self.order.push(key.clone());
        }
        self.inner.entry(key).or_default().push(value);
    }

    /// Removes a key and returns its values, or `None` if absent.
    pub fn remove(&mut self, key: &K) -> Option<Vec<V>> {
        let removed = self.inner.remove(key);
        if removed.is_some() {
            self.order.retain(|k| k != key);
        }
        removed
    }

    /// Returns an iterator over the keys in first-seen order.
    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.order.iter()
    }

    /// Returns an iterator over (key, value-list) pairs in first-seen key order.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &Vec<V>)> {
        self.order
            .iter()
            .filter_map(|k| self.inner.get(k).map(|v| (k, v)))
    }

    /// Returns the number of distinct keys.
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Returns `true` if the dictionary contains no keys.
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Returns `true` if the dictionary contains the specified key.
    pub fn contains_key(&self, key: &K) -> bool {
        self.inner.contains_key(key)
    }
}

impl<K: Eq + Hash + Clone, V> IntoIterator for MultiValueDict<K, V> {
    type Item = (K, Vec<V>);
    type IntoIter = std::vec::IntoIter<(K, Vec<V>)>;

    fn into_iter(mut self) -> Self::IntoIter {
        let mut items = Vec::with_capacity(self.order.len());
        for key in self.order.drain(..) {
            if let Some(values) = self.inner.remove(&key) {
                items.push((key, values));
            }
        }
        items.into_iter()
    }
}

impl<'a, K: Eq + Hash + Clone, V> IntoIterator for &'a MultiValueDict<K, V> {
    type Item = (&'a K, &'a Vec<V>);
    type IntoIter = Box<dyn Iterator<Item = (&'a K, &'a Vec<V>)> + 'a>;

    fn into_iter(self) -> Self::IntoIter {
        Box::new(
            self.order
                .iter()
                .filter_map(|k| self.inner.get(k).map(|v| (k, v))),
        )
    }
}
