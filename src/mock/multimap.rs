//! Ordered string-to-values map used for headers and query parameters.

use indexmap::IndexMap;
use serde::Serialize;

/// A map from a key to an ordered list of values.
///
/// Keys keep their insertion order. Inserting an existing key replaces its
/// values in place; inserting an empty value list removes the key, so a key
/// that is present always has at least one value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct MultiMap {
    entries: IndexMap<String, Vec<String>>,
}

impl MultiMap {
    /// Create an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the values for `key`, replacing any previous values.
    pub fn insert<K, I, V>(&mut self, key: K, values: I)
    where
        K: Into<String>,
        I: IntoIterator<Item = V>,
        V: Into<String>,
    {
        let key = key.into();
        let values: Vec<String> = values.into_iter().map(Into::into).collect();

        if values.is_empty() {
            self.remove(&key);
        } else {
            self.entries.insert(key, values);
        }
    }

    /// Remove `key`, returning its values if it was present.
    pub fn remove(&mut self, key: &str) -> Option<Vec<String>> {
        self.entries.shift_remove(key)
    }

    /// Values for `key`, if present.
    pub fn get(&self, key: &str) -> Option<&[String]> {
        self.entries.get(key).map(Vec::as_slice)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Iterate over keys and their values in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.entries
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_slice()))
    }
}

impl<K, V> FromIterator<(K, Vec<V>)> for MultiMap
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<T: IntoIterator<Item = (K, Vec<V>)>>(iter: T) -> Self {
        let mut map = MultiMap::new();
        for (key, values) in iter {
            map.insert(key, values);
        }
        map
    }
}
