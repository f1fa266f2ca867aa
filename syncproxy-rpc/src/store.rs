//! Insertion-ordered parameter storage.
//!
//! `ParameterStore` is the wire-side representation of every RPC message and
//! struct. It holds untyped [`Value`]s and performs no validation; typed
//! interpretation happens in the accessor layer on read.

use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::value::{IntoValue, Value};

/// Ordered mapping from wire key to [`Value`].
///
/// Keys are unique. Overwriting a key keeps its position; new keys are
/// appended, so iteration and serialization follow insertion order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ParameterStore {
    entries: Vec<(String, Value)>,
}

impl ParameterStore {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
        }
    }

    fn position(&self, key: &str) -> Option<usize> {
        self.entries.iter().position(|(k, _)| k == key)
    }

    /// Insert or overwrite a value. Returns the previous value, if any.
    pub fn set(&mut self, key: impl Into<String>, value: impl IntoValue) -> Option<Value> {
        let key = key.into();
        let value = value.into_value();
        match self.position(&key) {
            Some(idx) => Some(std::mem::replace(&mut self.entries[idx].1, value)),
            None => {
                self.entries.push((key, value));
                None
            }
        }
    }

    /// Remove a key. Absent keys are a no-op.
    pub fn remove(&mut self, key: &str) -> Option<Value> {
        let idx = self.position(key)?;
        Some(self.entries.remove(idx).1)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.position(key).is_some()
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut Value> {
        self.entries
            .iter_mut()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    /// Entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub(crate) fn from_map_access<'de, A: MapAccess<'de>>(
        mut map: A,
    ) -> Result<Self, A::Error> {
        let mut store = ParameterStore::with_capacity(map.size_hint().unwrap_or(0));
        while let Some((key, value)) = map.next_entry::<String, Value>()? {
            store.set(key, value);
        }
        Ok(store)
    }
}

impl<K: Into<String>, V: IntoValue> FromIterator<(K, V)> for ParameterStore {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut store = ParameterStore::new();
        store.extend(iter);
        store
    }
}

impl<K: Into<String>, V: IntoValue> Extend<(K, V)> for ParameterStore {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.set(key, value);
        }
    }
}

impl IntoIterator for ParameterStore {
    type Item = (String, Value);
    type IntoIter = std::vec::IntoIter<(String, Value)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl Serialize for ParameterStore {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, value) in &self.entries {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

struct StoreVisitor;

impl<'de> Visitor<'de> for StoreVisitor {
    type Value = ParameterStore;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a map of parameters")
    }

    fn visit_map<A: MapAccess<'de>>(self, map: A) -> Result<ParameterStore, A::Error> {
        ParameterStore::from_map_access(map)
    }
}

impl<'de> Deserialize<'de> for ParameterStore {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(StoreVisitor)
    }
}
