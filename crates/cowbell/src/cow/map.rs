//! Mapping-kind wrapper

use std::rc::Rc;

use indexmap::IndexMap;

use crate::error::{CowError, Result};
use crate::value::{HashableValue, Kind, Value};

use super::core::{CowCore, SharedCell};

/// Copy-on-write wrapper around a mapping.
///
/// Entries keep insertion order. Reads never copy; every mutator
/// triggers the copy transition first.
pub struct CowMap {
    core: CowCore<IndexMap<HashableValue, Value>>,
}

impl CowMap {
    pub(crate) fn new(shared: SharedCell<IndexMap<HashableValue, Value>>) -> Self {
        CowMap {
            core: CowCore::new(shared),
        }
    }

    /// Number of entries in the effective mapping.
    pub fn len(&self) -> usize {
        self.core.read().len()
    }

    /// True if the effective mapping has no entries.
    pub fn is_empty(&self) -> bool {
        self.core.read().is_empty()
    }

    /// True while no mutation has occurred and reads alias the original.
    pub fn is_shared(&self) -> bool {
        self.core.is_shared()
    }

    /// Force the copy transition without mutating. Idempotent.
    pub fn copy_on_write(&mut self) {
        self.core.copy_on_write();
    }

    /// The effective data as a value handle. While shared, this is the
    /// same handle as the wrapped input.
    pub fn effective_view(&self) -> Value {
        Value::Map(Rc::clone(self.core.effective()))
    }

    /// Read the value stored under `key`, if any.
    pub fn get(&self, key: &HashableValue) -> Option<Value> {
        self.core.read().get(key).cloned()
    }

    /// Membership test on keys.
    pub fn contains_key(&self, key: &HashableValue) -> bool {
        self.core.read().contains_key(key)
    }

    /// Snapshot of the keys in insertion order. Restartable, never copies.
    pub fn keys(&self) -> std::vec::IntoIter<HashableValue> {
        self.core
            .read()
            .keys()
            .cloned()
            .collect::<Vec<_>>()
            .into_iter()
    }

    /// Snapshot of the entries in insertion order.
    pub fn iter(&self) -> std::vec::IntoIter<(HashableValue, Value)> {
        self.core
            .read()
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect::<Vec<_>>()
            .into_iter()
    }

    /// Insert or replace an entry, returning the previous value if the
    /// key was already present.
    pub fn insert(&mut self, key: HashableValue, value: Value) -> Option<Value> {
        self.core.write().insert(key, value)
    }

    /// Delete the entry under `key` and return its value.
    ///
    /// # Errors
    ///
    /// Returns `KeyNotFound` if the key is absent. The copy transition
    /// has already fired by then and is not rolled back.
    pub fn remove(&mut self, key: &HashableValue) -> Result<Value> {
        self.core
            .write()
            .shift_remove(key)
            .ok_or_else(|| CowError::KeyNotFound {
                key: format!("{:?}", key),
            })
    }

    /// Insert every entry of `entries`, replacing existing keys.
    pub fn update(&mut self, entries: impl IntoIterator<Item = (HashableValue, Value)>) {
        self.core.write().extend(entries);
    }

    /// Remove the entry under `key` and return its value, falling back
    /// to `default` when the key is absent.
    ///
    /// # Errors
    ///
    /// Returns `KeyNotFound` when the key is absent and no default was
    /// given.
    pub fn pop(&mut self, key: &HashableValue, default: Option<Value>) -> Result<Value> {
        match self.core.write().shift_remove(key) {
            Some(value) => Ok(value),
            None => default.ok_or_else(|| CowError::KeyNotFound {
                key: format!("{:?}", key),
            }),
        }
    }

    /// Remove and return the most recently inserted entry.
    ///
    /// # Errors
    ///
    /// Returns `PopFromEmpty` if the mapping is empty.
    pub fn popitem(&mut self) -> Result<(HashableValue, Value)> {
        self.core.write().pop().ok_or(CowError::PopFromEmpty {
            kind: Kind::Mapping,
        })
    }

    /// Remove every entry.
    pub fn clear(&mut self) {
        self.core.write().clear();
    }
}
