//! Set-kind wrapper

use std::rc::Rc;

use indexmap::IndexSet;

use crate::error::{CowError, Result};
use crate::value::{HashableValue, Kind, Value};

use super::core::{CowCore, SharedCell};

/// Copy-on-write wrapper around a set.
///
/// Elements keep insertion order, which makes `pop` deterministic
/// (most recently inserted element first). Reads never copy; every
/// mutator triggers the copy transition first.
pub struct CowSet {
    core: CowCore<IndexSet<HashableValue>>,
}

impl CowSet {
    pub(crate) fn new(shared: SharedCell<IndexSet<HashableValue>>) -> Self {
        CowSet {
            core: CowCore::new(shared),
        }
    }

    /// Number of elements in the effective set.
    pub fn len(&self) -> usize {
        self.core.read().len()
    }

    /// True if the effective set has no elements.
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
        Value::Set(Rc::clone(self.core.effective()))
    }

    /// Membership test.
    pub fn contains(&self, element: &HashableValue) -> bool {
        self.core.read().contains(element)
    }

    /// Snapshot of the elements in insertion order. Restartable, never
    /// copies the container.
    pub fn iter(&self) -> std::vec::IntoIter<HashableValue> {
        self.core
            .read()
            .iter()
            .cloned()
            .collect::<Vec<_>>()
            .into_iter()
    }

    /// Union with another set, returned as a raw set value. The wrapper
    /// itself is left untouched and no copy is triggered.
    pub fn union(&self, other: &IndexSet<HashableValue>) -> Value {
        let mut elements = self.core.read().clone();
        elements.extend(other.iter().cloned());
        Value::set(elements)
    }

    /// Intersection with another set, returned as a raw set value.
    /// No copy is triggered.
    pub fn intersection(&self, other: &IndexSet<HashableValue>) -> Value {
        let elements = self
            .core
            .read()
            .iter()
            .filter(|element| other.contains(*element))
            .cloned()
            .collect();
        Value::set(elements)
    }

    /// Insert an element. Returns false if it was already present.
    pub fn add(&mut self, element: HashableValue) -> bool {
        self.core.write().insert(element)
    }

    /// Delete an element.
    ///
    /// # Errors
    ///
    /// Returns `MissingElement` if the element is absent. The copy
    /// transition has already fired by then and is not rolled back.
    pub fn remove(&mut self, element: &HashableValue) -> Result<()> {
        if self.core.write().shift_remove(element) {
            Ok(())
        } else {
            Err(CowError::MissingElement {
                element: format!("{:?}", element),
            })
        }
    }

    /// Delete an element if present. Returns whether it was present;
    /// absence is not an error.
    pub fn discard(&mut self, element: &HashableValue) -> bool {
        self.core.write().shift_remove(element)
    }

    /// Remove and return the most recently inserted element.
    ///
    /// # Errors
    ///
    /// Returns `PopFromEmpty` if the set is empty.
    pub fn pop(&mut self) -> Result<HashableValue> {
        self.core
            .write()
            .pop()
            .ok_or(CowError::PopFromEmpty { kind: Kind::Set })
    }

    /// Remove every element.
    pub fn clear(&mut self) {
        self.core.write().clear();
    }
}
