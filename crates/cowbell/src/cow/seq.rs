//! Sequence-kind wrapper

use std::rc::Rc;

use crate::error::{CowError, Result};
use crate::value::{Kind, Value};

use super::core::{CowCore, SharedCell};
use super::resolve_index;

/// Copy-on-write wrapper around a sequence.
///
/// Reads go to the effective data without copying; every mutator
/// triggers the copy transition first and then touches only the
/// private copy. Indices may be negative to count from the end.
pub struct CowSeq {
    core: CowCore<Vec<Value>>,
}

impl CowSeq {
    pub(crate) fn new(shared: SharedCell<Vec<Value>>) -> Self {
        CowSeq {
            core: CowCore::new(shared),
        }
    }

    /// Number of elements in the effective sequence.
    pub fn len(&self) -> usize {
        self.core.read().len()
    }

    /// True if the effective sequence has no elements.
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
        Value::List(Rc::clone(self.core.effective()))
    }

    /// Read the element at `index` (negative counts from the end).
    ///
    /// # Errors
    ///
    /// Returns `IndexOutOfBounds` if the index is out of range.
    pub fn get(&self, index: i64) -> Result<Value> {
        let items = self.core.read();
        let idx = resolve_index(index, items.len()).ok_or(CowError::IndexOutOfBounds {
            index,
            len: items.len(),
        })?;
        Ok(items[idx].clone())
    }

    /// Membership test by structural equality.
    pub fn contains(&self, needle: &Value) -> bool {
        self.core.read().iter().any(|item| item == needle)
    }

    /// Iterate over the current effective elements.
    ///
    /// Each call re-derives the snapshot from the effective data, so
    /// iteration is restartable and never copies the container.
    pub fn iter(&self) -> std::vec::IntoIter<Value> {
        self.core.read().clone().into_iter()
    }

    /// Concatenate with more elements, returning a raw sequence value.
    /// The wrapper itself is left untouched; re-wrap the result if
    /// copy-on-write semantics are still wanted.
    pub fn concat(&self, other: &[Value]) -> Value {
        let mut items = self.core.read().clone();
        items.extend(other.iter().cloned());
        Value::list(items)
    }

    /// Replace the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns `IndexOutOfBounds` if the index is out of range. The copy
    /// transition has already fired by then and is not rolled back.
    pub fn set(&mut self, index: i64, value: Value) -> Result<()> {
        let mut items = self.core.write();
        let len = items.len();
        let idx = resolve_index(index, len).ok_or(CowError::IndexOutOfBounds { index, len })?;
        items[idx] = value;
        Ok(())
    }

    /// Delete and return the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns `IndexOutOfBounds` if the index is out of range.
    pub fn remove(&mut self, index: i64) -> Result<Value> {
        let mut items = self.core.write();
        let len = items.len();
        let idx = resolve_index(index, len).ok_or(CowError::IndexOutOfBounds { index, len })?;
        Ok(items.remove(idx))
    }

    /// Append a single element.
    pub fn append(&mut self, value: Value) {
        self.core.write().push(value);
    }

    /// Append every element of `values` in order.
    pub fn extend(&mut self, values: impl IntoIterator<Item = Value>) {
        self.core.write().extend(values);
    }

    /// Remove and return the element at `index`, or the last element
    /// when `index` is `None`.
    ///
    /// # Errors
    ///
    /// Returns `PopFromEmpty` when the sequence is empty and
    /// `IndexOutOfBounds` when an explicit index is out of range.
    pub fn pop(&mut self, index: Option<i64>) -> Result<Value> {
        let mut items = self.core.write();
        let len = items.len();
        if len == 0 {
            return Err(CowError::PopFromEmpty {
                kind: Kind::Sequence,
            });
        }
        let idx = match index {
            Some(index) => {
                resolve_index(index, len).ok_or(CowError::IndexOutOfBounds { index, len })?
            }
            None => len - 1,
        };
        Ok(items.remove(idx))
    }
}
