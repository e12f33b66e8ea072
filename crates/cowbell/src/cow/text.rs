//! Text-kind wrapper

use std::rc::Rc;

use crate::error::{CowError, Result};
use crate::value::Value;

use super::resolve_index;

/// Copy-on-write wrapper around immutable text.
///
/// Text never mutates in place, so the write entry points always fail
/// with `ImmutableWrite` — but only after triggering the copy
/// transition, matching the order in which the mutation dispatcher
/// works for every kind: copy first, then attempt the write.
///
/// No cell is needed here: the underlying data cannot change, so the
/// shared and private sides are plain handles.
pub struct CowText {
    shared: Rc<String>,
    private: Option<Rc<String>>,
}

impl CowText {
    pub(crate) fn new(shared: Rc<String>) -> Self {
        CowText {
            shared,
            private: None,
        }
    }

    fn effective(&self) -> &Rc<String> {
        self.private.as_ref().unwrap_or(&self.shared)
    }

    /// Number of characters in the effective text.
    pub fn len(&self) -> usize {
        self.effective().chars().count()
    }

    /// True if the effective text is empty.
    pub fn is_empty(&self) -> bool {
        self.effective().is_empty()
    }

    /// True while the copy transition has not fired.
    pub fn is_shared(&self) -> bool {
        self.private.is_none()
    }

    /// Trigger the copy transition. Idempotent; the content of the
    /// private copy is identical to the shared text by construction.
    pub fn copy_on_write(&mut self) {
        let shared = &self.shared;
        self.private
            .get_or_insert_with(|| Rc::new(shared.as_str().to_owned()));
    }

    /// The effective data as a value handle. While shared, this is the
    /// same handle as the wrapped input.
    pub fn effective_view(&self) -> Value {
        Value::Str(Rc::clone(self.effective()))
    }

    /// Read the character at `index` (negative counts from the end) as
    /// a one-character text value.
    ///
    /// # Errors
    ///
    /// Returns `IndexOutOfBounds` if the index is out of range.
    pub fn get(&self, index: i64) -> Result<Value> {
        let text = self.effective();
        let len = self.len();
        let idx = resolve_index(index, len).ok_or(CowError::IndexOutOfBounds { index, len })?;
        match text.chars().nth(idx) {
            Some(c) => Ok(Value::str(c.to_string())),
            None => Err(CowError::IndexOutOfBounds { index, len }),
        }
    }

    /// Character-range slice with clamping: out-of-range bounds are
    /// pulled into range, negative bounds count from the end, and an
    /// empty range yields empty text. Returns a raw text value.
    pub fn slice(&self, start: Option<i64>, end: Option<i64>) -> Value {
        let chars: Vec<char> = self.effective().chars().collect();
        let len = chars.len() as i64;

        let clamp = |bound: i64| -> usize {
            let resolved = if bound < 0 { len + bound } else { bound };
            resolved.clamp(0, len) as usize
        };
        let from = start.map_or(0, clamp);
        let to = end.map_or(chars.len(), clamp);

        if from >= to {
            return Value::str("");
        }
        Value::str(chars[from..to].iter().collect::<String>())
    }

    /// Substring membership test.
    pub fn contains(&self, needle: &str) -> bool {
        self.effective().contains(needle)
    }

    /// Iterate over the characters as one-character text values.
    /// Restartable; each call re-derives from the effective data.
    pub fn iter(&self) -> std::vec::IntoIter<Value> {
        self.effective()
            .chars()
            .map(|c| Value::str(c.to_string()))
            .collect::<Vec<_>>()
            .into_iter()
    }

    /// Uppercased copy as a raw text value. The wrapper is untouched.
    pub fn to_uppercase(&self) -> Value {
        Value::str(self.effective().to_uppercase())
    }

    /// Copy with every occurrence of `from` replaced by `to`, as a raw
    /// text value. The wrapper is untouched.
    pub fn replace(&self, from: &str, to: &str) -> Value {
        Value::str(self.effective().replace(from, to))
    }

    /// Attempt an indexed assignment.
    ///
    /// # Errors
    ///
    /// Always fails with `ImmutableWrite`; the copy transition fires
    /// first and is not rolled back.
    pub fn set(&mut self, _index: i64, _value: Value) -> Result<()> {
        self.copy_on_write();
        Err(CowError::ImmutableWrite {
            operation: "assignment",
        })
    }

    /// Attempt an indexed deletion.
    ///
    /// # Errors
    ///
    /// Always fails with `ImmutableWrite`; the copy transition fires
    /// first and is not rolled back.
    pub fn remove(&mut self, _index: i64) -> Result<Value> {
        self.copy_on_write();
        Err(CowError::ImmutableWrite {
            operation: "deletion",
        })
    }
}
