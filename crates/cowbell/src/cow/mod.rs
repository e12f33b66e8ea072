//! Copy-on-write wrappers, one per container kind
//!
//! [`wrap`] is the single entry point: it accepts a container value,
//! fixes its kind, and returns a [`CowValue`] in the shared state. Reads
//! go straight to the effective data; the first mutation deep-copies the
//! container exactly once and every later mutation works on that private
//! copy, so the original holder never observes a change.
//!
//! Kind-correctness is enforced by the type system: each kind has its
//! own wrapper struct exposing only the mutators valid for it, reached
//! by matching on `CowValue` or through the `as_*` accessors. Calling a
//! set mutator on a sequence is not a runtime error here — it does not
//! compile.

mod core;
mod map;
mod seq;
mod set;
mod text;

pub use map::CowMap;
pub use seq::CowSeq;
pub use set::CowSet;
pub use text::CowText;

use std::fmt;

use crate::error::{type_name, CowError, Result};
use crate::value::{HashableValue, Kind, Value};

/// Resolve a possibly-negative index against a length.
/// Negative indices count from the end; `None` means out of range.
pub(crate) fn resolve_index(index: i64, len: usize) -> Option<usize> {
    let len = len as i64;
    let resolved = if index < 0 { len + index } else { index };
    if (0..len).contains(&resolved) {
        Some(resolved as usize)
    } else {
        None
    }
}

/// Wrap a container value for copy-on-write access.
///
/// The value's handle is captured, not copied: until the first mutation
/// the wrapper reads the very same data the caller still holds.
///
/// # Errors
///
/// Returns `UnsupportedKind` for scalar values, which have no container
/// kind to wrap.
pub fn wrap(value: Value) -> Result<CowValue> {
    CowValue::wrap(value)
}

/// A copy-on-write wrapper of one of the four container kinds.
///
/// Match on the variant (or use the `as_*` accessors) to reach the
/// kind-specific mutators; the shared read surface lives on this enum.
pub enum CowValue {
    /// Sequence wrapper
    Seq(CowSeq),
    /// Mapping wrapper
    Map(CowMap),
    /// Set wrapper
    Set(CowSet),
    /// Text wrapper
    Text(CowText),
}

impl CowValue {
    /// Wrap a container value; see the module docs and [`wrap`].
    ///
    /// # Errors
    ///
    /// Returns `UnsupportedKind` for scalar values.
    pub fn wrap(value: Value) -> Result<Self> {
        match value {
            Value::List(cell) => Ok(CowValue::Seq(CowSeq::new(cell))),
            Value::Map(cell) => Ok(CowValue::Map(CowMap::new(cell))),
            Value::Set(cell) => Ok(CowValue::Set(CowSet::new(cell))),
            Value::Str(handle) => Ok(CowValue::Text(CowText::new(handle))),
            other => Err(CowError::UnsupportedKind {
                got: type_name(&other),
            }),
        }
    }

    /// The kind fixed at construction.
    pub fn kind(&self) -> Kind {
        match self {
            CowValue::Seq(_) => Kind::Sequence,
            CowValue::Map(_) => Kind::Mapping,
            CowValue::Set(_) => Kind::Set,
            CowValue::Text(_) => Kind::Text,
        }
    }

    /// Length of the effective data (elements, entries, or characters).
    pub fn len(&self) -> usize {
        match self {
            CowValue::Seq(seq) => seq.len(),
            CowValue::Map(map) => map.len(),
            CowValue::Set(set) => set.len(),
            CowValue::Text(text) => text.len(),
        }
    }

    /// True if the effective data is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// True while no mutation has occurred and reads still alias the
    /// wrapped input.
    pub fn is_shared(&self) -> bool {
        match self {
            CowValue::Seq(seq) => seq.is_shared(),
            CowValue::Map(map) => map.is_shared(),
            CowValue::Set(set) => set.is_shared(),
            CowValue::Text(text) => text.is_shared(),
        }
    }

    /// Force the copy transition without mutating. Idempotent.
    pub fn copy_on_write(&mut self) {
        match self {
            CowValue::Seq(seq) => seq.copy_on_write(),
            CowValue::Map(map) => map.copy_on_write(),
            CowValue::Set(set) => set.copy_on_write(),
            CowValue::Text(text) => text.copy_on_write(),
        }
    }

    /// The effective data as a value handle: the original input while
    /// shared, the private copy afterwards. Compare with
    /// [`Value::ptr_eq`] for identity checks.
    pub fn effective_view(&self) -> Value {
        match self {
            CowValue::Seq(seq) => seq.effective_view(),
            CowValue::Map(map) => map.effective_view(),
            CowValue::Set(set) => set.effective_view(),
            CowValue::Text(text) => text.effective_view(),
        }
    }

    /// Membership test: element of a sequence, key of a mapping,
    /// element of a set, or substring of text. Values that cannot
    /// occur in the container (unhashable keys, non-text needles) are
    /// simply not members.
    pub fn contains(&self, needle: &Value) -> bool {
        match self {
            CowValue::Seq(seq) => seq.contains(needle),
            CowValue::Map(map) => HashableValue::new(needle.clone())
                .map(|key| map.contains_key(&key))
                .unwrap_or(false),
            CowValue::Set(set) => HashableValue::new(needle.clone())
                .map(|element| set.contains(&element))
                .unwrap_or(false),
            CowValue::Text(text) => needle
                .as_str()
                .map(|needle| text.contains(needle))
                .unwrap_or(false),
        }
    }

    /// Iterate over the effective data: sequence elements, mapping keys,
    /// set elements, or one-character text values. Each call re-derives
    /// the snapshot, so iteration is restartable and never copies.
    pub fn iter(&self) -> std::vec::IntoIter<Value> {
        match self {
            CowValue::Seq(seq) => seq.iter(),
            CowValue::Map(map) => map
                .keys()
                .map(HashableValue::into_value)
                .collect::<Vec<_>>()
                .into_iter(),
            CowValue::Set(set) => set
                .iter()
                .map(HashableValue::into_value)
                .collect::<Vec<_>>()
                .into_iter(),
            CowValue::Text(text) => text.iter(),
        }
    }

    /// Borrow as a sequence wrapper, if that is this wrapper's kind.
    pub fn as_seq(&self) -> Option<&CowSeq> {
        match self {
            CowValue::Seq(seq) => Some(seq),
            _ => None,
        }
    }

    /// Mutably borrow as a sequence wrapper.
    pub fn as_seq_mut(&mut self) -> Option<&mut CowSeq> {
        match self {
            CowValue::Seq(seq) => Some(seq),
            _ => None,
        }
    }

    /// Borrow as a mapping wrapper, if that is this wrapper's kind.
    pub fn as_map(&self) -> Option<&CowMap> {
        match self {
            CowValue::Map(map) => Some(map),
            _ => None,
        }
    }

    /// Mutably borrow as a mapping wrapper.
    pub fn as_map_mut(&mut self) -> Option<&mut CowMap> {
        match self {
            CowValue::Map(map) => Some(map),
            _ => None,
        }
    }

    /// Borrow as a set wrapper, if that is this wrapper's kind.
    pub fn as_set(&self) -> Option<&CowSet> {
        match self {
            CowValue::Set(set) => Some(set),
            _ => None,
        }
    }

    /// Mutably borrow as a set wrapper.
    pub fn as_set_mut(&mut self) -> Option<&mut CowSet> {
        match self {
            CowValue::Set(set) => Some(set),
            _ => None,
        }
    }

    /// Borrow as a text wrapper, if that is this wrapper's kind.
    pub fn as_text(&self) -> Option<&CowText> {
        match self {
            CowValue::Text(text) => Some(text),
            _ => None,
        }
    }

    /// Mutably borrow as a text wrapper.
    pub fn as_text_mut(&mut self) -> Option<&mut CowText> {
        match self {
            CowValue::Text(text) => Some(text),
            _ => None,
        }
    }
}

impl PartialEq for CowValue {
    fn eq(&self, other: &Self) -> bool {
        self.effective_view() == other.effective_view()
    }
}

impl PartialEq<Value> for CowValue {
    fn eq(&self, other: &Value) -> bool {
        self.effective_view() == *other
    }
}

impl PartialEq<CowValue> for Value {
    fn eq(&self, other: &CowValue) -> bool {
        *self == other.effective_view()
    }
}

impl fmt::Debug for CowValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.effective_view(), f)
    }
}

impl fmt::Display for CowValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.effective_view(), f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_rejects_scalars() {
        for scalar in [Value::Int(1), Value::Bool(true), Value::Float(1.5)] {
            let result = wrap(scalar);
            assert!(matches!(result, Err(CowError::UnsupportedKind { .. })));
        }
    }

    #[test]
    fn test_wrap_fixes_kind() {
        assert_eq!(wrap(Value::list(vec![])).unwrap().kind(), Kind::Sequence);
        assert_eq!(wrap(Value::map_of([])).unwrap().kind(), Kind::Mapping);
        assert_eq!(wrap(Value::set_of([])).unwrap().kind(), Kind::Set);
        assert_eq!(wrap(Value::str("x")).unwrap().kind(), Kind::Text);
    }

    #[test]
    fn test_resolve_index() {
        assert_eq!(resolve_index(0, 3), Some(0));
        assert_eq!(resolve_index(2, 3), Some(2));
        assert_eq!(resolve_index(3, 3), None);
        assert_eq!(resolve_index(-1, 3), Some(2));
        assert_eq!(resolve_index(-3, 3), Some(0));
        assert_eq!(resolve_index(-4, 3), None);
        assert_eq!(resolve_index(0, 0), None);
    }

    #[test]
    fn test_iter_is_restartable() {
        let cow = wrap(Value::list(vec![Value::Int(1), Value::Int(2)])).unwrap();
        let first: Vec<_> = cow.iter().collect();
        let second: Vec<_> = cow.iter().collect();
        assert_eq!(first, second);
        assert!(cow.is_shared());
    }

    #[test]
    fn test_iter_map_yields_keys() {
        let cow = wrap(Value::map_of([
            (HashableValue::from("a"), Value::Int(1)),
            (HashableValue::from("b"), Value::Int(2)),
        ]))
        .unwrap();
        let keys: Vec<_> = cow.iter().collect();
        assert_eq!(keys, vec![Value::str("a"), Value::str("b")]);
    }

    #[test]
    fn test_contains_dispatch() {
        let seq = wrap(Value::list(vec![Value::Int(3)])).unwrap();
        assert!(seq.contains(&Value::Int(3)));
        assert!(!seq.contains(&Value::Int(99)));

        let text = wrap(Value::str("hello")).unwrap();
        assert!(text.contains(&Value::str("ell")));
        // A non-text needle is never a member of text
        assert!(!text.contains(&Value::Int(1)));

        let set = wrap(Value::set_of(vec![HashableValue::from(2i64)])).unwrap();
        assert!(set.contains(&Value::Int(2)));
        // Unhashable needles are simply not members
        assert!(!set.contains(&Value::list(vec![])));
    }

    #[test]
    fn test_equality_against_raw_values() {
        let cow = wrap(Value::list(vec![Value::Int(1)])).unwrap();
        let raw = Value::list(vec![Value::Int(1)]);
        assert_eq!(cow, raw);
        assert_eq!(raw, cow);
    }
}
