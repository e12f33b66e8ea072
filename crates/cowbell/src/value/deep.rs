//! Deep duplication of values and the containers they live in

use std::cell::RefCell;
use std::rc::Rc;

use indexmap::{IndexMap, IndexSet};

use super::{HashableValue, Value};

/// Full recursive duplication.
///
/// `Value::clone` aliases container handles; `deep_clone` produces a
/// structurally equal value with fresh cells at every level, so nothing
/// in the result is shared with the source. This is what the
/// copy-on-write transition calls exactly once per wrapper.
pub trait DeepClone {
    /// Produce a duplicate sharing no mutable state with `self`.
    fn deep_clone(&self) -> Self;
}

impl DeepClone for Value {
    fn deep_clone(&self) -> Self {
        match self {
            // Scalars are plain copies
            Value::Bool(b) => Value::Bool(*b),
            Value::Int(n) => Value::Int(*n),
            Value::Float(n) => Value::Float(*n),
            // Text is immutable, so sharing the handle is unobservable
            Value::Str(s) => Value::Str(Rc::clone(s)),
            Value::List(cell) => {
                Value::List(Rc::new(RefCell::new(cell.borrow().deep_clone())))
            }
            Value::Map(cell) => Value::Map(Rc::new(RefCell::new(cell.borrow().deep_clone()))),
            Value::Set(cell) => Value::Set(Rc::new(RefCell::new(cell.borrow().deep_clone()))),
        }
    }
}

impl DeepClone for HashableValue {
    fn deep_clone(&self) -> Self {
        // Hashable values are scalars or text; no mutable state inside
        self.clone()
    }
}

impl DeepClone for String {
    fn deep_clone(&self) -> Self {
        self.clone()
    }
}

impl DeepClone for Vec<Value> {
    fn deep_clone(&self) -> Self {
        self.iter().map(DeepClone::deep_clone).collect()
    }
}

impl DeepClone for IndexMap<HashableValue, Value> {
    fn deep_clone(&self) -> Self {
        self.iter()
            .map(|(k, v)| (k.deep_clone(), v.deep_clone()))
            .collect()
    }
}

impl DeepClone for IndexSet<HashableValue> {
    fn deep_clone(&self) -> Self {
        self.iter().map(DeepClone::deep_clone).collect()
    }
}
