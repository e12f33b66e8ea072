//! Dynamic value representation for the copy-on-write wrappers

mod deep;
mod display;
mod hashable;
mod impls;

pub use deep::DeepClone;
pub use hashable::HashableValue;

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use indexmap::{IndexMap, IndexSet};

/// A dynamically-typed runtime value.
///
/// Values are organized into two tiers:
/// - Scalars: stored inline, no allocation
/// - Containers: stored behind a shared handle (`Rc`), so cloning a
///   `Value` aliases the same container rather than duplicating it
///
/// Aliasing is the point: a wrapped container and its original holder
/// see the same data until a write forces a private copy. Use
/// [`DeepClone`] for a full recursive duplication.
///
/// Handles are `Rc`, not `Arc`: the copy-on-write contract is
/// single-threaded and the shared/private transition is not atomic.
#[derive(Clone)]
pub enum Value {
    /// Boolean: `true` or `false`
    Bool(bool),

    /// 64-bit signed integer (the only integer type)
    Int(i64),

    /// 64-bit floating point
    Float(f64),

    /// Immutable text (the `Text` kind)
    Str(Rc<String>),

    /// Mutable sequence of values (the `Sequence` kind)
    List(Rc<RefCell<Vec<Value>>>),

    /// Mutable key/value mapping with insertion order (the `Mapping` kind)
    Map(Rc<RefCell<IndexMap<HashableValue, Value>>>),

    /// Mutable set of hashable values with insertion order (the `Set` kind)
    Set(Rc<RefCell<IndexSet<HashableValue>>>),
}

/// The container category a wrapper is fixed to at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    /// Ordered, index-addressed container (`Value::List`)
    Sequence,
    /// Key/value container (`Value::Map`)
    Mapping,
    /// Unordered-membership container (`Value::Set`)
    Set,
    /// Immutable character data (`Value::Str`)
    Text,
}

impl Kind {
    /// Human-readable kind name, as used in error messages.
    pub fn name(&self) -> &'static str {
        match self {
            Kind::Sequence => "sequence",
            Kind::Mapping => "mapping",
            Kind::Set => "set",
            Kind::Text => "text",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Value {
    /// The wrapper kind this value belongs to, or `None` for scalars,
    /// which cannot be wrapped.
    pub fn kind(&self) -> Option<Kind> {
        match self {
            Value::Str(_) => Some(Kind::Text),
            Value::List(_) => Some(Kind::Sequence),
            Value::Map(_) => Some(Kind::Mapping),
            Value::Set(_) => Some(Kind::Set),
            Value::Bool(_) | Value::Int(_) | Value::Float(_) => None,
        }
    }
}
