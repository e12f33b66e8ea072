//! Error types for copy-on-write operations

use thiserror::Error;

use crate::value::{Kind, Value};

/// Main error type for cowbell operations.
#[derive(Error, Debug)]
pub enum CowError {
    /// The value handed to the construction gate is not a wrappable kind
    #[error("cannot wrap {got}: only sequence, mapping, set, and text values are supported")]
    UnsupportedKind {
        /// Type name of the rejected value
        got: &'static str,
    },

    /// In-place mutation attempted on immutable text
    #[error("text does not support in-place {operation}")]
    ImmutableWrite {
        /// The mutating operation that was attempted
        operation: &'static str,
    },

    /// Index outside the bounds of the effective container
    #[error("index {index} out of bounds for length {len}")]
    IndexOutOfBounds {
        /// The requested index (may be negative)
        index: i64,
        /// Length of the container at the time of the call
        len: usize,
    },

    /// Mapping key not present
    #[error("key not found: {key}")]
    KeyNotFound {
        /// Debug rendering of the missing key
        key: String,
    },

    /// Set element not present
    #[error("element not found: {element}")]
    MissingElement {
        /// Debug rendering of the missing element
        element: String,
    },

    /// Pop attempted on an empty container
    #[error("cannot pop from an empty {kind}")]
    PopFromEmpty {
        /// Kind of the empty container
        kind: Kind,
    },

    /// A non-hashable value was used where a hash key is required
    #[error("{context} must be hashable (bool, int, or text), got {got}")]
    Unhashable {
        /// Where the value was used (e.g. "mapping key", "set element")
        context: &'static str,
        /// Type name of the offending value
        got: &'static str,
    },
}

/// Result type alias for cowbell operations.
pub type Result<T> = std::result::Result<T, CowError>;

/// Get a human-readable type name for a value.
pub fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Bool(_) => "bool",
        Value::Int(_) => "int",
        Value::Float(_) => "float",
        Value::Str(_) => "text",
        Value::List(_) => "sequence",
        Value::Map(_) => "mapping",
        Value::Set(_) => "set",
    }
}
