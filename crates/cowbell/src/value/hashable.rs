//! Hashable wrapper for Value to enable use as map keys and set elements

use std::fmt;
use std::hash::{Hash, Hasher};
use std::rc::Rc;

use crate::error::{type_name, CowError, Result};

use super::Value;

/// A value restricted to the hashable subset, usable as a mapping key
/// or set element.
///
/// Only booleans, integers, and text are hashable. The constructor
/// enforces this, so a `HashableValue` can always be hashed.
#[derive(Clone)]
pub struct HashableValue(Value);

impl HashableValue {
    /// Wrap a value for use as a key.
    ///
    /// # Errors
    ///
    /// Returns `Unhashable` if the value is not in the hashable subset.
    pub fn new(value: Value) -> Result<Self> {
        Self::with_context(value, "key")
    }

    /// Like [`HashableValue::new`], but names the usage site in the error
    /// (e.g. "mapping key", "set element").
    pub fn with_context(value: Value, context: &'static str) -> Result<Self> {
        if Self::is_hashable(&value) {
            Ok(HashableValue(value))
        } else {
            Err(CowError::Unhashable {
                context,
                got: type_name(&value),
            })
        }
    }

    /// Check if a value can be hashed.
    pub fn is_hashable(value: &Value) -> bool {
        matches!(value, Value::Bool(_) | Value::Int(_) | Value::Str(_))
    }

    /// Borrow the underlying value.
    pub fn value(&self) -> &Value {
        &self.0
    }

    /// Unwrap into the underlying value.
    pub fn into_value(self) -> Value {
        self.0
    }
}

impl Hash for HashableValue {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // Hash the discriminant first so 1, true, and "1" never collide
        std::mem::discriminant(&self.0).hash(state);

        match &self.0 {
            Value::Bool(b) => b.hash(state),
            Value::Int(n) => n.hash(state),
            Value::Str(s) => s.hash(state),
            // Ruled out by the constructor
            _ => unreachable!("HashableValue holds a non-hashable value"),
        }
    }
}

impl PartialEq for HashableValue {
    fn eq(&self, other: &Self) -> bool {
        // Delegate to Value's PartialEq
        self.0 == other.0
    }
}

impl Eq for HashableValue {}

impl fmt::Debug for HashableValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl fmt::Display for HashableValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

// Infallible conversions for the types that are always hashable

impl From<bool> for HashableValue {
    fn from(b: bool) -> Self {
        HashableValue(Value::Bool(b))
    }
}

impl From<i64> for HashableValue {
    fn from(n: i64) -> Self {
        HashableValue(Value::Int(n))
    }
}

impl From<i32> for HashableValue {
    fn from(n: i32) -> Self {
        HashableValue(Value::Int(n as i64))
    }
}

impl From<&str> for HashableValue {
    fn from(s: &str) -> Self {
        HashableValue(Value::Str(Rc::new(s.to_string())))
    }
}

impl From<String> for HashableValue {
    fn from(s: String) -> Self {
        HashableValue(Value::Str(Rc::new(s)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_hashable() {
        assert!(HashableValue::is_hashable(&Value::Int(1)));
        assert!(HashableValue::is_hashable(&Value::Bool(true)));
        assert!(HashableValue::is_hashable(&Value::str("a")));
        assert!(!HashableValue::is_hashable(&Value::Float(1.5)));
        assert!(!HashableValue::is_hashable(&Value::list(vec![])));
    }

    #[test]
    fn test_new_rejects_containers() {
        let result = HashableValue::new(Value::list(vec![Value::Int(1)]));
        assert!(matches!(result, Err(CowError::Unhashable { .. })));
    }

    #[test]
    fn test_equality_delegates_to_value() {
        assert_eq!(HashableValue::from(1i64), HashableValue::from(1i64));
        assert_ne!(HashableValue::from(1i64), HashableValue::from(2i64));
        assert_ne!(HashableValue::from(1i64), HashableValue::from(true));
    }

    #[test]
    fn test_hash_distinguishes_discriminants() {
        use std::collections::hash_map::DefaultHasher;

        fn hash_of(v: &HashableValue) -> u64 {
            let mut hasher = DefaultHasher::new();
            v.hash(&mut hasher);
            hasher.finish()
        }

        let int_one = HashableValue::from(1i64);
        let bool_true = HashableValue::from(true);
        assert_ne!(hash_of(&int_one), hash_of(&bool_true));
    }
}
