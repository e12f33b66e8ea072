//! Text wrapper tests: immutable text behind the copy-on-write surface

use pretty_assertions::assert_eq;

use cowbell::{wrap, CowError, CowText, CowValue, Value};

/// Wrap "hello" and keep the original.
fn setup() -> (Value, CowText) {
    let original = Value::str("hello");
    let cow = wrap(original.clone()).unwrap();
    match cow {
        CowValue::Text(text) => (original, text),
        _ => panic!("Expected text wrapper"),
    }
}

#[test]
fn test_initialization() {
    let (original, text) = setup();
    assert_eq!(text.effective_view(), Value::str("hello"));
    assert_eq!(original, Value::str("hello"));
}

#[test]
fn test_getitem_does_not_trigger_cow() {
    let (original, text) = setup();
    assert_eq!(text.get(1).unwrap(), Value::str("e"));
    // No copy occurred
    assert!(text.is_shared());
    assert!(text.effective_view().ptr_eq(&original));
}

#[test]
fn test_slicing_does_not_trigger_cow() {
    let (original, text) = setup();
    assert_eq!(text.slice(None, Some(3)), Value::str("hel"));
    assert!(text.is_shared());
    assert!(text.effective_view().ptr_eq(&original));
}

#[test]
fn test_len_functionality() {
    let (_, text) = setup();
    assert_eq!(text.len(), 5);
}

#[test]
fn test_iteration() {
    let (_, text) = setup();
    let joined: String = text
        .iter()
        .filter_map(|c| c.as_str().map(str::to_string))
        .collect();
    assert_eq!(joined, "hello");
}

#[test]
fn test_contains() {
    let (_, text) = setup();
    assert!(text.contains("ell"));
    assert!(!text.contains("xyz"));
}

#[test]
fn test_upper_does_not_modify_original() {
    let (_, text) = setup();
    assert_eq!(text.to_uppercase(), Value::str("HELLO"));
    assert_eq!(text.effective_view(), Value::str("hello"));
    assert!(text.is_shared());
}

#[test]
fn test_replace_does_not_modify_original() {
    let (_, text) = setup();
    assert_eq!(text.replace("h", "H"), Value::str("Hello"));
    assert_eq!(text.effective_view(), Value::str("hello"));
    assert!(text.is_shared());
}

#[test]
fn test_assignment_not_allowed() {
    let (original, mut text) = setup();
    let result = text.set(0, Value::str("H"));
    assert!(matches!(result, Err(CowError::ImmutableWrite { .. })));
    // The copy transition fired, but no content changed anywhere
    assert!(!text.is_shared());
    assert_eq!(text.effective_view(), Value::str("hello"));
    assert_eq!(original, Value::str("hello"));
}

#[test]
fn test_deletion_not_allowed() {
    let (_, mut text) = setup();
    let result = text.remove(0);
    assert!(matches!(result, Err(CowError::ImmutableWrite { .. })));
    assert_eq!(text.effective_view(), Value::str("hello"));
}

#[test]
fn test_read_after_failed_write() {
    // Scenario: assignment fails, then position 1 still reads "e"
    let (_, mut text) = setup();
    assert!(text.set(0, Value::str("H")).is_err());
    assert_eq!(text.get(1).unwrap(), Value::str("e"));
}

#[test]
fn test_concatenation_creates_new_wrapper() {
    let (_, text) = setup();
    let longer = match text.effective_view() {
        Value::Str(s) => Value::str(format!("{} world", s)),
        _ => panic!("Expected text"),
    };
    let cow = wrap(longer).unwrap();
    assert_eq!(cow, Value::str("hello world"));
    assert_eq!(text.effective_view(), Value::str("hello"));
}
