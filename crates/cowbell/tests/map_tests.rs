//! Mapping wrapper tests: copy-on-write behavior of dict-like values

use pretty_assertions::assert_eq;

use cowbell::{wrap, CowMap, CowValue, HashableValue, Value};

fn abc() -> Value {
    Value::map_of([
        (HashableValue::from("a"), Value::Int(1)),
        (HashableValue::from("b"), Value::Int(2)),
        (HashableValue::from("c"), Value::Int(3)),
    ])
}

/// Wrap {"a": 1, "b": 2, "c": 3} and keep the original.
fn setup() -> (Value, CowMap) {
    let original = abc();
    let cow = wrap(original.clone()).unwrap();
    match cow {
        CowValue::Map(map) => (original, map),
        _ => panic!("Expected mapping wrapper"),
    }
}

#[test]
fn test_initialization() {
    let (original, map) = setup();
    assert_eq!(map.effective_view(), abc());
    assert_eq!(original, abc());
}

#[test]
fn test_setitem_triggers_cow() {
    let (original, mut map) = setup();
    map.insert(HashableValue::from("a"), Value::Int(42));
    assert_eq!(
        map.effective_view(),
        Value::map_of([
            (HashableValue::from("a"), Value::Int(42)),
            (HashableValue::from("b"), Value::Int(2)),
            (HashableValue::from("c"), Value::Int(3)),
        ])
    );
    assert_eq!(original, abc());
}

#[test]
fn test_getitem_does_not_trigger_cow() {
    let (original, map) = setup();
    assert_eq!(map.get(&HashableValue::from("b")), Some(Value::Int(2)));
    assert_eq!(map.effective_view(), abc());
    // No copy occurred
    assert!(map.is_shared());
    assert!(map.effective_view().ptr_eq(&original));
}

#[test]
fn test_delitem_triggers_cow() {
    let (original, mut map) = setup();
    let removed = map.remove(&HashableValue::from("b")).unwrap();
    assert_eq!(removed, Value::Int(2));
    assert_eq!(
        map.effective_view(),
        Value::map_of([
            (HashableValue::from("a"), Value::Int(1)),
            (HashableValue::from("c"), Value::Int(3)),
        ])
    );
    assert_eq!(original, abc());
}

#[test]
fn test_len_functionality() {
    let (_, mut map) = setup();
    assert_eq!(map.len(), 3);
    map.insert(HashableValue::from("d"), Value::Int(4));
    assert_eq!(map.len(), 4);
}

#[test]
fn test_iteration_yields_keys_in_insertion_order() {
    let (_, map) = setup();
    let keys: Vec<HashableValue> = map.keys().collect();
    assert_eq!(
        keys,
        vec![
            HashableValue::from("a"),
            HashableValue::from("b"),
            HashableValue::from("c"),
        ]
    );
}

#[test]
fn test_contains() {
    let (_, map) = setup();
    assert!(map.contains_key(&HashableValue::from("b")));
    assert!(!map.contains_key(&HashableValue::from("z")));
}

#[test]
fn test_clear_triggers_cow() {
    let (original, mut map) = setup();
    map.clear();
    assert_eq!(map.effective_view(), Value::map_of([]));
    assert_eq!(original, abc());
}

#[test]
fn test_update_triggers_cow() {
    let (original, mut map) = setup();
    map.update([
        (HashableValue::from("d"), Value::Int(4)),
        (HashableValue::from("e"), Value::Int(5)),
    ]);
    assert_eq!(
        map.effective_view(),
        Value::map_of([
            (HashableValue::from("a"), Value::Int(1)),
            (HashableValue::from("b"), Value::Int(2)),
            (HashableValue::from("c"), Value::Int(3)),
            (HashableValue::from("d"), Value::Int(4)),
            (HashableValue::from("e"), Value::Int(5)),
        ])
    );
    assert_eq!(original, abc());
}

#[test]
fn test_pop_triggers_cow() {
    let (original, mut map) = setup();
    let value = map.pop(&HashableValue::from("b"), None).unwrap();
    assert_eq!(value, Value::Int(2));
    assert_eq!(
        map.effective_view(),
        Value::map_of([
            (HashableValue::from("a"), Value::Int(1)),
            (HashableValue::from("c"), Value::Int(3)),
        ])
    );
    assert_eq!(original, abc());
}

#[test]
fn test_popitem_triggers_cow() {
    let (original, mut map) = setup();
    let (key, _value) = map.popitem().unwrap();
    assert!(!map.contains_key(&key));
    assert_eq!(original, abc());
}
