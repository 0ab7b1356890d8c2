//! Contract tests for ListPrototype

use builtins::ListPrototype;
use core_types::{ErrorKind, RuntimeError, Value};

fn numbers() -> Value {
    Value::list(vec![Value::int(1), Value::int(2), Value::int(3), Value::int(4)])
}

#[test]
fn test_list_length() {
    assert_eq!(ListPrototype::length(&numbers()).unwrap(), 4);
    assert_eq!(ListPrototype::length(&Value::list(vec![])).unwrap(), 0);
}

#[test]
fn test_list_get() {
    let a = numbers();
    let result = ListPrototype::get(&a, &Value::int(2));
    assert_eq!(result.unwrap(), Value::int(3));
}

#[test]
fn test_list_get_at_length_raises() {
    let a = numbers();
    let err = ListPrototype::get(&a, &Value::int(4)).unwrap_err();
    assert!(matches!(
        err,
        RuntimeError::IndexOutOfRange {
            index: 4,
            length: 4,
            ..
        }
    ));
}

#[test]
fn test_list_get_negative_raises() {
    let err = ListPrototype::get(&numbers(), &Value::int(-1)).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::IndexError);
}

#[test]
fn test_list_get_failure_is_recoverable() {
    let a = numbers();
    assert!(ListPrototype::get(&a, &Value::int(5)).is_err());
    assert_eq!(a.repr(), "[1, 2, 3, 4]");
    assert_eq!(ListPrototype::get(&a, &Value::int(0)).unwrap(), Value::int(1));
}

#[test]
fn test_list_set() {
    let a = numbers();
    ListPrototype::set(&a, &Value::int(1), Value::text("two")).unwrap();
    assert_eq!(a.repr(), "[1, 'two', 3, 4]");
    assert!(ListPrototype::set(&a, &Value::int(4), Value::None).is_err());
}

#[test]
fn test_list_append() {
    let a = Value::list(vec![]);
    ListPrototype::append(&a, Value::int(1)).unwrap();
    ListPrototype::append(&a, Value::int(2)).unwrap();
    assert_eq!(a.repr(), "[1, 2]");
}

#[test]
fn test_list_insert() {
    let a = Value::list(vec![Value::int(1), Value::int(3)]);
    ListPrototype::insert(&a, &Value::int(1), Value::int(2)).unwrap();
    assert_eq!(a.repr(), "[1, 2, 3]");
}

#[test]
fn test_list_pop_empty_raises() {
    let a = Value::list(vec![]);
    let err = ListPrototype::pop(&a, None).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::IndexError);
}

#[test]
fn test_list_clear() {
    let b = Value::list(vec![Value::text("a"), Value::text("b"), Value::text("c")]);
    let alias = b.clone();
    ListPrototype::clear(&b).unwrap();
    assert_eq!(ListPrototype::length(&b).unwrap(), 0);
    assert!(alias.is_same(&b));
    assert_eq!(alias.repr(), "[]");
}

#[test]
fn test_list_clear_empty_is_noop() {
    let b = Value::list(vec![]);
    assert!(ListPrototype::clear(&b).is_ok());
    assert_eq!(ListPrototype::length(&b).unwrap(), 0);
}

#[test]
fn test_list_resize() {
    let a = numbers();
    ListPrototype::resize(&a, 2).unwrap();
    assert_eq!(a.repr(), "[1, 2]");
    ListPrototype::resize(&a, 3).unwrap();
    assert_eq!(a.repr(), "[1, 2, None]");
}

#[test]
fn test_list_iterate_is_restartable() {
    let a = numbers();
    let first: Vec<Value> = ListPrototype::iterate(&a).unwrap().collect();
    ListPrototype::append(&a, Value::int(5)).unwrap();
    let second: Vec<Value> = ListPrototype::iterate(&a).unwrap().collect();
    assert_eq!(first.len(), 4);
    assert_eq!(second.len(), 5);
    assert_eq!(second[4], Value::int(5));
}

#[test]
fn test_list_iterate_after_clear_yields_nothing() {
    let b = Value::list(vec![Value::text("a")]);
    ListPrototype::clear(&b).unwrap();
    assert_eq!(ListPrototype::iterate(&b).unwrap().count(), 0);
}

#[test]
fn test_non_list_receiver_is_type_error() {
    let err = ListPrototype::append(&Value::text("abc"), Value::None).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::TypeError);
}
