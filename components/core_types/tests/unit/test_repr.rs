//! Unit tests for repr

use core_types::{repr, Value};

#[test]
fn test_repr_none() {
    assert_eq!(repr(&Value::None), "None");
}

#[test]
fn test_repr_true() {
    assert_eq!(repr(&Value::Bool(true)), "True");
}

#[test]
fn test_repr_not_true() {
    assert_eq!(repr(&Value::Bool(true).not()), "False");
}

#[test]
fn test_repr_int() {
    assert_eq!(repr(&Value::int(5)), "5");
    assert_eq!(repr(&Value::int(-7)), "-7");
}

#[test]
fn test_repr_int_sum() {
    let sum = Value::int(5).add(&Value::int(11)).unwrap();
    assert_eq!(repr(&sum), "16");
}

#[test]
fn test_repr_bytes() {
    assert_eq!(repr(&Value::bytes(b"omg")), "b'omg'");
}

#[test]
fn test_repr_bytes_concat() {
    let joined = Value::bytes(b"omg").add(&Value::bytes(b"hax")).unwrap();
    assert_eq!(repr(&joined), "b'omghax'");
}

#[test]
fn test_repr_text() {
    assert_eq!(repr(&Value::text("omg")), "'omg'");
}

#[test]
fn test_repr_text_concat() {
    let joined = Value::text("omg").add(&Value::text("hax")).unwrap();
    assert_eq!(repr(&joined), "'omghax'");
}

#[test]
fn test_repr_empty_sequences() {
    assert_eq!(repr(&Value::bytes(b"")), "b''");
    assert_eq!(repr(&Value::text("")), "''");
    assert_eq!(repr(&Value::list(vec![])), "[]");
}

#[test]
fn test_repr_text_escapes() {
    assert_eq!(repr(&Value::text("tab\there")), "'tab\\there'");
    assert_eq!(repr(&Value::text("a\\b")), "'a\\\\b'");
    assert_eq!(repr(&Value::text("\r\n")), "'\\r\\n'");
}

#[test]
fn test_repr_list_of_mixed_kinds() {
    let list = Value::list(vec![
        Value::None,
        Value::Bool(false),
        Value::int(3),
        Value::bytes(b"x"),
        Value::text("y"),
    ]);
    assert_eq!(repr(&list), "[None, False, 3, b'x', 'y']");
}

#[test]
fn test_repr_reflects_list_mutation() {
    let list = Value::list(vec![Value::int(1)]);
    assert_eq!(repr(&list), "[1]");
    list.as_list().unwrap().clear();
    assert_eq!(repr(&list), "[]");
}
