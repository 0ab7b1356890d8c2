//! Unit tests for the Value enum and its operators

use core_types::Value;

#[cfg(test)]
mod value_creation_tests {
    use super::*;

    #[test]
    fn test_value_none() {
        assert!(matches!(Value::None, Value::None));
    }

    #[test]
    fn test_value_bool() {
        assert!(matches!(Value::bool(true), Value::Bool(true)));
        assert!(matches!(Value::from(false), Value::Bool(false)));
    }

    #[test]
    fn test_value_int_from_i64() {
        let val = Value::from(-100i64);
        assert_eq!(val.as_i64(), Some(-100));
    }

    #[test]
    fn test_value_bytes() {
        let val = Value::bytes(b"omg");
        assert_eq!(val.as_bytes(), Some(&b"omg"[..]));
    }

    #[test]
    fn test_value_text() {
        let val = Value::from("omg");
        assert_eq!(val.as_text(), Some("omg"));
    }

    #[test]
    fn test_value_list() {
        let val = Value::from(vec![Value::int(1), Value::None]);
        assert_eq!(val.as_list().map(|l| l.len()), Some(2));
    }
}

#[cfg(test)]
mod type_name_tests {
    use super::*;

    #[test]
    fn test_type_names() {
        assert_eq!(Value::None.type_name(), "NoneType");
        assert_eq!(Value::Bool(true).type_name(), "bool");
        assert_eq!(Value::int(1).type_name(), "int");
        assert_eq!(Value::bytes(b"").type_name(), "bytes");
        assert_eq!(Value::text("").type_name(), "str");
        assert_eq!(Value::list(vec![]).type_name(), "list");
    }
}

#[cfg(test)]
mod operator_tests {
    use super::*;

    #[test]
    fn test_not_true_is_false() {
        assert_eq!(Value::Bool(true).not(), Value::Bool(false));
    }

    #[test]
    fn test_five_plus_eleven() {
        let sum = Value::int(5).add(&Value::int(11)).unwrap();
        assert_eq!(sum, Value::int(16));
    }

    #[test]
    fn test_bytes_concat() {
        let joined = Value::bytes(b"omg").add(&Value::bytes(b"hax")).unwrap();
        assert_eq!(joined, Value::bytes(b"omghax"));
    }

    #[test]
    fn test_text_concat() {
        let joined = Value::text("omg").add(&Value::text("hax")).unwrap();
        assert_eq!(joined, Value::text("omghax"));
    }

    #[test]
    fn test_concat_shares_nothing_with_operands() {
        let left = Value::text("omg");
        let joined = left.add(&Value::text("")).unwrap();
        assert_eq!(joined, left);
        assert!(!joined.is_same(&left));
    }

    #[test]
    fn test_equals_across_kinds_is_false() {
        assert!(!Value::None.equals(&Value::Bool(false)));
        assert!(!Value::bytes(b"a").equals(&Value::text("a")));
    }

    #[test]
    fn test_list_contains_by_equality() {
        let list = Value::list(vec![Value::text("a"), Value::int(1)]);
        assert!(list.contains(&Value::Bool(true)).unwrap());
        assert!(!list.contains(&Value::text("b")).unwrap());
    }
}

#[cfg(test)]
mod display_tests {
    use super::*;

    #[test]
    fn test_display_text_is_unquoted() {
        assert_eq!(Value::text("b").to_string(), "b");
    }

    #[test]
    fn test_display_list_uses_repr_for_elements() {
        let list = Value::list(vec![Value::text("a"), Value::bytes(b"b")]);
        assert_eq!(list.to_string(), "['a', b'b']");
    }
}
