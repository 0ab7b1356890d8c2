//! Global built-in functions: `repr`, `str` and `len`

use core_types::{RuntimeError, RuntimeResult, Value};

/// Global built-in functions
pub struct BuiltinFunctions;

impl BuiltinFunctions {
    /// repr(value)
    ///
    /// Never fails; always returns a text value.
    pub fn repr(value: &Value) -> Value {
        Value::text(value.repr())
    }

    /// str(value)
    pub fn str(value: &Value) -> Value {
        match value {
            Value::Text(_) => value.clone(),
            other => Value::text(other.to_string()),
        }
    }

    /// len(value)
    ///
    /// Text length counts code points, not bytes.
    pub fn len(value: &Value) -> RuntimeResult<Value> {
        let length = match value {
            Value::Bytes(data) => data.len(),
            Value::Text(s) => s.chars().count(),
            Value::List(list) => list.len(),
            other => {
                return Err(RuntimeError::WrongReceiver {
                    operation: "len",
                    expected: "sized",
                    found: other.type_name(),
                })
            }
        };
        Ok(Value::int(length))
    }
}
