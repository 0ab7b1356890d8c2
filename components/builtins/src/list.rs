//! list methods

use core_types::{ListObject, RuntimeError, RuntimeResult, Value};
use num_traits::{Signed, ToPrimitive};

use crate::iterator::ListIterator;

/// Methods of the `list` type, callable on any `Value`.
///
/// Every method first checks that its receiver is a list and raises a
/// type error otherwise.
pub struct ListPrototype;

fn receiver<'a>(value: &'a Value, operation: &'static str) -> RuntimeResult<&'a ListObject> {
    value.as_list().ok_or_else(|| RuntimeError::WrongReceiver {
        operation,
        expected: "list",
        found: value.type_name(),
    })
}

/// Convert an index operand to a machine integer.
///
/// Bools index as 0/1. Integers too large for an `i64` can never be in
/// range, so they become `IndexOutOfRange` against the current length.
fn index_of(list: &ListObject, index: &Value) -> RuntimeResult<i64> {
    let n = match index {
        Value::Bool(b) => return Ok(i64::from(*b)),
        Value::Int(n) => n,
        other => {
            return Err(RuntimeError::WrongReceiver {
                operation: "list index",
                expected: "int",
                found: other.type_name(),
            })
        }
    };
    n.to_i64().ok_or_else(|| {
        let saturated = n
            .to_i128()
            .unwrap_or(if n.is_negative() { i128::MIN } else { i128::MAX });
        RuntimeError::index_out_of_range("list", saturated, list.len())
    })
}

impl ListPrototype {
    /// len(list)
    pub fn length(list: &Value) -> RuntimeResult<usize> {
        Ok(receiver(list, "len")?.len())
    }

    /// list[index]
    pub fn get(list: &Value, index: &Value) -> RuntimeResult<Value> {
        let storage = receiver(list, "__getitem__")?;
        storage.get(index_of(storage, index)?)
    }

    /// list[index] = value
    pub fn set(list: &Value, index: &Value, value: Value) -> RuntimeResult<()> {
        let storage = receiver(list, "__setitem__")?;
        storage.set(index_of(storage, index)?, value)
    }

    /// list.append(value)
    pub fn append(list: &Value, value: Value) -> RuntimeResult<()> {
        receiver(list, "append")?.append(value);
        Ok(())
    }

    /// list.insert(index, value)
    pub fn insert(list: &Value, index: &Value, value: Value) -> RuntimeResult<()> {
        let storage = receiver(list, "insert")?;
        let position = match index_of(storage, index) {
            Ok(i) => i,
            Err(RuntimeError::IndexOutOfRange { index, .. }) if index < 0 => 0,
            Err(RuntimeError::IndexOutOfRange { .. }) => i64::MAX,
            Err(err) => return Err(err),
        };
        storage.insert(position, value);
        Ok(())
    }

    /// list.pop(index?)
    pub fn pop(list: &Value, index: Option<&Value>) -> RuntimeResult<Value> {
        let storage = receiver(list, "pop")?;
        let index = index.map(|i| index_of(storage, i)).transpose()?;
        storage.pop(index)
    }

    /// list.clear()
    pub fn clear(list: &Value) -> RuntimeResult<()> {
        receiver(list, "clear")?.clear();
        Ok(())
    }

    /// Truncate or pad with None to `count` elements
    pub fn resize(list: &Value, count: usize) -> RuntimeResult<()> {
        receiver(list, "resize")?.resize(count);
        Ok(())
    }

    /// value in list
    pub fn contains(list: &Value, value: &Value) -> RuntimeResult<bool> {
        receiver(list, "__contains__")?;
        list.contains(value)
    }

    /// iter(list)
    ///
    /// Each call starts a fresh cursor at index 0 over the live storage.
    pub fn iterate(list: &Value) -> RuntimeResult<ListIterator> {
        Ok(ListIterator::new(receiver(list, "__iter__")?.clone()))
    }
}
