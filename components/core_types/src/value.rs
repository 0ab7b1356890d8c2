//! Runtime value representation.
//!
//! This module provides the core `Value` enum: a closed tagged union with one
//! variant per first-class value kind. Every operation dispatches by matching
//! on the tag.

use num_bigint::BigInt;
use num_traits::{ToPrimitive, Zero};
use std::fmt;
use std::rc::Rc;

use crate::list::ListObject;

/// Represents any runtime value.
///
/// Immutable payloads (`Bytes`, `Text`) are reference counted so that cloning
/// a `Value` never copies the underlying data. `List` is a shared handle to
/// mutable storage: every clone observes the same elements.
///
/// # Examples
///
/// ```
/// use core_types::Value;
///
/// let none = Value::None;
/// let number = Value::int(42);
/// let text = Value::text("omg");
///
/// assert!(!none.is_truthy());
/// assert!(number.is_truthy());
/// assert_eq!(text.type_name(), "str");
/// ```
#[derive(Clone)]
pub enum Value {
    /// The absence of a value
    None,
    /// Boolean (True or False)
    Bool(bool),
    /// Arbitrary precision integer
    Int(BigInt),
    /// Immutable sequence of raw bytes
    Bytes(Rc<[u8]>),
    /// Immutable sequence of Unicode code points
    Text(Rc<str>),
    /// Mutable, ordered, shared sequence of values
    List(ListObject),
}

impl Value {
    /// Create a boolean value
    pub fn bool(b: bool) -> Self {
        Value::Bool(b)
    }

    /// Create an integer value
    pub fn int(n: impl Into<BigInt>) -> Self {
        Value::Int(n.into())
    }

    /// Create a byte-sequence value
    pub fn bytes(data: impl AsRef<[u8]>) -> Self {
        Value::Bytes(Rc::from(data.as_ref()))
    }

    /// Create a text value
    pub fn text(s: impl AsRef<str>) -> Self {
        Value::Text(Rc::from(s.as_ref()))
    }

    /// Create a list value owning the given elements
    pub fn list(elements: Vec<Value>) -> Self {
        Value::List(ListObject::from_vec(elements))
    }

    /// Returns the type name used in diagnostics.
    ///
    /// # Examples
    ///
    /// ```
    /// use core_types::Value;
    ///
    /// assert_eq!(Value::None.type_name(), "NoneType");
    /// assert_eq!(Value::bytes(b"x").type_name(), "bytes");
    /// assert_eq!(Value::list(vec![]).type_name(), "list");
    /// ```
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::None => "NoneType",
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::Bytes(_) => "bytes",
            Value::Text(_) => "str",
            Value::List(_) => "list",
        }
    }

    /// Returns whether this value is truthy.
    ///
    /// None, False, zero and every empty sequence are falsy.
    pub fn is_truthy(&self) -> bool {
        match self {
            Value::None => false,
            Value::Bool(b) => *b,
            Value::Int(n) => !n.is_zero(),
            Value::Bytes(b) => !b.is_empty(),
            Value::Text(s) => !s.is_empty(),
            Value::List(list) => !list.is_empty(),
        }
    }

    /// Returns the boolean payload, if this is a `Bool`
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Returns the integer payload, if this is an `Int`
    pub fn as_int(&self) -> Option<&BigInt> {
        match self {
            Value::Int(n) => Some(n),
            _ => None,
        }
    }

    /// Returns the integer payload as an `i64`, if it is an `Int` that fits
    pub fn as_i64(&self) -> Option<i64> {
        self.as_int().and_then(|n| n.to_i64())
    }

    /// Returns the raw bytes, if this is `Bytes`
    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            Value::Bytes(b) => Some(b),
            _ => None,
        }
    }

    /// Returns the text, if this is `Text`
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the list handle, if this is a `List`
    pub fn as_list(&self) -> Option<&ListObject> {
        match self {
            Value::List(list) => Some(list),
            _ => None,
        }
    }

    /// Identity comparison.
    ///
    /// Two list values are the same only if they share storage; immutable
    /// payloads are the same when they share the same allocation.
    pub fn is_same(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::None, Value::None) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Bytes(a), Value::Bytes(b)) => Rc::ptr_eq(a, b),
            (Value::Text(a), Value::Text(b)) => Rc::ptr_eq(a, b),
            (Value::List(a), Value::List(b)) => a.ptr_eq(b),
            _ => false,
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::None => write!(f, "None"),
            Value::Bool(b) => f.debug_tuple("Bool").field(b).finish(),
            Value::Int(n) => f.debug_tuple("Int").field(n).finish(),
            Value::Bytes(_) | Value::Text(_) | Value::List(_) => {
                write!(f, "{}({})", self.type_name(), self.repr())
            }
        }
    }
}

/// Strict structural equality: same kind and equal contents.
///
/// Unlike [`Value::equals`], `Bool(true)` and `Int(1)` are not equal here.
/// Self-containing lists are handled the same way as in `equals`.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        strict_eq(self, other, &mut Vec::new())
    }
}

fn strict_eq(left: &Value, right: &Value, active: &mut Vec<(usize, usize)>) -> bool {
    match (left, right) {
        (Value::None, Value::None) => true,
        (Value::Bool(a), Value::Bool(b)) => a == b,
        (Value::Int(a), Value::Int(b)) => a == b,
        (Value::Bytes(a), Value::Bytes(b)) => a == b,
        (Value::Text(a), Value::Text(b)) => a == b,
        (Value::List(a), Value::List(b)) => {
            let pair = (a.id(), b.id());
            if a.ptr_eq(b) || active.contains(&pair) {
                return true;
            }
            let (a, b) = (a.to_vec(), b.to_vec());
            if a.len() != b.len() {
                return false;
            }
            active.push(pair);
            let equal = a.iter().zip(&b).all(|(x, y)| strict_eq(x, y, active));
            active.pop();
            equal
        }
        _ => false,
    }
}

/// String conversion (`str()`).
///
/// Text renders without quotes; every other kind renders as its `repr`.
///
/// # Examples
///
/// ```
/// use core_types::Value;
///
/// assert_eq!(Value::text("a").to_string(), "a");
/// assert_eq!(Value::bytes(b"a").to_string(), "b'a'");
/// assert_eq!(Value::Bool(true).to_string(), "True");
/// ```
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Text(s) => f.write_str(s),
            other => f.write_str(&other.repr()),
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Int(BigInt::from(n))
    }
}

impl From<BigInt> for Value {
    fn from(n: BigInt) -> Self {
        Value::Int(n)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::text(s)
    }
}

impl From<Vec<Value>> for Value {
    fn from(elements: Vec<Value>) -> Self {
        Value::list(elements)
    }
}
