//! Operators over values: `+`, `not`, `==`, `<` and `in`.
//!
//! Each operator dispatches on the pair of variant tags. Pairs without a
//! defined meaning raise `TypeMismatch` instead of coercing.

use std::cmp::Ordering;
use std::rc::Rc;

use num_bigint::BigInt;

use crate::error::{RuntimeError, RuntimeResult};
use crate::list::ListObject;
use crate::value::Value;

impl Value {
    /// Numeric view used by arithmetic and comparisons; bools count as 0/1.
    fn numeric(&self) -> Option<BigInt> {
        match self {
            Value::Bool(b) => Some(BigInt::from(u8::from(*b))),
            Value::Int(n) => Some(n.clone()),
            _ => None,
        }
    }

    /// The `+` operator.
    ///
    /// Integers add with arbitrary precision. Bytes, text and lists
    /// concatenate into a new value; operands are never mutated.
    ///
    /// # Examples
    ///
    /// ```
    /// use core_types::{ErrorKind, Value};
    ///
    /// let sum = Value::int(5).add(&Value::int(11)).unwrap();
    /// assert_eq!(sum.repr(), "16");
    ///
    /// let joined = Value::bytes(b"omg").add(&Value::bytes(b"hax")).unwrap();
    /// assert_eq!(joined.repr(), "b'omghax'");
    ///
    /// let err = Value::bytes(b"omg").add(&Value::text("hax")).unwrap_err();
    /// assert_eq!(err.kind(), ErrorKind::TypeError);
    /// ```
    pub fn add(&self, other: &Value) -> RuntimeResult<Value> {
        match (self, other) {
            (Value::Bytes(a), Value::Bytes(b)) => {
                let mut joined = Vec::with_capacity(a.len() + b.len());
                joined.extend_from_slice(a);
                joined.extend_from_slice(b);
                Ok(Value::Bytes(Rc::from(joined)))
            }
            (Value::Text(a), Value::Text(b)) => {
                let mut joined = String::with_capacity(a.len() + b.len());
                joined.push_str(a);
                joined.push_str(b);
                Ok(Value::Text(Rc::from(joined)))
            }
            (Value::List(a), Value::List(b)) => {
                let mut joined = a.to_vec();
                joined.extend(b.to_vec());
                Ok(Value::List(ListObject::from_vec(joined)))
            }
            _ => match (self.numeric(), other.numeric()) {
                (Some(a), Some(b)) => Ok(Value::Int(a + b)),
                _ => Err(RuntimeError::type_mismatch(
                    "+",
                    self.type_name(),
                    other.type_name(),
                )),
            },
        }
    }

    /// The `not` operator: the negated truthiness, always a `Bool`.
    ///
    /// # Examples
    ///
    /// ```
    /// use core_types::Value;
    ///
    /// assert_eq!(Value::Bool(true).not().repr(), "False");
    /// assert_eq!(Value::None.not(), Value::Bool(true));
    /// ```
    pub fn not(&self) -> Value {
        Value::Bool(!self.is_truthy())
    }

    /// The `==` operator.
    ///
    /// Bools and ints compare numerically; sequences compare element-wise.
    /// Mismatched kinds are simply unequal. Lists that contain themselves
    /// compare without recursing forever: a pair of lists already being
    /// compared further up counts as equal.
    pub fn equals(&self, other: &Value) -> bool {
        self.equals_within(other, &mut Vec::new())
    }

    /// `active` holds the `(left, right)` list ids currently being compared.
    fn equals_within(&self, other: &Value, active: &mut Vec<(usize, usize)>) -> bool {
        match (self, other) {
            (Value::None, Value::None) => true,
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
                let equal = a.iter().zip(&b).all(|(x, y)| x.equals_within(y, active));
                active.pop();
                equal
            }
            _ => match (self.numeric(), other.numeric()) {
                (Some(a), Some(b)) => a == b,
                _ => false,
            },
        }
    }

    /// Three-way comparison backing `<`, `<=`, `>` and `>=`.
    ///
    /// Defined for numbers, bytes (by byte), text (by code point) and lists
    /// (lexicographically by element).
    pub fn compare(&self, other: &Value) -> RuntimeResult<Ordering> {
        self.compare_within(other, &mut Vec::new())
    }

    fn compare_within(
        &self,
        other: &Value,
        active: &mut Vec<(usize, usize)>,
    ) -> RuntimeResult<Ordering> {
        match (self, other) {
            (Value::Bytes(a), Value::Bytes(b)) => Ok(a[..].cmp(&b[..])),
            (Value::Text(a), Value::Text(b)) => Ok(a.chars().cmp(b.chars())),
            (Value::List(a), Value::List(b)) => {
                let pair = (a.id(), b.id());
                if a.ptr_eq(b) || active.contains(&pair) {
                    return Ok(Ordering::Equal);
                }
                let (a, b) = (a.to_vec(), b.to_vec());
                active.push(pair);
                let mut ordering = Ok(a.len().cmp(&b.len()));
                for (x, y) in a.iter().zip(&b) {
                    if !x.equals_within(y, active) {
                        ordering = x.compare_within(y, active);
                        break;
                    }
                }
                active.pop();
                ordering
            }
            _ => match (self.numeric(), other.numeric()) {
                (Some(a), Some(b)) => Ok(a.cmp(&b)),
                _ => Err(RuntimeError::type_mismatch(
                    "<",
                    self.type_name(),
                    other.type_name(),
                )),
            },
        }
    }

    /// The `<` operator
    pub fn less_than(&self, other: &Value) -> RuntimeResult<bool> {
        Ok(self.compare(other)? == Ordering::Less)
    }

    /// The `in` operator, with `self` as the container.
    ///
    /// Bytes and text test for a contiguous subsequence of the same kind;
    /// lists test element equality.
    pub fn contains(&self, item: &Value) -> RuntimeResult<bool> {
        match (self, item) {
            (Value::Bytes(haystack), Value::Bytes(needle)) => Ok(needle.is_empty()
                || haystack.windows(needle.len()).any(|w| w == &needle[..])),
            (Value::Text(haystack), Value::Text(needle)) => Ok(haystack.contains(&needle[..])),
            (Value::List(list), _) => Ok(list.to_vec().iter().any(|e| e.equals(item))),
            _ => Err(RuntimeError::type_mismatch(
                "in",
                item.type_name(),
                self.type_name(),
            )),
        }
    }
}
