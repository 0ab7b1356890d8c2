//! Shared storage for list values.
//!
//! A [`ListObject`] is a reference-counted handle to a growable vector of
//! values. Cloning the handle aliases the storage, so a mutation through one
//! handle is visible through every other.

use std::cell::RefCell;
use std::rc::Rc;

use tracing::debug;

use crate::error::{RuntimeError, RuntimeResult};
use crate::value::Value;

const CONTAINER: &str = "list";

/// Handle to mutable, ordered list storage.
///
/// Indices are 0-based. Negative indices are never normalised: any index
/// outside `[0, len)` is rejected with `IndexOutOfRange`, and a rejected
/// access leaves the storage untouched.
///
/// # Examples
///
/// ```
/// use core_types::{ListObject, Value};
///
/// let list = ListObject::from_vec(vec![Value::int(1), Value::int(2)]);
/// let alias = list.clone();
/// alias.clear();
/// assert_eq!(list.len(), 0);
/// ```
#[derive(Clone, Default)]
pub struct ListObject {
    elements: Rc<RefCell<Vec<Value>>>,
}

impl ListObject {
    /// Create an empty list
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a list taking ownership of `elements`
    pub fn from_vec(elements: Vec<Value>) -> Self {
        ListObject {
            elements: Rc::new(RefCell::new(elements)),
        }
    }

    /// Number of elements
    pub fn len(&self) -> usize {
        self.elements.borrow().len()
    }

    /// Whether the list has no elements
    pub fn is_empty(&self) -> bool {
        self.elements.borrow().is_empty()
    }

    fn check_index(&self, index: i64, length: usize) -> RuntimeResult<usize> {
        match usize::try_from(index) {
            Ok(i) if i < length => Ok(i),
            _ => Err(RuntimeError::index_out_of_range(CONTAINER, index, length)),
        }
    }

    /// Element at `index`.
    ///
    /// Returns a shared handle to the stored element, not a copy.
    pub fn get(&self, index: i64) -> RuntimeResult<Value> {
        let elements = self.elements.borrow();
        let i = self.check_index(index, elements.len())?;
        Ok(elements[i].clone())
    }

    /// Element at `position`, or `None` past the end.
    ///
    /// Used by cursors that walk the live storage.
    pub fn get_at(&self, position: usize) -> Option<Value> {
        self.elements.borrow().get(position).cloned()
    }

    /// Replace the element at `index`
    pub fn set(&self, index: i64, value: Value) -> RuntimeResult<()> {
        let mut elements = self.elements.borrow_mut();
        let i = self.check_index(index, elements.len())?;
        elements[i] = value;
        Ok(())
    }

    /// Append `value` at the end
    pub fn append(&self, value: Value) {
        self.elements.borrow_mut().push(value);
    }

    /// Insert `value` before `index`, clamping the index to `[0, len]`
    pub fn insert(&self, index: i64, value: Value) {
        let mut elements = self.elements.borrow_mut();
        let position = usize::try_from(index).unwrap_or(0).min(elements.len());
        elements.insert(position, value);
    }

    /// Remove and return the element at `index`, or the last one if `None`
    pub fn pop(&self, index: Option<i64>) -> RuntimeResult<Value> {
        let mut elements = self.elements.borrow_mut();
        if elements.is_empty() {
            return Err(RuntimeError::EmptyContainer {
                container: CONTAINER,
            });
        }
        let length = elements.len();
        let i = match index {
            Some(index) => self.check_index(index, length)?,
            None => length - 1,
        };
        debug!(index = i, length, "list pop");
        Ok(elements.remove(i))
    }

    /// Remove every element. Clearing an empty list is a no-op.
    pub fn clear(&self) {
        let mut elements = self.elements.borrow_mut();
        debug!(length = elements.len(), "list clear");
        elements.clear();
    }

    /// Truncate to `count` elements, or pad with `None` up to `count`
    pub fn resize(&self, count: usize) {
        let mut elements = self.elements.borrow_mut();
        debug!(from = elements.len(), to = count, "list resize");
        elements.resize(count, Value::None);
    }

    /// Copy of the current element handles, in order
    pub fn to_vec(&self) -> Vec<Value> {
        self.elements.borrow().clone()
    }

    /// Whether both handles share the same storage
    pub fn ptr_eq(&self, other: &ListObject) -> bool {
        Rc::ptr_eq(&self.elements, &other.elements)
    }

    /// Storage address, stable for the lifetime of the list
    pub fn id(&self) -> usize {
        Rc::as_ptr(&self.elements) as *const () as usize
    }
}

impl std::fmt::Debug for ListObject {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.elements.borrow().iter()).finish()
    }
}
