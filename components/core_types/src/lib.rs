//! Core value model for the runtime.
//!
//! This crate provides the foundational types every other component builds
//! on: the tagged [`Value`] union, its canonical textual form (`repr`), the
//! operators defined over it, shared list storage, and the error taxonomy.
//!
//! # Overview
//!
//! - [`Value`] - Tagged representation of runtime values
//! - [`ListObject`] - Shared, mutable list storage
//! - [`RuntimeError`] - Errors raised by value and list operations
//! - [`ErrorKind`] - Catchable error categories
//!
//! # Examples
//!
//! ```
//! use core_types::{ErrorKind, Value};
//!
//! assert_eq!(Value::None.repr(), "None");
//! assert_eq!(Value::Bool(true).not().repr(), "False");
//! assert_eq!(Value::int(5).add(&Value::int(11)).unwrap().repr(), "16");
//!
//! let list = Value::list(vec![Value::int(1), Value::int(2)]);
//! let err = list.as_list().unwrap().get(5).unwrap_err();
//! assert_eq!(err.kind(), ErrorKind::IndexError);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

mod error;
mod list;
mod ops;
mod repr;
mod value;

pub use error::{ErrorKind, RuntimeError, RuntimeResult};
pub use list::ListObject;
pub use repr::repr;
pub use value::Value;
