//! Built-in functions and the list type for the runtime
//!
//! This crate provides the operations a script driver calls on top of the
//! value model:
//! - list methods (`ListPrototype`)
//! - the iteration protocol and the `for ... else` loop
//! - global functions (`repr`, `str`, `len`)
//! - the `print` console
//!
//! # Example
//!
//! ```
//! use builtins::{for_else, BuiltinFunctions, Console, ListPrototype, LoopControl, NullWriter};
//! use core_types::{RuntimeError, Value};
//!
//! let console = Console::with_writer(Box::new(NullWriter));
//! let b = Value::list(vec![Value::text("a"), Value::text("b")]);
//!
//! ListPrototype::clear(&b).unwrap();
//! for_else(
//!     ListPrototype::iterate(&b).unwrap(),
//!     |y| {
//!         console.print(&[y]);
//!         Ok::<_, RuntimeError>(LoopControl::Continue)
//!     },
//!     || {
//!         console.print(&[Value::text("done")]);
//!         Ok(())
//!     },
//! )
//! .unwrap();
//!
//! assert_eq!(console.transcript(), vec!["done"]);
//! assert_eq!(BuiltinFunctions::len(&b).unwrap().repr(), "0");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod console;
pub mod functions;
pub mod iterator;
pub mod list;

// Re-export main types for convenience
pub use console::{Console, ConsoleWriter, NullWriter};
pub use functions::BuiltinFunctions;
pub use iterator::{for_else, ForElseLoop, ListIterator, LoopControl, LoopOutcome, LoopState};
pub use list::ListPrototype;
