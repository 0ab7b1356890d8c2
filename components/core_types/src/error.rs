//! Runtime error types.
//!
//! Every failing operation in the value model surfaces one of the
//! [`RuntimeError`] variants synchronously, before any state is mutated.

use thiserror::Error;

/// The catchable category of a runtime error.
///
/// These correspond to the exception classes a script can name in an
/// `except` clause.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// An index outside the valid range of a container
    IndexError,
    /// An operation applied to operands of the wrong kind
    TypeError,
}

impl ErrorKind {
    /// Get the exception class name as a string
    pub fn name(&self) -> &'static str {
        match self {
            ErrorKind::IndexError => "IndexError",
            ErrorKind::TypeError => "TypeError",
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// An error raised by a value or container operation.
///
/// # Examples
///
/// ```
/// use core_types::{ErrorKind, RuntimeError};
///
/// let error = RuntimeError::index_out_of_range("list", 5, 4);
/// assert_eq!(error.kind(), ErrorKind::IndexError);
/// assert_eq!(error.to_string(), "list index out of range");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuntimeError {
    /// Index outside `[0, length)`
    #[error("{container} index out of range")]
    IndexOutOfRange {
        /// Name of the container kind (`list`)
        container: &'static str,
        /// The offending index, as supplied by the caller
        index: i128,
        /// Length of the container at the time of the access
        length: usize,
    },

    /// Popping from a container with no elements
    #[error("pop from empty {container}")]
    EmptyContainer {
        /// Name of the container kind (`list`)
        container: &'static str,
    },

    /// Binary operator applied across incompatible kinds
    #[error("unsupported operand type(s) for {operation}: '{left}' and '{right}'")]
    TypeMismatch {
        /// Operator or method name, e.g. `+` or `in`
        operation: &'static str,
        /// Type name of the left operand
        left: &'static str,
        /// Type name of the right operand
        right: &'static str,
    },

    /// Unary operation or method applied to a value of the wrong kind
    #[error("'{operation}' requires a '{expected}' object but received a '{found}'")]
    WrongReceiver {
        /// Method or operation name
        operation: &'static str,
        /// Type name the operation requires
        expected: &'static str,
        /// Type name actually received
        found: &'static str,
    },
}

impl RuntimeError {
    /// Create an `IndexOutOfRange` error
    pub fn index_out_of_range(container: &'static str, index: impl Into<i128>, length: usize) -> Self {
        RuntimeError::IndexOutOfRange {
            container,
            index: index.into(),
            length,
        }
    }

    /// Create a `TypeMismatch` error for a binary operator
    pub fn type_mismatch(operation: &'static str, left: &'static str, right: &'static str) -> Self {
        RuntimeError::TypeMismatch {
            operation,
            left,
            right,
        }
    }

    /// The catchable category of this error.
    ///
    /// Popping from an empty list is an index error, mirroring the
    /// dynamic language; a receiver of the wrong kind is a type error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            RuntimeError::IndexOutOfRange { .. } | RuntimeError::EmptyContainer { .. } => {
                ErrorKind::IndexError
            }
            RuntimeError::TypeMismatch { .. } | RuntimeError::WrongReceiver { .. } => {
                ErrorKind::TypeError
            }
        }
    }

    /// Whether a handler for `kind` would catch this error
    pub fn is(&self, kind: ErrorKind) -> bool {
        self.kind() == kind
    }
}

/// Result type for value and container operations
pub type RuntimeResult<T> = Result<T, RuntimeError>;
