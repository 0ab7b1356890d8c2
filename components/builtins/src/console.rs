//! The `print` output sink

use core_types::Value;
use std::cell::RefCell;
use std::rc::Rc;

/// Console output writer trait
pub trait ConsoleWriter {
    /// Write one line of output
    fn write(&self, line: &str);
}

/// Default console writer that prints to stdout
struct StdoutWriter;

impl ConsoleWriter for StdoutWriter {
    fn write(&self, line: &str) {
        println!("{}", line);
    }
}

/// Writer that discards output; lines are still recorded by the console
pub struct NullWriter;

impl ConsoleWriter for NullWriter {
    fn write(&self, _line: &str) {}
}

/// Destination of `print`.
///
/// Every printed line is recorded in a shared transcript and forwarded to
/// the configured writer.
pub struct Console {
    output: Rc<RefCell<Vec<String>>>,
    writer: Box<dyn ConsoleWriter>,
}

impl Console {
    /// Create a console writing to stdout
    pub fn new() -> Self {
        Console {
            output: Rc::new(RefCell::new(Vec::new())),
            writer: Box::new(StdoutWriter),
        }
    }

    /// Create a console that only records into `output`
    pub fn new_with_output(output: Rc<RefCell<Vec<String>>>) -> Self {
        Console {
            output,
            writer: Box::new(NullWriter),
        }
    }

    /// Create a console forwarding to a custom writer
    pub fn with_writer(writer: Box<dyn ConsoleWriter>) -> Self {
        Console {
            output: Rc::new(RefCell::new(Vec::new())),
            writer,
        }
    }

    /// Format values the way `print` does: `str()` of each, space separated
    fn format_values(values: &[Value]) -> String {
        values
            .iter()
            .map(|v| v.to_string())
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// print(...values)
    pub fn print(&self, values: &[Value]) {
        let line = Self::format_values(values);
        self.writer.write(&line);
        self.output.borrow_mut().push(line);
    }

    /// Lines printed so far
    pub fn transcript(&self) -> Vec<String> {
        self.output.borrow().clone()
    }
}

impl Default for Console {
    fn default() -> Self {
        Self::new()
    }
}
