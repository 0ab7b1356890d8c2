//! Contract tests for Console

use builtins::{Console, NullWriter};
use core_types::Value;
use std::cell::RefCell;
use std::rc::Rc;

#[test]
fn test_console_records_lines_in_order() {
    let output = Rc::new(RefCell::new(Vec::new()));
    let console = Console::new_with_output(output.clone());

    console.print(&[Value::text("repr tests...")]);
    console.print(&[Value::text("done")]);

    assert_eq!(*output.borrow(), vec!["repr tests...", "done"]);
}

#[test]
fn test_console_prints_text_unquoted_and_others_as_repr() {
    let console = Console::with_writer(Box::new(NullWriter));
    console.print(&[Value::text("b")]);
    console.print(&[Value::int(3)]);
    console.print(&[Value::None]);
    assert_eq!(console.transcript(), vec!["b", "3", "None"]);
}
