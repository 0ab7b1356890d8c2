//! Contract tests for the for/else loop

use builtins::{for_else, ForElseLoop, ListPrototype, LoopControl, LoopOutcome, LoopState};
use core_types::{RuntimeError, Value};

fn letters() -> Value {
    Value::list(vec![Value::text("a"), Value::text("b"), Value::text("c")])
}

/// Runs a printing loop and returns the lines it produced
fn print_all(list: &Value, stop_at: Option<&str>) -> (Vec<String>, LoopOutcome) {
    let mut lines = Vec::new();
    let mut else_lines = Vec::new();
    let outcome = for_else(
        ListPrototype::iterate(list).unwrap(),
        |y| {
            let line = y.to_string();
            let stop = stop_at == Some(line.as_str());
            lines.push(line);
            Ok::<_, RuntimeError>(if stop {
                LoopControl::Break
            } else {
                LoopControl::Continue
            })
        },
        || {
            else_lines.push("done".to_string());
            Ok(())
        },
    )
    .unwrap();
    lines.extend(else_lines);
    (lines, outcome)
}

#[test]
fn test_loop_prints_each_then_done() {
    let (lines, outcome) = print_all(&letters(), None);
    assert_eq!(lines, vec!["a", "b", "c", "done"]);
    assert_eq!(outcome, LoopOutcome::Completed);
}

#[test]
fn test_loop_over_cleared_list_prints_only_done() {
    let b = letters();
    ListPrototype::clear(&b).unwrap();
    let (lines, outcome) = print_all(&b, None);
    assert_eq!(lines, vec!["done"]);
    assert_eq!(outcome, LoopOutcome::Completed);
}

#[test]
fn test_loop_break_skips_done() {
    let (lines, outcome) = print_all(&letters(), Some("b"));
    assert_eq!(lines, vec!["a", "b"]);
    assert_eq!(outcome, LoopOutcome::Broken);
}

#[test]
fn test_loop_state_starts_running() {
    let lp = ForElseLoop::new(ListPrototype::iterate(&letters()).unwrap());
    assert_eq!(lp.state(), LoopState::Running);
    assert!(!lp.completed_normally());
}

#[test]
fn test_loop_state_ends_done() {
    let mut lp = ForElseLoop::new(ListPrototype::iterate(&letters()).unwrap());
    lp.run(|_| Ok::<_, RuntimeError>(LoopControl::Continue), || Ok(()))
        .unwrap();
    assert_eq!(lp.state(), LoopState::Done);
    assert!(lp.completed_normally());
}

#[test]
fn test_else_clause_error_propagates() {
    let mut lp = ForElseLoop::new(ListPrototype::iterate(&letters()).unwrap());
    let result = lp.run(
        |_| Ok(LoopControl::Continue),
        || Err(RuntimeError::type_mismatch("+", "str", "int")),
    );
    assert!(result.is_err());
    assert_eq!(lp.state(), LoopState::Done);
}

#[test]
fn test_break_never_invokes_else_closure() {
    use std::cell::RefCell;
    use std::rc::Rc;

    let observed = Rc::new(RefCell::new(Vec::new()));
    let sink = observed.clone();
    let outcome = for_else(
        ListPrototype::iterate(&letters()).unwrap(),
        |_| Ok::<_, RuntimeError>(LoopControl::Break),
        move || {
            sink.borrow_mut().push("else");
            Ok(())
        },
    )
    .unwrap();
    assert_eq!(outcome, LoopOutcome::Broken);
    assert!(observed.borrow().is_empty());
}
