//! Iteration protocol and the for/else loop
//!
//! This module implements:
//! - `ListIterator`, a cursor over live list storage
//! - `ForElseLoop`, the state machine behind `for ... else`

use core_types::{ListObject, Value};
use tracing::trace;

/// Cursor over a list's live storage.
///
/// The cursor holds an index rather than a snapshot, so it observes
/// mutations made while iterating: appended elements are visited and a
/// cleared list ends the iteration.
#[derive(Debug, Clone)]
pub struct ListIterator {
    list: ListObject,
    position: usize,
}

impl ListIterator {
    /// Create a cursor positioned before the first element
    pub fn new(list: ListObject) -> Self {
        ListIterator { list, position: 0 }
    }

    /// Number of elements produced so far
    pub fn position(&self) -> usize {
        self.position
    }
}

impl Iterator for ListIterator {
    type Item = Value;

    fn next(&mut self) -> Option<Value> {
        let value = self.list.get_at(self.position)?;
        self.position += 1;
        Some(value)
    }
}

/// State of a [`ForElseLoop`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    /// Consuming the next element
    Running,
    /// The source produced no further element
    Exhausted,
    /// Normal completion; the else clause is about to run
    ElsePending,
    /// Finished, by completion or early exit
    Done,
}

/// What the loop body asks the loop to do next
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopControl {
    /// Proceed to the next element
    Continue,
    /// Leave the loop early; the else clause is skipped
    Break,
}

/// How a [`ForElseLoop`] finished
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopOutcome {
    /// The source was exhausted and the else clause ran
    Completed,
    /// The body broke out early
    Broken,
}

/// A `for ... else` loop over any source of values.
///
/// The else clause runs exactly once, and only when the source is exhausted
/// without the body breaking out. An empty source still runs the else
/// clause. An error from the body or from the else clause ends the loop in
/// `Done` and propagates unchanged.
///
/// # Examples
///
/// ```
/// use builtins::{ForElseLoop, ListPrototype, LoopControl, LoopOutcome};
/// use core_types::{RuntimeError, Value};
///
/// let a = Value::list(vec![Value::int(1), Value::int(2)]);
/// let mut printed = Vec::new();
/// let mut done = false;
///
/// let mut lp = ForElseLoop::new(ListPrototype::iterate(&a).unwrap());
/// let outcome = lp.run(
///     |x| {
///         printed.push(x.repr());
///         Ok::<_, RuntimeError>(LoopControl::Continue)
///     },
///     || {
///         done = true;
///         Ok(())
///     },
/// ).unwrap();
///
/// assert_eq!(outcome, LoopOutcome::Completed);
/// assert_eq!(printed, vec!["1", "2"]);
/// assert!(done);
/// ```
#[derive(Debug)]
pub struct ForElseLoop<I> {
    source: I,
    state: LoopState,
    completed_normally: bool,
}

impl<I> ForElseLoop<I>
where
    I: Iterator<Item = Value>,
{
    /// Create a loop over `source`, in the `Running` state
    pub fn new(source: I) -> Self {
        ForElseLoop {
            source,
            state: LoopState::Running,
            completed_normally: false,
        }
    }

    /// Current state
    pub fn state(&self) -> LoopState {
        self.state
    }

    /// Whether the loop reached `ElsePending`, i.e. was not broken out of
    pub fn completed_normally(&self) -> bool {
        self.completed_normally
    }

    fn transition(&mut self, next: LoopState) {
        trace!(from = ?self.state, to = ?next, "for/else transition");
        self.state = next;
    }

    /// Drive the loop to completion or early exit.
    ///
    /// Calling `run` on a loop that is already `Done` reports the previous
    /// outcome without touching the source or the else clause again.
    pub fn run<B, E, Err>(&mut self, mut body: B, else_clause: E) -> Result<LoopOutcome, Err>
    where
        B: FnMut(Value) -> Result<LoopControl, Err>,
        E: FnOnce() -> Result<(), Err>,
    {
        while self.state == LoopState::Running {
            match self.source.next() {
                Some(value) => match body(value) {
                    Ok(LoopControl::Continue) => {}
                    Ok(LoopControl::Break) => {
                        self.transition(LoopState::Done);
                        return Ok(LoopOutcome::Broken);
                    }
                    Err(err) => {
                        self.transition(LoopState::Done);
                        return Err(err);
                    }
                },
                None => self.transition(LoopState::Exhausted),
            }
        }

        if self.state == LoopState::Exhausted {
            self.completed_normally = true;
            self.transition(LoopState::ElsePending);
            let result = else_clause();
            self.transition(LoopState::Done);
            result?;
        }

        Ok(if self.completed_normally {
            LoopOutcome::Completed
        } else {
            LoopOutcome::Broken
        })
    }
}

/// Run a `for ... else` loop over `source` in one call
pub fn for_else<I, B, E, Err>(source: I, body: B, else_clause: E) -> Result<LoopOutcome, Err>
where
    I: IntoIterator<Item = Value>,
    B: FnMut(Value) -> Result<LoopControl, Err>,
    E: FnOnce() -> Result<(), Err>,
{
    ForElseLoop::new(source.into_iter()).run(body, else_clause)
}
