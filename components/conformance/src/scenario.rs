//! Reference scenarios
//!
//! Each scenario is a script written against the runtime API plus the exact
//! transcript it must print.

use builtins::{for_else, BuiltinFunctions, Console, ListPrototype, LoopControl};
use core_types::{ErrorKind, RuntimeResult, Value};

use crate::error::ConformanceResult;

/// Script body: drives the runtime and prints through `console`
pub type Script = fn(&Console) -> RuntimeResult<()>;

/// A named script with its expected output
#[derive(Clone, Copy)]
pub struct Scenario {
    /// Scenario name, used as the report key
    pub name: &'static str,
    /// Lines the script must print, in order
    pub expected: &'static [&'static str],
    /// The script itself
    pub script: Script,
}

impl Scenario {
    /// Textual representation of every scalar kind
    pub fn repr() -> Self {
        Scenario {
            name: "repr",
            expected: REPR_EXPECTED,
            script: repr_script,
        }
    }

    /// List length, indexing, clearing and for/else
    pub fn lists() -> Self {
        Scenario {
            name: "lists",
            expected: LISTS_EXPECTED,
            script: lists_script,
        }
    }

    /// Every reference scenario, in a stable order
    pub fn all() -> Vec<Self> {
        vec![Self::repr(), Self::lists()]
    }

    /// Run the script on `console` and return everything it printed.
    ///
    /// An error the script does not handle becomes
    /// [`ConformanceError::Runtime`](crate::ConformanceError::Runtime).
    pub fn run(&self, console: &Console) -> ConformanceResult<Vec<String>> {
        (self.script)(console)?;
        Ok(console.transcript())
    }
}

impl std::fmt::Debug for Scenario {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Scenario")
            .field("name", &self.name)
            .field("expected", &self.expected.len())
            .finish()
    }
}

/// Concatenate with `+`, left to right
fn concat(parts: &[Value]) -> RuntimeResult<Value> {
    let mut iter = parts.iter();
    let mut acc = iter.next().cloned().unwrap_or_else(|| Value::text(""));
    for part in iter {
        acc = acc.add(part)?;
    }
    Ok(acc)
}

fn text(s: &str) -> Value {
    Value::text(s)
}

const REPR_EXPECTED: &[&str] = &[
    "repr tests...",
    "repr(None) -> None",
    "repr(True) -> True",
    "repr(not True) -> False",
    "repr(5) -> 5",
    "repr(5 + 11) -> 16",
    "repr(b'omg') -> b'omg'",
    "repr(b'omg' + b'hax') -> b'omghax'",
    "repr('omg') -> 'omg'",
    "repr('omg' + 'hax') -> 'omghax'",
];

fn repr_script(console: &Console) -> RuntimeResult<()> {
    let show = |label: &str, value: Value| -> RuntimeResult<()> {
        console.print(&[text(label).add(&BuiltinFunctions::repr(&value))?]);
        Ok(())
    };

    console.print(&[text("repr tests...")]);
    show("repr(None) -> ", Value::None)?;
    show("repr(True) -> ", Value::Bool(true))?;
    show("repr(not True) -> ", Value::Bool(true).not())?;
    show("repr(5) -> ", Value::int(5))?;
    show("repr(5 + 11) -> ", Value::int(5).add(&Value::int(11))?)?;
    show("repr(b'omg') -> ", Value::bytes(b"omg"))?;
    show(
        "repr(b'omg' + b'hax') -> ",
        Value::bytes(b"omg").add(&Value::bytes(b"hax"))?,
    )?;
    show("repr('omg') -> ", text("omg"))?;
    show("repr('omg' + 'hax') -> ", text("omg").add(&text("hax"))?)?;
    Ok(())
}

const LISTS_EXPECTED: &[&str] = &[
    "a has 4 items",
    "1",
    "2",
    "3",
    "4",
    "done",
    "a[2] is 3",
    "a[5] does not exist",
    "b has 3 items",
    "a",
    "b",
    "c",
    "done",
    "b was cleared; now it has 0 items",
    "done",
];

fn lists_script(console: &Console) -> RuntimeResult<()> {
    let print_done = || -> RuntimeResult<()> {
        console.print(&[text("done")]);
        Ok(())
    };

    let a = Value::list((1..=4i64).map(Value::from).collect());
    console.print(&[concat(&[
        text("a has "),
        BuiltinFunctions::repr(&BuiltinFunctions::len(&a)?),
        text(" items"),
    ])?]);
    for_else(
        ListPrototype::iterate(&a)?,
        |x| {
            console.print(&[BuiltinFunctions::repr(&x)]);
            Ok(LoopControl::Continue)
        },
        print_done,
    )?;

    let item = ListPrototype::get(&a, &Value::int(2))?;
    console.print(&[concat(&[text("a[2] is "), BuiltinFunctions::repr(&item)])?]);
    match ListPrototype::get(&a, &Value::int(5)) {
        Ok(item) => {
            console.print(&[concat(&[text("a[5] is "), BuiltinFunctions::repr(&item)])?]);
        }
        Err(err) if err.is(ErrorKind::IndexError) => {
            console.print(&[text("a[5] does not exist")]);
        }
        Err(err) => return Err(err),
    }

    let b = Value::list(vec![text("a"), text("b"), text("c")]);
    console.print(&[concat(&[
        text("b has "),
        BuiltinFunctions::repr(&BuiltinFunctions::len(&b)?),
        text(" items"),
    ])?]);
    for_else(
        ListPrototype::iterate(&b)?,
        |y| {
            console.print(&[y]);
            Ok(LoopControl::Continue)
        },
        print_done,
    )?;

    ListPrototype::clear(&b)?;
    console.print(&[concat(&[
        text("b was cleared; now it has "),
        BuiltinFunctions::repr(&BuiltinFunctions::len(&b)?),
        text(" items"),
    ])?]);
    for_else(
        ListPrototype::iterate(&b)?,
        |y| {
            console.print(&[y]);
            Ok(LoopControl::Continue)
        },
        print_done,
    )?;
    Ok(())
}
