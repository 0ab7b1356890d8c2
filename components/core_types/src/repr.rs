//! Canonical textual representation of values (`repr`).
//!
//! `repr` is total: it never fails, including for lists that contain
//! themselves, which render the recursive reference as `[...]`.

use std::fmt::Write;

use crate::value::Value;

impl Value {
    /// Returns the canonical textual representation of this value.
    ///
    /// # Examples
    ///
    /// ```
    /// use core_types::Value;
    ///
    /// assert_eq!(Value::None.repr(), "None");
    /// assert_eq!(Value::Bool(true).repr(), "True");
    /// assert_eq!(Value::int(16).repr(), "16");
    /// assert_eq!(Value::bytes(b"omg").repr(), "b'omg'");
    /// assert_eq!(Value::text("omg").repr(), "'omg'");
    /// assert_eq!(
    ///     Value::list(vec![Value::int(1), Value::text("a")]).repr(),
    ///     "[1, 'a']"
    /// );
    /// ```
    pub fn repr(&self) -> String {
        let mut out = String::new();
        let mut active = Vec::new();
        write_repr(self, &mut out, &mut active);
        out
    }
}

/// Free-function form of [`Value::repr`]
pub fn repr(value: &Value) -> String {
    value.repr()
}

/// `active` holds the ids of the lists currently being rendered.
fn write_repr(value: &Value, out: &mut String, active: &mut Vec<usize>) {
    match value {
        Value::None => out.push_str("None"),
        Value::Bool(true) => out.push_str("True"),
        Value::Bool(false) => out.push_str("False"),
        Value::Int(n) => {
            let _ = write!(out, "{}", n);
        }
        Value::Bytes(data) => write_bytes_literal(data, out),
        Value::Text(s) => write_text_literal(s, out),
        Value::List(list) => {
            let id = list.id();
            if active.contains(&id) {
                out.push_str("[...]");
                return;
            }
            active.push(id);
            out.push('[');
            for (i, element) in list.to_vec().iter().enumerate() {
                if i > 0 {
                    out.push_str(", ");
                }
                write_repr(element, out, active);
            }
            out.push(']');
            active.pop();
        }
    }
}

/// Single quotes unless the payload has a `'` and no `"`.
fn choose_quote(has_single: bool, has_double: bool) -> char {
    if has_single && !has_double {
        '"'
    } else {
        '\''
    }
}

fn write_bytes_literal(data: &[u8], out: &mut String) {
    let quote = choose_quote(data.contains(&b'\''), data.contains(&b'"'));
    out.push('b');
    out.push(quote);
    for &byte in data {
        match byte {
            b'\\' => out.push_str("\\\\"),
            b'\n' => out.push_str("\\n"),
            b'\r' => out.push_str("\\r"),
            b'\t' => out.push_str("\\t"),
            b if b as char == quote => {
                out.push('\\');
                out.push(quote);
            }
            0x20..=0x7e => out.push(byte as char),
            _ => {
                let _ = write!(out, "\\x{:02x}", byte);
            }
        }
    }
    out.push(quote);
}

fn write_text_literal(s: &str, out: &mut String) {
    let quote = choose_quote(s.contains('\''), s.contains('"'));
    out.push(quote);
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c == quote => {
                out.push('\\');
                out.push(quote);
            }
            c if is_printable(c) => out.push(c),
            c => {
                let code = c as u32;
                let _ = if code < 0x100 {
                    write!(out, "\\x{:02x}", code)
                } else if code < 0x10000 {
                    write!(out, "\\u{:04x}", code)
                } else {
                    write!(out, "\\U{:08x}", code)
                };
            }
        }
    }
    out.push(quote);
}

/// Escaped in text literals: control characters (Cc), format characters
/// (Cf), space separators other than `' '` (Zs), line and paragraph
/// separators (Zl, Zp) and private-use code points (Co). Unassigned code
/// points are written as is.
fn is_printable(c: char) -> bool {
    !(c.is_control()
        || matches!(
            c,
            // Zs
            '\u{a0}'
                | '\u{1680}'
                | '\u{2000}'..='\u{200a}'
                | '\u{202f}'
                | '\u{205f}'
                | '\u{3000}'
                // Zl, Zp
                | '\u{2028}'
                | '\u{2029}'
                // Cf
                | '\u{ad}'
                | '\u{600}'..='\u{605}'
                | '\u{61c}'
                | '\u{6dd}'
                | '\u{70f}'
                | '\u{890}'..='\u{891}'
                | '\u{8e2}'
                | '\u{180e}'
                | '\u{200b}'..='\u{200f}'
                | '\u{202a}'..='\u{202e}'
                | '\u{2060}'..='\u{2064}'
                | '\u{2066}'..='\u{206f}'
                | '\u{feff}'
                | '\u{fff9}'..='\u{fffb}'
                | '\u{110bd}'
                | '\u{110cd}'
                | '\u{13430}'..='\u{1343f}'
                | '\u{1bca0}'..='\u{1bca3}'
                | '\u{1d173}'..='\u{1d17a}'
                | '\u{e0001}'
                | '\u{e0020}'..='\u{e007f}'
                // Co
                | '\u{e000}'..='\u{f8ff}'
                | '\u{f0000}'..='\u{ffffd}'
                | '\u{100000}'..='\u{10fffd}'
        ))
}
