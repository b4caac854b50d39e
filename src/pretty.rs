//! Re-indentation of exported JSON.
//!
//! Only whitespace between tokens changes. String and number tokens are
//! copied byte for byte, duplicate keys are kept, and nesting depth is
//! unbounded.

use std::str::Chars;

use serde::de::IgnoredAny;

const INDENT: &str = "  ";

/// Re-indent `data` with two spaces per nesting level.
///
/// Empty objects and arrays stay inline as `{}` and `[]`. Leading and
/// trailing whitespace is dropped, so the output has no trailing newline.
///
/// # Errors
///
/// Returns the parse error if `data` is not a single valid JSON value.
pub fn indent(data: &str) -> Result<String, serde_json::Error> {
    // Skipping a value walks it iteratively and never converts numbers.
    serde_json::from_str::<IgnoredAny>(data)?;
    Ok(reindent(data))
}

/// Rewrites the whitespace of already validated JSON text.
fn reindent(data: &str) -> String {
    let mut out = String::with_capacity(data.len() + data.len() / 2);
    let mut chars = data.chars();
    let mut depth = 0usize;
    // Set after an opening bracket until we know whether the container is empty.
    let mut pending = false;

    while let Some(c) = chars.next() {
        match c {
            ' ' | '\t' | '\n' | '\r' => {}
            '{' | '[' => {
                if pending {
                    newline(&mut out, depth);
                }
                out.push(c);
                depth += 1;
                pending = true;
            }
            '}' | ']' => {
                depth = depth.saturating_sub(1);
                if pending {
                    pending = false;
                } else {
                    newline(&mut out, depth);
                }
                out.push(c);
            }
            ',' => {
                out.push(',');
                newline(&mut out, depth);
            }
            ':' => out.push_str(": "),
            _ => {
                if pending {
                    newline(&mut out, depth);
                    pending = false;
                }
                out.push(c);
                if c == '"' {
                    copy_string_body(&mut chars, &mut out);
                }
            }
        }
    }
    out
}

/// Copies a string token up to and including its closing quote.
fn copy_string_body(chars: &mut Chars<'_>, out: &mut String) {
    while let Some(c) = chars.next() {
        out.push(c);
        match c {
            '\\' => {
                if let Some(escaped) = chars.next() {
                    out.push(escaped);
                }
            }
            '"' => return,
            _ => {}
        }
    }
}

fn newline(out: &mut String, depth: usize) {
    out.push('\n');
    for _ in 0..depth {
        out.push_str(INDENT);
    }
}
