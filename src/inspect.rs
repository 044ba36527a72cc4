//! Depth- and width-limited rendering of opaque term values.
//!
//! Report payloads (names, states, events, reasons) arrive as opaque
//! [`Value`] terms already atomized by the engine; strings therefore render
//! bare, without quotes. Output is deterministic for a given value and
//! option set.

use serde_json::Value;

use crate::types::InspectOpts;

/// Elision marker used when a limit is reached.
const ELLIPSIS: &str = "...";

/// Render a term value honoring the configured limits.
pub fn inspect(value: &Value, opts: &InspectOpts) -> String {
    let mut out = String::new();
    write_value(&mut out, value, 0, opts);
    out
}

/// Render a sequence of terms as one bracketed list.
pub fn inspect_seq(items: &[Value], opts: &InspectOpts) -> String {
    let mut out = String::new();
    out.push('[');
    write_items(&mut out, items, 0, opts);
    out.push(']');
    out
}

fn write_value(out: &mut String, value: &Value, depth: usize, opts: &InspectOpts) {
    match value {
        Value::Null => out.push_str("nil"),
        Value::Bool(b) => out.push_str(if *b { "true" } else { "false" }),
        Value::Number(n) => out.push_str(&n.to_string()),
        Value::String(s) => write_string(out, s, opts),
        Value::Array(items) => {
            if past_depth(depth, opts) {
                out.push_str(ELLIPSIS);
                return;
            }
            out.push('[');
            write_items(out, items, depth, opts);
            out.push(']');
        }
        Value::Object(record) => {
            if past_depth(depth, opts) {
                out.push_str(ELLIPSIS);
                return;
            }
            out.push('{');
            let limit = opts.max_items.unwrap_or(usize::MAX);
            for (i, (key, val)) in record.iter().enumerate() {
                if i == limit {
                    push_separator(out, i);
                    out.push_str(ELLIPSIS);
                    break;
                }
                push_separator(out, i);
                out.push_str(key);
                out.push_str(": ");
                write_value(out, val, depth + 1, opts);
            }
            out.push('}');
        }
    }
}

fn write_items(out: &mut String, items: &[Value], depth: usize, opts: &InspectOpts) {
    let limit = opts.max_items.unwrap_or(usize::MAX);
    for (i, item) in items.iter().enumerate() {
        if i == limit {
            push_separator(out, i);
            out.push_str(ELLIPSIS);
            break;
        }
        push_separator(out, i);
        write_value(out, item, depth + 1, opts);
    }
}

fn write_string(out: &mut String, s: &str, opts: &InspectOpts) {
    match opts.max_string {
        Some(limit) if s.chars().count() > limit => {
            out.extend(s.chars().take(limit));
            out.push_str(ELLIPSIS);
        }
        _ => out.push_str(s),
    }
}

fn past_depth(depth: usize, opts: &InspectOpts) -> bool {
    opts.max_depth.is_some_and(|limit| depth >= limit)
}

fn push_separator(out: &mut String, index: usize) {
    if index > 0 {
        out.push_str(", ");
    }
}
