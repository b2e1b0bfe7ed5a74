//! Debug rendering of a value tree.
//!
//! Output is meant for people: containers get spaces inside the brackets,
//! numbers print with six fractional digits, and strings are written raw
//! between quotes without escaping. It is not guaranteed to parse back; use
//! [`super::encode`] for JSON output.

use super::types::{Array, Object, Value};

/// Render an object for diagnostics.
pub fn dump(root: &Object<'_>) -> String {
    let mut output = String::new();
    dump_object(root, &mut output);
    output
}

/// Render any value for diagnostics.
pub fn dump_value(value: &Value<'_>) -> String {
    let mut output = String::new();
    dump_into(value, &mut output);
    output
}

fn dump_into(value: &Value<'_>, output: &mut String) {
    match value {
        Value::Null => output.push_str("null"),
        Value::Bool(true) => output.push_str("true"),
        Value::Bool(false) => output.push_str("false"),
        Value::Number(n) => output.push_str(&format!("{n:.6}")),
        Value::String(s) => {
            output.push('"');
            output.push_str(&s.to_string_lossy());
            output.push('"');
        }
        Value::Array(arr) => dump_array(arr, output),
        Value::Object(obj) => dump_object(obj, output),
    }
}

fn dump_array(arr: &Array<'_>, output: &mut String) {
    if arr.is_empty() {
        output.push_str("[]");
        return;
    }
    output.push_str("[ ");
    for (i, value) in arr.iter().enumerate() {
        if i > 0 {
            output.push_str(", ");
        }
        dump_into(value, output);
    }
    output.push_str(" ]");
}

fn dump_object(obj: &Object<'_>, output: &mut String) {
    if obj.is_empty() {
        output.push_str("{}");
        return;
    }
    output.push_str("{ ");
    for (i, member) in obj.iter().enumerate() {
        if i > 0 {
            output.push_str(", ");
        }
        output.push('"');
        output.push_str(&member.key().to_string_lossy());
        output.push_str("\": ");
        dump_into(member.value(), output);
    }
    output.push_str(" }");
}
