//! Compact JSON encoder.
//!
//! Unlike [`super::dump`], the output is valid JSON that parses back to an
//! equal tree. Member order is preserved and duplicates are written as they
//! are. It is not a byte-for-byte reproduction of the input: whitespace is
//! dropped and numbers are re-formatted (`1.50` becomes `1.5`).

use super::types::{Array, JsonStr, Object, Value};

/// Serialize an f64 as a JSON number.
///
/// Finite values use Rust's shortest round-trip formatting, which never emits
/// an exponent or a trailing `.0`. JSON has no NaN or infinity, so those
/// become `null`.
pub fn serialize_number(value: f64) -> String {
    if value.is_finite() {
        format!("{value}")
    } else {
        "null".to_string()
    }
}

/// Encode an object as compact JSON.
pub fn encode(root: &Object<'_>) -> String {
    let mut output = String::new();
    serialize_object(root, &mut output);
    output
}

/// Encode any value as compact JSON.
pub fn encode_value(value: &Value<'_>) -> String {
    let mut output = String::new();
    serialize_value(value, &mut output);
    output
}

fn serialize_value(value: &Value<'_>, output: &mut String) {
    match value {
        Value::Null => output.push_str("null"),
        Value::Bool(true) => output.push_str("true"),
        Value::Bool(false) => output.push_str("false"),
        Value::Number(n) => output.push_str(&serialize_number(*n)),
        Value::String(s) => serialize_string(*s, output),
        Value::Array(arr) => serialize_array(arr, output),
        Value::Object(obj) => serialize_object(obj, output),
    }
}

/// Write a raw slice between quotes.
///
/// The parser has already validated every escape in the slice, so it is
/// copied through. Raw control characters are the only thing JSON forbids
/// that the scanner lets through; those get escaped here.
fn serialize_string(s: JsonStr<'_>, output: &mut String) {
    output.push('"');
    for ch in s.to_string_lossy().chars() {
        match ch {
            '\x08' => output.push_str("\\b"),
            '\x0C' => output.push_str("\\f"),
            '\n' => output.push_str("\\n"),
            '\r' => output.push_str("\\r"),
            '\t' => output.push_str("\\t"),
            c if c < '\x20' => {
                output.push_str(&format!("\\u{:04x}", c as u32));
            }
            c => output.push(c),
        }
    }
    output.push('"');
}

fn serialize_array(arr: &Array<'_>, output: &mut String) {
    output.push('[');
    for (i, value) in arr.iter().enumerate() {
        if i > 0 {
            output.push(',');
        }
        serialize_value(value, output);
    }
    output.push(']');
}

fn serialize_object(obj: &Object<'_>, output: &mut String) {
    output.push('{');
    for (i, member) in obj.iter().enumerate() {
        if i > 0 {
            output.push(',');
        }
        serialize_string(member.key(), output);
        output.push(':');
        serialize_value(member.value(), output);
    }
    output.push('}');
}
