//! Textual rendering of JSON values inside generated statements.
//!
//! Rendering mirrors script-style string conversion (`String(v)` and
//! `Array.prototype.join`): no escaping happens anywhere, and the two
//! statement kinds disagree on how strings and nulls are written. Numbers
//! are doubles, so integers past 2^53 lose their low digits.

use serde_json::{Number, Value};

/// Largest integer a double holds exactly.
const MAX_SAFE_INTEGER: u64 = (1 << 53) - 1;

/// Renders a value for the VALUES list of an INSERT.
///
/// Strings are wrapped in single quotes as-is; nulls become empty text.
pub fn insert_literal(value: &Value) -> String {
    match value {
        Value::String(s) => format!("'{s}'"),
        other => joined_text(other),
    }
}

/// Renders a value for the WHERE clause of a SELECT.
///
/// Nothing is quoted, strings included.
pub fn filter_literal(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        other => joined_text(other),
    }
}

// Text of a value as an element of an array join: null is empty, nested
// arrays flatten with commas, objects collapse to a fixed tag.
fn joined_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => number_text(n),
        Value::String(s) => s.clone(),
        Value::Array(items) => items.iter().map(joined_text).collect::<Vec<_>>().join(","),
        Value::Object(_) => "[object Object]".to_string(),
    }
}

fn number_text(n: &Number) -> String {
    if let Some(i) = n.as_i64().filter(|i| i.unsigned_abs() <= MAX_SAFE_INTEGER) {
        return i.to_string();
    }
    let Some(f) = n.as_f64() else {
        return n.to_string();
    };
    if f == 0.0 {
        return "0".to_string();
    }

    let magnitude = f.abs();
    if (1e-6..1e21).contains(&magnitude) {
        return format!("{f}");
    }

    // Exponent form with an explicit sign on positive exponents, e.g. `1e+21`.
    let sci = format!("{f:e}");
    match sci.split_once('e') {
        Some((mantissa, exp)) if !exp.starts_with('-') => format!("{mantissa}e+{exp}"),
        _ => sci,
    }
}
