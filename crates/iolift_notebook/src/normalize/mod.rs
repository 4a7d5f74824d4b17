//! Code-cell field normalization.
//!
//! Notebook front ends expect every code cell to carry a numeric
//! `execution_count` and an `outputs` array. Hand-edited notebooks often
//! lack one or both.

use serde_json::{Map, Number, Value};

/// Ensure `execution_count` is a number and `outputs` is an array.
///
/// Missing fields are appended. A non-numeric `execution_count` is coerced:
/// numeric strings parse, booleans become 0 or 1, and anything else becomes
/// 0. A non-array `outputs` is replaced by `[]`. Returns `true` if the cell
/// changed.
pub fn normalize_cell(cell: &mut Map<String, Value>) -> bool {
    let mut changed = false;

    match cell.get("execution_count") {
        Some(Value::Number(_)) => {}
        Some(other) => {
            let count = coerce_count(other);
            cell.insert("execution_count".to_owned(), count);
            changed = true;
        }
        None => {
            cell.insert("execution_count".to_owned(), Value::from(0));
            changed = true;
        }
    }

    if !cell.get("outputs").is_some_and(Value::is_array) {
        cell.insert("outputs".to_owned(), Value::Array(Vec::new()));
        changed = true;
    }

    changed
}

/// Numeric coercion for a non-number `execution_count`.
fn coerce_count(value: &Value) -> Value {
    match value {
        Value::Bool(flag) => Value::from(u8::from(*flag)),
        Value::String(text) => parse_count(text.trim()),
        _ => Value::from(0),
    }
}

/// Whole numbers come back as integers, whatever their spelling (`3.0`,
/// `1e3`).
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    clippy::float_cmp,
    reason = "whole and range-checked before the cast"
)]
fn parse_count(text: &str) -> Value {
    if let Ok(int) = text.parse::<i64>() {
        return Value::from(int);
    }
    match text.parse::<f64>() {
        Ok(float) if float.is_finite() && float != 0.0 => {
            if float.fract() == 0.0 && float >= i64::MIN as f64 && float < i64::MAX as f64 {
                Value::from(float as i64)
            } else {
                Number::from_f64(float).map_or_else(|| Value::from(0), Value::Number)
            }
        }
        _ => Value::from(0),
    }
}
