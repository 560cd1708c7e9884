//! Lenient count coercion.
//!
//! Scanners disagree on how they encode counts (`3`, `"3"`, `3.0`, `null`). Every shape is
//! collapsed to a non-negative integer here; anything that is not an integer becomes 0.

use serde_json::{Number, Value};

/// Coerce an arbitrary JSON value into a non-negative count. Never fails.
///
/// - integers pass through, negatives clamp to 0
/// - strings must be a base-10 integer literal (`"2.5"` and `"abc"` are 0)
/// - floats truncate toward zero
/// - booleans are 1/0
/// - null, arrays and objects are 0
pub fn to_int(value: &Value) -> u64 {
    match value {
        Value::Number(n) => number_to_count(n),
        Value::String(s) => parse_int_literal(s).map(clamp_count).unwrap_or(0),
        Value::Bool(b) => u64::from(*b),
        Value::Null | Value::Array(_) | Value::Object(_) => 0,
    }
}

/// Parse a base-10 integer literal.
///
/// Accepts surrounding whitespace, one leading sign, and single underscores between digits.
/// Fractions, exponents and radix prefixes are rejected. Magnitudes saturate at the `i128`
/// bounds instead of overflowing.
pub fn parse_int_literal(text: &str) -> Option<i128> {
    let text = text.trim();
    let (negative, digits) = match text.as_bytes().first()? {
        b'-' => (true, &text[1..]),
        b'+' => (false, &text[1..]),
        _ => (false, text),
    };

    if digits.is_empty()
        || digits.starts_with('_')
        || digits.ends_with('_')
        || digits.contains("__")
    {
        return None;
    }

    let mut magnitude: i128 = 0;
    for ch in digits.chars() {
        if ch == '_' {
            continue;
        }
        let digit = ch.to_digit(10)?;
        magnitude = magnitude
            .saturating_mul(10)
            .saturating_add(i128::from(digit));
    }

    Some(if negative { -magnitude } else { magnitude })
}

fn number_to_count(n: &Number) -> u64 {
    if let Some(v) = n.as_u64() {
        return v;
    }
    if n.is_i64() {
        // Only negative values reach this point.
        return 0;
    }
    // `as` truncates toward zero and saturates; negatives become 0.
    n.as_f64().map(|f| f as u64).unwrap_or(0)
}

fn clamp_count(v: i128) -> u64 {
    u64::try_from(v.max(0)).unwrap_or(u64::MAX)
}
