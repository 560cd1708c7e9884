//! Shared test utilities for the sevgate workspace.
//!
//! This crate exists because `xtask` needs the normalization at runtime (not behind
//! `#[cfg(test)]`), alongside the CLI integration tests.

use serde_json::Value;

/// Placeholder substituted for evaluation timestamps.
pub const TIMESTAMP_PLACEHOLDER: &str = "__TIMESTAMP__";

/// Normalize non-deterministic JSON fields for golden-file comparison.
///
/// `generated_at_utc` is replaced at any depth. The original value is checked to be a string
/// ending in `Z` first; anything else is left untouched so the comparison fails loudly.
pub fn normalize_nondeterministic(mut value: Value) -> Value {
    normalize_timestamps_recursive(&mut value);
    value
}

/// True when `s` looks like a UTC RFC 3339 timestamp with a literal `Z` suffix.
pub fn is_utc_z_timestamp(s: &str) -> bool {
    let bytes = s.as_bytes();
    bytes.len() >= 20
        && s.ends_with('Z')
        && bytes.get(4) == Some(&b'-')
        && bytes.get(7) == Some(&b'-')
        && bytes.get(10) == Some(&b'T')
        && bytes.get(13) == Some(&b':')
        && bytes.get(16) == Some(&b':')
}

fn normalize_timestamps_recursive(value: &mut Value) {
    match value {
        Value::Object(map) => {
            let is_stamp = matches!(
                map.get("generated_at_utc"),
                Some(Value::String(stamp)) if is_utc_z_timestamp(stamp)
            );
            if is_stamp {
                map.insert(
                    "generated_at_utc".to_string(),
                    Value::String(TIMESTAMP_PLACEHOLDER.to_string()),
                );
            }
            for val in map.values_mut() {
                normalize_timestamps_recursive(val);
            }
        }
        Value::Array(arr) => {
            for val in arr.iter_mut() {
                normalize_timestamps_recursive(val);
            }
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn normalizes_utc_timestamp() {
        let input = json!({
            "decision": "WARN",
            "counts": { "critical": 0, "high": 1, "medium": 2 },
            "generated_at_utc": "2025-01-01T00:00:00.123456Z"
        });

        let result = normalize_nondeterministic(input);
        assert_eq!(result["generated_at_utc"], TIMESTAMP_PLACEHOLDER);
        assert_eq!(result["counts"]["high"], 1);
    }

    #[test]
    fn leaves_non_utc_timestamps_alone() {
        let input = json!({ "generated_at_utc": "2025-01-01T00:00:00+02:00" });
        let result = normalize_nondeterministic(input);
        assert_eq!(result["generated_at_utc"], "2025-01-01T00:00:00+02:00");
    }

    #[test]
    fn placeholder_is_idempotent() {
        let input = json!({ "generated_at_utc": TIMESTAMP_PLACEHOLDER });
        let result = normalize_nondeterministic(input.clone());
        assert_eq!(result, input);
    }

    #[test]
    fn normalizes_nested_values() {
        let input = json!([{ "inner": { "generated_at_utc": "2030-12-31T23:59:59Z" } }]);
        let result = normalize_nondeterministic(input);
        assert_eq!(result[0]["inner"]["generated_at_utc"], TIMESTAMP_PLACEHOLDER);
    }

    #[test]
    fn timestamp_shape_check() {
        assert!(is_utc_z_timestamp("2025-01-01T00:00:00Z"));
        assert!(is_utc_z_timestamp("2025-01-01T00:00:00.5Z"));
        assert!(!is_utc_z_timestamp("2025-01-01T00:00:00"));
        assert!(!is_utc_z_timestamp("2025-01-01 00:00:00Z"));
        assert!(!is_utc_z_timestamp("Z"));
    }
}
