//! Fuzz target for count coercion.
//!
//! Goal: coercion of arbitrary text never panics, and a value that parses as an
//! integer literal coerces to that literal clamped into `0..=u64::MAX`.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_to_int
//! ```

#![no_main]

use libfuzzer_sys::fuzz_target;
use serde_json::Value;
use sevgate_domain::{parse_int_literal, to_int};

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };

    let coerced = to_int(&Value::String(text.to_string()));
    match parse_int_literal(text) {
        Some(n) => {
            let expected = u64::try_from(n.max(0)).unwrap_or(u64::MAX);
            assert_eq!(coerced, expected);
        }
        None => assert_eq!(coerced, 0),
    }
});
