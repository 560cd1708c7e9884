//! Fuzz target for scan report evaluation.
//!
//! Goal: any bytes that parse as JSON evaluate without panicking, and the
//! decision always agrees with the first-match rule on the resolved counts.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_scan_report
//! ```

#![no_main]

use libfuzzer_sys::fuzz_target;
use sevgate_domain::{ScanReport, decide, evaluate};
use sevgate_types::Decision;

fuzz_target!(|data: &[u8]| {
    let Ok(value) = serde_json::from_slice::<serde_json::Value>(data) else {
        return;
    };

    let report = ScanReport::from_value(value);
    let outcome = evaluate(&report);

    assert_eq!(outcome.rule, decide(&outcome.counts));
    if outcome.counts.critical > 0 {
        assert_eq!(outcome.decision, Decision::Block);
    } else {
        assert_ne!(outcome.decision, Decision::Block);
    }
});
