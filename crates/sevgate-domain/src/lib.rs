//! Pure gate evaluation (no IO).
//!
//! Input: a scan report loaded elsewhere.
//! Output: a decision, the resolved counts, and the rule that fired.

#![forbid(unsafe_code)]

pub mod coerce;
pub mod policy;
pub mod report;

mod engine;

#[cfg(test)]
mod properties;

pub use coerce::{parse_int_literal, to_int};
pub use engine::{GateOutcome, decide, evaluate, resolve_counts};
pub use policy::{GateRule, MEDIUM_WARN_THRESHOLD};
pub use report::ScanReport;
