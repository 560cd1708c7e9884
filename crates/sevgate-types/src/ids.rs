//! Stable identifiers for severity labels and gate rules.
//!
//! Severity labels are the keys read from the scan report. Rule ids are short
//! snake_case discriminators naming which threshold produced a decision.

// Severity labels
pub const SEVERITY_CRITICAL: &str = "critical";
pub const SEVERITY_HIGH: &str = "high";
pub const SEVERITY_MEDIUM: &str = "medium";

// Gate rules, in evaluation order
pub const RULE_CRITICAL_FINDINGS: &str = "critical_findings";
pub const RULE_HIGH_FINDINGS: &str = "high_findings";
pub const RULE_MEDIUM_VOLUME: &str = "medium_volume";
pub const RULE_CLEAN: &str = "clean";

// Default artifact locations
pub const DEFAULT_INPUT_PATH: &str = "scan_result.json";
pub const DEFAULT_OUTPUT_PATH: &str = "gate_decision.json";
pub const DEFAULT_CONFIG_PATH: &str = "sevgate.toml";
