//! Stable DTOs and IDs used across the sevgate workspace.
//!
//! This crate is intentionally boring:
//! - the persisted decision record and its parts
//! - stable string IDs for severity labels and gate rules
//! - schema identifiers for emitted artifacts

#![forbid(unsafe_code)]

pub mod decision;
pub mod ids;

pub use decision::{
    Decision, GateDecisionRecord, SCHEMA_CONFIG_V1, SCHEMA_DECISION_V1, SeverityCounts,
};
