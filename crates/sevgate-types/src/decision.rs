use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use time::{OffsetDateTime, UtcOffset};

/// Stable schema identifiers for sevgate artifacts.
pub const SCHEMA_DECISION_V1: &str = "sevgate.decision.v1";
pub const SCHEMA_CONFIG_V1: &str = "sevgate.config.v1";

/// Tri-state gate outcome. Serialized in upper case (`BLOCK`, `WARN`, `ALLOW`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "UPPERCASE")]
pub enum Decision {
    Block,
    Warn,
    Allow,
}

impl Decision {
    pub fn as_str(self) -> &'static str {
        match self {
            Decision::Block => "BLOCK",
            Decision::Warn => "WARN",
            Decision::Allow => "ALLOW",
        }
    }

    /// Only `BLOCK` stops the pipeline; `WARN` passes with a different message.
    pub fn is_blocking(self) -> bool {
        matches!(self, Decision::Block)
    }
}

impl std::fmt::Display for Decision {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Resolved, non-negative finding counts per severity tier.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct SeverityCounts {
    pub critical: u64,
    pub high: u64,
    pub medium: u64,
}

impl SeverityCounts {
    pub fn new(critical: u64, high: u64, medium: u64) -> Self {
        Self {
            critical,
            high,
            medium,
        }
    }
}

/// The persisted gate decision (`gate_decision.json`).
///
/// Field names and nesting are a downstream contract; orchestrators parse this file.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct GateDecisionRecord {
    pub decision: Decision,
    pub counts: SeverityCounts,
    /// Evaluation time, always UTC so RFC 3339 output ends in `Z`.
    #[schemars(with = "String")]
    #[serde(with = "time::serde::rfc3339")]
    pub generated_at_utc: OffsetDateTime,
}

impl GateDecisionRecord {
    pub fn new(decision: Decision, counts: SeverityCounts, generated_at: OffsetDateTime) -> Self {
        Self {
            decision,
            counts,
            generated_at_utc: generated_at.to_offset(UtcOffset::UTC),
        }
    }
}
