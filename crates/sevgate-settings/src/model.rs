use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// `sevgate.toml` schema v1.
///
/// Unknown keys are rejected. There are no threshold keys; thresholds are fixed.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct SevgateConfigV1 {
    /// Optional schema string for tooling (`sevgate.config.v1`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,

    /// Where to read severity counts from (default `scan_result.json`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input_path: Option<String>,

    /// Where to write the gate decision (default `gate_decision.json`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_path: Option<String>,
}
