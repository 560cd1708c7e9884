//! The `check` use case: load, evaluate, persist.

use anyhow::Context;
use camino::Utf8Path;
use sevgate_domain::GateOutcome;
use sevgate_settings::{Overrides, ResolvedConfig};
use sevgate_types::{Decision, GateDecisionRecord};

use crate::{load::load_report, write::write_decision};

/// Exit code for tool failures (bad config, unwritable decision file).
pub const EXIT_TOOL_ERROR: i32 = 2;

/// Input for the gate use case.
#[derive(Clone, Debug)]
pub struct GateInput<'a> {
    /// Config file contents (empty string if not found).
    pub config_text: &'a str,
    /// Directory holding the config file; relative config paths resolve against it.
    pub config_dir: &'a Utf8Path,
    /// CLI overrides.
    pub overrides: Overrides,
}

/// Output from the gate use case.
#[derive(Clone, Debug)]
pub struct GateOutput {
    pub outcome: GateOutcome,
    /// The record as persisted.
    pub record: GateDecisionRecord,
    pub resolved_config: ResolvedConfig,
}

/// Run the gate: resolve paths, load the scan report, evaluate, write the decision.
///
/// Scan report problems never fail this; config and write problems do.
pub fn run_gate(input: GateInput<'_>) -> anyhow::Result<GateOutput> {
    let resolved = resolve_paths(input.config_text, input.config_dir, input.overrides.clone())?;

    let report = load_report(&resolved.input_path);
    let outcome = sevgate_domain::evaluate(&report);

    tracing::info!(
        decision = %outcome.decision,
        rule = outcome.rule.id(),
        critical = outcome.counts.critical,
        high = outcome.counts.high,
        medium = outcome.counts.medium,
        "gate evaluated"
    );

    let record = write_decision(outcome.decision, outcome.counts, &resolved.output_path)
        .context("write decision")?;

    Ok(GateOutput {
        outcome,
        record,
        resolved_config: resolved,
    })
}

/// Parse config (empty is allowed, defaults apply) and resolve the gate's paths.
pub fn resolve_paths(
    config_text: &str,
    config_dir: &Utf8Path,
    overrides: Overrides,
) -> anyhow::Result<ResolvedConfig> {
    let cfg = if config_text.trim().is_empty() {
        sevgate_settings::SevgateConfigV1::default()
    } else {
        sevgate_settings::parse_config_toml(config_text)
            .context("parse config")?
            .rebased(config_dir)
    };

    sevgate_settings::resolve_config(cfg, overrides).context("resolve config")
}

/// Map decision to exit code: 1 = block, 0 = warn/allow.
pub fn decision_exit_code(decision: Decision) -> i32 {
    match decision {
        Decision::Block => 1,
        Decision::Warn => 0,
        Decision::Allow => 0,
    }
}
