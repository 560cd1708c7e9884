//! Render use cases: console line, Markdown and GitHub annotations from a decision record.

use anyhow::Context;
use camino::Utf8Path;
use sevgate_render::{RenderableCounts, RenderableDecision, RenderableReport};
use sevgate_types::{Decision, GateDecisionRecord};
use time::format_description::well_known::Rfc3339;

/// Read a persisted decision file. Unlike the scan report, this is our own contract, so a
/// missing or malformed file is an error.
pub fn read_decision_file(path: &Utf8Path) -> anyhow::Result<GateDecisionRecord> {
    let text =
        std::fs::read_to_string(path).with_context(|| format!("read decision: {}", path))?;
    serde_json::from_str(&text).with_context(|| format!("parse decision: {}", path))
}

pub fn to_renderable(record: &GateDecisionRecord) -> RenderableReport {
    // The rule is a pure function of the counts; only report it when it agrees with the
    // persisted decision.
    let rule = sevgate_domain::decide(&record.counts);
    let reason = (rule.decision() == record.decision).then(|| rule.description().to_string());

    RenderableReport {
        decision: renderable_decision(record.decision),
        counts: RenderableCounts {
            critical: record.counts.critical,
            high: record.counts.high,
            medium: record.counts.medium,
        },
        reason,
        generated_at_utc: record.generated_at_utc.format(&Rfc3339).ok(),
    }
}

pub fn console_line(decision: Decision) -> &'static str {
    sevgate_render::render_console_line(renderable_decision(decision))
}

pub fn render_markdown(record: &GateDecisionRecord) -> String {
    sevgate_render::render_markdown(&to_renderable(record))
}

pub fn render_annotation(record: &GateDecisionRecord) -> String {
    sevgate_render::render_github_annotation(&to_renderable(record))
}

fn renderable_decision(decision: Decision) -> RenderableDecision {
    match decision {
        Decision::Block => RenderableDecision::Block,
        Decision::Warn => RenderableDecision::Warn,
        Decision::Allow => RenderableDecision::Allow,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use camino::Utf8PathBuf;
    use sevgate_types::SeverityCounts;
    use time::macros::datetime;

    fn record(decision: Decision, counts: SeverityCounts) -> GateDecisionRecord {
        GateDecisionRecord::new(decision, counts, datetime!(2025-01-01 00:00:00 UTC))
    }

    #[test]
    fn renderable_carries_reason_and_timestamp() {
        let r = to_renderable(&record(Decision::Warn, SeverityCounts::new(0, 0, 6)));
        assert_eq!(r.decision, RenderableDecision::Warn);
        assert_eq!(r.counts.medium, 6);
        assert_eq!(
            r.reason.as_deref(),
            Some("medium findings at or above threshold")
        );
        assert_eq!(r.generated_at_utc.as_deref(), Some("2025-01-01T00:00:00Z"));
    }

    #[test]
    fn inconsistent_record_has_no_reason() {
        let r = to_renderable(&record(Decision::Allow, SeverityCounts::new(3, 0, 0)));
        assert_eq!(r.decision, RenderableDecision::Allow);
        assert!(r.reason.is_none());
    }

    #[test]
    fn console_lines_match_decisions() {
        assert!(console_line(Decision::Block).contains("BLOCKED"));
        assert!(console_line(Decision::Warn).contains("WARNING"));
        assert!(console_line(Decision::Allow).contains("ALLOWED"));
    }

    #[test]
    fn read_decision_file_round_trips_writer_output() {
        let tmp = tempfile::tempdir().expect("create temp dir");
        let root = Utf8PathBuf::from_path_buf(tmp.path().to_path_buf()).expect("utf8 path");
        let path = root.join("gate_decision.json");

        let written = record(Decision::Block, SeverityCounts::new(2, 0, 0));
        crate::write_record(&written, &path).expect("write");

        let read = read_decision_file(&path).expect("read");
        assert_eq!(read, written);
        assert!(render_annotation(&read).starts_with("::error "));
        assert!(render_markdown(&read).contains("**BLOCK**"));
    }

    #[test]
    fn read_decision_file_rejects_garbage() {
        let tmp = tempfile::tempdir().expect("create temp dir");
        let root = Utf8PathBuf::from_path_buf(tmp.path().to_path_buf()).expect("utf8 path");
        let path = root.join("gate_decision.json");
        std::fs::write(&path, r#"{"decision": "MAYBE"}"#).expect("write");

        assert!(read_decision_file(&path).is_err());
        assert!(read_decision_file(&root.join("absent.json")).is_err());
    }
}
