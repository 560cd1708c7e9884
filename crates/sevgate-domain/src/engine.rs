use crate::policy::GateRule;
use crate::report::ScanReport;
use sevgate_types::{Decision, SeverityCounts, ids};

/// Result of evaluating one scan report.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GateOutcome {
    pub decision: Decision,
    pub rule: GateRule,
    pub counts: SeverityCounts,
}

impl GateOutcome {
    /// `(decision, critical, high, medium)`
    pub fn into_parts(self) -> (Decision, u64, u64, u64) {
        (
            self.decision,
            self.counts.critical,
            self.counts.high,
            self.counts.medium,
        )
    }
}

pub fn evaluate(report: &ScanReport) -> GateOutcome {
    let counts = resolve_counts(report);
    let rule = decide(&counts);

    GateOutcome {
        decision: rule.decision(),
        rule,
        counts,
    }
}

pub fn resolve_counts(report: &ScanReport) -> SeverityCounts {
    SeverityCounts {
        critical: report.count(ids::SEVERITY_CRITICAL),
        high: report.count(ids::SEVERITY_HIGH),
        medium: report.count(ids::SEVERITY_MEDIUM),
    }
}

/// First match wins; a higher tier always shadows the lower ones.
pub fn decide(counts: &SeverityCounts) -> GateRule {
    GateRule::ORDER
        .into_iter()
        .find(|rule| rule.matches(counts))
        .unwrap_or(GateRule::Clean)
}
