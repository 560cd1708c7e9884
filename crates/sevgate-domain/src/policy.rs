//! Fixed gate thresholds. These are constants by design of the gate contract; there is no
//! policy configuration.

use sevgate_types::{Decision, SeverityCounts, ids};

/// `medium` findings at or above this count produce `WARN`.
pub const MEDIUM_WARN_THRESHOLD: u64 = 5;

/// The rule that produced a decision, in evaluation order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GateRule {
    /// `critical > 0`
    CriticalFindings,
    /// `high > 0`
    HighFindings,
    /// `medium >= MEDIUM_WARN_THRESHOLD`
    MediumVolume,
    /// nothing matched
    Clean,
}

impl GateRule {
    /// Rules in the order they are tried. The first match wins.
    pub const ORDER: [GateRule; 4] = [
        GateRule::CriticalFindings,
        GateRule::HighFindings,
        GateRule::MediumVolume,
        GateRule::Clean,
    ];

    /// Whether this rule fires for `counts`, ignoring the rules ahead of it.
    pub fn matches(self, counts: &SeverityCounts) -> bool {
        match self {
            GateRule::CriticalFindings => counts.critical > 0,
            GateRule::HighFindings => counts.high > 0,
            GateRule::MediumVolume => counts.medium >= MEDIUM_WARN_THRESHOLD,
            GateRule::Clean => true,
        }
    }

    pub fn id(self) -> &'static str {
        match self {
            GateRule::CriticalFindings => ids::RULE_CRITICAL_FINDINGS,
            GateRule::HighFindings => ids::RULE_HIGH_FINDINGS,
            GateRule::MediumVolume => ids::RULE_MEDIUM_VOLUME,
            GateRule::Clean => ids::RULE_CLEAN,
        }
    }

    pub fn decision(self) -> Decision {
        match self {
            GateRule::CriticalFindings => Decision::Block,
            GateRule::HighFindings | GateRule::MediumVolume => Decision::Warn,
            GateRule::Clean => Decision::Allow,
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            GateRule::CriticalFindings => "critical findings present",
            GateRule::HighFindings => "high findings present",
            GateRule::MediumVolume => "medium findings at or above threshold",
            GateRule::Clean => "no findings above threshold",
        }
    }
}
