#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RenderableDecision {
    Block,
    Warn,
    Allow,
}

impl RenderableDecision {
    pub fn label(self) -> &'static str {
        match self {
            RenderableDecision::Block => "BLOCK",
            RenderableDecision::Warn => "WARN",
            RenderableDecision::Allow => "ALLOW",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RenderableCounts {
    pub critical: u64,
    pub high: u64,
    pub medium: u64,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderableReport {
    pub decision: RenderableDecision,
    pub counts: RenderableCounts,
    /// Human-readable reason, when the rule that fired is known.
    pub reason: Option<String>,
    pub generated_at_utc: Option<String>,
}
