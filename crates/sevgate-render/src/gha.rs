use crate::{RenderableDecision, RenderableReport};

/// Render the decision as a GitHub Actions workflow command.
///
/// Format: `::{level} title=Security Gate::{message}`
pub fn render_github_annotation(report: &RenderableReport) -> String {
    let level = match report.decision {
        RenderableDecision::Block => "error",
        RenderableDecision::Warn => "warning",
        RenderableDecision::Allow => "notice",
    };

    let mut message = format!(
        "[sevgate] {}: critical={} high={} medium={}",
        report.decision.label(),
        report.counts.critical,
        report.counts.high,
        report.counts.medium
    );
    if let Some(reason) = &report.reason {
        message.push_str(&format!(" ({reason})"));
    }

    format!("::{level} title=Security Gate::{}", escape_data(&message))
}

fn escape_data(s: &str) -> String {
    s.replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}
