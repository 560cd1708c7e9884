use crate::{RenderableDecision, RenderableReport};

pub fn render_markdown(report: &RenderableReport) -> String {
    let mut out = String::new();

    out.push_str("# Security gate\n\n");
    out.push_str(&format!("- Decision: **{}**\n", report.decision.label()));
    if let Some(reason) = &report.reason {
        out.push_str(&format!("- Reason: {}\n", reason));
    }
    if let Some(at) = &report.generated_at_utc {
        out.push_str(&format!("- Generated: `{}`\n", at));
    }
    out.push('\n');

    out.push_str("| Severity | Count |\n");
    out.push_str("| --- | ---: |\n");
    out.push_str(&format!("| critical | {} |\n", report.counts.critical));
    out.push_str(&format!("| high | {} |\n", report.counts.high));
    out.push_str(&format!("| medium | {} |\n", report.counts.medium));
    out.push('\n');

    let summary = match report.decision {
        RenderableDecision::Block => "Critical findings block this pipeline.",
        RenderableDecision::Warn => "Findings need review before release.",
        RenderableDecision::Allow => "No findings above the gate thresholds.",
    };
    out.push_str(summary);
    out.push('\n');

    out
}
