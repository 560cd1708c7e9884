use crate::RenderableDecision;

/// The single stdout line for a decision. `WARN` and `ALLOW` share exit code 0, so the marker
/// is the only console-level difference between them.
pub fn render_console_line(decision: RenderableDecision) -> &'static str {
    match decision {
        RenderableDecision::Block => "❌ Security Gate: BLOCKED (critical issues found)",
        RenderableDecision::Warn => "⚠️ Security Gate: WARNING (review required)",
        RenderableDecision::Allow => "✅ Security Gate: ALLOWED",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn markers_are_distinct() {
        let lines = [
            render_console_line(RenderableDecision::Block),
            render_console_line(RenderableDecision::Warn),
            render_console_line(RenderableDecision::Allow),
        ];
        assert!(lines[0].starts_with('❌'));
        assert!(lines[1].starts_with('⚠'));
        assert!(lines[2].starts_with('✅'));
        assert!(lines.iter().all(|l| !l.contains('\n')));
    }
}
