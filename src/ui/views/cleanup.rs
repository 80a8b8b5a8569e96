//! Cleanup result views

use bce_cert_cleaner::{CleanupOutcome, Termination};

use crate::ui::blocks::summary::ResultSummary;
use crate::ui::context::UiContext;

/// Final tally. Skips are listed only for per-item runs.
pub fn render_cleanup_result(outcome: &CleanupOutcome, interactive: bool, ui: &UiContext) -> String {
    let title = match outcome.termination {
        Termination::Quit { .. } => "Cleanup Stopped",
        _ if !outcome.is_success() => "Cleanup Finished With Errors",
        _ => "Cleanup Complete",
    };

    let mut summary = if outcome.is_success() {
        ResultSummary::success(title)
    } else {
        ResultSummary::partial(title)
    };

    summary.add_stat("succeeded", outcome.succeeded_count());
    if interactive {
        summary.add_stat("skipped", outcome.skipped_count());
    }
    summary.add_stat("failed", outcome.failed_count());

    for failed in &outcome.failed {
        summary.add_warning(format!("{} ({}): {}", failed.name, failed.id, failed.error));
    }

    if let Termination::Quit { at } = outcome.termination {
        let untouched = outcome.candidates.saturating_sub(at);
        summary.with_next_step(format!(
            "{} certificates were left untouched; run again to review them",
            untouched
        ));
    } else if !outcome.is_success() {
        summary.with_next_step("Check the log for details and run again to retry");
    }

    summary.render(ui.color, ui.unicode)
}

#[cfg(test)]
mod tests {
    use super::*;
    use bce_cert_cleaner::domain::ports::SkipReason;

    fn plain_ui() -> UiContext {
        UiContext::plain(80)
    }

    #[test]
    fn batch_tally_omits_skipped() {
        let mut outcome = CleanupOutcome::new(2);
        outcome.add_deleted("c1");
        outcome.add_failed("c2", "api", "denied");

        let rendered = render_cleanup_result(&outcome, false, &plain_ui());
        assert!(rendered.contains("Cleanup Finished With Errors"));
        assert!(rendered.contains("1 succeeded"));
        assert!(rendered.contains("1 failed"));
        assert!(!rendered.contains("skipped"));
        assert!(rendered.contains("api (c2): denied"));
    }

    #[test]
    fn interactive_quit_reports_untouched() {
        let mut outcome = CleanupOutcome::new(3).with_termination(Termination::Quit { at: 1 });
        outcome.add_skipped("c1", SkipReason::Declined);

        let rendered = render_cleanup_result(&outcome, true, &plain_ui());
        assert!(rendered.contains("Cleanup Stopped"));
        assert!(rendered.contains("1 skipped"));
        assert!(rendered.contains("2 certificates were left untouched"));
    }
}
