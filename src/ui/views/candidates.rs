//! Candidate listing views

use bce_cert_cleaner::{CandidateList, Certificate, InventoryStats};

use crate::ui::blocks::header::CommandHeader;
use crate::ui::context::UiContext;
use crate::ui::primitives::border::BorderChar;
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

use super::inventory::render_inventory_stats;
use super::{expiry_with_age, rule};

/// Command header with the effective mode
pub fn render_clean_header(mode: &str, log: Option<&str>, ui: &UiContext) -> String {
    let mut header = CommandHeader::new(Icon::Clean, "BCE Certificate Cleaner");
    header.add("Mode", mode);
    header.add("Log", log.unwrap_or("stderr"));
    header.render(ui.color, ui.unicode)
}

/// Numbered list of candidates with expiry age at the frozen instant
pub fn render_candidate_list(candidates: &CandidateList, interactive: bool, ui: &UiContext) -> String {
    let now = candidates.evaluated_at();
    let heavy = rule(BorderChar::Rule, ui.caps.width, ui.unicode);
    let light = rule(BorderChar::Horizontal, ui.caps.width, ui.unicode);

    let mut out = ColoredText::warning(format!(
        "Found {} unused expired certificates:",
        candidates.len()
    ))
    .bold()
    .render(ui.color);
    out.push('\n');

    if interactive {
        out.push_str("\n[interactive] You will confirm each certificate below\n");
    }

    out.push_str(&heavy);
    out.push('\n');
    for (i, cert) in candidates.iter().enumerate() {
        out.push_str(&format!("[{}] ", i + 1));
        out.push_str(&certificate_details(cert, now, 4));
        out.push_str(&light);
        out.push('\n');
    }
    out
}

/// `ID`, name, common name and expiry lines; the first line has no indent
pub(crate) fn certificate_details(
    cert: &Certificate,
    now: chrono::DateTime<chrono::Utc>,
    indent: usize,
) -> String {
    let pad = " ".repeat(indent);
    format!(
        "ID: {}\n{pad}Name: {}\n{pad}Common name: {}\n{pad}Expires: {}\n",
        cert.id(),
        cert.name(),
        cert.common_name(),
        expiry_with_age(cert, now),
        pad = pad
    )
}

/// Nothing to clean; with `--interactive` also explain why nothing is asked
pub fn render_no_candidates(
    interactive_requested: bool,
    stats: &InventoryStats,
    ui: &UiContext,
) -> String {
    let mut out = format!(
        "{} {}\n",
        Icon::Success.colored(ui.color, ui.unicode),
        ColoredText::success("No unused expired certificates found").render(ui.color)
    );

    if interactive_requested {
        out.push_str("\nNote: --interactive only applies to certificates that are both unused and expired.\n");
        out.push_str("Every certificate is currently in use or still valid, so there is nothing to confirm.\n\n");
        out.push_str(&render_inventory_stats(stats, ui));
    }
    out
}

/// Footer for simulate-only runs
pub fn render_simulate_footer(ui: &UiContext) -> String {
    format!(
        "\n{}\n{} Run again without --dry-run to delete them\n",
        ColoredText::info("[dry run] The certificates above would be deleted").render(ui.color),
        Icon::Arrow.colored(ui.color, ui.unicode)
    )
}
