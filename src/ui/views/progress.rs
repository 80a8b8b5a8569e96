//! Live run narration and prompts

use bce_cert_cleaner::domain::ports::{RunEvent, SkipReason};
use bce_cert_cleaner::Certificate;

use crate::ui::context::UiContext;
use crate::ui::primitives::border::BorderChar;
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

use super::{format_expiry, rule};

/// Text for one event. Prompts end without a newline so the answer follows them.
pub fn render_event(event: &RunEvent, ui: &UiContext) -> String {
    let progress = Icon::Progress.colored(ui.color, ui.unicode);
    match event {
        RunEvent::CertificatesFetched { count } => {
            format!("{} Fetched {} certificates\n", progress, count)
        }
        RunEvent::DomainsFetched { count } => {
            format!(
                "{} Checking certificate usage on {} CDN domains...\n",
                progress, count
            )
        }
        RunEvent::UsageResolved {
            in_use,
            failed_lookups,
            foreign_bindings,
        } => render_usage(*in_use, *failed_lookups, *foreign_bindings, ui),
        RunEvent::BatchConfirmationRequested { count } => format!(
            "\n{} Delete the {} certificates above? (type yes to confirm): ",
            Icon::Prompt.colored(ui.color, ui.unicode),
            count
        ),
        RunEvent::BatchDeclined => format!(
            "{}\n",
            ColoredText::warning("Deletion cancelled").render(ui.color)
        ),
        RunEvent::DeletionStarted { .. } => {
            "\nDeleting unused expired certificates...\n".to_string()
        }
        RunEvent::CandidatePrompt {
            index,
            total,
            certificate,
            days_expired,
        } => render_item_prompt(*index, *total, certificate, *days_expired, ui),
        RunEvent::DeletingRemaining { remaining } => {
            format!("\nDeleting all {} remaining certificates...\n", remaining)
        }
        RunEvent::Deleted { certificate } => format!(
            "{} Deleted certificate: {}\n",
            Icon::Success.colored(ui.color, ui.unicode),
            certificate.label()
        ),
        RunEvent::DeleteFailed { certificate, error } => format!(
            "{} {}\n",
            Icon::Error.colored(ui.color, ui.unicode),
            ColoredText::error(format!(
                "Failed to delete certificate: {} - {}",
                certificate.label(),
                error
            ))
            .render(ui.color)
        ),
        RunEvent::Skipped {
            certificate,
            reason,
        } => {
            let prefix = match reason {
                SkipReason::Declined => "Skipped",
                SkipReason::InvalidAnswer => "Invalid answer, skipped",
            };
            format!(
                "{} {}: {}\n",
                Icon::Skip.colored(ui.color, ui.unicode),
                prefix,
                certificate.label()
            )
        }
        RunEvent::Aborted => format!(
            "\n{}\n",
            ColoredText::warning("Quit, no further certificates will be touched").render(ui.color)
        ),
    }
}

fn render_usage(in_use: usize, failed: usize, foreign: usize, ui: &UiContext) -> String {
    let mut out = format!(
        "{} {} certificates are in use by CDN domains\n",
        Icon::Progress.colored(ui.color, ui.unicode),
        in_use
    );
    if failed > 0 {
        out.push_str(&format!(
            "{} {} domain lookups failed and were treated as unbound\n",
            Icon::Warning.colored(ui.color, ui.unicode),
            failed
        ));
    }
    if foreign > 0 {
        out.push_str(&format!(
            "{} {} domains use certificates that are not in the certificate list\n",
            Icon::Warning.colored(ui.color, ui.unicode),
            foreign
        ));
    }
    out.push('\n');
    out
}

fn render_item_prompt(
    index: usize,
    total: usize,
    cert: &Certificate,
    days_expired: Option<i64>,
    ui: &UiContext,
) -> String {
    let expiry = match (cert.expires_at(), days_expired) {
        (Some(expiry), Some(days)) => {
            format!("{} (expired {} days)", format_expiry(expiry), days)
        }
        _ => "unknown".to_string(),
    };
    let position = format!("[{}/{}]", index + 1, total);
    let pad = " ".repeat(position.len() + 1);

    format!(
        "\n{}\n{} ID: {}\n{pad}Name: {}\n{pad}Common name: {}\n{pad}Expires: {}\n\n{} Delete this certificate? (y=yes, n=no, a=all, q=quit): ",
        rule(BorderChar::Horizontal, ui.caps.width, ui.unicode),
        ColoredText::info(position).bold().render(ui.color),
        cert.id(),
        cert.name(),
        cert.common_name(),
        expiry,
        Icon::Prompt.colored(ui.color, ui.unicode),
        pad = pad
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use bce_cert_cleaner::CertificateRecord;

    fn plain_ui() -> UiContext {
        UiContext::plain(80)
    }

    fn cert() -> Certificate {
        Certificate::from_record(CertificateRecord {
            id: "cert-1".to_string(),
            name: "old-www".to_string(),
            common_name: "www.example.com".to_string(),
            stop_time: "2024-01-01T00:00:00Z".to_string(),
            ..CertificateRecord::default()
        })
    }

    #[test]
    fn prompts_end_without_newline() {
        let batch = render_event(&RunEvent::BatchConfirmationRequested { count: 3 }, &plain_ui());
        assert!(batch.ends_with("(type yes to confirm): "));
        assert!(batch.contains("Delete the 3 certificates"));

        let item = render_event(
            &RunEvent::CandidatePrompt {
                index: 0,
                total: 2,
                certificate: cert(),
                days_expired: Some(9),
            },
            &plain_ui(),
        );
        assert!(item.contains("[1/2] ID: cert-1"));
        assert!(item.contains("Expires: 2024-01-01 00:00:00 (expired 9 days)"));
        assert!(item.ends_with("(y=yes, n=no, a=all, q=quit): "));
    }

    #[test]
    fn outcomes_use_certificate_label() {
        let ui = plain_ui();
        assert_eq!(
            render_event(&RunEvent::Deleted { certificate: cert() }, &ui),
            "[OK] Deleted certificate: old-www (cert-1)\n"
        );
        assert_eq!(
            render_event(
                &RunEvent::DeleteFailed {
                    certificate: cert(),
                    error: "denied".to_string()
                },
                &ui
            ),
            "[FAIL] Failed to delete certificate: old-www (cert-1) - denied\n"
        );
        assert_eq!(
            render_event(
                &RunEvent::Skipped {
                    certificate: cert(),
                    reason: SkipReason::InvalidAnswer
                },
                &ui
            ),
            "[SKIP] Invalid answer, skipped: old-www (cert-1)\n"
        );
    }

    #[test]
    fn usage_mentions_failures_only_when_present() {
        let ui = plain_ui();
        let clean = render_event(
            &RunEvent::UsageResolved {
                in_use: 2,
                failed_lookups: 0,
                foreign_bindings: 0,
            },
            &ui,
        );
        assert!(!clean.contains("failed"));

        let noisy = render_event(
            &RunEvent::UsageResolved {
                in_use: 2,
                failed_lookups: 1,
                foreign_bindings: 3,
            },
            &ui,
        );
        assert!(noisy.contains("1 domain lookups failed"));
        assert!(noisy.contains("3 domains use certificates"));
    }
}
