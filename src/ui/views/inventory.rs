//! `--list-all` views

use chrono::{DateTime, Utc};

use bce_cert_cleaner::{Certificate, InventoryStats};

use crate::ui::blocks::header::CommandHeader;
use crate::ui::context::UiContext;
use crate::ui::primitives::border::BorderChar;
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::{pad_to_width, truncate_chars, ColoredText};

use super::{expiry_with_age, rule};

const ID_WIDTH: usize = 18;
const NAME_WIDTH: usize = 30;
const NAME_MAX_CHARS: usize = 28;
const IN_USE_WIDTH: usize = 8;

pub fn render_list_header(ui: &UiContext) -> String {
    CommandHeader::new(Icon::List, "BCE Certificate Inventory").render(ui.color, ui.unicode)
}

/// Table of every certificate with usage and expiry
pub fn render_inventory_table(
    certificates: &[Certificate],
    now: DateTime<Utc>,
    ui: &UiContext,
) -> String {
    let heavy = rule(BorderChar::Rule, ui.caps.width, ui.unicode);
    let light = rule(BorderChar::Horizontal, ui.caps.width, ui.unicode);

    let mut out = String::from("All certificates:\n");
    out.push_str(&heavy);
    out.push('\n');
    out.push_str(&row("ID", "Name", "In use", "Expires"));
    out.push_str(&light);
    out.push('\n');

    for cert in certificates {
        let in_use = if cert.in_use() { "yes" } else { "no" };
        let expiry = expiry_with_age(cert, now);
        let expiry = if cert.is_expired_at(now) {
            ColoredText::error(expiry).render(ui.color)
        } else if cert.expires_at().is_none() {
            ColoredText::dim(expiry).render(ui.color)
        } else {
            expiry
        };
        out.push_str(&row(
            cert.id(),
            &truncate_chars(cert.name(), NAME_MAX_CHARS),
            in_use,
            &expiry,
        ));
    }

    out.push_str(&heavy);
    out.push('\n');
    out
}

fn row(id: &str, name: &str, in_use: &str, expiry: &str) -> String {
    format!(
        "{} {} {} {}\n",
        pad_to_width(id, ID_WIDTH),
        pad_to_width(name, NAME_WIDTH),
        pad_to_width(in_use, IN_USE_WIDTH),
        expiry
    )
}

/// Inventory statistics block
pub fn render_inventory_stats(stats: &InventoryStats, ui: &UiContext) -> String {
    format!(
        "{}\n  - in use: {}\n  - unused: {}\n  - expired: {}\n  - unused and expired: {} (cleanable)\n",
        ColoredText::plain(format!("Statistics: {} certificates in total", stats.total))
            .bold()
            .render(ui.color),
        stats.in_use,
        stats.unused,
        stats.expired,
        stats.cleanable
    )
}
