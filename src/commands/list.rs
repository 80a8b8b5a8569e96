//! List command handler
//!
//! Shows every certificate with its usage and expiry; never deletes.

use anyhow::Result;
use chrono::Utc;

use bce_cert_cleaner::domain::ports::RecordSink;
use bce_cert_cleaner::presentation::create_inventory_use_case;
use bce_cert_cleaner::InventoryStats;

use crate::ui::console::ConsoleEventSink;
use crate::ui::views::inventory::{
    render_inventory_stats, render_inventory_table, render_list_header,
};

use super::{RunStatus, Session};

/// Execute `--list-all`
pub fn cmd_list(session: &Session) -> Result<RunStatus> {
    let ui = &session.ui;
    let quiet = session.mode.quiet;
    let events = ConsoleEventSink::new(*ui);

    if !quiet {
        println!("{}", render_list_header(ui));
    }
    session.records.info("listing all certificates");

    let inventory = create_inventory_use_case(&session.config, &session.credentials)
        .map_err(|e| session.fail(e))?
        .execute(&session.records, &events, quiet)?;

    let now = Utc::now();
    let stats = InventoryStats::compute(&inventory.certificates, now);

    print!("{}", render_inventory_table(&inventory.certificates, now, ui));
    println!();
    print!("{}", render_inventory_stats(&stats, ui));

    session.records.info(&format!(
        "listed {} certificates, {} cleanable",
        stats.total, stats.cleanable
    ));
    Ok(RunStatus::Success)
}
