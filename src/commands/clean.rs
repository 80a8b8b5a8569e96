//! Clean command handler
//!
//! Finds unused expired certificates and deletes them according to the run mode.

use anyhow::Result;
use chrono::Utc;

use bce_cert_cleaner::domain::ports::RecordSink;
use bce_cert_cleaner::presentation::{create_cleanup_use_case, create_inventory_use_case};
use bce_cert_cleaner::{CandidateList, InventoryStats, Termination};

use crate::ui::console::ConsoleEventSink;
use crate::ui::views::candidates::{
    render_candidate_list, render_clean_header, render_no_candidates, render_simulate_footer,
};
use crate::ui::views::cleanup::render_cleanup_result;

use super::{RunStatus, Session};

/// Execute the clean command
pub fn cmd_clean(session: &Session) -> Result<RunStatus> {
    let mode = &session.mode;
    let ui = &session.ui;
    let records = &session.records;
    let events = ConsoleEventSink::new(*ui);

    if !mode.quiet {
        println!(
            "{}",
            render_clean_header(session.mode_label(), session.log_label().as_deref(), ui)
        );
    }
    records.info(&format!("certificate cleanup started ({})", session.mode_label()));

    let inventory = create_inventory_use_case(&session.config, &session.credentials)
        .map_err(|e| session.fail(e))?
        .execute(records, &events, mode.quiet)?;

    let candidates = CandidateList::select(&inventory.certificates, Utc::now());
    records.info(&format!(
        "found {} unused expired certificates out of {}",
        candidates.len(),
        inventory.certificates.len()
    ));

    if candidates.is_empty() {
        if !mode.quiet {
            let stats = InventoryStats::compute(&inventory.certificates, candidates.evaluated_at());
            print!("{}", render_no_candidates(mode.is_interactive(), &stats, ui));
        }
    } else if !mode.quiet || mode.simulate {
        print!(
            "{}",
            render_candidate_list(&candidates, mode.is_interactive() && !mode.simulate, ui)
        );
    }

    let cleanup = create_cleanup_use_case(&session.config, &session.credentials)
        .map_err(|e| session.fail(e))?;
    let outcome = cleanup.execute(&candidates, mode, records, &events);

    match outcome.termination {
        Termination::NothingToDo | Termination::Declined => {}
        Termination::Simulated => print!("{}", render_simulate_footer(ui)),
        Termination::Completed | Termination::Quit { .. } => {
            println!();
            print!("{}", render_cleanup_result(&outcome, mode.is_interactive(), ui));
        }
    }

    Ok(if outcome.is_success() {
        RunStatus::Success
    } else {
        RunStatus::Failed
    })
}
