//! bce-cert-cleaner CLI
//!
//! Usage: bce-cert-cleaner [--dry-run | --list-all] [--auto | --interactive] [--quiet]
//!
//! Exit status is 1 for configuration errors, fatal fetch errors, and any
//! failed deletion; 0 otherwise.

mod commands;
mod ui;

use clap::Parser;

use bce_cert_cleaner::presentation::Cli;
use bce_cert_cleaner::Config;

use commands::RunStatus;
use ui::context::UiContext;

fn main() {
    let cli = Cli::parse();

    match commands::run(&cli) {
        Ok(RunStatus::Success) => {}
        Ok(RunStatus::Failed) => std::process::exit(1),
        Err(err) => {
            let ui = UiContext::new(cli.color, &Config::default());
            eprint!("{}", commands::render_error(&err, &ui));
            std::process::exit(1);
        }
    }
}
