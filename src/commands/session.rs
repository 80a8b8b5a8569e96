//! Per-run setup shared by the commands

use anyhow::Result;

use bce_cert_cleaner::config::{self, Config, Credentials};
use bce_cert_cleaner::domain::ports::RecordSink;
use bce_cert_cleaner::infrastructure::FernRecordSink;
use bce_cert_cleaner::presentation::Cli;
use bce_cert_cleaner::{CleanerError, ConfirmationPolicy, RunMode};

use crate::ui::context::UiContext;
use crate::ui::views::config::render_config_warnings;

/// Everything a command needs once configuration is settled
pub struct Session {
    pub mode: RunMode,
    pub config: Config,
    pub credentials: Credentials,
    pub ui: UiContext,
    pub records: FernRecordSink,
}

impl Session {
    /// Resolve configuration, credentials and the record destination.
    ///
    /// Fails before any provider call when configuration is unusable.
    pub fn start(cli: &Cli, mode: RunMode) -> Result<Self> {
        let resolved = config::resolve(&cli.config_overrides())?;
        let ui = UiContext::new(cli.color, &resolved.config);

        if !resolved.warnings.is_empty() {
            eprint!("{}", render_config_warnings(&resolved.warnings, &ui));
        }

        let credentials = resolved.config.credentials()?;
        let records = FernRecordSink::from_destination(resolved.config.log.file.as_deref())?;

        Ok(Self {
            mode,
            config: resolved.config,
            credentials,
            ui,
            records,
        })
    }

    /// Record `err` at ERROR level and hand it back for the exit path
    pub fn fail(&self, err: CleanerError) -> anyhow::Error {
        self.records.error(&err.to_string());
        err.into()
    }

    pub fn mode_label(&self) -> &'static str {
        if self.mode.simulate {
            return "simulate only, nothing is deleted";
        }
        match self.mode.confirmation {
            ConfirmationPolicy::Batch => "confirm once before deleting",
            ConfirmationPolicy::PerItem => "interactive, confirm each certificate",
            ConfirmationPolicy::Automatic => "automatic, no confirmation",
        }
    }

    pub fn log_label(&self) -> Option<String> {
        self.records.destination().map(|p| p.display().to_string())
    }
}
