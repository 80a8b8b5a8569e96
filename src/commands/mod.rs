//! Command handlers for the binary

pub mod clean;
pub mod list;
mod session;

use anyhow::Result;

use bce_cert_cleaner::config::{user_config_path, ENV_ACCESS_KEY, ENV_SECRET_KEY};
use bce_cert_cleaner::presentation::Cli;
use bce_cert_cleaner::CleanerError;

use crate::ui::blocks::error::ErrorBlock;
use crate::ui::context::UiContext;

pub use session::Session;

/// How a completed run should exit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunStatus {
    Success,
    /// At least one deletion failed
    Failed,
}

/// Validate flags, load configuration, then list or clean
pub fn run(cli: &Cli) -> Result<RunStatus> {
    let mode = cli.run_mode()?;
    let session = Session::start(cli, mode)?;

    if cli.list_all {
        list::cmd_list(&session)
    } else {
        clean::cmd_clean(&session)
    }
}

/// Error block for a fatal error, with fix hints for known failures
pub fn render_error(err: &anyhow::Error, ui: &UiContext) -> String {
    let block = match err.downcast_ref::<CleanerError>() {
        Some(CleanerError::MissingCredentials) => missing_credentials_block(),
        Some(CleanerError::ConflictingModes) => ErrorBlock::new(err.to_string())
            .with_fix("--auto deletes without asking, for scheduled runs")
            .with_fix("--interactive asks before each certificate"),
        Some(CleanerError::InvalidConfig { .. }) => ErrorBlock::new(err.to_string())
            .with_fix("Fix the file or point --config at another one"),
        Some(CleanerError::LogFile { .. }) => ErrorBlock::new(err.to_string())
            .with_fix("Check that the log directory exists and is writable"),
        Some(CleanerError::CertificateFetch(cause)) => {
            ErrorBlock::new("failed to list certificates")
                .with_cause(cause.to_string())
                .with_fix("Check the credentials, the certificate endpoint and network access")
        }
        Some(CleanerError::DomainFetch(cause)) => ErrorBlock::new("failed to list CDN domains")
            .with_cause(cause.to_string())
            .with_fix("Check the credentials, the CDN endpoint and network access"),
        _ => ErrorBlock::new(err.to_string()),
    };
    block.render(ui.color, ui.unicode)
}

fn missing_credentials_block() -> ErrorBlock {
    let config_hint = user_config_path()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "config.toml".to_string());

    ErrorBlock::new("missing credentials: no access key and secret key were found")
        .with_fix(format!(
            "Set {} and {} in the environment",
            ENV_ACCESS_KEY, ENV_SECRET_KEY
        ))
        .with_fix("or pass --ak <KEY> --sk <KEY>")
        .with_fix(format!("or add a [credentials] section to {}", config_hint))
        .with_fix("")
        .with_fix("Examples:")
        .with_fix(format!(
            "  {}=... {}=... bce-cert-cleaner --dry-run",
            ENV_ACCESS_KEY, ENV_SECRET_KEY
        ))
        .with_fix("  bce-cert-cleaner --ak <KEY> --sk <KEY> --interactive")
        .with_fix(format!(
            "  crontab: 0 2 * * * {}=... {}=... bce-cert-cleaner --auto --quiet --log /var/log/cert-cleaner.log",
            ENV_ACCESS_KEY, ENV_SECRET_KEY
        ))
}
