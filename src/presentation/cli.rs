//! CLI Argument Parsing
//!
//! This module defines the CLI interface using clap.
//!
//! ## Design Notes
//!
//! - A single command; the mode flags select how confirmation works
//! - Credentials may come from flags, environment, or the config file

use std::path::PathBuf;

use clap::Parser;

use crate::config::ConfigOverrides;
use crate::domain::value_objects::RunMode;
use crate::error::CleanerResult;

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

/// Delete Baidu Cloud certificates that no CDN domain uses and that have expired
#[derive(Parser, Debug)]
#[command(name = "bce-cert-cleaner")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "\
Examples:
  bce-cert-cleaner --dry-run                 Show what would be deleted
  bce-cert-cleaner --list-all                Show every certificate and its usage
  bce-cert-cleaner --interactive             Confirm each certificate
  bce-cert-cleaner --auto --quiet --log /var/log/cert-cleaner.log

crontab example (daily at 02:00):
  0 2 * * * BCE_ACCESS_KEY=... BCE_SECRET_KEY=... bce-cert-cleaner --auto --quiet --log /var/log/cert-cleaner.log")]
pub struct Cli {
    /// Simulate only: list candidates, delete nothing
    #[arg(long)]
    pub dry_run: bool,

    /// List every certificate with its usage and expiry, then exit
    #[arg(long)]
    pub list_all: bool,

    /// Delete without asking (for scheduled runs)
    #[arg(long)]
    pub auto: bool,

    /// Ask before each certificate: y=yes, n=no, a=all remaining, q=quit
    #[arg(long)]
    pub interactive: bool,

    /// Only print prompts and the final result
    #[arg(short, long)]
    pub quiet: bool,

    /// Append log records to this file instead of stderr
    #[arg(long, value_name = "FILE")]
    pub log: Option<PathBuf>,

    /// Access key (falls back to BCE_ACCESS_KEY)
    #[arg(long, value_name = "KEY")]
    pub ak: Option<String>,

    /// Secret key (falls back to BCE_SECRET_KEY)
    #[arg(long, value_name = "KEY")]
    pub sk: Option<String>,

    /// Config file (default: ~/.config/bce-cert-cleaner/config.toml)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Color output mode
    #[arg(long, value_enum)]
    pub color: Option<ColorWhen>,
}

impl Cli {
    /// Run mode from the mode flags; `--auto` with `--interactive` is rejected.
    pub fn run_mode(&self) -> CleanerResult<RunMode> {
        RunMode::from_flags(self.dry_run, self.auto, self.interactive, self.quiet)
    }

    /// Command-line layer of the configuration
    pub fn config_overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            config_file: self.config.clone(),
            access_key: self.ak.clone(),
            secret_key: self.sk.clone(),
            log_file: self.log.clone(),
        }
    }
}
