//! Error types for bce-cert-cleaner
//!
//! Library errors use `thiserror`; the binary wraps them with `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::ports::ProviderError;

/// Result type alias for cleaner operations
pub type CleanerResult<T> = Result<T, CleanerError>;

/// Main error type for cleaner operations
#[derive(Error, Debug)]
pub enum CleanerError {
    /// `--auto` and `--interactive` were both requested
    #[error("--auto and --interactive cannot be used together")]
    ConflictingModes,

    /// Access key or secret key missing after all config layers
    #[error("missing credentials: set BCE_ACCESS_KEY and BCE_SECRET_KEY, or pass --ak and --sk")]
    MissingCredentials,

    /// Config file could not be parsed
    #[error("invalid config in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// Log destination could not be opened
    #[error("cannot open log file {path}: {source}")]
    LogFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Provider client could not be constructed
    #[error("failed to create {service} client: {message}")]
    ClientSetup { service: String, message: String },

    /// Listing certificates failed
    #[error("failed to list certificates: {0}")]
    CertificateFetch(#[source] ProviderError),

    /// Listing CDN domains failed
    #[error("failed to list CDN domains: {0}")]
    DomainFetch(#[source] ProviderError),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl CleanerError {
    /// Configuration errors are reported before any provider call is made.
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            CleanerError::ConflictingModes
                | CleanerError::MissingCredentials
                | CleanerError::InvalidConfig { .. }
                | CleanerError::LogFile { .. }
        )
    }
}
