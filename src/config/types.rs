//! Configuration type definitions

use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{CleanerError, CleanerResult};

use super::loader::{self, ConfigWarning};

pub const DEFAULT_CERTIFICATE_ENDPOINT: &str = "certificate.baidubce.com";
pub const DEFAULT_CDN_ENDPOINT: &str = "cdn.baidubce.com";

/// API credentials as written in the config file
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CredentialsConfig {
    #[serde(default)]
    pub access_key: Option<String>,

    #[serde(default)]
    pub secret_key: Option<String>,
}

/// Service endpoints
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EndpointsConfig {
    #[serde(default = "default_certificate_endpoint")]
    pub certificate: String,

    #[serde(default = "default_cdn_endpoint")]
    pub cdn: String,
}

impl Default for EndpointsConfig {
    fn default() -> Self {
        Self {
            certificate: default_certificate_endpoint(),
            cdn: default_cdn_endpoint(),
        }
    }
}

fn default_certificate_endpoint() -> String {
    DEFAULT_CERTIFICATE_ENDPOINT.to_string()
}

fn default_cdn_endpoint() -> String {
    DEFAULT_CDN_ENDPOINT.to_string()
}

/// Record destination
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogConfig {
    /// Append records here instead of stderr
    #[serde(default)]
    pub file: Option<PathBuf>,
}

/// Console output configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub color: ColorMode,

    #[serde(default = "default_true")]
    pub unicode: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            color: ColorMode::default(),
            unicode: true,
        }
    }
}

fn default_true() -> bool {
    true
}

/// Color output mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

/// Full configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub credentials: CredentialsConfig,

    #[serde(default)]
    pub endpoints: EndpointsConfig,

    #[serde(default)]
    pub log: LogConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Load configuration and collect non-fatal warnings (unknown keys).
    pub fn load_with_warnings(path: &Path) -> CleanerResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Resolved credentials; both keys must be present and non-empty.
    pub fn credentials(&self) -> CleanerResult<Credentials> {
        let access_key = non_empty(self.credentials.access_key.as_deref());
        let secret_key = non_empty(self.credentials.secret_key.as_deref());
        match (access_key, secret_key) {
            (Some(access_key), Some(secret_key)) => Ok(Credentials {
                access_key: access_key.to_string(),
                secret_key: secret_key.to_string(),
            }),
            _ => Err(CleanerError::MissingCredentials),
        }
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// Access key pair used to sign requests
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub access_key: String,
    pub secret_key: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("access_key", &self.access_key)
            .field("secret_key", &"<redacted>")
            .finish()
    }
}
