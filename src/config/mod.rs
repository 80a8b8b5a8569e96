//! Configuration module for bce-cert-cleaner
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (BCE_*)
//! 3. Config file (`--config PATH`, else ~/.config/bce-cert-cleaner/config.toml)
//! 4. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use loader::{
    resolve, user_config_path, with_env_overrides, with_env_overrides_from, ConfigOverrides,
    ConfigWarning, ResolvedConfig, ENV_ACCESS_KEY, ENV_CDN_ENDPOINT, ENV_CERT_ENDPOINT,
    ENV_LOG_FILE, ENV_SECRET_KEY,
};
pub use types::{
    ColorMode, Config, Credentials, CredentialsConfig, EndpointsConfig, LogConfig, OutputConfig,
    DEFAULT_CDN_ENDPOINT, DEFAULT_CERTIFICATE_ENDPOINT,
};
