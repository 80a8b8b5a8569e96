//! Configuration loading and layering

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{CleanerError, CleanerResult};

use super::types::Config;

pub const ENV_ACCESS_KEY: &str = "BCE_ACCESS_KEY";
pub const ENV_SECRET_KEY: &str = "BCE_SECRET_KEY";
pub const ENV_CERT_ENDPOINT: &str = "BCE_CERT_ENDPOINT";
pub const ENV_CDN_ENDPOINT: &str = "BCE_CDN_ENDPOINT";
pub const ENV_LOG_FILE: &str = "BCE_CERT_CLEANER_LOG";

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

/// Values given on the command line; `None` leaves lower layers in place.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub config_file: Option<PathBuf>,
    pub access_key: Option<String>,
    pub secret_key: Option<String>,
    pub log_file: Option<PathBuf>,
}

/// Final configuration plus where it came from
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub config: Config,
    /// Config file that contributed, if any
    pub source: Option<PathBuf>,
    pub warnings: Vec<ConfigWarning>,
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> CleanerResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path).map_err(|e| CleanerError::InvalidConfig {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| CleanerError::InvalidConfig {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Default config file location
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("bce-cert-cleaner").join("config.toml"))
}

/// Resolve every layer into one configuration.
///
/// An explicit `--config` file must load. The default location is only
/// read when it exists.
pub fn resolve(overrides: &ConfigOverrides) -> CleanerResult<ResolvedConfig> {
    let file = match &overrides.config_file {
        Some(path) => Some(path.clone()),
        None => user_config_path().filter(|p| p.is_file()),
    };

    let (config, warnings) = match &file {
        Some(path) => load_with_warnings(path)?,
        None => (Config::default(), Vec::new()),
    };

    let config = apply_overrides(with_env_overrides(config), overrides);

    Ok(ResolvedConfig {
        config,
        source: file,
        warnings,
    })
}

/// Apply environment variable overrides (BCE_* prefix)
pub fn with_env_overrides(config: Config) -> Config {
    with_env_overrides_from(config, |key| std::env::var(key).ok())
}

/// Apply overrides read through `lookup`. Empty values are ignored.
pub fn with_env_overrides_from<F>(mut config: Config, lookup: F) -> Config
where
    F: Fn(&str) -> Option<String>,
{
    let lookup = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

    if let Some(ak) = lookup(ENV_ACCESS_KEY) {
        config.credentials.access_key = Some(ak);
    }
    if let Some(sk) = lookup(ENV_SECRET_KEY) {
        config.credentials.secret_key = Some(sk);
    }
    if let Some(endpoint) = lookup(ENV_CERT_ENDPOINT) {
        config.endpoints.certificate = endpoint;
    }
    if let Some(endpoint) = lookup(ENV_CDN_ENDPOINT) {
        config.endpoints.cdn = endpoint;
    }
    if let Some(file) = lookup(ENV_LOG_FILE) {
        config.log.file = Some(PathBuf::from(file));
    }

    config
}

fn apply_overrides(mut config: Config, overrides: &ConfigOverrides) -> Config {
    if let Some(ak) = overrides.access_key.as_ref().filter(|v| !v.is_empty()) {
        config.credentials.access_key = Some(ak.clone());
    }
    if let Some(sk) = overrides.secret_key.as_ref().filter(|v| !v.is_empty()) {
        config.credentials.secret_key = Some(sk.clone());
    }
    if let Some(file) = &overrides.log_file {
        config.log.file = Some(file.clone());
    }
    config
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| line.contains(needle))
        .map(|i| i + 1)
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "credentials",
        "access_key",
        "secret_key",
        "endpoints",
        "certificate",
        "cdn",
        "log",
        "file",
        "output",
        "color",
        "unicode",
    ];

    let mut best: Option<(&str, usize)> = None;
    for candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = if ac == bc { 0 } else { 1 };
            curr[j + 1] =
                std::cmp::min(std::cmp::min(prev[j + 1] + 1, curr[j] + 1), prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}
