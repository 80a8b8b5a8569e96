//! Command-specific renderers

pub mod candidates;
pub mod cleanup;
pub mod config;
pub mod inventory;
pub mod progress;

use chrono::{DateTime, Utc};

use bce_cert_cleaner::Certificate;

use crate::ui::primitives::border::BorderChar;
use crate::ui::theme::RULE_WIDTH;

/// Expiry format used across listings and prompts
pub const EXPIRY_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

pub(crate) fn format_expiry(expiry: DateTime<Utc>) -> String {
    expiry.format(EXPIRY_FORMAT).to_string()
}

/// `2024-01-01 00:00:00 (expired 12 days)` or `unknown`
pub(crate) fn expiry_with_age(cert: &Certificate, now: DateTime<Utc>) -> String {
    match (cert.expires_at(), cert.days_past_expiry(now)) {
        (Some(expiry), Some(days)) if cert.is_expired_at(now) => {
            format!("{} (expired {} days)", format_expiry(expiry), days)
        }
        (Some(expiry), Some(days)) => {
            format!("{} ({} days left)", format_expiry(expiry), -days)
        }
        _ => "unknown".to_string(),
    }
}

pub(crate) fn rule(border: BorderChar, width: u16, supports_unicode: bool) -> String {
    border.line(RULE_WIDTH.min(width as usize), supports_unicode)
}
