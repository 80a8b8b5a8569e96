//! Timestamp Value Object
//!
//! Certificate start/stop times come back from the provider in several
//! layouts. Parsing tries each accepted layout in order and keeps the first
//! match; anything else leaves the expiry absent.

use chrono::{DateTime, FixedOffset, NaiveDateTime, TimeZone, Utc};
use thiserror::Error;

/// Error returned when a timestamp string cannot be interpreted
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TimestampError {
    #[error("empty timestamp")]
    Empty,

    #[error("unrecognized timestamp: {0}")]
    Unrecognized(String),
}

/// Accepted timestamp layouts, in the order they are attempted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimestampFormat {
    /// `2006-01-02T15:04:05Z`
    IsoUtc,
    /// `2006-01-02 15:04:05`, read as UTC
    SpaceSeparated,
    /// `2006-01-02T15:04:05+08:00`
    IsoChinaStandard,
    /// `2006-01-02T15:04:05.000Z`
    IsoFractionalUtc,
    /// Any RFC 3339 timestamp
    Rfc3339,
}

impl TimestampFormat {
    pub const ALL: [TimestampFormat; 5] = [
        TimestampFormat::IsoUtc,
        TimestampFormat::SpaceSeparated,
        TimestampFormat::IsoChinaStandard,
        TimestampFormat::IsoFractionalUtc,
        TimestampFormat::Rfc3339,
    ];

    /// Try to parse `raw` with this single layout.
    pub fn parse(self, raw: &str) -> Option<DateTime<Utc>> {
        match self {
            TimestampFormat::IsoUtc => naive_utc(raw, "%Y-%m-%dT%H:%M:%SZ"),
            TimestampFormat::SpaceSeparated => naive_utc(raw, "%Y-%m-%d %H:%M:%S"),
            TimestampFormat::IsoChinaStandard => {
                let naive = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S+08:00").ok()?;
                let offset = FixedOffset::east_opt(8 * 3600)?;
                offset
                    .from_local_datetime(&naive)
                    .single()
                    .map(|dt| dt.with_timezone(&Utc))
            }
            TimestampFormat::IsoFractionalUtc => naive_utc(raw, "%Y-%m-%dT%H:%M:%S%.fZ"),
            TimestampFormat::Rfc3339 => DateTime::parse_from_rfc3339(raw)
                .ok()
                .map(|dt| dt.with_timezone(&Utc)),
        }
    }
}

fn naive_utc(raw: &str, layout: &str) -> Option<DateTime<Utc>> {
    NaiveDateTime::parse_from_str(raw, layout)
        .ok()
        .map(|naive| Utc.from_utc_datetime(&naive))
}

/// Parse a provider timestamp into a UTC instant.
pub fn parse_timestamp(raw: &str) -> Result<DateTime<Utc>, TimestampError> {
    if raw.is_empty() {
        return Err(TimestampError::Empty);
    }

    TimestampFormat::ALL
        .iter()
        .find_map(|format| format.parse(raw))
        .ok_or_else(|| TimestampError::Unrecognized(raw.to_string()))
}
