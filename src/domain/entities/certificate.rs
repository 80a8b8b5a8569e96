//! Certificate entity
//!
//! One certificate as reported by the certificate service, enriched with a
//! parsed expiry and the in-use flag computed from CDN bindings.

use chrono::{DateTime, Utc};

use crate::domain::value_objects::parse_timestamp;

/// Raw certificate record as returned by the certificate service
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CertificateRecord {
    pub id: String,
    pub name: String,
    pub common_name: String,
    pub start_time: String,
    pub stop_time: String,
}

/// A certificate known to this run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Certificate {
    id: String,
    name: String,
    common_name: String,
    stop_time: String,
    expires_at: Option<DateTime<Utc>>,
    in_use: bool,
}

impl Certificate {
    /// Build from a raw record. An unparseable stop time leaves the expiry absent.
    pub fn from_record(record: CertificateRecord) -> Self {
        let expires_at = parse_timestamp(&record.stop_time).ok();
        Self {
            id: record.id,
            name: record.name,
            common_name: record.common_name,
            stop_time: record.stop_time,
            expires_at,
            in_use: false,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn common_name(&self) -> &str {
        &self.common_name
    }

    pub fn stop_time(&self) -> &str {
        &self.stop_time
    }

    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        self.expires_at
    }

    pub fn in_use(&self) -> bool {
        self.in_use
    }

    pub fn mark_in_use(&mut self, in_use: bool) {
        self.in_use = in_use;
    }

    /// Expired strictly before `now`. Absent expiry is never expired.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        matches!(self.expires_at, Some(expiry) if expiry < now)
    }

    /// Whole days between expiry and `now`; negative when still valid.
    pub fn days_past_expiry(&self, now: DateTime<Utc>) -> Option<i64> {
        self.expires_at.map(|expiry| (now - expiry).num_days())
    }

    /// Label used in narration and records: `name (id)`
    pub fn label(&self) -> String {
        format!("{} ({})", self.name, self.id)
    }
}
