//! Certificate fixtures.

use chrono::{DateTime, Duration, TimeZone, Utc};

use bce_cert_cleaner::CertificateRecord;

/// Instant every fixture is relative to
pub fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap()
}

/// Record whose stop time is `days` from `fixed_now()` (negative is past)
pub fn record_expiring_in(id: &str, days: i64) -> CertificateRecord {
    let stop = fixed_now() + Duration::days(days);
    CertificateRecord {
        id: id.to_string(),
        name: format!("name-{}", id),
        common_name: format!("{}.example.com", id),
        start_time: "2020-01-01T00:00:00Z".to_string(),
        stop_time: stop.format("%Y-%m-%dT%H:%M:%SZ").to_string(),
    }
}

/// Record with a stop time nothing can parse
pub fn record_without_expiry(id: &str) -> CertificateRecord {
    CertificateRecord {
        id: id.to_string(),
        name: format!("name-{}", id),
        common_name: format!("{}.example.com", id),
        start_time: String::new(),
        stop_time: "not-a-date".to_string(),
    }
}
