//! Inventory statistics

use chrono::{DateTime, Utc};

use crate::domain::entities::Certificate;

use super::eligibility::is_candidate;

/// Counts over the full certificate inventory at a fixed instant
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InventoryStats {
    pub total: usize,
    pub in_use: usize,
    pub unused: usize,
    pub expired: usize,
    pub cleanable: usize,
}

impl InventoryStats {
    pub fn compute(certificates: &[Certificate], now: DateTime<Utc>) -> Self {
        let mut stats = Self {
            total: certificates.len(),
            ..Self::default()
        };

        for cert in certificates {
            if cert.in_use() {
                stats.in_use += 1;
            } else {
                stats.unused += 1;
            }
            if cert.is_expired_at(now) {
                stats.expired += 1;
            }
            if is_candidate(cert, now) {
                stats.cleanable += 1;
            }
        }

        stats
    }
}
