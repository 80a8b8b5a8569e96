//! Property tests for candidate selection.

use chrono::Duration;
use proptest::prelude::*;

use bce_cert_cleaner::{CandidateList, Certificate, InventoryStats};

use crate::common::{fixed_now, record_expiring_in, record_without_expiry};

fn certificate() -> impl Strategy<Value = Certificate> {
    (0u32..10_000, prop::option::of(-800i64..800), any::<bool>()).prop_map(|(n, days, used)| {
        let id = format!("cert-{}", n);
        let record = match days {
            Some(days) => record_expiring_in(&id, days),
            None => record_without_expiry(&id),
        };
        let mut cert = Certificate::from_record(record);
        cert.mark_in_use(used);
        cert
    })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: A candidate is exactly an unused certificate with a known past expiry.
    #[test]
    fn property_candidates_are_unused_and_expired(
        certs in proptest::collection::vec(certificate(), 0..=24),
    ) {
        let now = fixed_now();
        let candidates = CandidateList::select(&certs, now);

        for cert in candidates.iter() {
            prop_assert!(!cert.in_use());
            prop_assert!(cert.expires_at().is_some_and(|e| e < now));
        }
        let expected = certs
            .iter()
            .filter(|c| !c.in_use() && c.is_expired_at(now))
            .count();
        prop_assert_eq!(candidates.len(), expected);
    }

    /// PROPERTY: Selection keeps inventory order and is idempotent.
    #[test]
    fn property_selection_is_stable(
        certs in proptest::collection::vec(certificate(), 0..=24),
    ) {
        let now = fixed_now();
        let first = CandidateList::select(&certs, now);
        let second = CandidateList::select(first.as_slice(), now);
        prop_assert_eq!(first.ids(), second.ids());

        let expected: Vec<&str> = certs
            .iter()
            .filter(|c| !c.in_use() && c.is_expired_at(now))
            .map(|c| c.id())
            .collect();
        prop_assert_eq!(first.ids(), expected);
    }

    /// PROPERTY: Stats agree with selection and partition the inventory.
    #[test]
    fn property_stats_match_selection(
        certs in proptest::collection::vec(certificate(), 0..=24),
        shift in 0i64..30,
    ) {
        let now = fixed_now() + Duration::days(shift);
        let stats = InventoryStats::compute(&certs, now);

        prop_assert_eq!(stats.total, certs.len());
        prop_assert_eq!(stats.in_use + stats.unused, stats.total);
        prop_assert_eq!(stats.cleanable, CandidateList::select(&certs, now).len());
        prop_assert!(stats.cleanable <= stats.expired);
    }
}
