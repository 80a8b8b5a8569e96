//! Usage classification service
//!
//! Turns per-domain binding lookups into the set of certificate ids that
//! some domain still serves. Failed lookups are fail-open: they are counted
//! but contribute nothing to the used set.

use std::collections::HashSet;

use crate::domain::entities::{BindingLookup, Certificate, DomainLookup, UsageReport};

/// Build the used-certificate set from domain lookups.
///
/// Only ids present in `certificates` enter the set.
pub fn classify_usage(certificates: &[Certificate], lookups: &[DomainLookup]) -> UsageReport {
    let known: HashSet<&str> = certificates.iter().map(Certificate::id).collect();
    let mut report = UsageReport {
        domains_checked: lookups.len(),
        ..UsageReport::default()
    };

    for lookup in lookups {
        if let BindingLookup::Failed(error) = &lookup.result {
            report
                .failed_lookups
                .push((lookup.domain.clone(), error.clone()));
            continue;
        }

        let Some(id) = lookup.certificate_id() else {
            continue;
        };

        if known.contains(id) {
            report.used.insert(id);
        } else {
            report.foreign_bindings += 1;
        }
    }

    report
}

/// Set the in-use flag on every certificate from the report.
pub fn mark_usage(certificates: &mut [Certificate], report: &UsageReport) {
    for cert in certificates.iter_mut() {
        let in_use = report.used.contains(cert.id());
        cert.mark_in_use(in_use);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::CertificateRecord;

    fn cert(id: &str) -> Certificate {
        Certificate::from_record(CertificateRecord {
            id: id.to_string(),
            stop_time: "2020-01-01T00:00:00Z".to_string(),
            ..CertificateRecord::default()
        })
    }

    fn bound(domain: &str, id: &str) -> DomainLookup {
        DomainLookup::new(domain, BindingLookup::Bound(id.to_string()))
    }

    #[test]
    fn bound_ids_enter_the_used_set() {
        let certs = vec![cert("c1"), cert("c2")];
        let lookups = vec![
            bound("a.com", "c1"),
            DomainLookup::new("b.com", BindingLookup::Unbound),
        ];

        let report = classify_usage(&certs, &lookups);

        assert!(report.used.contains("c1"));
        assert!(!report.used.contains("c2"));
        assert_eq!(report.domains_checked, 2);
    }

    #[test]
    fn duplicate_bindings_are_idempotent() {
        let certs = vec![cert("c1")];
        let lookups = vec![bound("a.com", "c1"), bound("b.com", "c1")];

        let report = classify_usage(&certs, &lookups);

        assert_eq!(report.used.len(), 1);
    }

    #[test]
    fn unknown_ids_are_not_added() {
        let certs = vec![cert("c1")];
        let lookups = vec![bound("a.com", "ghost")];

        let report = classify_usage(&certs, &lookups);

        assert!(report.used.is_empty());
        assert_eq!(report.foreign_bindings, 1);
    }

    #[test]
    fn failed_lookup_is_recorded_and_treated_as_unbound() {
        let certs = vec![cert("c1")];
        let lookups = vec![
            DomainLookup::new("a.com", BindingLookup::Failed("timeout".into())),
            bound("b.com", "c1"),
        ];

        let report = classify_usage(&certs, &lookups);

        assert_eq!(
            report.failed_lookups,
            vec![("a.com".to_string(), "timeout".to_string())]
        );
        assert!(report.used.contains("c1"));
    }

    #[test]
    fn mark_usage_sets_flags() {
        let mut certs = vec![cert("c1"), cert("c2")];
        let report = classify_usage(&certs, &[bound("a.com", "c2")]);

        mark_usage(&mut certs, &report);

        assert!(!certs[0].in_use());
        assert!(certs[1].in_use());
    }
}
