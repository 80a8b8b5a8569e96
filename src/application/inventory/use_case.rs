//! Inventory Use Case
//!
//! Fetches certificates and domain bindings, then marks which certificates
//! are in use. Listing failures are fatal; per-domain lookup failures are not.

use crate::application::narrator::Narrator;
use crate::domain::entities::{BindingLookup, Certificate, DomainLookup, UsageReport};
use crate::domain::ports::{BindingSource, CertificateRepository, RecordSink, RunEvent, RunEventSink};
use crate::domain::services::{classify_usage, mark_usage};
use crate::error::{CleanerError, CleanerResult};

/// All certificates for this run, with usage resolved
#[derive(Debug, Clone)]
pub struct Inventory {
    pub certificates: Vec<Certificate>,
    pub usage: UsageReport,
}

/// Inventory use case - builds the classified certificate set
pub struct InventoryUseCase<CR, BS>
where
    CR: CertificateRepository,
    BS: BindingSource,
{
    certificates: CR,
    bindings: BS,
}

impl<CR, BS> InventoryUseCase<CR, BS>
where
    CR: CertificateRepository,
    BS: BindingSource,
{
    pub fn new(certificates: CR, bindings: BS) -> Self {
        Self {
            certificates,
            bindings,
        }
    }

    /// Fetch and classify. Narration respects `quiet`; records do not.
    pub fn execute(
        &self,
        records: &dyn RecordSink,
        events: &dyn RunEventSink,
        quiet: bool,
    ) -> CleanerResult<Inventory> {
        let narrator = Narrator::new(events, quiet);

        let mut certificates: Vec<Certificate> = match self.certificates.list_certificates() {
            Ok(list) => list.into_iter().map(Certificate::from_record).collect(),
            Err(e) => {
                let err = CleanerError::CertificateFetch(e);
                records.error(&err.to_string());
                return Err(err);
            }
        };
        narrator.emit(RunEvent::CertificatesFetched {
            count: certificates.len(),
        });

        let lookups = self.lookup_bindings(records, &narrator)?;
        let usage = classify_usage(&certificates, &lookups);
        mark_usage(&mut certificates, &usage);

        narrator.emit(RunEvent::UsageResolved {
            in_use: usage.used.len(),
            failed_lookups: usage.failed_lookups.len(),
            foreign_bindings: usage.foreign_bindings,
        });

        Ok(Inventory {
            certificates,
            usage,
        })
    }

    fn lookup_bindings(
        &self,
        records: &dyn RecordSink,
        narrator: &Narrator<'_>,
    ) -> CleanerResult<Vec<DomainLookup>> {
        let domains = match self.bindings.list_domains() {
            Ok(domains) => domains,
            Err(e) => {
                let err = CleanerError::DomainFetch(e);
                records.error(&err.to_string());
                return Err(err);
            }
        };
        narrator.emit(RunEvent::DomainsFetched {
            count: domains.len(),
        });

        let lookups = domains
            .into_iter()
            .map(|domain| {
                let result = match self.bindings.binding_for_domain(&domain) {
                    Ok(Some(id)) => BindingLookup::Bound(id),
                    Ok(None) => BindingLookup::Unbound,
                    Err(e) => {
                        records.info(&format!(
                            "binding lookup failed for {}, treating as unbound: {}",
                            domain, e
                        ));
                        BindingLookup::Failed(e.to_string())
                    }
                };
                DomainLookup::new(domain, result)
            })
            .collect();

        Ok(lookups)
    }
}
