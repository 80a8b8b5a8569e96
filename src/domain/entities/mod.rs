//! Domain Entities
//!
//! - `Certificate` - A certificate registered with the account
//! - `UsedCertificateSet` - Identifiers bound to at least one CDN domain

mod certificate;
mod usage;

pub use certificate::{Certificate, CertificateRecord};
pub use usage::{BindingLookup, DomainLookup, UsageReport, UsedCertificateSet};
