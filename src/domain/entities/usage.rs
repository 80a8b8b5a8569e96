//! Certificate usage entities
//!
//! Per-domain binding lookups are kept as explicit results so that a failed
//! lookup stays distinguishable from a domain that simply has no certificate.

use std::collections::HashSet;

/// Outcome of looking up the certificate bound to one CDN domain
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BindingLookup {
    /// Domain serves HTTPS with this certificate id
    Bound(String),
    /// Domain has no certificate bound
    Unbound,
    /// Lookup failed; treated as unbound
    Failed(String),
}

/// A binding lookup for a named domain
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomainLookup {
    pub domain: String,
    pub result: BindingLookup,
}

impl DomainLookup {
    pub fn new(domain: impl Into<String>, result: BindingLookup) -> Self {
        Self {
            domain: domain.into(),
            result,
        }
    }

    /// Certificate id bound to this domain, if any
    pub fn certificate_id(&self) -> Option<&str> {
        match &self.result {
            BindingLookup::Bound(id) if !id.is_empty() => Some(id.as_str()),
            _ => None,
        }
    }
}

/// Set of certificate ids bound to at least one domain
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UsedCertificateSet {
    ids: HashSet<String>,
}

impl UsedCertificateSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, id: impl Into<String>) -> bool {
        self.ids.insert(id.into())
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

/// Aggregated result of classifying all domain lookups
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UsageReport {
    pub used: UsedCertificateSet,
    /// Domains checked, including failed lookups
    pub domains_checked: usize,
    /// Domains whose lookup failed, with the error text
    pub failed_lookups: Vec<(String, String)>,
    /// Bindings naming ids absent from the certificate set
    pub foreign_bindings: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_bound_id_counts_as_no_binding() {
        let lookup = DomainLookup::new("a.example.com", BindingLookup::Bound(String::new()));
        assert_eq!(lookup.certificate_id(), None);
    }

    #[test]
    fn failed_lookup_has_no_certificate() {
        let lookup = DomainLookup::new("a.example.com", BindingLookup::Failed("500".into()));
        assert_eq!(lookup.certificate_id(), None);
    }

    #[test]
    fn set_insert_is_idempotent() {
        let mut set = UsedCertificateSet::new();
        assert!(set.insert("c1"));
        assert!(!set.insert("c1"));
        assert_eq!(set.len(), 1);
    }
}
