//! Deletion eligibility
//!
//! A certificate is a candidate when no domain uses it and its expiry is
//! strictly before the run's frozen `now`.

use chrono::{DateTime, Utc};

use crate::domain::entities::Certificate;

/// Whether a single certificate may be deleted at `now`.
pub fn is_candidate(cert: &Certificate, now: DateTime<Utc>) -> bool {
    !cert.in_use() && cert.is_expired_at(now)
}

/// Ordered, immutable list of deletion candidates
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateList {
    evaluated_at: DateTime<Utc>,
    certificates: Vec<Certificate>,
}

impl CandidateList {
    /// Select candidates from `certificates`, preserving fetch order.
    pub fn select(certificates: &[Certificate], now: DateTime<Utc>) -> Self {
        let certificates = certificates
            .iter()
            .filter(|cert| is_candidate(cert, now))
            .cloned()
            .collect();

        Self {
            evaluated_at: now,
            certificates,
        }
    }

    /// The instant eligibility was evaluated against
    pub fn evaluated_at(&self) -> DateTime<Utc> {
        self.evaluated_at
    }

    pub fn as_slice(&self) -> &[Certificate] {
        &self.certificates
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Certificate> {
        self.certificates.iter()
    }

    pub fn len(&self) -> usize {
        self.certificates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.certificates.is_empty()
    }

    pub fn ids(&self) -> Vec<&str> {
        self.certificates.iter().map(Certificate::id).collect()
    }
}

impl<'a> IntoIterator for &'a CandidateList {
    type Item = &'a Certificate;
    type IntoIter = std::slice::Iter<'a, Certificate>;

    fn into_iter(self) -> Self::IntoIter {
        self.certificates.iter()
    }
}
