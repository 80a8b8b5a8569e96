//! Certificate Repository Port
//!
//! Enumerates and deletes certificates held by the certificate service.

use thiserror::Error;

use crate::domain::entities::CertificateRecord;

/// Provider-neutral error for remote calls
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProviderError {
    /// Request never produced a response
    #[error("transport error: {0}")]
    Transport(String),

    /// Service answered with an error document
    #[error("{code}: {message} (status {status}, request {request_id})")]
    Service {
        status: u16,
        code: String,
        message: String,
        request_id: String,
    },

    /// Response body could not be decoded
    #[error("malformed response: {0}")]
    Decode(String),
}

pub type ProviderResult<T> = Result<T, ProviderError>;

/// Certificate service operations needed by the cleaner
pub trait CertificateRepository {
    /// Every certificate on the account, in service order
    fn list_certificates(&self) -> ProviderResult<Vec<CertificateRecord>>;

    /// Delete one certificate by id
    fn delete_certificate(&self, id: &str) -> ProviderResult<()>;
}

impl<T: CertificateRepository + ?Sized> CertificateRepository for &T {
    fn list_certificates(&self) -> ProviderResult<Vec<CertificateRecord>> {
        (**self).list_certificates()
    }

    fn delete_certificate(&self, id: &str) -> ProviderResult<()> {
        (**self).delete_certificate(id)
    }
}
