//! Baidu Cloud (BCE) provider
//!
//! Signed HTTP access to the certificate and CDN services, exposed to the
//! rest of the crate only through domain ports.

mod cdn;
mod certificate;
mod client;
mod error;
mod signer;

pub use cdn::BceCdnBindingSource;
pub use certificate::BceCertificateRepository;
pub use client::{parse_endpoint, BceClient};
pub use error::BceError;
pub use signer::{canonical_query, uri_encode, BceSigner, EXPIRATION_SECONDS};
