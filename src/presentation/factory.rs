//! Use Case Factory
//!
//! Creates use cases with infrastructure dependencies wired up.
//! This is the dependency injection point for the application.

use crate::application::{CleanupUseCase, InventoryUseCase};
use crate::config::{Config, Credentials};
use crate::error::{CleanerError, CleanerResult};
use crate::infrastructure::{
    BceCdnBindingSource, BceCertificateRepository, BceClient, BceError, StdinInput,
};

/// Inventory use case talking to the BCE certificate and CDN services
pub type ConcreteInventoryUseCase = InventoryUseCase<BceCertificateRepository, BceCdnBindingSource>;

/// Cleanup use case deleting through BCE and reading answers from stdin
pub type ConcreteCleanupUseCase = CleanupUseCase<BceCertificateRepository, StdinInput>;

/// Certificate and CDN clients for one run
pub struct Clients {
    pub certificate: BceClient,
    pub cdn: BceClient,
}

impl Clients {
    pub fn connect(config: &Config, credentials: &Credentials) -> CleanerResult<Self> {
        Ok(Self {
            certificate: client("certificate", &config.endpoints.certificate, credentials)?,
            cdn: client("cdn", &config.endpoints.cdn, credentials)?,
        })
    }
}

fn client(service: &str, endpoint: &str, credentials: &Credentials) -> CleanerResult<BceClient> {
    BceClient::new(endpoint, credentials).map_err(|e: BceError| CleanerError::ClientSetup {
        service: service.to_string(),
        message: e.to_string(),
    })
}

/// Create the inventory use case with all dependencies wired up
pub fn create_inventory_use_case(
    config: &Config,
    credentials: &Credentials,
) -> CleanerResult<ConcreteInventoryUseCase> {
    let clients = Clients::connect(config, credentials)?;
    Ok(InventoryUseCase::new(
        BceCertificateRepository::new(clients.certificate),
        BceCdnBindingSource::new(clients.cdn),
    ))
}

/// Create the cleanup use case with all dependencies wired up
pub fn create_cleanup_use_case(
    config: &Config,
    credentials: &Credentials,
) -> CleanerResult<ConcreteCleanupUseCase> {
    let client = client("certificate", &config.endpoints.certificate, credentials)?;
    Ok(CleanupUseCase::new(
        BceCertificateRepository::new(client),
        StdinInput::new(),
    ))
}
