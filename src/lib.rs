//! bce-cert-cleaner - removes unused, expired Baidu Cloud certificates
//!
//! A certificate is deleted only when no CDN domain serves it and its expiry
//! lies in the past. Runs can simulate, ask once, ask per certificate, or
//! proceed without asking for scheduled use.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;

// Re-exports for convenience
pub use application::{CleanupOutcome, CleanupUseCase, Inventory, InventoryUseCase, Termination};
pub use config::Config;
pub use domain::entities::{Certificate, CertificateRecord};
pub use domain::services::{CandidateList, InventoryStats};
pub use domain::value_objects::{parse_timestamp, ConfirmationPolicy, RunMode};
pub use error::{CleanerError, CleanerResult};
