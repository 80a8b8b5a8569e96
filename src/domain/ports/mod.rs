//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod binding_source;
pub mod certificate_repository;
pub mod operator_input;
pub mod record_sink;
pub mod run_events;

pub use binding_source::BindingSource;
pub use certificate_repository::{CertificateRepository, ProviderError, ProviderResult};
pub use operator_input::OperatorInput;
pub use record_sink::{NoopRecordSink, RecordLevel, RecordSink};
pub use run_events::{NoopEventSink, RunEvent, RunEventSink, SkipReason};
