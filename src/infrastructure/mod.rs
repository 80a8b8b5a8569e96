//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `bce/` - Baidu Cloud certificate and CDN clients
//! - `input/` - Operator answers from stdin
//! - `logging/` - Record sink on top of `fern`

pub mod bce;
pub mod input;
pub mod logging;

// Re-export for convenience
pub use bce::{BceCdnBindingSource, BceCertificateRepository, BceClient, BceError};
pub use input::StdinInput;
pub use logging::FernRecordSink;
