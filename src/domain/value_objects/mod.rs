//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod run_mode;
mod timestamp;

pub use run_mode::{ConfirmationPolicy, RunMode};
pub use timestamp::{parse_timestamp, TimestampError, TimestampFormat};
