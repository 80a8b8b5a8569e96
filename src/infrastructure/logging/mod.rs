//! Operational log records
//!
//! Records are written through a `fern` dispatch that is built per run and
//! handed to use cases as a [`RecordSink`](crate::domain::ports::RecordSink).
//! Nothing is installed as the global logger.

mod fern_sink;

pub use fern_sink::{FernRecordSink, RECORD_TIME_FORMAT};
