//! Record Sink Port
//!
//! Append-only operational log, independent of console narration. Quiet mode
//! never affects what is recorded here.

use std::fmt;

/// Severity of a log record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordLevel {
    Info,
    Error,
}

impl fmt::Display for RecordLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordLevel::Info => write!(f, "INFO"),
            RecordLevel::Error => write!(f, "ERROR"),
        }
    }
}

/// Trait for receiving log records
pub trait RecordSink: Send + Sync {
    fn emit(&self, level: RecordLevel, message: &str);

    fn info(&self, message: &str) {
        self.emit(RecordLevel::Info, message);
    }

    fn error(&self, message: &str) {
        self.emit(RecordLevel::Error, message);
    }
}

/// Sink that drops every record
pub struct NoopRecordSink;

impl RecordSink for NoopRecordSink {
    fn emit(&self, _level: RecordLevel, _message: &str) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    struct RecordingSink {
        records: Mutex<Vec<(RecordLevel, String)>>,
    }

    impl RecordSink for RecordingSink {
        fn emit(&self, level: RecordLevel, message: &str) {
            self.records
                .lock()
                .unwrap()
                .push((level, message.to_string()));
        }
    }

    #[test]
    fn helpers_forward_level() {
        let sink = RecordingSink {
            records: Mutex::new(Vec::new()),
        };
        sink.info("started");
        sink.error("boom");

        let records = sink.records.lock().unwrap();
        assert_eq!(records[0], (RecordLevel::Info, "started".to_string()));
        assert_eq!(records[1], (RecordLevel::Error, "boom".to_string()));
    }

    #[test]
    fn level_display_is_upper_case() {
        assert_eq!(RecordLevel::Info.to_string(), "INFO");
        assert_eq!(RecordLevel::Error.to_string(), "ERROR");
    }
}
