use std::path::{Path, PathBuf};

use log::{Level, LevelFilter, Log, Record};

use crate::domain::ports::{RecordLevel, RecordSink};
use crate::error::{CleanerError, CleanerResult};

/// Local time prefix of every record line
pub const RECORD_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// [`RecordSink`] writing `YYYY-MM-DD HH:MM:SS [LEVEL] message` lines
pub struct FernRecordSink {
    logger: Box<dyn Log>,
    destination: Option<PathBuf>,
}

impl FernRecordSink {
    /// Append to `path`, creating it when missing
    pub fn to_file(path: &Path) -> CleanerResult<Self> {
        let file = fern::log_file(path).map_err(|source| CleanerError::LogFile {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::build(file.into(), Some(path.to_path_buf())))
    }

    pub fn to_stderr() -> Self {
        Self::build(std::io::stderr().into(), None)
    }

    /// File when configured, stderr otherwise
    pub fn from_destination(path: Option<&Path>) -> CleanerResult<Self> {
        match path {
            Some(path) => Self::to_file(path),
            None => Ok(Self::to_stderr()),
        }
    }

    /// Log file in use, `None` for stderr
    pub fn destination(&self) -> Option<&Path> {
        self.destination.as_deref()
    }

    fn build(output: fern::Output, destination: Option<PathBuf>) -> Self {
        let (_, logger) = fern::Dispatch::new()
            .format(|out, message, record| {
                out.finish(format_args!(
                    "{} [{}] {}",
                    chrono::Local::now().format(RECORD_TIME_FORMAT),
                    record.level(),
                    message
                ))
            })
            .level(LevelFilter::Info)
            .chain(output)
            .into_log();

        Self {
            logger,
            destination,
        }
    }
}

impl RecordSink for FernRecordSink {
    fn emit(&self, level: RecordLevel, message: &str) {
        let level = match level {
            RecordLevel::Info => Level::Info,
            RecordLevel::Error => Level::Error,
        };
        self.logger.log(
            &Record::builder()
                .args(format_args!("{}", message))
                .level(level)
                .target(module_path!())
                .build(),
        );
        self.logger.flush();
    }
}
