//! File logger for style debugging.
//!
//! Style computation is called from render paths where stdout belongs to the
//! host, so log lines go to a file instead.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;

use log::{LevelFilter, Metadata, Record, SetLoggerError};

struct FileLogger {
    path: PathBuf,
    level: LevelFilter,
}

impl log::Log for FileLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        if let Ok(mut file) = OpenOptions::new().create(true).append(true).open(&self.path) {
            let _ = writeln!(file, "[{}] {}", record.level(), record.args());
        }
    }

    fn flush(&self) {}
}

/// Installs the file logger at `Debug` level.
///
/// Fails if a logger is already installed.
pub fn init_logger(path: impl Into<PathBuf>) -> Result<(), SetLoggerError> {
    init_logger_with_level(path, LevelFilter::Debug)
}

/// Installs the file logger with an explicit level (`Trace` to see emitter
/// output).
pub fn init_logger_with_level(
    path: impl Into<PathBuf>,
    level: LevelFilter,
) -> Result<(), SetLoggerError> {
    let logger = FileLogger {
        path: path.into(),
        level,
    };
    log::set_boxed_logger(Box::new(logger))?;
    log::set_max_level(level);
    Ok(())
}
