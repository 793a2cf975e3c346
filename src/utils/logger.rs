//! Logger utility for application-wide logging
//!
//! This module provides a logger implementation for the `log` crate that
//! writes every record to a log file and echoes it to the console. When no
//! log file is configured the CLI falls back to `env_logger`.

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;
use std::sync::Mutex;
use log::{Log, Record, Metadata, LevelFilter};

/// File-backed logger
pub struct Logger {
    /// File handle for log output
    file: Mutex<Option<File>>,
    /// Most verbose level that is recorded
    level: LevelFilter,
}

impl Logger {
    /// Creates a new logger instance
    ///
    /// # Arguments
    ///
    /// * `log_file` - Path to the log file
    /// * `level` - Most verbose level to record
    ///
    /// # Returns
    ///
    /// A new Logger instance or an error if the file cannot be created
    pub fn new(log_file: &str, level: LevelFilter) -> io::Result<Self> {
        let file = File::create(Path::new(log_file))?;
        Ok(Logger {
            file: Mutex::new(Some(file)),
            level,
        })
    }

    /// Writes a line to the log file
    ///
    /// # Arguments
    ///
    /// * `message` - The message to log
    pub fn write_line(&self, message: &str) -> io::Result<()> {
        let mut guard = self.file.lock()
            .map_err(|_| io::Error::new(io::ErrorKind::Other, "log file lock poisoned"))?;
        if let Some(file) = guard.as_mut() {
            writeln!(file, "{}", message)?;
            file.flush()?;
        }
        Ok(())
    }

    /// Install a file logger as the global `log` backend
    pub fn init_global_logger(log_file: &str, level: LevelFilter) -> io::Result<()> {
        let global_logger = Logger::new(log_file, level)?;

        if log::set_boxed_logger(Box::new(global_logger)).is_err() {
            eprintln!("Warning: Global logger was already initialized");
        }

        log::set_max_level(level);
        Ok(())
    }

    /// Install `env_logger` on stderr, honouring `RUST_LOG` over `level`
    pub fn init_console_logger(level: LevelFilter) {
        let mut builder = env_logger::Builder::new();
        builder.filter_level(level);
        builder.parse_default_env();
        if builder.try_init().is_err() {
            eprintln!("Warning: Global logger was already initialized");
        }
    }
}

impl Log for Logger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let message = format!("[{}] {}", record.level(), record.args());
            let _ = self.write_line(&message);

            eprintln!("{}", message);
        }
    }

    fn flush(&self) {
        // Already flushing in write_line
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use log::Level;
    use std::fs;

    #[test]
    fn test_write_line_appends_to_file() {
        let path = std::env::temp_dir().join("geokit_logger_test.log");
        let path_str = path.to_string_lossy().to_string();
        let logger = Logger::new(&path_str, LevelFilter::Info).unwrap();

        logger.write_line("first").unwrap();
        logger.write_line("second").unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(content, "first\nsecond\n");
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_level_filtering() {
        let path = std::env::temp_dir().join("geokit_logger_level_test.log");
        let logger = Logger::new(&path.to_string_lossy(), LevelFilter::Warn).unwrap();

        let warn = Metadata::builder().level(Level::Warn).build();
        let debug = Metadata::builder().level(Level::Debug).build();
        assert!(logger.enabled(&warn));
        assert!(!logger.enabled(&debug));
        let _ = fs::remove_file(&path);
    }
}
