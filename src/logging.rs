//! Logging configuration for txpeek.
//!
//! Diagnostics go to stderr by default so they never mix with the table on
//! stdout. A log file can be configured instead.

use std::fs::{self, File};
use std::io;
use std::path::Path;
use tracing_subscriber::EnvFilter;

use crate::config::LoggingConfig;

/// Initializes logging from the resolved logging settings.
pub fn init_logging(config: &LoggingConfig) {
    match &config.file {
        Some(path) => init_file_logging(path, &config.level),
        None => init_stderr_logging(&config.level),
    }
}

/// Initializes logging to a file.
///
/// Falls back to stderr if the file cannot be created.
pub fn init_file_logging(path: &Path, level: &str) {
    let log_file = match open_log_file(path) {
        Ok(f) => f,
        Err(e) => {
            eprintln!("Warning: Could not create log file {}: {e}", path.display());
            init_stderr_logging(level);
            return;
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(env_filter(level))
        .with_writer(log_file)
        .with_ansi(false)
        .init();
}

/// Initializes logging to stderr.
pub fn init_stderr_logging(level: &str) {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(level))
        .with_writer(io::stderr)
        .init();
}

/// RUST_LOG wins; otherwise `level`, and "warn" if `level` does not parse.
fn env_filter(level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .unwrap_or_else(|_| EnvFilter::new("warn"))
}

/// Creates the log file, truncating any previous run's output.
fn open_log_file(path: &Path) -> io::Result<File> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    File::create(path)
}
