//! Structured logging infrastructure for nlu-bridge.
//!
//! This module provides a configurable logging system based on the tracing crate,
//! supporting different output formats and log levels. The components only emit
//! `tracing` events; installing a subscriber is left to the host, which may call
//! [`init`] or bring its own.

#[cfg(test)]
mod tests;

use crate::config::{LogFormat, LogLevel, LoggingConfig};
use std::path::{Path, PathBuf};
use std::sync::OnceLock;
use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_subscriber::EnvFilter;

/// Keeps the non-blocking file writer alive for the life of the process.
static FILE_GUARD: OnceLock<WorkerGuard> = OnceLock::new();

/// Error type for logging operations
#[derive(Debug)]
pub enum LogError {
    /// IO error occurred
    IoError(std::io::Error),

    /// Error parsing log level
    InvalidLogLevel(String),

    /// Error in subscriber setup
    SubscriberError(Box<dyn std::error::Error + Send + Sync>),
}

impl From<std::io::Error> for LogError {
    fn from(err: std::io::Error) -> Self {
        LogError::IoError(err)
    }
}

impl From<Box<dyn std::error::Error + Send + Sync>> for LogError {
    fn from(err: Box<dyn std::error::Error + Send + Sync>) -> Self {
        LogError::SubscriberError(err)
    }
}

/// Result type for logging operations
pub type Result<T> = std::result::Result<T, LogError>;

/// Initialize the logging system with the given configuration.
///
/// `RUST_LOG` overrides the configured level when set. Calling this more than
/// once is harmless: the first subscriber stays installed.
pub fn init(config: &LoggingConfig) -> Result<()> {
    let Some(target) = log_target(config) else {
        return Ok(());
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.level.to_string()));

    let writer = match target {
        LogTarget::File(path) => Some(create_non_blocking_file(path)?),
        LogTarget::Stdout => None,
    };

    let result = match config.format {
        LogFormat::Json => {
            let builder = tracing_subscriber::fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .with_line_number(true);
            match writer {
                Some(writer) => builder.with_writer(writer).try_init(),
                None => builder.try_init(),
            }
        }
        LogFormat::Compact => {
            let builder = tracing_subscriber::fmt()
                .compact()
                .with_env_filter(filter)
                .with_target(true)
                .with_line_number(true);
            match writer {
                Some(writer) => builder.with_writer(writer).try_init(),
                None => builder.try_init(),
            }
        }
        LogFormat::Pretty | LogFormat::Default => {
            let builder = tracing_subscriber::fmt()
                .pretty()
                .with_env_filter(filter)
                .with_target(true)
                .with_line_number(true);
            match writer {
                Some(writer) => builder.with_writer(writer).try_init(),
                None => builder.try_init(),
            }
        }
    };

    match result {
        Ok(()) => Ok(()),
        // A global subscriber or logger is already installed
        Err(e) if e.to_string().contains("already") => Ok(()),
        Err(e) => Err(LogError::SubscriberError(e)),
    }
}

/// Where log events are written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    Stdout,
    File(PathBuf),
}

/// Pick the log destination. Stdout wins when both a file and stdout are
/// requested; with neither, logging stays disabled.
pub fn log_target(config: &LoggingConfig) -> Option<LogTarget> {
    match (&config.file, config.stdout) {
        (_, true) => Some(LogTarget::Stdout),
        (Some(path), false) => Some(LogTarget::File(path.clone())),
        (None, false) => None,
    }
}

/// Create a non-blocking file writer.
fn create_non_blocking_file(path: impl AsRef<Path>) -> Result<NonBlocking> {
    let path = path.as_ref();

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        std::fs::create_dir_all(parent)?;
    }

    let file_appender = tracing_appender::rolling::never(
        path.parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new(".")),
        path.file_name().unwrap_or_default(),
    );

    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
    // Only the first installed writer is ever used; later guards may drop.
    let _ = FILE_GUARD.set(guard);

    Ok(non_blocking)
}

/// Parse a log level string into a LogLevel enum.
pub fn parse_log_level(level: &str) -> Result<LogLevel> {
    level
        .parse()
        .map_err(|_| LogError::InvalidLogLevel(level.to_string()))
}

impl std::fmt::Display for LogError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LogError::IoError(e) => write!(f, "IO error: {}", e),
            LogError::SubscriberError(e) => write!(f, "Subscriber error: {}", e),
            LogError::InvalidLogLevel(s) => write!(f, "Invalid log level: {}", s),
        }
    }
}

impl std::error::Error for LogError {}
