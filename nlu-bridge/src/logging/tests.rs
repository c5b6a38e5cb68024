use crate::config::{LogFormat, LogLevel, LoggingConfig};
use crate::logging::{LogTarget, log_target, parse_log_level};
use std::path::PathBuf;

#[test]
fn test_init_is_idempotent() {
    let config = LoggingConfig {
        level: LogLevel::Debug,
        format: LogFormat::Compact,
        file: None,
        stdout: true,
    };

    // The second call finds a subscriber already installed and still succeeds
    assert!(crate::logging::init(&config).is_ok());
    assert!(crate::logging::init(&config).is_ok());
}

#[test]
fn test_level_conversion() {
    assert!(parse_log_level("trace").is_ok());
    assert!(parse_log_level("DEBUG").is_ok());
    assert!(parse_log_level("info").is_ok());
    assert!(parse_log_level("warn").is_ok());
    assert!(parse_log_level("error").is_ok());
    assert!(parse_log_level("invalid").is_err());

    assert_eq!(parse_log_level("Warn").unwrap(), LogLevel::Warn);
}

#[test]
fn test_log_target() {
    let mut config = LoggingConfig {
        level: LogLevel::Info,
        format: LogFormat::Json,
        file: Some(PathBuf::from("logs/nlu.log")),
        stdout: true,
    };
    assert_eq!(log_target(&config), Some(LogTarget::Stdout));

    config.stdout = false;
    assert_eq!(
        log_target(&config),
        Some(LogTarget::File(PathBuf::from("logs/nlu.log")))
    );

    config.file = None;
    assert_eq!(log_target(&config), None);
    // Nothing to install, so nothing can fail
    assert!(crate::logging::init(&config).is_ok());
}

#[test]
fn test_log_error_display() {
    let err = parse_log_level("loud").unwrap_err();
    assert_eq!(err.to_string(), "Invalid log level: loud");
}
