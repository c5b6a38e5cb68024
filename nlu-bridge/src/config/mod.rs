//! Configuration system for nlu-bridge.
//!
//! This module provides a flexible configuration system that supports loading
//! configuration from multiple sources (files, environment variables, etc.)
//! with proper validation and defaults. Each pipeline component gets its own
//! typed section so that component construction never has to guess at keys.

mod builder;
mod loader;
mod models;
#[cfg(test)]
mod tests;
pub mod validation;

pub use builder::ConfigBuilder;
pub use loader::ConfigLoader;
pub use models::*;

/// Default configuration file names that the system will look for
pub const DEFAULT_CONFIG_FILES: &[&str] = &[
    "nlu-bridge.toml",
    "nlu-bridge.yaml",
    "nlu-bridge.yml",
    "nlu-bridge.json",
    ".nlu-bridge/config.toml",
    ".nlu-bridge/config.yaml",
    ".nlu-bridge/config.yml",
    ".nlu-bridge/config.json",
];

/// Environment variable prefix for nlu-bridge configuration.
///
/// Nested keys are separated by a double underscore, e.g.
/// `NLU_BRIDGE_RECOGNIZERS__CULTURE=zh-cn`.
pub const ENV_PREFIX: &str = "NLU_BRIDGE_";

/// Configuration error type
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Error occurred during file loading
    #[error("Failed to load configuration file: {0}")]
    FileLoadError(String),

    /// Error occurred during validation
    #[error("Configuration validation error: {0}")]
    ValidationError(String),

    /// Error occurred during parsing
    #[error("Configuration parsing error: {0}")]
    ParseError(String),
}

/// Result type for configuration operations
pub type Result<T> = std::result::Result<T, ConfigError>;
