//! Configuration model definitions.
//!
//! This module contains the configuration structures for all nlu-bridge components.

use crate::tokenization::ModelFamily;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

/// Main configuration structure for nlu-bridge.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct NluConfig {
    /// Logging configuration
    pub logging: LoggingConfig,

    /// Pretrained tokenizer component configuration
    pub tokenizer: TokenizerConfig,

    /// recognizers-service entity extractor configuration
    pub recognizers: RecognizersConfig,
}

/// Configuration for the pretrained sub-word tokenizer.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TokenizerConfig {
    /// Name of the language model family to load
    pub model_name: ModelFamily,

    /// Pre-trained weight-set to load. May be a PaddleNLP weight name, a
    /// Hugging Face Hub repository id, or a local directory/file. An empty
    /// string selects the family default.
    pub model_weights: String,

    /// Directory used to cache files downloaded from the Hub
    pub cache_dir: Option<PathBuf>,

    /// Whether to split intents on `intent_split_symbol`
    pub intent_tokenization_flag: bool,

    /// Symbol on which intents should be split
    pub intent_split_symbol: String,

    /// Regular expression used to re-segment produced tokens
    pub token_pattern: Option<String>,

    /// Moved to the featurizers; only read to warn about stale configs.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub case_sensitive: Option<bool>,
}

impl Default for TokenizerConfig {
    fn default() -> Self {
        Self {
            model_name: ModelFamily::Bert,
            model_weights: ModelFamily::Bert.default_weights().to_string(),
            cache_dir: None,
            intent_tokenization_flag: false,
            intent_split_symbol: "_".to_string(),
            token_pattern: None,
            case_sensitive: None,
        }
    }
}

/// Configuration for the recognizers-service entity extractor.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RecognizersConfig {
    /// Entity type names to keep; `None` keeps everything the service returns
    pub entities: Option<Vec<String>>,

    /// Unit names the service should restrict itself to; `None` for all units
    pub units: Option<Vec<String>>,

    /// HTTP url of the running recognizers-service. `RECOGNIZERS_SERVICE_URL`
    /// takes precedence when set.
    ///
    /// The configured value is validated when the extractor is built, before
    /// the environment is consulted. A malformed url here is rejected even if
    /// `RECOGNIZERS_SERVICE_URL` would replace it at request time.
    pub url: Option<String>,

    /// Culture used by the service to interpret numbers, dates and currencies
    pub culture: String,

    /// Have the service include original numbers in the resolution
    pub show_numbers: bool,

    /// Have the service merge overlapping matches
    pub merge_results: bool,

    /// Request timeout in seconds
    pub timeout: f64,
}

impl Default for RecognizersConfig {
    fn default() -> Self {
        Self {
            entities: None,
            units: None,
            url: None,
            culture: "en-us".to_string(),
            show_numbers: true,
            merge_results: true,
            timeout: 3.0,
        }
    }
}

impl RecognizersConfig {
    /// The request timeout as a [`Duration`].
    ///
    /// Falls back to the three second default when the configured value is not
    /// a positive finite number; validation rejects such values earlier.
    pub fn timeout_duration(&self) -> Duration {
        Duration::try_from_secs_f64(self.timeout)
            .ok()
            .filter(|d| !d.is_zero())
            .unwrap_or(Duration::from_secs(3))
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level
    pub level: LogLevel,

    /// Log format
    pub format: LogFormat,

    /// File to log to (if any)
    pub file: Option<PathBuf>,

    /// Whether to log to stdout
    pub stdout: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: LogLevel::Info,
            format: LogFormat::Default,
            file: None,
            stdout: true,
        }
    }
}

/// Log level.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Trace level
    Trace,

    /// Debug level
    Debug,

    /// Info level
    Info,

    /// Warn level
    Warn,

    /// Error level
    Error,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogLevel::Trace => write!(f, "trace"),
            LogLevel::Debug => write!(f, "debug"),
            LogLevel::Info => write!(f, "info"),
            LogLevel::Warn => write!(f, "warn"),
            LogLevel::Error => write!(f, "error"),
        }
    }
}

impl FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "trace" => Ok(LogLevel::Trace),
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            _ => Err(format!("Invalid log level: {}", s)),
        }
    }
}

/// Log format.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Default format
    Default,

    /// JSON format
    Json,

    /// Compact format
    Compact,

    /// Pretty format
    Pretty,
}
