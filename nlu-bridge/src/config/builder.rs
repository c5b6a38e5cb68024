//! Configuration builder.
//!
//! This module provides a builder pattern API for creating configurations.

use super::{Result, models::*, validation};
use crate::tokenization::ModelFamily;
use std::path::{Path, PathBuf};

/// Builder for creating NluConfig instances.
#[derive(Debug, Clone, Default)]
pub struct ConfigBuilder {
    config: NluConfig,
}

impl ConfigBuilder {
    /// Create a new configuration builder with default values.
    pub fn new() -> Self {
        Self {
            config: NluConfig::default(),
        }
    }

    /// Start from an existing configuration.
    pub fn from_config(config: NluConfig) -> Self {
        Self { config }
    }

    /// Select the language model family. Resets the weights to the family default.
    pub fn with_model_name(mut self, family: ModelFamily) -> Self {
        self.config.tokenizer.model_name = family;
        self.config.tokenizer.model_weights = family.default_weights().to_string();
        self
    }

    /// Set the pretrained weight-set (name, Hub repo id or local path).
    pub fn with_model_weights(mut self, weights: impl Into<String>) -> Self {
        self.config.tokenizer.model_weights = weights.into();
        self
    }

    /// Set the Hub download cache directory.
    pub fn with_cache_dir<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.config.tokenizer.cache_dir = Some(path.as_ref().to_path_buf());
        self
    }

    /// Enable intent splitting on the given symbol.
    pub fn with_intent_split(mut self, symbol: impl Into<String>) -> Self {
        self.config.tokenizer.intent_tokenization_flag = true;
        self.config.tokenizer.intent_split_symbol = symbol.into();
        self
    }

    /// Set the token pattern used to re-segment tokens.
    pub fn with_token_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.config.tokenizer.token_pattern = Some(pattern.into());
        self
    }

    /// Set the recognizers-service url.
    pub fn with_recognizers_url(mut self, url: impl Into<String>) -> Self {
        self.config.recognizers.url = Some(url.into());
        self
    }

    /// Restrict extracted entities to the given type names.
    pub fn with_entities<I, S>(mut self, entities: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.config.recognizers.entities = Some(entities.into_iter().map(Into::into).collect());
        self
    }

    /// Restrict the service to the given unit names.
    pub fn with_units<I, S>(mut self, units: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.config.recognizers.units = Some(units.into_iter().map(Into::into).collect());
        self
    }

    /// Set the culture sent to the service.
    pub fn with_culture(mut self, culture: impl Into<String>) -> Self {
        self.config.recognizers.culture = culture.into();
        self
    }

    /// Set the request timeout in seconds.
    pub fn with_timeout_secs(mut self, timeout: f64) -> Self {
        self.config.recognizers.timeout = timeout;
        self
    }

    /// Set the log level.
    pub fn with_log_level(mut self, level: LogLevel) -> Self {
        self.config.logging.level = level;
        self
    }

    /// Set the log format.
    pub fn with_log_format(mut self, format: LogFormat) -> Self {
        self.config.logging.format = format;
        self
    }

    /// Log to a file instead of stdout.
    pub fn with_log_file<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.config.logging.file = Some(PathBuf::from(path.as_ref()));
        self.config.logging.stdout = false;
        self
    }

    /// Validate and build the configuration.
    pub fn build(self) -> Result<NluConfig> {
        validation::validate_config(&self.config)?;
        Ok(self.config)
    }
}
