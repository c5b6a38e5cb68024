//! Configuration validation utilities.
//!
//! This module provides validation functions for configuration values.
//! Components call the section validators themselves so that a config built
//! by hand gets the same checks as one extracted by the loader.

use super::ConfigError;
use super::models::*;

/// Validate the entire configuration.
pub fn validate_config(config: &NluConfig) -> Result<(), ConfigError> {
    validate_logging_config(&config.logging)?;
    validate_tokenizer_config(&config.tokenizer)?;
    validate_recognizers_config(&config.recognizers)?;

    Ok(())
}

/// Validate logging configuration.
fn validate_logging_config(config: &LoggingConfig) -> Result<(), ConfigError> {
    if let Some(file) = &config.file
        && file.as_os_str().is_empty()
    {
        return Err(ConfigError::ValidationError(
            "Log file path cannot be empty".to_string(),
        ));
    }

    Ok(())
}

/// Validate tokenizer configuration.
pub fn validate_tokenizer_config(config: &TokenizerConfig) -> Result<(), ConfigError> {
    if config.intent_tokenization_flag && config.intent_split_symbol.is_empty() {
        return Err(ConfigError::ValidationError(
            "intent_split_symbol cannot be empty when intent_tokenization_flag is set".to_string(),
        ));
    }

    if let Some(pattern) = &config.token_pattern {
        regex::Regex::new(pattern).map_err(|e| {
            ConfigError::ValidationError(format!("Invalid token_pattern '{}': {}", pattern, e))
        })?;
    }

    Ok(())
}

/// Validate recognizers-service extractor configuration.
pub fn validate_recognizers_config(config: &RecognizersConfig) -> Result<(), ConfigError> {
    if !config.timeout.is_finite() || config.timeout <= 0.0 {
        return Err(ConfigError::ValidationError(format!(
            "timeout must be a positive number of seconds, got {}",
            config.timeout
        )));
    }

    if config.culture.trim().is_empty() {
        return Err(ConfigError::ValidationError(
            "culture cannot be empty".to_string(),
        ));
    }

    // An unset url is allowed: the extractor degrades to a no-op.
    if let Some(url) = &config.url
        && !url.trim().is_empty()
    {
        reqwest::Url::parse(url).map_err(|e| {
            ConfigError::ValidationError(format!("Invalid recognizers-service url '{}': {}", url, e))
        })?;
    }

    for (field, names) in [("entities", &config.entities), ("units", &config.units)] {
        if let Some(names) = names
            && names.iter().any(|name| name.trim().is_empty())
        {
            return Err(ConfigError::ValidationError(format!(
                "{} cannot contain empty names",
                field
            )));
        }
    }

    Ok(())
}
