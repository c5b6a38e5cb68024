//! Entity extraction through a running recognizers-service.
//!
//! The service wraps Microsoft Recognizers-Text and resolves dates, times,
//! numbers, currencies, units and similar entities. Its url comes from the
//! `RECOGNIZERS_SERVICE_URL` environment variable or the component
//! configuration. Service failures never fail a message: they are logged and
//! the message simply gets no entities from this component.

use async_trait::async_trait;
use reqwest::StatusCode;
use tracing::{debug, error, warn};

use super::protocol::{RecognizersMatch, RecognizersRequest, convert_matches};
use super::traits::{EntityExtractor, filter_irrelevant_entities};
use super::Entity;
use crate::config::{RecognizersConfig, validation};
use crate::{NluError, Result};

/// Environment variable overriding the configured service url.
pub const URL_ENV_VAR: &str = "RECOGNIZERS_SERVICE_URL";

/// Name recorded on every entity this component produces.
pub const EXTRACTOR_NAME: &str = "RecognizersServiceEntityExtractor";

/// Pick the service url. A non-empty environment value always wins.
pub fn resolve_url(configured: Option<&str>, env: Option<&str>) -> Option<String> {
    env.filter(|url| !url.trim().is_empty())
        .or(configured.filter(|url| !url.trim().is_empty()))
        .map(str::to_string)
}

/// Extracts entities by posting message text to recognizers-service.
#[derive(Debug, Clone)]
pub struct RecognizersServiceExtractor {
    config: RecognizersConfig,
    client: reqwest::Client,
}

impl RecognizersServiceExtractor {
    /// Create the extractor, validating the configuration and building the
    /// HTTP client with the configured timeout.
    ///
    /// Only the configuration is validated. `RECOGNIZERS_SERVICE_URL` is read
    /// per request, so it cannot rescue a malformed configured url.
    pub fn new(config: RecognizersConfig) -> Result<Self> {
        validation::validate_recognizers_config(&config)?;

        let client = reqwest::Client::builder()
            .timeout(config.timeout_duration())
            .build()
            .map_err(|e| NluError::Configuration(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { config, client })
    }

    /// Alias of [`RecognizersServiceExtractor::new`] for components restored
    /// by a host.
    pub fn load(config: RecognizersConfig) -> Result<Self> {
        Self::new(config)
    }

    /// The component configuration.
    pub fn config(&self) -> &RecognizersConfig {
        &self.config
    }

    /// Url requests are sent to, if any is configured.
    pub fn url(&self) -> Option<String> {
        let env = std::env::var(URL_ENV_VAR).ok();
        resolve_url(self.config.url.as_deref(), env.as_deref())
    }

    /// Post `text` to the service and return its matches.
    ///
    /// Every failure is logged and yields no matches.
    async fn parse(&self, url: &str, text: &str) -> Vec<RecognizersMatch> {
        let request = RecognizersRequest::new(text, &self.config);

        let response = match self
            .client
            .post(url)
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await
        {
            Ok(response) => response,
            Err(e) if e.is_timeout() => {
                error!(
                    "Request to recognizers-service at '{}' timed out after {:?}. \
                     Is the service running and reachable?",
                    url,
                    self.config.timeout_duration()
                );
                return Vec::new();
            }
            Err(e) => {
                error!(
                    "Failed to connect to recognizers-service at '{}'. \
                     Make sure the service is running: {}",
                    url, e
                );
                return Vec::new();
            }
        };

        let status = response.status();
        if status != StatusCode::OK {
            let body = response.text().await.unwrap_or_default();
            error!(
                "Failed to get a proper response from recognizers-service. Status: {} Response: {}",
                status.as_u16(),
                body
            );
            return Vec::new();
        }

        match response.json::<Vec<RecognizersMatch>>().await {
            Ok(matches) => matches,
            Err(e) => {
                error!("Malformed response from recognizers-service at '{}': {}", url, e);
                Vec::new()
            }
        }
    }
}

#[async_trait]
impl EntityExtractor for RecognizersServiceExtractor {
    async fn extract_entities(&self, text: &str) -> Result<Vec<Entity>> {
        let Some(url) = self.url() else {
            warn!(
                "recognizers-service url is not set. Set '{}' or configure 'url'. \
                 No entities will be extracted",
                URL_ENV_VAR
            );
            return Ok(Vec::new());
        };

        let matches = self.parse(&url, text).await;
        debug!("recognizers-service returned {} matches", matches.len());

        Ok(filter_irrelevant_entities(
            convert_matches(matches),
            self.config.entities.as_deref(),
        ))
    }

    fn name(&self) -> &str {
        EXTRACTOR_NAME
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_url_beats_configured_url() {
        assert_eq!(
            resolve_url(Some("http://config:8000"), Some("http://env:9000")),
            Some("http://env:9000".to_string())
        );
    }

    #[test]
    fn test_configured_url_used_without_env() {
        assert_eq!(
            resolve_url(Some("http://config:8000"), None),
            Some("http://config:8000".to_string())
        );
        assert_eq!(
            resolve_url(Some("http://config:8000"), Some("")),
            Some("http://config:8000".to_string())
        );
    }

    #[test]
    fn test_no_url() {
        assert_eq!(resolve_url(None, None), None);
        assert_eq!(resolve_url(Some(" "), Some("")), None);
    }

    #[test]
    fn test_new_rejects_invalid_timeout() {
        let config = RecognizersConfig {
            timeout: 0.0,
            ..Default::default()
        };
        let err = RecognizersServiceExtractor::new(config).unwrap_err();
        assert!(matches!(err, NluError::Configuration(_)));
    }

    #[test]
    fn test_new_rejects_malformed_configured_url() {
        let config = RecognizersConfig {
            url: Some("not a url".to_string()),
            ..Default::default()
        };
        let err = RecognizersServiceExtractor::new(config).unwrap_err();
        assert!(matches!(err, NluError::Configuration(_)));
        assert!(err.to_string().contains("not a url"));

        let config = RecognizersConfig {
            url: Some("   ".to_string()),
            ..Default::default()
        };
        assert!(RecognizersServiceExtractor::new(config).is_ok());
    }
}
