//! Wire format of the recognizers-service `/recognize` endpoint.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::Entity;
use crate::config::RecognizersConfig;

/// Request body posted to the service.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecognizersRequest<'a> {
    pub text: &'a str,
    pub culture: &'a str,
    pub entities: Option<&'a [String]>,
    pub units: Option<&'a [String]>,
    pub show_numbers: bool,
    pub merge_results: bool,
}

impl<'a> RecognizersRequest<'a> {
    /// Build the request for `text` from the extractor configuration.
    pub fn new(text: &'a str, config: &'a RecognizersConfig) -> Self {
        Self {
            text,
            culture: &config.culture,
            entities: config.entities.as_deref(),
            units: config.units.as_deref(),
            show_numbers: config.show_numbers,
            merge_results: config.merge_results,
        }
    }
}

/// One match returned by the service.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecognizersMatch {
    pub start: usize,
    pub end: usize,
    pub text: String,
    pub type_name: String,
    #[serde(default)]
    pub resolution: Option<Map<String, Value>>,
}

impl RecognizersMatch {
    /// Normalize into an untagged [`Entity`].
    ///
    /// The service reports no confidence, so every match gets 1.0. The whole
    /// resolution object is kept as `additional_info`.
    pub fn into_entity(self) -> Entity {
        let resolution = self.resolution.unwrap_or_default();
        let value = resolution.get("value").cloned();
        Entity {
            start: self.start,
            end: self.end,
            text: self.text,
            value,
            confidence: 1.0,
            additional_info: Value::Object(resolution),
            entity: self.type_name,
            extractor: None,
        }
    }
}

/// Convert service matches into entities, preserving order.
pub fn convert_matches(matches: Vec<RecognizersMatch>) -> Vec<Entity> {
    matches.into_iter().map(RecognizersMatch::into_entity).collect()
}
