//! Entity structures attached to messages.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// An entity found in message text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    /// Start offset in characters (inclusive)
    pub start: usize,
    /// End offset in characters (exclusive)
    pub end: usize,
    /// Matched text
    pub text: String,
    /// Resolved value (a date, number, amount...) when the extractor provides one
    pub value: Option<Value>,
    /// Confidence score (0.0 to 1.0)
    pub confidence: f32,
    /// Extractor specific metadata, passed through untouched
    pub additional_info: Value,
    /// Entity type name (e.g. "datetime", "number", "currency")
    pub entity: String,
    /// Name of the extractor that produced the entity
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extractor: Option<String>,
}

impl Entity {
    /// Length of the matched span in characters.
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Whether the matched span is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Human readable one-line description.
    pub fn format(&self) -> String {
        let value = match &self.value {
            Some(Value::String(s)) => s.clone(),
            Some(other) => other.to_string(),
            None => "-".to_string(),
        };

        format!(
            "{} [{}] = {} ({}..{}, source: {})",
            self.text,
            self.entity,
            value,
            self.start,
            self.end,
            self.extractor.as_deref().unwrap_or("unknown")
        )
    }
}
