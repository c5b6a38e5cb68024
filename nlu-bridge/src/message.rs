//! The message document that flows through the NLU pipeline.
//!
//! A [`Message`] carries the textual attributes of one user utterance or bot
//! action, the tokens produced for each attribute and the entities found by
//! extractors. Components mutate it in place; extractors only ever append to
//! the entity list.

use crate::entity_extraction::Entity;
use crate::tokenization::Token;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// User or bot text.
pub const TEXT: &str = "text";
/// Intent label of a training example.
pub const INTENT: &str = "intent";
/// Response text of a retrieval intent.
pub const RESPONSE: &str = "response";
/// Name of a bot action.
pub const ACTION_NAME: &str = "action_name";
/// Free text of an end-to-end bot action.
pub const ACTION_TEXT: &str = "action_text";
/// Full retrieval intent, `intent/response_key`.
pub const INTENT_RESPONSE_KEY: &str = "intent_response_key";
/// Entity list output property.
pub const ENTITIES: &str = "entities";

/// Separates intent and response key in [`INTENT_RESPONSE_KEY`].
pub const RESPONSE_IDENTIFIER_DELIMITER: &str = "/";

/// Attributes that tokenizers produce tokens for, in processing order.
pub const MESSAGE_ATTRIBUTES: &[&str] = &[
    TEXT,
    INTENT,
    RESPONSE,
    ACTION_NAME,
    ACTION_TEXT,
    INTENT_RESPONSE_KEY,
];

/// Key under which the tokens of `attribute` are stored, e.g. `text_tokens`.
pub fn tokens_name(attribute: &str) -> String {
    format!("{}_tokens", attribute)
}

/// A mutable pipeline document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Message {
    data: BTreeMap<String, String>,
    tokens: BTreeMap<String, Vec<Token>>,
    entities: Vec<Entity>,
    output_properties: BTreeSet<String>,
}

impl Message {
    /// Create a message holding user text.
    pub fn new(text: impl Into<String>) -> Self {
        let mut message = Self::default();
        message.data.insert(TEXT.to_string(), text.into());
        message
    }

    /// Builder-style attribute setter.
    pub fn with_attribute(mut self, attribute: &str, value: impl Into<String>) -> Self {
        self.data.insert(attribute.to_string(), value.into());
        self
    }

    /// Get a textual attribute.
    pub fn get(&self, attribute: &str) -> Option<&str> {
        self.data.get(attribute).map(String::as_str)
    }

    /// Set a textual attribute, optionally exposing it in the output.
    pub fn set(&mut self, attribute: &str, value: impl Into<String>, add_to_output: bool) {
        self.data.insert(attribute.to_string(), value.into());
        if add_to_output {
            self.output_properties.insert(attribute.to_string());
        }
    }

    /// The user text, if any.
    pub fn text(&self) -> Option<&str> {
        self.get(TEXT)
    }

    /// Tokens produced for `attribute`.
    pub fn tokens(&self, attribute: &str) -> Option<&[Token]> {
        self.tokens.get(&tokens_name(attribute)).map(Vec::as_slice)
    }

    /// Store the tokens produced for `attribute`, replacing earlier ones.
    pub fn set_tokens(&mut self, attribute: &str, tokens: Vec<Token>) {
        self.tokens.insert(tokens_name(attribute), tokens);
    }

    /// Entities found so far, in the order extractors appended them.
    pub fn entities(&self) -> &[Entity] {
        &self.entities
    }

    /// Append entities after any already present.
    pub fn append_entities(
        &mut self,
        entities: impl IntoIterator<Item = Entity>,
        add_to_output: bool,
    ) {
        self.entities.extend(entities);
        if add_to_output {
            self.output_properties.insert(ENTITIES.to_string());
        }
    }

    /// Names of the properties the host should expose in its parse result.
    pub fn output_properties(&self) -> &BTreeSet<String> {
        &self.output_properties
    }
}
