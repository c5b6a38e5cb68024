//! Traits for entity extraction functionality.

use async_trait::async_trait;
use tracing::debug;

use super::Entity;
use crate::message::Message;
use crate::Result;

/// A pipeline component that finds entities in message text.
#[async_trait]
pub trait EntityExtractor: Send + Sync + std::fmt::Debug {
    /// Extract entities from the given text.
    ///
    /// Entities are returned untagged; [`EntityExtractor::process`] adds the
    /// extractor name.
    async fn extract_entities(&self, text: &str) -> Result<Vec<Entity>>;

    /// Name recorded as the `extractor` of every produced entity.
    fn name(&self) -> &str;

    /// Extract entities from the message text and append them to the message.
    ///
    /// Messages without text are left untouched.
    async fn process(&self, message: &mut Message) -> Result<()> {
        let Some(text) = message.text() else {
            return Ok(());
        };

        let entities = self.extract_entities(text).await?;
        let entities = add_extractor_name(entities, self.name());
        debug!("{} appended {} entities", self.name(), entities.len());

        message.append_entities(entities, true);
        Ok(())
    }
}

/// Keep only entities whose type is in `allowed`.
///
/// `None` and an empty list both keep everything.
pub fn filter_irrelevant_entities(entities: Vec<Entity>, allowed: Option<&[String]>) -> Vec<Entity> {
    match allowed {
        Some(names) if !names.is_empty() => entities
            .into_iter()
            .filter(|entity| names.iter().any(|name| *name == entity.entity))
            .collect(),
        _ => entities,
    }
}

/// Record `name` as the extractor of every entity.
pub fn add_extractor_name(mut entities: Vec<Entity>, name: &str) -> Vec<Entity> {
    for entity in &mut entities {
        entity.extractor = Some(name.to_string());
    }
    entities
}
