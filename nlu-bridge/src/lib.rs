//! # nlu-bridge
//!
//! Pipeline components that connect a conversational NLU pipeline to two
//! external collaborators:
//!
//! - a pretrained sub-word tokenizer (BERT, ERNIE and RoBERTa families, loaded
//!   through the Hugging Face `tokenizers` crate), exposed as
//!   [`tokenization::PretrainedTokenizer`];
//! - a running [recognizers-service](https://github.com/xanthous-tech/recognizers-service)
//!   instance that resolves dates, numbers, currencies and similar entities,
//!   exposed as [`entity_extraction::RecognizersServiceExtractor`].
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use nlu_bridge::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let config = ConfigBuilder::new()
//!         .with_recognizers_url("http://localhost:8000/recognize")
//!         .with_entities(["datetime", "number"])
//!         .build()?;
//!     nlu_bridge::logging::init(&config.logging)?;
//!
//!     let tokenizer = PretrainedTokenizer::new(config.tokenizer.clone())?;
//!     let extractor = RecognizersServiceExtractor::new(config.recognizers.clone())?;
//!
//!     let mut message = Message::new("明天下午三点开会");
//!     tokenizer.process(&mut message)?;
//!     extractor.process(&mut message).await?;
//!
//!     for entity in message.entities() {
//!         println!("{}", entity.format());
//!     }
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod entity_extraction;
pub mod logging;
pub mod message;
pub mod tokenization;

/// The prelude re-exports commonly used types for convenience
pub mod prelude {
    pub use crate::config::{
        ConfigBuilder, ConfigLoader, LogFormat, LogLevel, LoggingConfig, NluConfig,
        RecognizersConfig, TokenizerConfig,
    };

    pub use crate::entity_extraction::{Entity, EntityExtractor, RecognizersServiceExtractor};

    pub use crate::message::Message;

    pub use crate::tokenization::{MessageTokenizer, ModelFamily, PretrainedTokenizer, Token};

    pub use crate::{NluError, Result};
}

/// Current library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Error type for nlu-bridge operations
#[derive(Debug, thiserror::Error)]
pub enum NluError {
    /// Invalid component configuration, raised while constructing a component
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// The pretrained tokenizer could not be fetched or parsed
    #[error("Failed to load tokenizer '{weights}': {reason}")]
    ModelLoading { weights: String, reason: String },

    /// The underlying tokenizer failed to encode a text
    #[error("Tokenization error: {0}")]
    Tokenization(String),

    /// A message attribute expected to hold text was missing or malformed
    #[error("Message attribute '{attribute}' is not usable: {reason}")]
    InvalidAttribute { attribute: String, reason: String },

    /// Logging error
    #[error("Logging error: {0}")]
    Logging(#[from] crate::logging::LogError),

    /// IO error while reading tokenizer files
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Other unclassified errors
    #[error("{0}")]
    Other(String),
}

impl From<crate::config::ConfigError> for NluError {
    fn from(err: crate::config::ConfigError) -> Self {
        NluError::Configuration(err.to_string())
    }
}

/// Result type for nlu-bridge operations
pub type Result<T> = std::result::Result<T, NluError>;
