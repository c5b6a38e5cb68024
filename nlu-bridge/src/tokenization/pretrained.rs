//! Message tokenizer backed by a pretrained sub-word vocabulary.

use std::fmt;

use tokenizers::{Encoding, Tokenizer};
use tracing::{debug, info, warn};

use super::loader;
use super::registry::ModelFamily;
use super::traits::{MessageTokenizer, TokenSplitting, attribute_text};
use super::Token;
use crate::config::TokenizerConfig;
use crate::message::Message;
use crate::{NluError, Result};

/// Tokenizes message text with the vocabulary of a BERT, ERNIE or RoBERTa
/// weight-set.
///
/// Tokens keep the sub-word surface form (`##ing`) and carry character offsets
/// into the original text. The tokenizer is loaded once and only read
/// afterwards, so one instance can serve any number of messages concurrently.
pub struct PretrainedTokenizer {
    family: ModelFamily,
    weights: String,
    inner: Tokenizer,
    splitting: TokenSplitting,
}

impl PretrainedTokenizer {
    /// Resolve and load the configured weight-set.
    pub fn new(config: TokenizerConfig) -> Result<Self> {
        let splitting = TokenSplitting::from_config(&config)?;

        if config.case_sensitive.is_some() {
            warn!(
                "The option 'case_sensitive' was moved from the tokenizers to the featurizers and is ignored here"
            );
        }

        let family = config.model_name;
        let weights = if config.model_weights.trim().is_empty() {
            info!(
                "Model weights not specified, using default '{}' for {}",
                family.default_weights(),
                family
            );
            family.default_weights().to_string()
        } else {
            config.model_weights.clone()
        };

        let source = loader::resolve_weights(family, &weights);
        debug!("Resolved weights '{}' to {:?}", weights, source);

        let inner = loader::load_tokenizer(family, &source, config.cache_dir.as_deref())?;
        info!("Loaded {} tokenizer '{}'", family, weights);

        Ok(Self {
            family,
            weights,
            inner,
            splitting,
        })
    }

    /// Alias of [`PretrainedTokenizer::new`] for components restored by a host.
    pub fn load(config: TokenizerConfig) -> Result<Self> {
        Self::new(config)
    }

    /// Wrap an already loaded tokenizer.
    pub fn from_tokenizer(
        family: ModelFamily,
        tokenizer: Tokenizer,
        config: &TokenizerConfig,
    ) -> Result<Self> {
        Ok(Self {
            family,
            weights: config.model_weights.clone(),
            inner: tokenizer,
            splitting: TokenSplitting::from_config(config)?,
        })
    }

    /// Model family of the loaded weights.
    pub fn family(&self) -> ModelFamily {
        self.family
    }

    /// Name of the loaded weight-set.
    pub fn weights(&self) -> &str {
        &self.weights
    }

    /// Tokenize raw text into content tokens.
    pub fn tokenize_text(&self, text: &str) -> Result<Vec<Token>> {
        let encoding = self.encode_with_offsets(text)?;
        let tokens = content_tokens(
            encoding.get_tokens(),
            encoding.get_offsets(),
            encoding.get_special_tokens_mask(),
        );

        Ok(self.splitting.apply_token_pattern(tokens))
    }

    /// Encode with special tokens and offsets counted in characters.
    fn encode_with_offsets(&self, text: &str) -> Result<Encoding> {
        self.inner
            .encode_char_offsets(text, true)
            .map_err(|e| NluError::Tokenization(e.to_string()))
    }
}

/// Collect the tokens between the leading special tokens and the next
/// special token.
fn content_tokens(surfaces: &[String], offsets: &[(usize, usize)], special: &[u32]) -> Vec<Token> {
    let is_special = |idx: usize| special.get(idx).is_some_and(|&flag| flag == 1);

    let first = (0..surfaces.len())
        .find(|&idx| !is_special(idx))
        .unwrap_or(surfaces.len());

    (first..surfaces.len())
        .take_while(|&idx| !is_special(idx))
        .filter_map(|idx| {
            let (start, end) = *offsets.get(idx)?;
            Some(Token::with_span(surfaces[idx].as_str(), start, end))
        })
        .collect()
}

impl MessageTokenizer for PretrainedTokenizer {
    fn name(&self) -> &str {
        "PretrainedTokenizer"
    }

    fn splitting(&self) -> &TokenSplitting {
        &self.splitting
    }

    fn tokenize(&self, message: &Message, attribute: &str) -> Result<Vec<Token>> {
        self.tokenize_text(attribute_text(message, attribute)?)
    }
}

impl fmt::Debug for PretrainedTokenizer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PretrainedTokenizer")
            .field("family", &self.family)
            .field("weights", &self.weights)
            .field("vocab_size", &self.inner.get_vocab_size(true))
            .finish()
    }
}
