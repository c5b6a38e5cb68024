//! Token type produced by tokenizers.

use serde::{Deserialize, Serialize};

/// A token with its character span in the original, untokenized text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// Surface form
    pub text: String,
    /// Start offset in characters (inclusive)
    pub start: usize,
    /// End offset in characters (exclusive)
    pub end: usize,
}

impl Token {
    /// Create a token whose span is exactly its text, starting at `start`.
    pub fn new(text: impl Into<String>, start: usize) -> Self {
        let text = text.into();
        let end = start + text.chars().count();
        Self { text, start, end }
    }

    /// Create a token with an explicit span.
    ///
    /// Sub-word tokens carry markers such as `##`, so their surface length
    /// does not always match the span they cover.
    pub fn with_span(text: impl Into<String>, start: usize, end: usize) -> Self {
        Self {
            text: text.into(),
            start,
            end,
        }
    }

    /// Length of the covered span in characters.
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Whether the token covers no characters.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
