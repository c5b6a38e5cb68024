//! The shared contract of message tokenizers.

use regex::Regex;

use super::Token;
use crate::config::{TokenizerConfig, validation};
use crate::message::{
    ACTION_NAME, INTENT, INTENT_RESPONSE_KEY, MESSAGE_ATTRIBUTES, Message,
    RESPONSE_IDENTIFIER_DELIMITER,
};
use crate::{NluError, Result};

/// Options every tokenizer shares for splitting names and re-segmenting tokens.
#[derive(Debug, Clone)]
pub struct TokenSplitting {
    intent_tokenization_flag: bool,
    intent_split_symbol: String,
    token_pattern: Option<Regex>,
}

impl TokenSplitting {
    /// Build from the tokenizer configuration.
    pub fn from_config(config: &TokenizerConfig) -> Result<Self> {
        validation::validate_tokenizer_config(config)?;

        let token_pattern = config
            .token_pattern
            .as_deref()
            .map(Regex::new)
            .transpose()
            .map_err(|e| NluError::Configuration(format!("Invalid token_pattern: {}", e)))?;

        Ok(Self {
            intent_tokenization_flag: config.intent_tokenization_flag,
            intent_split_symbol: config.intent_split_symbol.clone(),
            token_pattern,
        })
    }

    fn split_on_symbol<'t>(&self, text: &'t str) -> Vec<&'t str> {
        if self.intent_tokenization_flag {
            text.split(self.intent_split_symbol.as_str()).collect()
        } else {
            vec![text]
        }
    }

    /// Tokenize a name-like attribute (intent, action name, retrieval intent).
    pub fn split_name(&self, text: &str, attribute: &str) -> Vec<Token> {
        let words = match attribute {
            INTENT_RESPONSE_KEY => match text.split_once(RESPONSE_IDENTIFIER_DELIMITER) {
                Some((intent, response_key)) => {
                    let mut words = self.split_on_symbol(intent);
                    words.extend(self.split_on_symbol(response_key));
                    words
                }
                None => self.split_on_symbol(text),
            },
            ACTION_NAME => vec![text],
            _ => self.split_on_symbol(text),
        };

        convert_words_to_tokens(&words, text)
    }

    /// Re-segment tokens with the configured token pattern.
    ///
    /// Each non-empty match becomes a token positioned inside the parent's
    /// span. The `##` continuation marker of sub-word tokens is not part of the
    /// source text, so matching happens on the text after it. When the
    /// remaining surface still differs in length from the span (normalized
    /// text), match offsets are scaled into the span. Special tokens such as
    /// `[UNK]` and tokens without matches are kept as they are.
    pub fn apply_token_pattern(&self, tokens: Vec<Token>) -> Vec<Token> {
        let Some(pattern) = &self.token_pattern else {
            return tokens;
        };

        let mut final_tokens = Vec::with_capacity(tokens.len());
        for token in tokens {
            if is_special_surface(&token.text) {
                final_tokens.push(token);
                continue;
            }

            let body = token
                .text
                .strip_prefix(CONTINUING_SUBWORD_PREFIX)
                .filter(|rest| !rest.is_empty())
                .unwrap_or(&token.text);
            let body_len = body.chars().count();
            let span_len = token.len();

            let pieces: Vec<_> = pattern
                .find_iter(body)
                .filter(|m| !m.as_str().is_empty())
                .collect();

            if pieces.is_empty() || body_len == 0 {
                final_tokens.push(token);
                continue;
            }

            // Character offset inside the body mapped into the parent span
            let to_span = |offset: usize| {
                let offset = if body_len == span_len {
                    offset
                } else {
                    offset * span_len / body_len
                };
                (token.start + offset).min(token.end)
            };

            for piece in &pieces {
                let offset = body[..piece.start()].chars().count();
                let start = to_span(offset);
                let end = to_span(offset + piece.as_str().chars().count()).max(start);
                final_tokens.push(Token::with_span(piece.as_str(), start, end));
            }
        }

        final_tokens
    }
}

const CONTINUING_SUBWORD_PREFIX: &str = "##";

/// Bracketed vocabulary markers such as `[UNK]` stand for text they do not
/// spell out.
fn is_special_surface(text: &str) -> bool {
    text.len() > 2 && text.starts_with('[') && text.ends_with(']')
}

/// Locate each word in `text`, left to right, and turn it into a token.
///
/// Words that cannot be found (which only happens for inconsistent input) are
/// placed at the current search position.
pub fn convert_words_to_tokens(words: &[&str], text: &str) -> Vec<Token> {
    let mut tokens = Vec::with_capacity(words.len());
    let mut running_byte = 0;
    let mut running_char = 0;

    for word in words {
        let found = text[running_byte..].find(word).map(|idx| running_byte + idx);
        let word_byte = found.unwrap_or(running_byte);
        let word_char = running_char + text[running_byte..word_byte].chars().count();

        tokens.push(Token::new(*word, word_char));

        if found.is_some() {
            running_byte = word_byte + word.len();
            running_char = word_char + word.chars().count();
        }
    }

    tokens
}

/// A pipeline component that turns message attributes into tokens.
pub trait MessageTokenizer: Send + Sync + std::fmt::Debug {
    /// Name identifying the component.
    fn name(&self) -> &str;

    /// Shared splitting options.
    fn splitting(&self) -> &TokenSplitting;

    /// Tokenize the text stored in `attribute`.
    fn tokenize(&self, message: &Message, attribute: &str) -> Result<Vec<Token>>;

    /// Tokenize every textual attribute of the message and store the tokens.
    ///
    /// Name-like attributes are split by [`TokenSplitting::split_name`]; the
    /// rest go through [`MessageTokenizer::tokenize`].
    fn process(&self, message: &mut Message) -> Result<()> {
        for attribute in MESSAGE_ATTRIBUTES {
            let Some(text) = message.get(attribute) else {
                continue;
            };

            let tokens = if matches!(*attribute, INTENT | ACTION_NAME | INTENT_RESPONSE_KEY) {
                self.splitting().split_name(text, attribute)
            } else {
                self.tokenize(message, attribute)?
            };

            tracing::trace!(
                tokenizer = self.name(),
                attribute = *attribute,
                count = tokens.len(),
                "tokenized attribute"
            );
            message.set_tokens(attribute, tokens);
        }

        Ok(())
    }
}

/// Fetch the text of `attribute` or explain why it is unusable.
pub(crate) fn attribute_text<'m>(message: &'m Message, attribute: &str) -> Result<&'m str> {
    message
        .get(attribute)
        .ok_or_else(|| NluError::InvalidAttribute {
            attribute: attribute.to_string(),
            reason: format!("message has no '{}' attribute", attribute),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn splitting(flag: bool, pattern: Option<&str>) -> TokenSplitting {
        let config = TokenizerConfig {
            intent_tokenization_flag: flag,
            token_pattern: pattern.map(str::to_string),
            ..Default::default()
        };
        TokenSplitting::from_config(&config).unwrap()
    }

    #[test]
    fn test_convert_words_to_tokens_uses_char_offsets() {
        let tokens = convert_words_to_tokens(&["你好", "世界"], "你好 世界");
        assert_eq!(
            tokens,
            vec![Token::new("你好", 0), Token::new("世界", 3)]
        );
        assert_eq!(tokens[1].end, 5);
    }

    #[test]
    fn test_convert_words_to_tokens_repeated_words() {
        let tokens = convert_words_to_tokens(&["ab", "ab"], "ab ab");
        assert_eq!(tokens[0].start, 0);
        assert_eq!(tokens[1].start, 3);
    }

    #[test]
    fn test_split_intent_with_flag() {
        let tokens = splitting(true, None).split_name("check_balance", INTENT);
        let texts: Vec<&str> = tokens.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, vec!["check", "balance"]);
        assert_eq!(tokens[1].start, 6);
    }

    #[test]
    fn test_split_intent_without_flag() {
        let tokens = splitting(false, None).split_name("check_balance", INTENT);
        assert_eq!(tokens, vec![Token::new("check_balance", 0)]);
    }

    #[test]
    fn test_split_intent_response_key() {
        let tokens = splitting(true, None).split_name("faq/ask_name", INTENT_RESPONSE_KEY);
        let texts: Vec<&str> = tokens.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, vec!["faq", "ask", "name"]);
        assert_eq!(tokens[1].start, 4);
    }

    #[test]
    fn test_action_name_is_never_split() {
        let tokens = splitting(true, None).split_name("action_listen", ACTION_NAME);
        assert_eq!(tokens, vec![Token::new("action_listen", 0)]);
    }

    #[test]
    fn test_token_pattern_passthrough_without_pattern() {
        let tokens = vec![Token::new("hello-world", 0)];
        assert_eq!(splitting(false, None).apply_token_pattern(tokens.clone()), tokens);
    }

    #[test]
    fn test_token_pattern_resegments_tokens() {
        let tokens = vec![Token::new("hello-world", 4), Token::new("--", 16)];
        let result = splitting(false, Some(r"\w+")).apply_token_pattern(tokens);

        assert_eq!(
            result,
            vec![
                Token::with_span("hello", 4, 9),
                Token::with_span("world", 10, 15),
                Token::new("--", 16),
            ]
        );
    }

    #[test]
    fn test_token_pattern_skips_subword_marker() {
        // "##ing" covers the three characters "ing" of "playing"
        let text = "playing";
        let tokens = vec![Token::with_span("play", 0, 4), Token::with_span("##ing", 4, 7)];
        let result = splitting(false, Some(r"\w+")).apply_token_pattern(tokens);

        assert_eq!(
            result,
            vec![Token::with_span("play", 0, 4), Token::with_span("ing", 4, 7)]
        );
        for token in &result {
            let covered: String = text.chars().skip(token.start).take(token.len()).collect();
            assert_eq!(covered, token.text);
        }
    }

    #[test]
    fn test_token_pattern_keeps_special_tokens() {
        let tokens = vec![Token::with_span("[UNK]", 0, 3)];
        let result = splitting(false, Some(r"\w+")).apply_token_pattern(tokens.clone());
        assert_eq!(result, tokens);
    }

    #[test]
    fn test_token_pattern_scales_normalized_surfaces() {
        // A two-character surface normalized from a four-character span
        let tokens = vec![Token::with_span("ab", 10, 14)];
        let result = splitting(false, Some(r"[a-z]")).apply_token_pattern(tokens);

        assert_eq!(
            result,
            vec![Token::with_span("a", 10, 12), Token::with_span("b", 12, 14)]
        );
    }
}
