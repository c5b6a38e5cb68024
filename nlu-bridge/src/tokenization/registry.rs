//! Registry of supported pretrained model families.
//!
//! The set of families is closed: adding one means adding a variant, and every
//! `match` below has to handle it.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A supported language model family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModelFamily {
    /// BERT, including the whole-word-masking Chinese weights
    Bert,
    /// Baidu ERNIE
    Ernie,
    /// Chinese RoBERTa-wwm (BERT vocabulary format)
    Roberta,
}

/// Special tokens and casing needed to assemble a WordPiece tokenizer from a
/// bare `vocab.txt`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VocabLayout {
    pub cls_token: &'static str,
    pub sep_token: &'static str,
    pub unk_token: &'static str,
    pub pad_token: &'static str,
    pub mask_token: &'static str,
    pub lowercase: bool,
}

const BERT_LAYOUT: VocabLayout = VocabLayout {
    cls_token: "[CLS]",
    sep_token: "[SEP]",
    unk_token: "[UNK]",
    pad_token: "[PAD]",
    mask_token: "[MASK]",
    lowercase: true,
};

impl ModelFamily {
    /// Every supported family, in registry order.
    pub const ALL: [ModelFamily; 3] = [ModelFamily::Bert, ModelFamily::Ernie, ModelFamily::Roberta];

    /// Config name of the family.
    pub fn as_str(&self) -> &'static str {
        match self {
            ModelFamily::Bert => "bert",
            ModelFamily::Ernie => "ernie",
            ModelFamily::Roberta => "roberta",
        }
    }

    /// Weight-set used when none is configured.
    pub fn default_weights(&self) -> &'static str {
        match self {
            ModelFamily::Bert => "bert-wwm-ext-chinese",
            ModelFamily::Ernie => "ernie-1.0",
            ModelFamily::Roberta => "roberta-wwm-ext",
        }
    }

    /// How to build a tokenizer for this family from a `vocab.txt`.
    pub fn vocab_layout(&self) -> VocabLayout {
        match self {
            ModelFamily::Bert | ModelFamily::Ernie | ModelFamily::Roberta => BERT_LAYOUT,
        }
    }

    /// Hugging Face Hub repository publishing a PaddleNLP weight-set name.
    ///
    /// Returns `None` for names this family does not know; callers then treat
    /// the name as a Hub repository id.
    pub fn hub_repo(&self, weights: &str) -> Option<&'static str> {
        let table: &[(&str, &'static str)] = match self {
            ModelFamily::Bert => &[
                ("bert-base-chinese", "bert-base-chinese"),
                ("bert-base-uncased", "bert-base-uncased"),
                ("bert-base-cased", "bert-base-cased"),
                ("bert-base-multilingual-uncased", "bert-base-multilingual-uncased"),
                ("bert-wwm-chinese", "hfl/chinese-bert-wwm"),
                ("bert-wwm-ext-chinese", "hfl/chinese-bert-wwm-ext"),
            ],
            ModelFamily::Ernie => &[
                ("ernie-1.0", "nghuyong/ernie-1.0-base-zh"),
                ("ernie-3.0-base-zh", "nghuyong/ernie-3.0-base-zh"),
                ("ernie-3.0-medium-zh", "nghuyong/ernie-3.0-medium-zh"),
                ("ernie-3.0-nano-zh", "nghuyong/ernie-3.0-nano-zh"),
            ],
            ModelFamily::Roberta => &[
                ("roberta-wwm-ext", "hfl/chinese-roberta-wwm-ext"),
                ("roberta-wwm-ext-large", "hfl/chinese-roberta-wwm-ext-large"),
                ("rbt3", "hfl/rbt3"),
                ("rbtl3", "hfl/rbtl3"),
            ],
        };

        table
            .iter()
            .find(|(name, _)| *name == weights)
            .map(|(_, repo)| *repo)
    }
}

impl fmt::Display for ModelFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ModelFamily {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ModelFamily::ALL
            .into_iter()
            .find(|family| family.as_str() == s)
            .ok_or_else(|| {
                let names: Vec<&str> = ModelFamily::ALL.iter().map(ModelFamily::as_str).collect();
                format!(
                    "'{}' not a valid model name. Choose from {:?}",
                    s, names
                )
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_families() {
        assert_eq!("bert".parse::<ModelFamily>(), Ok(ModelFamily::Bert));
        assert_eq!("ernie".parse::<ModelFamily>(), Ok(ModelFamily::Ernie));
        assert_eq!("roberta".parse::<ModelFamily>(), Ok(ModelFamily::Roberta));
    }

    #[test]
    fn test_unknown_family_lists_choices() {
        let err = "gpt2".parse::<ModelFamily>().unwrap_err();
        assert!(err.contains("'gpt2' not a valid model name"));
        assert!(err.contains("bert") && err.contains("ernie") && err.contains("roberta"));
    }

    #[test]
    fn test_default_weights_resolve_to_hub_repos() {
        for family in ModelFamily::ALL {
            assert!(
                family.hub_repo(family.default_weights()).is_some(),
                "{} default weights have no hub repo",
                family
            );
        }
        assert_eq!(
            ModelFamily::Bert.hub_repo("bert-wwm-ext-chinese"),
            Some("hfl/chinese-bert-wwm-ext")
        );
        assert_eq!(ModelFamily::Bert.hub_repo("roberta-wwm-ext"), None);
    }

    #[test]
    fn test_serde_names_match_config_names() {
        for family in ModelFamily::ALL {
            let json = serde_json::to_string(&family).unwrap();
            assert_eq!(json, format!("\"{}\"", family.as_str()));
        }
    }
}
