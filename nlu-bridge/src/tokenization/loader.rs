//! Locating and loading pretrained tokenizer files.
//!
//! Two on-disk formats are understood, preferred in this order:
//!
//! - `tokenizer.json`, the serialized Hugging Face tokenizer pipeline;
//! - `vocab.txt`, a legacy BERT vocabulary from which a WordPiece pipeline is
//!   assembled using the family's [`VocabLayout`].
//!
//! Weight-sets that are not local paths are fetched from the Hugging Face Hub.

use std::path::{Path, PathBuf};
use std::str::FromStr;

use hf_hub::api::sync::{Api, ApiBuilder};
use serde_json::{Map, Value, json};
use tokenizers::Tokenizer;
use tracing::{debug, info};

use super::registry::{ModelFamily, VocabLayout};
use crate::{NluError, Result};

const TOKENIZER_FILE: &str = "tokenizer.json";
const VOCAB_FILE: &str = "vocab.txt";

/// Where a weight-set lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WeightSource {
    /// A local directory or file
    Local(PathBuf),
    /// A Hugging Face Hub repository id
    Hub(String),
}

/// Tokenizer files found for a weight-set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenizerFiles {
    /// Serialized tokenizer pipeline
    Json(PathBuf),
    /// Legacy WordPiece vocabulary
    Vocab(PathBuf),
}

/// Decide where `weights` should be loaded from.
pub fn resolve_weights(family: ModelFamily, weights: &str) -> WeightSource {
    let path = Path::new(weights);
    if path.exists() {
        return WeightSource::Local(path.to_path_buf());
    }

    match family.hub_repo(weights) {
        Some(repo) => WeightSource::Hub(repo.to_string()),
        None => WeightSource::Hub(weights.to_string()),
    }
}

/// Load the tokenizer for a resolved weight-set.
pub fn load_tokenizer(
    family: ModelFamily,
    source: &WeightSource,
    cache_dir: Option<&Path>,
) -> Result<Tokenizer> {
    let files = match source {
        WeightSource::Local(path) => find_local_files(path)?,
        WeightSource::Hub(repo) => fetch_hub_files(repo, cache_dir)?,
    };

    debug!("Loading {} tokenizer from {:?}", family, files);

    match files {
        TokenizerFiles::Json(path) => from_tokenizer_json(&path),
        TokenizerFiles::Vocab(path) => from_vocab(&path, family.vocab_layout()),
    }
}

/// Find tokenizer files in a local directory, or accept a direct file path.
pub fn find_local_files(path: &Path) -> Result<TokenizerFiles> {
    if path.is_file() {
        return match path.file_name().and_then(|name| name.to_str()) {
            Some(name) if name.ends_with(".json") => Ok(TokenizerFiles::Json(path.to_path_buf())),
            _ => Ok(TokenizerFiles::Vocab(path.to_path_buf())),
        };
    }

    let json = path.join(TOKENIZER_FILE);
    if json.is_file() {
        return Ok(TokenizerFiles::Json(json));
    }

    let vocab = path.join(VOCAB_FILE);
    if vocab.is_file() {
        return Ok(TokenizerFiles::Vocab(vocab));
    }

    Err(loading_error(
        &path.display().to_string(),
        format!("neither {} nor {} found", TOKENIZER_FILE, VOCAB_FILE),
    ))
}

fn fetch_hub_files(repo_id: &str, cache_dir: Option<&Path>) -> Result<TokenizerFiles> {
    info!("Fetching tokenizer files for '{}' from the Hugging Face Hub", repo_id);

    let api = match cache_dir {
        Some(dir) => ApiBuilder::new().with_cache_dir(dir.to_path_buf()).build(),
        None => Api::new(),
    }
    .map_err(|e| loading_error(repo_id, format!("failed to create Hub client: {}", e)))?;
    let repo = api.model(repo_id.to_string());

    match repo.get(TOKENIZER_FILE) {
        Ok(path) => Ok(TokenizerFiles::Json(path)),
        Err(json_err) => {
            debug!(
                "No {} in '{}' ({}), trying {}",
                TOKENIZER_FILE, repo_id, json_err, VOCAB_FILE
            );
            repo.get(VOCAB_FILE)
                .map(TokenizerFiles::Vocab)
                .map_err(|e| loading_error(repo_id, e))
        }
    }
}

/// Load a serialized tokenizer, dropping any truncation or padding settings.
///
/// Truncation would silently cut long messages and padding adds tokens that
/// cover no text; neither belongs in a message tokenizer.
pub fn from_tokenizer_json(path: &Path) -> Result<Tokenizer> {
    let source = path.display().to_string();
    let raw = std::fs::read_to_string(path)?;
    let mut value: Value =
        serde_json::from_str(&raw).map_err(|e| loading_error(&source, e))?;

    if let Some(object) = value.as_object_mut() {
        object.insert("truncation".to_string(), Value::Null);
        object.insert("padding".to_string(), Value::Null);
    }

    Tokenizer::from_str(&value.to_string()).map_err(|e| loading_error(&source, e))
}

/// Assemble a BERT-style WordPiece tokenizer from a `vocab.txt`.
pub fn from_vocab(path: &Path, layout: VocabLayout) -> Result<Tokenizer> {
    let source = path.display().to_string();
    let raw = std::fs::read_to_string(path)?;

    let mut vocab = Map::new();
    for (id, line) in raw.lines().enumerate() {
        let token = line.trim_end_matches('\r');
        if token.is_empty() || vocab.contains_key(token) {
            continue;
        }
        vocab.insert(token.to_string(), json!(id));
    }

    let id_of = |token: &str| -> Result<u64> {
        vocab
            .get(token)
            .and_then(Value::as_u64)
            .ok_or_else(|| loading_error(&source, format!("vocabulary has no {} token", token)))
    };

    let cls_id = id_of(layout.cls_token)?;
    let sep_id = id_of(layout.sep_token)?;
    id_of(layout.unk_token)?;

    let added_tokens: Vec<Value> = [
        layout.pad_token,
        layout.unk_token,
        layout.cls_token,
        layout.sep_token,
        layout.mask_token,
    ]
    .into_iter()
    .filter_map(|token| {
        vocab.get(token).and_then(Value::as_u64).map(|id| {
            json!({
                "id": id,
                "content": token,
                "single_word": false,
                "lstrip": false,
                "rstrip": false,
                "normalized": false,
                "special": true,
            })
        })
    })
    .collect();

    let pipeline = json!({
        "version": "1.0",
        "truncation": null,
        "padding": null,
        "added_tokens": added_tokens,
        "normalizer": {
            "type": "BertNormalizer",
            "clean_text": true,
            "handle_chinese_chars": true,
            "strip_accents": null,
            "lowercase": layout.lowercase,
        },
        "pre_tokenizer": { "type": "BertPreTokenizer" },
        "post_processor": {
            "type": "BertProcessing",
            "sep": [layout.sep_token, sep_id],
            "cls": [layout.cls_token, cls_id],
        },
        "decoder": { "type": "WordPiece", "prefix": "##", "cleanup": true },
        "model": {
            "type": "WordPiece",
            "unk_token": layout.unk_token,
            "continuing_subword_prefix": "##",
            "max_input_chars_per_word": 100,
            "vocab": vocab,
        },
    });

    Tokenizer::from_str(&pipeline.to_string()).map_err(|e| loading_error(&source, e))
}

fn loading_error(weights: &str, reason: impl std::fmt::Display) -> NluError {
    NluError::ModelLoading {
        weights: weights.to_string(),
        reason: reason.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_known_weight_names() {
        assert_eq!(
            resolve_weights(ModelFamily::Bert, "bert-wwm-ext-chinese"),
            WeightSource::Hub("hfl/chinese-bert-wwm-ext".to_string())
        );
        assert_eq!(
            resolve_weights(ModelFamily::Roberta, "some-org/custom-model"),
            WeightSource::Hub("some-org/custom-model".to_string())
        );
    }

    #[test]
    fn test_resolve_local_directory() {
        let dir = tempfile::tempdir().unwrap();
        let weights = dir.path().to_str().unwrap();
        assert_eq!(
            resolve_weights(ModelFamily::Bert, weights),
            WeightSource::Local(dir.path().to_path_buf())
        );
    }

    #[test]
    fn test_find_local_files_prefers_tokenizer_json() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(VOCAB_FILE), "[UNK]\n").unwrap();
        assert_eq!(
            find_local_files(dir.path()).unwrap(),
            TokenizerFiles::Vocab(dir.path().join(VOCAB_FILE))
        );

        std::fs::write(dir.path().join(TOKENIZER_FILE), "{}").unwrap();
        assert_eq!(
            find_local_files(dir.path()).unwrap(),
            TokenizerFiles::Json(dir.path().join(TOKENIZER_FILE))
        );
    }

    #[test]
    fn test_find_local_files_in_empty_directory() {
        let dir = tempfile::tempdir().unwrap();
        let err = find_local_files(dir.path()).unwrap_err();
        assert!(matches!(err, NluError::ModelLoading { .. }));
    }

    #[test]
    fn test_from_vocab_requires_special_tokens() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(VOCAB_FILE);
        std::fs::write(&path, "[PAD]\n[UNK]\nhello\n").unwrap();

        let err = from_vocab(&path, ModelFamily::Bert.vocab_layout()).unwrap_err();
        assert!(err.to_string().contains("[CLS]"));
    }

    #[test]
    fn test_from_vocab_builds_wordpiece_pipeline() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(VOCAB_FILE);
        std::fs::write(&path, "[PAD]\n[UNK]\n[CLS]\n[SEP]\n[MASK]\n你\n好\n").unwrap();

        let tokenizer = from_vocab(&path, ModelFamily::Bert.vocab_layout()).unwrap();
        let encoding = tokenizer.encode("你好", true).unwrap();

        assert_eq!(encoding.get_tokens(), &["[CLS]", "你", "好", "[SEP]"]);
        assert_eq!(encoding.get_ids(), &[2, 5, 6, 3]);
    }
}
