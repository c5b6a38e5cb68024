//! Tokenization of message attributes.
//!
//! [`PretrainedTokenizer`] turns text into sub-word tokens with character
//! offsets. Shared behaviour, such as splitting intent names and re-segmenting
//! tokens with a regex, lives in [`MessageTokenizer`] and [`TokenSplitting`].

pub mod loader;
pub mod pretrained;
pub mod registry;
pub mod traits;
pub mod types;

pub use loader::{TokenizerFiles, WeightSource};
pub use pretrained::PretrainedTokenizer;
pub use registry::{ModelFamily, VocabLayout};
pub use traits::{MessageTokenizer, TokenSplitting, convert_words_to_tokens};
pub use types::Token;
