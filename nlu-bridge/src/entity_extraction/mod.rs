//! Entity extraction for message text.
//!
//! Extractors implement [`EntityExtractor`] and append [`Entity`] values to a
//! [`Message`](crate::message::Message). The only extractor shipped here is
//! [`RecognizersServiceExtractor`], a client of the recognizers-service HTTP
//! API.

mod types;
mod traits;
pub mod protocol;
pub mod recognizers;

pub use types::*;
pub use traits::*;
pub use recognizers::{EXTRACTOR_NAME, RecognizersServiceExtractor, URL_ENV_VAR, resolve_url};
