use std::fmt;

use crate::ai_sdk_core::IdGenerator;
use crate::ai_sdk_types::v2::Headers;

pub const CHAT_PROVIDER: &str = "google.vertex.chat";
pub const EMBEDDING_PROVIDER: &str = "google.vertex.embedding";
pub const IMAGE_PROVIDER: &str = "google.vertex.image";

/// Configuration handed to the chat/language model constructor.
#[derive(Clone)]
pub struct GoogleVertexChatConfig {
    pub provider: &'static str,
    pub base_url: String,
    pub headers: Headers,
    pub generate_id: IdGenerator,
}

impl fmt::Debug for GoogleVertexChatConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GoogleVertexChatConfig")
            .field("provider", &self.provider)
            .field("base_url", &self.base_url)
            .field("headers", &self.headers.keys().collect::<Vec<_>>())
            .finish_non_exhaustive()
    }
}

/// Configuration handed to the text embedding model constructor.
#[derive(Debug, Clone)]
pub struct GoogleVertexEmbeddingConfig {
    pub provider: &'static str,
    pub base_url: String,
    pub headers: Headers,
}

/// Configuration handed to the image model constructor.
#[derive(Debug, Clone)]
pub struct GoogleVertexImageConfig {
    pub provider: &'static str,
    pub base_url: String,
    pub headers: Headers,
}
