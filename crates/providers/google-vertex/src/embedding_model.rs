use crate::ai_sdk_core::{EmbeddingModel, SdkError};
use crate::provider_google_vertex::config::GoogleVertexEmbeddingConfig;

pub const DEFAULT_MAX_EMBEDDINGS_PER_CALL: usize = 2048;

#[derive(Debug, Clone)]
pub struct GoogleVertexEmbeddingModel {
    pub model_id: String,
    pub cfg: GoogleVertexEmbeddingConfig,
}

impl GoogleVertexEmbeddingModel {
    pub fn new(
        model_id: impl Into<String>,
        cfg: GoogleVertexEmbeddingConfig,
    ) -> Result<Self, SdkError> {
        let model_id = model_id.into();
        if model_id.trim().is_empty() {
            return Err(SdkError::invalid_argument(
                "Google Vertex embedding model id must not be empty",
            ));
        }
        Ok(Self { model_id, cfg })
    }

    /// `predict` endpoint for this model.
    pub fn url_predict(&self) -> String {
        format!(
            "{}/models/{}:predict",
            self.cfg.base_url.trim_end_matches('/'),
            self.model_id
        )
    }
}

impl EmbeddingModel for GoogleVertexEmbeddingModel {
    fn provider_name(&self) -> &'static str {
        self.cfg.provider
    }
    fn model_id(&self) -> &str {
        &self.model_id
    }
    fn max_embeddings_per_call(&self) -> Option<usize> {
        Some(DEFAULT_MAX_EMBEDDINGS_PER_CALL)
    }
}
