use crate::ai_sdk_core::{ImageModel, SdkError};
use crate::provider_google_vertex::config::GoogleVertexImageConfig;

pub const DEFAULT_MAX_IMAGES_PER_CALL: usize = 4;

/// Imagen model served from a Vertex AI publisher endpoint.
#[derive(Debug, Clone)]
pub struct GoogleVertexImageModel {
    pub model_id: String,
    pub cfg: GoogleVertexImageConfig,
}

impl GoogleVertexImageModel {
    pub fn new(model_id: impl Into<String>, cfg: GoogleVertexImageConfig) -> Result<Self, SdkError> {
        let model_id = model_id.into();
        if model_id.trim().is_empty() {
            return Err(SdkError::invalid_argument(
                "Google Vertex image model id must not be empty",
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

impl ImageModel for GoogleVertexImageModel {
    fn provider_name(&self) -> &'static str {
        self.cfg.provider
    }
    fn model_id(&self) -> &str {
        &self.model_id
    }
    fn max_images_per_call(&self) -> Option<usize> {
        Some(DEFAULT_MAX_IMAGES_PER_CALL)
    }
}
