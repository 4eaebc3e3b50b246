use std::collections::HashMap;

use crate::ai_sdk_core::{LanguageModel, SdkError};
use crate::ai_sdk_types::v2 as v2t;
use crate::provider_google_vertex::config::GoogleVertexChatConfig;

/// Gemini chat model served from a Vertex AI publisher endpoint.
#[derive(Debug, Clone)]
pub struct GoogleVertexLanguageModel {
    pub model_id: String,
    pub cfg: GoogleVertexChatConfig,
}

impl GoogleVertexLanguageModel {
    pub fn new(model_id: impl Into<String>, cfg: GoogleVertexChatConfig) -> Result<Self, SdkError> {
        let model_id = model_id.into();
        if model_id.trim().is_empty() {
            return Err(SdkError::invalid_argument(
                "Google Vertex language model id must not be empty",
            ));
        }
        Ok(Self { model_id, cfg })
    }

    /// Next id from the configured generator.
    pub fn next_id(&self) -> String {
        (self.cfg.generate_id)()
    }

    fn model_path(&self) -> String {
        let id = &self.model_id;
        if id.contains('/') {
            id.clone()
        } else {
            format!("models/{}", id)
        }
    }

    /// `generateContent` endpoint for this model.
    pub fn url_generate(&self) -> String {
        format!(
            "{}/{}:generateContent",
            self.cfg.base_url.trim_end_matches('/'),
            self.model_path()
        )
    }

    /// `streamGenerateContent` SSE endpoint for this model.
    pub fn url_stream(&self) -> String {
        format!(
            "{}/{}:streamGenerateContent?alt=sse",
            self.cfg.base_url.trim_end_matches('/'),
            self.model_path()
        )
    }
}

impl LanguageModel for GoogleVertexLanguageModel {
    fn provider_name(&self) -> &'static str {
        self.cfg.provider
    }
    fn model_id(&self) -> &str {
        &self.model_id
    }
    fn supported_urls(&self) -> v2t::SupportedUrls {
        HashMap::from([(
            "*".to_string(),
            vec![String::from(r"^https?://.*$"), String::from(r"^gs://.*$")],
        )])
    }
}
