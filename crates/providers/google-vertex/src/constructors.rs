//! Model constructors the provider dispatches to.
//!
//! The provider only assembles configuration; building the actual model is
//! delegated to a [`VertexModelConstructors`] implementation. Errors returned
//! here reach the caller untouched.

use std::sync::Arc;

use crate::ai_sdk_core::{EmbeddingModel, ImageModel, LanguageModel, SdkError};
use crate::provider_google_vertex::config::{
    GoogleVertexChatConfig, GoogleVertexEmbeddingConfig, GoogleVertexImageConfig,
};
use crate::provider_google_vertex::embedding_model::GoogleVertexEmbeddingModel;
use crate::provider_google_vertex::image_model::GoogleVertexImageModel;
use crate::provider_google_vertex::language_model::GoogleVertexLanguageModel;

pub trait VertexModelConstructors: Send + Sync {
    fn language_model(
        &self,
        model_id: &str,
        config: GoogleVertexChatConfig,
    ) -> Result<Arc<dyn LanguageModel>, SdkError>;

    fn text_embedding_model(
        &self,
        model_id: &str,
        config: GoogleVertexEmbeddingConfig,
    ) -> Result<Arc<dyn EmbeddingModel>, SdkError>;

    fn image_model(
        &self,
        model_id: &str,
        config: GoogleVertexImageConfig,
    ) -> Result<Arc<dyn ImageModel>, SdkError>;
}

/// Builds the crate's own Vertex model types.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultVertexModelConstructors;

impl VertexModelConstructors for DefaultVertexModelConstructors {
    fn language_model(
        &self,
        model_id: &str,
        config: GoogleVertexChatConfig,
    ) -> Result<Arc<dyn LanguageModel>, SdkError> {
        Ok(Arc::new(GoogleVertexLanguageModel::new(model_id, config)?))
    }

    fn text_embedding_model(
        &self,
        model_id: &str,
        config: GoogleVertexEmbeddingConfig,
    ) -> Result<Arc<dyn EmbeddingModel>, SdkError> {
        Ok(Arc::new(GoogleVertexEmbeddingModel::new(model_id, config)?))
    }

    fn image_model(
        &self,
        model_id: &str,
        config: GoogleVertexImageConfig,
    ) -> Result<Arc<dyn ImageModel>, SdkError> {
        Ok(Arc::new(GoogleVertexImageModel::new(model_id, config)?))
    }
}
