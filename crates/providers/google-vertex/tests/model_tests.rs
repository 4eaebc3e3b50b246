use std::collections::HashMap;
use std::sync::Arc;

use crate::ai_sdk_core::{EmbeddingModel, ImageModel, LanguageModel, SdkError};
use crate::provider_google_vertex::config::{
    GoogleVertexChatConfig, GoogleVertexEmbeddingConfig, GoogleVertexImageConfig, CHAT_PROVIDER,
    EMBEDDING_PROVIDER, IMAGE_PROVIDER,
};
use crate::provider_google_vertex::embedding_model::GoogleVertexEmbeddingModel;
use crate::provider_google_vertex::image_model::GoogleVertexImageModel;
use crate::provider_google_vertex::language_model::GoogleVertexLanguageModel;

const BASE_URL: &str =
    "https://us-central1-aiplatform.googleapis.com/v1/projects/p/locations/us-central1/publishers/google";

fn chat_config() -> GoogleVertexChatConfig {
    GoogleVertexChatConfig {
        provider: CHAT_PROVIDER,
        base_url: BASE_URL.to_string(),
        headers: HashMap::new(),
        generate_id: Arc::new(|| "fixed-id".to_string()),
    }
}

#[test]
fn language_model_builds_generate_and_stream_urls() {
    let model = GoogleVertexLanguageModel::new("gemini-2.0-flash", chat_config()).unwrap();
    assert_eq!(
        model.url_generate(),
        format!("{BASE_URL}/models/gemini-2.0-flash:generateContent")
    );
    assert_eq!(
        model.url_stream(),
        format!("{BASE_URL}/models/gemini-2.0-flash:streamGenerateContent?alt=sse")
    );
}

#[test]
fn language_model_keeps_qualified_model_paths() {
    let model =
        GoogleVertexLanguageModel::new("tunedModels/my-model", chat_config()).unwrap();
    assert_eq!(
        model.url_generate(),
        format!("{BASE_URL}/tunedModels/my-model:generateContent")
    );
}

#[test]
fn language_model_uses_configured_id_generator() {
    let model = GoogleVertexLanguageModel::new("gemini-2.0-flash", chat_config()).unwrap();
    assert_eq!(model.next_id(), "fixed-id");
}

#[test]
fn language_model_supports_http_and_gcs_urls() {
    let model = GoogleVertexLanguageModel::new("gemini-2.0-flash", chat_config()).unwrap();
    let urls = model.supported_urls();
    assert_eq!(
        urls.get("*"),
        Some(&vec![r"^https?://.*$".to_string(), r"^gs://.*$".to_string()])
    );
}

#[test]
fn blank_model_ids_are_rejected() {
    let err = GoogleVertexLanguageModel::new(" ", chat_config()).unwrap_err();
    assert!(matches!(err, SdkError::InvalidArgument { .. }));

    let err = GoogleVertexEmbeddingModel::new(
        "",
        GoogleVertexEmbeddingConfig {
            provider: EMBEDDING_PROVIDER,
            base_url: BASE_URL.to_string(),
            headers: HashMap::new(),
        },
    )
    .unwrap_err();
    assert!(matches!(err, SdkError::InvalidArgument { .. }));

    let err = GoogleVertexImageModel::new(
        "",
        GoogleVertexImageConfig {
            provider: IMAGE_PROVIDER,
            base_url: BASE_URL.to_string(),
            headers: HashMap::new(),
        },
    )
    .unwrap_err();
    assert!(matches!(err, SdkError::InvalidArgument { .. }));
}

#[test]
fn embedding_model_reports_limits() {
    let model = GoogleVertexEmbeddingModel::new(
        "text-embedding-004",
        GoogleVertexEmbeddingConfig {
            provider: EMBEDDING_PROVIDER,
            base_url: BASE_URL.to_string(),
            headers: HashMap::new(),
        },
    )
    .unwrap();
    assert_eq!(model.specification_version(), "v3");
    assert_eq!(model.max_embeddings_per_call(), Some(2048));
    assert!(model.supports_parallel_calls());
    assert_eq!(
        model.url_predict(),
        format!("{BASE_URL}/models/text-embedding-004:predict")
    );
}

#[test]
fn image_model_reports_limits() {
    let model = GoogleVertexImageModel::new(
        "imagen-3.0-generate-002",
        GoogleVertexImageConfig {
            provider: IMAGE_PROVIDER,
            base_url: BASE_URL.to_string(),
            headers: HashMap::new(),
        },
    )
    .unwrap();
    assert_eq!(model.provider_name(), "google.vertex.image");
    assert_eq!(model.max_images_per_call(), Some(4));
    assert_eq!(
        model.url_predict(),
        format!("{BASE_URL}/models/imagen-3.0-generate-002:predict")
    );
}
