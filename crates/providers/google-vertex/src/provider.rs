use std::sync::Arc;

use tracing::{debug, info};

use crate::ai_sdk_core::{EmbeddingModel, IdGenerator, ImageModel, LanguageModel, SdkError};
use crate::ai_sdk_provider::{EnvSettingsLoader, SettingsLoader};
use crate::ai_sdk_types::v2::Headers;
use crate::provider_google_vertex::config::{
    GoogleVertexChatConfig, GoogleVertexEmbeddingConfig, GoogleVertexImageConfig, CHAT_PROVIDER,
    EMBEDDING_PROVIDER, IMAGE_PROVIDER,
};
use crate::provider_google_vertex::constructors::{
    DefaultVertexModelConstructors, VertexModelConstructors,
};
use crate::provider_google_vertex::settings::{
    normalize_settings, GoogleVertexProviderSettings, GoogleVertexResolvedConfig,
};

const TRACE_PREFIX: &str = "[GOOGLE-VERTEX]";

/// Google Vertex AI provider.
///
/// Holds one resolved configuration (endpoint, headers, id generator) shared
/// by every model it creates. Models are built fresh on each call; nothing is
/// cached by model id.
///
/// The only way to obtain a provider is through [`create_vertex`],
/// [`create_vertex_with`] or [`vertex`]; it cannot be assembled directly:
///
/// ```compile_fail
/// use ai_sdk_google_vertex::providers::google_vertex::GoogleVertexProvider;
///
/// let provider = GoogleVertexProvider {
///     config: todo!(),
///     constructors: todo!(),
/// };
/// ```
///
/// ```
/// use ai_sdk_google_vertex::core::LanguageModel;
/// use ai_sdk_google_vertex::providers::google_vertex::{
///     create_vertex, GoogleVertexProviderSettings,
/// };
///
/// let vertex = create_vertex(
///     GoogleVertexProviderSettings::new()
///         .with_project("my-project")
///         .with_location("global"),
/// )?;
/// let model = vertex.model("gemini-2.0-flash")?;
/// assert_eq!(model.provider_name(), "google.vertex.chat");
/// # Ok::<(), ai_sdk_google_vertex::core::SdkError>(())
/// ```
pub struct GoogleVertexProvider<C: VertexModelConstructors = DefaultVertexModelConstructors> {
    config: Arc<GoogleVertexResolvedConfig>,
    constructors: Arc<C>,
}

impl<C: VertexModelConstructors> Clone for GoogleVertexProvider<C> {
    fn clone(&self) -> Self {
        Self {
            config: Arc::clone(&self.config),
            constructors: Arc::clone(&self.constructors),
        }
    }
}

impl<C: VertexModelConstructors> std::fmt::Debug for GoogleVertexProvider<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GoogleVertexProvider")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

/// Create a provider, falling back to the process environment for unset values.
pub fn create_vertex(
    settings: GoogleVertexProviderSettings,
) -> Result<GoogleVertexProvider, SdkError> {
    create_vertex_with(settings, &EnvSettingsLoader, DefaultVertexModelConstructors)
}

/// Create a provider with an explicit settings source and model constructors.
pub fn create_vertex_with<C: VertexModelConstructors>(
    settings: GoogleVertexProviderSettings,
    loader: &dyn SettingsLoader,
    constructors: C,
) -> Result<GoogleVertexProvider<C>, SdkError> {
    let config = normalize_settings(settings, loader)?;

    info!(
        "{}: configured Google Vertex project={} location={} base_url={} headers={:?}",
        TRACE_PREFIX,
        config.project,
        config.location,
        config.base_url,
        config.headers.keys().collect::<Vec<_>>()
    );

    Ok(GoogleVertexProvider {
        config: Arc::new(config),
        constructors: Arc::new(constructors),
    })
}

/// Provider configured entirely from `GOOGLE_VERTEX_PROJECT` / `GOOGLE_VERTEX_LOCATION`.
pub fn vertex() -> Result<GoogleVertexProvider, SdkError> {
    create_vertex(GoogleVertexProviderSettings::default())
}

impl<C: VertexModelConstructors> GoogleVertexProvider<C> {
    /// Default entry point; same as [`Self::language_model`].
    pub fn model(&self, model_id: &str) -> Result<Arc<dyn LanguageModel>, SdkError> {
        self.language_model(model_id)
    }

    pub fn language_model(&self, model_id: &str) -> Result<Arc<dyn LanguageModel>, SdkError> {
        debug!("{}: building {} model {}", TRACE_PREFIX, CHAT_PROVIDER, model_id);
        let cfg = GoogleVertexChatConfig {
            provider: CHAT_PROVIDER,
            base_url: self.config.base_url.clone(),
            headers: self.config.headers.clone(),
            generate_id: Arc::clone(&self.config.generate_id),
        };
        self.constructors.language_model(model_id, cfg)
    }

    pub fn text_embedding_model(
        &self,
        model_id: &str,
    ) -> Result<Arc<dyn EmbeddingModel>, SdkError> {
        debug!(
            "{}: building {} model {}",
            TRACE_PREFIX, EMBEDDING_PROVIDER, model_id
        );
        let cfg = GoogleVertexEmbeddingConfig {
            provider: EMBEDDING_PROVIDER,
            base_url: self.config.base_url.clone(),
            headers: self.config.headers.clone(),
        };
        self.constructors.text_embedding_model(model_id, cfg)
    }

    pub fn image(&self, model_id: &str) -> Result<Arc<dyn ImageModel>, SdkError> {
        debug!("{}: building {} model {}", TRACE_PREFIX, IMAGE_PROVIDER, model_id);
        let cfg = GoogleVertexImageConfig {
            provider: IMAGE_PROVIDER,
            base_url: self.config.base_url.clone(),
            headers: self.config.headers.clone(),
        };
        self.constructors.image_model(model_id, cfg)
    }

    pub fn image_model(&self, model_id: &str) -> Result<Arc<dyn ImageModel>, SdkError> {
        self.image(model_id)
    }

    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    pub fn headers(&self) -> &Headers {
        &self.config.headers
    }

    pub fn project(&self) -> &str {
        &self.config.project
    }

    pub fn location(&self) -> &str {
        &self.config.location
    }

    pub fn id_generator(&self) -> IdGenerator {
        Arc::clone(&self.config.generate_id)
    }
}
