//! Google Vertex AI provider factory for ai-sdk-rs.
//!
//! - endpoint.rs: base URL resolution (global vs regional, explicit override)
//! - settings.rs: provider settings and their normalization
//! - config.rs: per-model configuration handed to constructors
//! - constructors.rs: model constructor seam + built-in constructors
//! - provider.rs: `create_vertex` and the provider handle

pub mod config;
pub mod constructors;
pub mod embedding_model;
pub mod endpoint;
pub mod image_model;
pub mod language_model;
pub mod provider;
pub mod settings;

pub use constructors::{DefaultVertexModelConstructors, VertexModelConstructors};
pub use embedding_model::GoogleVertexEmbeddingModel;
pub use endpoint::resolve_base_url;
pub use image_model::GoogleVertexImageModel;
pub use language_model::GoogleVertexLanguageModel;
pub use provider::{create_vertex, create_vertex_with, vertex, GoogleVertexProvider};
pub use settings::{GoogleVertexProviderSettings, GoogleVertexResolvedConfig};

#[cfg(test)]
#[path = "../tests/endpoint_tests.rs"]
mod endpoint_tests;

#[cfg(test)]
#[path = "../tests/settings_tests.rs"]
mod settings_tests;

#[cfg(test)]
#[path = "../tests/provider_tests.rs"]
mod provider_tests;

#[cfg(test)]
#[path = "../tests/model_tests.rs"]
mod model_tests;
