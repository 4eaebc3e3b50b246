//! Provider settings and their normalization into a resolved configuration.
//!
//! Precedence for every field:
//! 1) Explicit settings value (blank strings count as absent).
//! 2) Environment fallback through the injected [`SettingsLoader`].
//! 3) Hard default, where one exists.

use std::fmt;

use serde::Deserialize;

use crate::ai_sdk_core::{default_id_generator, IdGenerator, SdkError};
use crate::ai_sdk_provider::{
    load_optional_setting, load_setting, LoadSettingRequest, SettingsLoader,
};
use crate::ai_sdk_types::v2::Headers;
use crate::provider_google_vertex::endpoint::{resolve_base_url, DEFAULT_LOCATION};

pub const PROJECT_ENV: &str = "GOOGLE_VERTEX_PROJECT";
pub const LOCATION_ENV: &str = "GOOGLE_VERTEX_LOCATION";

/// Caller-supplied provider settings.
///
/// Deserializes from camelCase JSON (`project`, `location`, `baseURL`,
/// `headers`). The id generator can only be set in code.
#[derive(Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoogleVertexProviderSettings {
    /// Google Cloud project id. Falls back to `GOOGLE_VERTEX_PROJECT`.
    #[serde(default)]
    pub project: Option<String>,
    /// Region, or `global`. Falls back to `GOOGLE_VERTEX_LOCATION`, then `us-central1`.
    #[serde(default)]
    pub location: Option<String>,
    /// Replaces the computed endpoint entirely when set.
    #[serde(default, rename = "baseURL", alias = "baseUrl")]
    pub base_url: Option<String>,
    /// Headers forwarded to every model built by the provider.
    #[serde(default)]
    pub headers: Option<Headers>,
    #[serde(skip)]
    pub generate_id: Option<IdGenerator>,
}

impl fmt::Debug for GoogleVertexProviderSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GoogleVertexProviderSettings")
            .field("project", &self.project)
            .field("location", &self.location)
            .field("base_url", &self.base_url)
            .field(
                "headers",
                &self.headers.as_ref().map(|h| h.keys().collect::<Vec<_>>()),
            )
            .field("generate_id", &self.generate_id.as_ref().map(|_| "custom"))
            .finish()
    }
}

impl GoogleVertexProviderSettings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse settings from a JSON document.
    pub fn from_json(raw: &str) -> Result<Self, SdkError> {
        Ok(serde_json::from_str(raw)?)
    }

    pub fn with_project(mut self, project: impl Into<String>) -> Self {
        self.project = Some(project.into());
        self
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers
            .get_or_insert_with(Headers::new)
            .insert(name.into(), value.into());
        self
    }

    pub fn with_headers(mut self, headers: Headers) -> Self {
        self.headers = Some(headers);
        self
    }

    pub fn with_generate_id<F>(self, generate_id: F) -> Self
    where
        F: Fn() -> String + Send + Sync + 'static,
    {
        self.with_id_generator(std::sync::Arc::new(generate_id))
    }

    /// Use an existing shared generator as-is.
    pub fn with_id_generator(mut self, generate_id: IdGenerator) -> Self {
        self.generate_id = Some(generate_id);
        self
    }
}

/// Finalized configuration shared by every model a provider creates.
#[derive(Clone)]
pub struct GoogleVertexResolvedConfig {
    pub project: String,
    pub location: String,
    pub base_url: String,
    pub headers: Headers,
    pub generate_id: IdGenerator,
}

impl fmt::Debug for GoogleVertexResolvedConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GoogleVertexResolvedConfig")
            .field("project", &self.project)
            .field("location", &self.location)
            .field("base_url", &self.base_url)
            .field("headers", &self.headers.keys().collect::<Vec<_>>())
            .finish_non_exhaustive()
    }
}

/// Resolve `settings` into the immutable provider configuration.
///
/// Fails with [`SdkError::MissingSetting`] when no project is available.
pub fn normalize_settings(
    settings: GoogleVertexProviderSettings,
    loader: &dyn SettingsLoader,
) -> Result<GoogleVertexResolvedConfig, SdkError> {
    let GoogleVertexProviderSettings {
        project,
        location,
        base_url,
        headers,
        generate_id,
    } = settings;

    let project = load_setting(
        loader,
        LoadSettingRequest {
            setting_value: project.as_deref(),
            env_var: PROJECT_ENV,
            setting_name: "project",
            description: "Google Vertex project",
        },
    )?;
    let location = load_optional_setting(loader, location.as_deref(), LOCATION_ENV)
        .unwrap_or_else(|| DEFAULT_LOCATION.to_string());

    let base_url = resolve_base_url(&project, &location, base_url.as_deref());

    Ok(GoogleVertexResolvedConfig {
        project,
        location,
        base_url,
        headers: headers.unwrap_or_default(),
        generate_id: generate_id.unwrap_or_else(default_id_generator),
    })
}
