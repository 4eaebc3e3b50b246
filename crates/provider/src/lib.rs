//! Provider settings loading for ai-sdk-rs.
//!
//! Providers resolve configuration through a narrow [`SettingsLoader`]
//! collaborator: an explicit value always wins, otherwise the loader is asked
//! for the named environment entry. The process environment is the default
//! source; an in-memory map can be injected for config-driven setups.

use crate::ai_sdk_core::SdkError;
use std::collections::HashMap;

/// Source of fallback values for provider settings.
pub trait SettingsLoader: Send + Sync {
    /// Look up a raw value by environment variable name.
    fn lookup(&self, env_var: &str) -> Option<String>;
}

/// Reads settings from the process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnvSettingsLoader;

impl SettingsLoader for EnvSettingsLoader {
    fn lookup(&self, env_var: &str) -> Option<String> {
        std::env::var(env_var).ok()
    }
}

/// Reads settings from a fixed in-memory map.
#[derive(Debug, Clone, Default)]
pub struct MapSettingsLoader {
    values: HashMap<String, String>,
}

impl MapSettingsLoader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, env_var: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.insert(env_var.into(), value.into());
        self
    }
}

impl<K, V> FromIterator<(K, V)> for MapSettingsLoader
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl SettingsLoader for MapSettingsLoader {
    fn lookup(&self, env_var: &str) -> Option<String> {
        self.values.get(env_var).cloned()
    }
}

/// Describes one required setting and where to find it.
#[derive(Debug, Clone, Copy)]
pub struct LoadSettingRequest<'a> {
    pub setting_value: Option<&'a str>,
    pub env_var: &'a str,
    pub setting_name: &'a str,
    pub description: &'a str,
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

/// Resolve a required setting: explicit value, then loader, then error.
pub fn load_setting(
    loader: &dyn SettingsLoader,
    request: LoadSettingRequest<'_>,
) -> Result<String, SdkError> {
    load_optional_setting(loader, request.setting_value, request.env_var).ok_or_else(|| {
        SdkError::missing_setting(request.setting_name, request.env_var, request.description)
    })
}

/// Resolve an optional setting: explicit value, then loader.
///
/// Blank values on either side count as absent.
pub fn load_optional_setting(
    loader: &dyn SettingsLoader,
    setting_value: Option<&str>,
    env_var: &str,
) -> Option<String> {
    if let Some(explicit) = non_blank(setting_value) {
        return Some(explicit.to_string());
    }
    loader
        .lookup(env_var)
        .filter(|v| !v.trim().is_empty())
}

/// Strip any trailing `/` characters from a URL.
pub fn without_trailing_slash(url: &str) -> String {
    url.trim_end_matches('/').to_string()
}

#[cfg(test)]
#[path = "../tests/settings_loader_tests.rs"]
mod settings_loader_tests;
