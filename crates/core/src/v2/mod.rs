//! Vercel-compatible LanguageModel interface (formerly V2).

use crate::ai_sdk_types::v2 as v2t;

/// Language model interface (Vercel AI SDK parity).
///
/// Providers hand out `Arc<dyn LanguageModel>` handles; callers treat them as
/// opaque beyond the metadata exposed here.
pub trait LanguageModel: Send + Sync {
    /// Implemented spec version; constant "v2" for all models.
    fn specification_version(&self) -> &'static str {
        "v2"
    }
    /// Provider name for logging/telemetry.
    fn provider_name(&self) -> &'static str;
    /// Provider-specific model identifier.
    fn model_id(&self) -> &str;
    /// Supported URL regex patterns by media type, lower-case URLs.
    fn supported_urls(&self) -> v2t::SupportedUrls {
        Default::default()
    }
}
