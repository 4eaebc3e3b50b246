pub trait ImageModel: Send + Sync {
    /// Implemented spec version; constant "v3" for all models.
    fn specification_version(&self) -> &'static str {
        "v3"
    }
    /// Provider name for logging/telemetry.
    fn provider_name(&self) -> &'static str;
    /// Provider-specific model identifier.
    fn model_id(&self) -> &str;
    /// Limit of images per call, if enforced by the provider.
    fn max_images_per_call(&self) -> Option<usize> {
        None
    }
}
