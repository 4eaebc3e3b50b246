/// Embedding model interface (parity with Vercel EmbeddingModelV3).
pub trait EmbeddingModel: Send + Sync {
    /// Implemented spec version; constant "v3" for all models.
    fn specification_version(&self) -> &'static str {
        "v3"
    }
    /// Provider name for logging/telemetry.
    fn provider_name(&self) -> &'static str;
    /// Provider-specific model identifier.
    fn model_id(&self) -> &str;
    /// Limit of embeddings per call, if enforced by the provider.
    fn max_embeddings_per_call(&self) -> Option<usize> {
        None
    }
    /// Whether multiple embedding calls may be executed in parallel.
    fn supports_parallel_calls(&self) -> bool {
        true
    }
}
