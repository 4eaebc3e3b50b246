//! Identifier generation shared by language model implementations.

use std::sync::{Arc, OnceLock};

/// Zero-argument generator of unique string identifiers.
pub type IdGenerator = Arc<dyn Fn() -> String + Send + Sync>;

static DEFAULT_GENERATOR: OnceLock<IdGenerator> = OnceLock::new();

/// Returns a fresh random (v4) UUID string.
pub fn generate_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

/// Process-wide default generator. Every call returns the same `Arc`.
pub fn default_id_generator() -> IdGenerator {
    DEFAULT_GENERATOR
        .get_or_init(|| Arc::new(generate_id) as IdGenerator)
        .clone()
}
