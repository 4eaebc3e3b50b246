pub mod embedding;
pub mod error;
pub mod id;
pub mod image;
pub mod v2;

pub use crate::core::embedding::EmbeddingModel;
pub use crate::core::error::SdkError;
pub use crate::core::id::{default_id_generator, generate_id, IdGenerator};
pub use crate::core::image::ImageModel;

// Re-export the v2 (Vercel parity) model trait at the crate root
pub use crate::core::v2::LanguageModel;
pub use crate::ai_sdk_types::v2 as types;
