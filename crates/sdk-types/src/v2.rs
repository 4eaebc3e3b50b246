//! LanguageModel V2 parity types used across provider configuration.

use std::collections::HashMap;

/// HTTP headers forwarded to model implementations.
pub type Headers = HashMap<String, String>;

/// Supported URL regex patterns keyed by media type (`*` matches any type).
pub type SupportedUrls = HashMap<String, Vec<String>>;
