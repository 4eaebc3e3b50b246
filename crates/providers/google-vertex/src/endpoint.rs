//! Vertex AI base URL resolution.

use crate::ai_sdk_provider::without_trailing_slash;

pub const GLOBAL_LOCATION: &str = "global";
pub const DEFAULT_LOCATION: &str = "us-central1";

const DEFAULT_API_VERSION: &str = "v1";
const API_DOMAIN: &str = "googleapis.com";

/// Host for a location. `global` has no region prefix.
pub fn vertex_host(location: &str) -> String {
    if location == GLOBAL_LOCATION {
        format!("aiplatform.{}", API_DOMAIN)
    } else {
        format!("{}-aiplatform.{}", location, API_DOMAIN)
    }
}

/// Resolve the publisher base URL for `project` and `location`.
///
/// A non-blank `explicit_base_url` is returned as given minus trailing
/// slashes, without any validation. Otherwise the URL is computed from the
/// location; `project` and `location` are interpolated verbatim.
pub fn resolve_base_url(project: &str, location: &str, explicit_base_url: Option<&str>) -> String {
    if let Some(explicit) = explicit_base_url.filter(|u| !u.trim().is_empty()) {
        return without_trailing_slash(explicit);
    }

    format!(
        "https://{}/{}/projects/{}/locations/{}/publishers/google",
        vertex_host(location),
        DEFAULT_API_VERSION,
        project,
        location
    )
}
