use std::time::Duration;

/// The public reference API.
pub const DEFAULT_BASE_URL: &str = "https://pokeapi.co/api/v2";

/// Configuration for talking to the upstream reference API.
#[derive(Debug, Clone)]
pub struct UpstreamConfig {
    /// Base URL, without a trailing slash.
    pub base_url: String,
    /// Timeout applied to every upstream request.
    pub request_timeout: Duration,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_owned(),
            request_timeout: Duration::from_secs(20),
        }
    }
}

impl UpstreamConfig {
    /// URL of a single resource in a collection, such as `pokemon/pikachu`.
    pub fn resource_url(&self, collection: &str, name_or_id: &str) -> String {
        format!(
            "{}/{collection}/{}",
            self.base_url.trim_end_matches('/'),
            name_or_id.trim().to_lowercase()
        )
    }

    /// URL of the listing of all types.
    pub fn type_list_url(&self) -> String {
        format!("{}/type?limit=100", self.base_url.trim_end_matches('/'))
    }
}
