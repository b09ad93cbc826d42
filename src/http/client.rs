//! Low-level HTTP client — `PokedexHttp`.
//!
//! One method per API endpoint, all GET. Returns the decoded JSON body
//! untouched (response shapes are opaque to the SDK). Internal —
//! `PokedexClient` wraps this.

use crate::error::ApiError;
use crate::http::pipeline;
use crate::shared::Filters;

use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;

/// Per-call timeout. Requests exceeding this surface as transport
/// failures, enforced by reqwest rather than application logic.
const REQUEST_TIMEOUT: Duration = Duration::from_millis(10_000);

/// Low-level HTTP client for the Pokédex REST API.
///
/// Holds no mutable state; concurrent calls are fully independent.
#[derive(Clone)]
pub struct PokedexHttp {
    base_url: String,
    client: Client,
}

impl PokedexHttp {
    pub fn new(base_url: &str) -> Self {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: Client::builder()
                .timeout(REQUEST_TIMEOUT)
                .default_headers(headers)
                .build()
                .expect("Failed to build HTTP client"),
        }
    }

    // ── Pokémon ──────────────────────────────────────────────────────────

    pub async fn get_pokemon(&self, filters: Option<&Filters>) -> Result<Value, ApiError> {
        let url = self.list_url("/pokemon", filters);
        self.get(&url).await
    }

    pub async fn get_pokemon_by_id(&self, id: &str) -> Result<Value, ApiError> {
        let url = format!("{}/pokemon/{}", self.base_url, urlencoding::encode(id));
        self.get(&url).await
    }

    pub async fn search_pokemon(&self, name: &str) -> Result<Value, ApiError> {
        let url = format!(
            "{}/pokemon/search/{}",
            self.base_url,
            urlencoding::encode(name)
        );
        self.get(&url).await
    }

    pub async fn get_pokemon_evolutions(&self, id: &str) -> Result<Value, ApiError> {
        let url = format!(
            "{}/pokemon/{}/evolutions",
            self.base_url,
            urlencoding::encode(id)
        );
        self.get(&url).await
    }

    // ── Items ────────────────────────────────────────────────────────────

    pub async fn get_items(&self, filters: Option<&Filters>) -> Result<Value, ApiError> {
        let url = self.list_url("/items", filters);
        self.get(&url).await
    }

    // ── Moves ────────────────────────────────────────────────────────────

    pub async fn get_moves(&self, filters: Option<&Filters>) -> Result<Value, ApiError> {
        let url = self.list_url("/moves", filters);
        self.get(&url).await
    }

    // ── Stats ────────────────────────────────────────────────────────────

    pub async fn get_stats(&self) -> Result<Value, ApiError> {
        let url = format!("{}/stats", self.base_url);
        self.get(&url).await
    }

    // ── Internal HTTP methods ────────────────────────────────────────────

    fn list_url(&self, path: &str, filters: Option<&Filters>) -> String {
        let mut url = format!("{}{}", self.base_url, path);
        if let Some(f) = filters {
            if !f.is_empty() {
                url = format!("{}?{}", url, f.to_query_string());
            }
        }
        url
    }

    async fn get(&self, url: &str) -> Result<Value, ApiError> {
        let req = pipeline::prepare(self.client.get(url));
        pipeline::normalize(req.send().await, url).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let http = PokedexHttp::new("http://localhost:8000/api/");
        assert_eq!(http.list_url("/pokemon", None), "http://localhost:8000/api/pokemon");
    }

    #[test]
    fn test_list_url_attaches_filters() {
        let http = PokedexHttp::new("http://localhost:8000/api");
        let filters = Filters::new().insert("type", "fire").insert("page", 2);
        assert_eq!(
            http.list_url("/pokemon", Some(&filters)),
            "http://localhost:8000/api/pokemon?type=fire&page=2"
        );
    }

    #[test]
    fn test_list_url_skips_empty_filters() {
        let http = PokedexHttp::new("http://localhost:8000/api");
        let filters = Filters::new();
        assert_eq!(
            http.list_url("/moves", Some(&filters)),
            "http://localhost:8000/api/moves"
        );
    }
}
