//! Stats sub-client.

use crate::client::PokedexClient;
use crate::error::ApiError;
use serde_json::Value;

/// Sub-client for aggregate statistics.
pub struct Stats<'a> {
    pub(crate) client: &'a PokedexClient,
}

impl<'a> Stats<'a> {
    /// Get dataset-wide aggregate stats.
    pub async fn get(&self) -> Result<Value, ApiError> {
        self.client.http.get_stats().await
    }
}
