//! Items sub-client.

use crate::client::PokedexClient;
use crate::error::ApiError;
use crate::shared::Filters;
use serde_json::Value;

/// Sub-client for item operations.
pub struct Items<'a> {
    pub(crate) client: &'a PokedexClient,
}

impl<'a> Items<'a> {
    /// List items, optionally filtered.
    pub async fn list(&self, filters: Option<&Filters>) -> Result<Value, ApiError> {
        self.client.http.get_items(filters).await
    }
}
