//! Moves sub-client.

use crate::client::PokedexClient;
use crate::error::ApiError;
use crate::shared::Filters;
use serde_json::Value;

/// Sub-client for move operations.
pub struct Moves<'a> {
    pub(crate) client: &'a PokedexClient,
}

impl<'a> Moves<'a> {
    /// List moves, optionally filtered.
    pub async fn list(&self, filters: Option<&Filters>) -> Result<Value, ApiError> {
        self.client.http.get_moves(filters).await
    }
}
