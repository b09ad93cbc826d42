//! Pokémon sub-client.

use crate::client::PokedexClient;
use crate::error::ApiError;
use crate::shared::Filters;
use serde_json::Value;
use std::fmt::Display;

/// Sub-client for Pokémon operations.
pub struct Pokemon<'a> {
    pub(crate) client: &'a PokedexClient,
}

impl<'a> Pokemon<'a> {
    /// List Pokémon, optionally filtered (page, type, sort, ...).
    pub async fn list(&self, filters: Option<&Filters>) -> Result<Value, ApiError> {
        self.client.http.get_pokemon(filters).await
    }

    /// Get a single Pokémon by numeric id or dex number string.
    pub async fn get(&self, id: impl Display) -> Result<Value, ApiError> {
        self.client.http.get_pokemon_by_id(&id.to_string()).await
    }

    /// Search Pokémon by name.
    pub async fn search(&self, name: &str) -> Result<Value, ApiError> {
        self.client.http.search_pokemon(name).await
    }

    /// Get a Pokémon's evolution chain.
    pub async fn evolutions(&self, id: impl Display) -> Result<Value, ApiError> {
        self.client
            .http
            .get_pokemon_evolutions(&id.to_string())
            .await
    }
}
