//! High-level client — `PokedexClient` with nested sub-client accessors.
//!
//! Each domain has its own sub-client in `domain/<name>/client.rs`.
//! This module keeps the builder and the accessor methods.

use crate::domain::items::client::Items;
use crate::domain::moves::client::Moves;
use crate::domain::pokemon::client::Pokemon;
use crate::domain::stats::client::Stats;
use crate::http::PokedexHttp;

// Re-export sub-client types for convenience.
pub use crate::domain::items::client::Items as ItemsClient;
pub use crate::domain::moves::client::Moves as MovesClient;
pub use crate::domain::pokemon::client::Pokemon as PokemonClient;
pub use crate::domain::stats::client::Stats as StatsClient;

/// The primary entry point for the Pokédex SDK.
///
/// Provides nested sub-client accessors for each domain:
/// `client.pokemon()`, `client.items()`, etc. Configuration (base URL,
/// timeout, default headers) is fixed at construction; the client is
/// cheaply cloneable and safe to share across concurrent calls.
#[derive(Clone)]
pub struct PokedexClient {
    pub(crate) http: PokedexHttp,
}

impl PokedexClient {
    pub fn builder() -> PokedexClientBuilder {
        PokedexClientBuilder::default()
    }

    // ── Sub-client accessors ─────────────────────────────────────────────

    pub fn pokemon(&self) -> Pokemon<'_> {
        Pokemon { client: self }
    }

    pub fn items(&self) -> Items<'_> {
        Items { client: self }
    }

    pub fn moves(&self) -> Moves<'_> {
        Moves { client: self }
    }

    pub fn stats(&self) -> Stats<'_> {
        Stats { client: self }
    }
}

// ═════════════════════════════════════════════════════════════════════════════
// Builder
// ═════════════════════════════════════════════════════════════════════════════

pub struct PokedexClientBuilder {
    base_url: String,
}

impl Default for PokedexClientBuilder {
    fn default() -> Self {
        Self {
            base_url: crate::network::DEFAULT_API_URL.to_string(),
        }
    }
}

impl PokedexClientBuilder {
    pub fn base_url(mut self, url: &str) -> Self {
        self.base_url = url.to_string();
        self
    }

    pub fn build(self) -> PokedexClient {
        PokedexClient {
            http: PokedexHttp::new(&self.base_url),
        }
    }
}
