//! # Pokédex SDK
//!
//! An async Rust client for the Pokédex reference REST API (Pokémon,
//! items, moves, evolutions, aggregate stats).
//!
//! ## Architecture
//!
//! The SDK is organized in layers:
//!
//! 1. **Shared** — query filters and the normalized error type
//! 2. **HTTP** — `PokedexHttp`, one GET method per endpoint, wrapped in
//!    a two-stage pipeline (pre-send transform, post-receive error
//!    normalization)
//! 3. **High-Level Client** — `PokedexClient` with nested sub-clients
//! 4. **Routes** — the static path → view table for the presentation layer
//!
//! Response bodies are opaque JSON: every operation returns the decoded
//! body exactly as the backend sent it. Every failure surfaces as a
//! single message-only [`error::ApiError`].
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use pokedex_sdk::prelude::*;
//!
//! let client = PokedexClient::builder()
//!     .base_url("http://127.0.0.1:8000/api")
//!     .build();
//!
//! let pikachu = client.pokemon().get(25).await?;
//! let fire = client
//!     .pokemon()
//!     .list(Some(&Filters::new().insert("type", "fire")))
//!     .await?;
//! ```

// ── Layer 1: Shared ──────────────────────────────────────────────────────────

/// Shared types: query filters.
pub mod shared;

/// The normalized SDK error type.
pub mod error;

/// Network URL constants.
pub mod network;

// ── Layer 2: HTTP ────────────────────────────────────────────────────────────

/// HTTP transport client and request pipeline.
pub mod http;

// ── Layer 3: High-Level Client ───────────────────────────────────────────────

/// `PokedexClient` — the primary entry point.
pub mod client;

/// Domain modules (vertical slices): one sub-client per resource.
pub mod domain;

// ── Layer 4: Routes ──────────────────────────────────────────────────────────

/// Static route table for the presentation layer.
pub mod routes;

// ── Prelude ──────────────────────────────────────────────────────────────────

pub mod prelude {
    pub use crate::error::ApiError;
    pub use crate::network::DEFAULT_API_URL;
    pub use crate::shared::{FilterValue, Filters};

    pub use crate::client::{
        ItemsClient, MovesClient, PokedexClient, PokedexClientBuilder, PokemonClient, StatsClient,
    };

    pub use crate::routes::{resolve, RouteDef, RouteMatch, View, ROUTES};
}
