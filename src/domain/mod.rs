//! Domain modules organized as vertical slices.
//!
//! Each sub-module holds a borrowing sub-client delegating to
//! `PokedexHttp`. Response bodies are opaque JSON documents; the SDK
//! does not validate or reshape them.

pub mod items;
pub mod moves;
pub mod pokemon;
pub mod stats;
