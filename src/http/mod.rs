//! HTTP layer: transport client and request pipeline.

pub mod client;
pub mod pipeline;

pub use client::PokedexHttp;
