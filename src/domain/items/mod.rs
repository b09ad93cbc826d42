//! Item domain.

pub mod client;
