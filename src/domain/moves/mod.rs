//! Move domain.

pub mod client;
