//! Aggregate statistics over the whole dataset.

pub mod client;
