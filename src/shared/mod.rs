//! Shared types used across the SDK.

pub mod filters;

pub use filters::{FilterValue, Filters};
