//! Pokémon domain — list, detail, name search, evolution chains.

pub mod client;
