//! Challonge integration: API client, wire types and normalization into the scoring model.

mod client;
mod mapping;
pub mod wire;

pub use client::{validate_tournament_key, ChallongeClient, FetchError, DEFAULT_BASE_URL};
