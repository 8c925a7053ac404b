//! Client for the deck-of-cards web API.
//!
//! Every operation is a single GET against the configured base URL; the
//! client keeps no deck state between calls.

pub mod models;
mod repository;
pub mod service;

#[cfg(test)]
mod mock;

pub use models::{Card, CreateDeckRequest, DeckResponse};
pub use service::{DeckClient, DeckError};
