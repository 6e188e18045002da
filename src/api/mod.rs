/// Remote catalog module
///
/// This module handles:
/// - The PokéAPI JSON data model (models.rs)
/// - The HTTP client and its injectable capability trait (client.rs)

pub mod client;
pub mod models;

pub use client::{ApiError, CatalogClient, PokeApiClient};
pub use models::{Details, Summary};
