use std::sync::Arc;

use super::BoxFuture;
use crate::api::{CatalogClient, Details};

/// Shown when the route parameter is empty
pub const INVALID_ID_MESSAGE: &str = "Invalid Pokémon ID.";

/// Shown when the client could not produce details
pub const NOT_FOUND_MESSAGE: &str = "Could not fetch details";

/// UI-facing status of a detail fetch
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DetailViewState {
    pub details: Option<Details>,
    pub is_loading: bool,
    pub error: Option<String>,
}

/// How a background detail fetch ended
#[derive(Debug, Clone, PartialEq)]
pub enum DetailOutcome {
    Loaded(Details),
    /// The client returned nothing (it already logged why)
    Missing,
    /// The fetch task itself blew up
    Failed(String),
}

/// View-state holder for one visit of the detail screen
pub struct PokemonInfo {
    client: Arc<dyn CatalogClient>,
    state: DetailViewState,
}

impl PokemonInfo {
    pub fn new(client: Arc<dyn CatalogClient>) -> Self {
        Self {
            client,
            state: DetailViewState::default(),
        }
    }

    pub fn state(&self) -> &DetailViewState {
        &self.state
    }

    /// Request details for `id`.
    ///
    /// Returns the fetch to run in the background, or `None` when nothing
    /// needs fetching: the id is blank (error state is set), a fetch is
    /// already running, or the held details are already for `id`.
    pub fn load_details(&mut self, id: &str) -> Option<BoxFuture<DetailOutcome>> {
        if id.trim().is_empty() {
            self.state.error = Some(INVALID_ID_MESSAGE.to_string());
            self.state.is_loading = false;
            return None;
        }

        if self.state.is_loading {
            return None;
        }
        if let Some(details) = &self.state.details {
            if details.matches_id(id) {
                return None;
            }
        }

        self.state.is_loading = true;
        self.state.error = None;

        let client = Arc::clone(&self.client);
        let id = id.to_string();
        Some(Box::pin(async move {
            // Run on its own task so a panicking client surfaces as an error
            let task = tokio::spawn(async move { client.get_details(&id).await });
            match task.await {
                Ok(Some(details)) => DetailOutcome::Loaded(details),
                Ok(None) => DetailOutcome::Missing,
                Err(e) => DetailOutcome::Failed(e.to_string()),
            }
        }))
    }

    /// Apply the result of a fetch started by [`PokemonInfo::load_details`]
    pub fn finish(&mut self, outcome: DetailOutcome) {
        match outcome {
            DetailOutcome::Loaded(details) => {
                tracing::info!("🔎 Loaded details for #{} {}", details.id, details.name);
                self.state.details = Some(details);
            }
            DetailOutcome::Missing => {
                self.state.error = Some(NOT_FOUND_MESSAGE.to_string());
            }
            DetailOutcome::Failed(message) => {
                tracing::error!("Detail fetch failed: {}", message);
                self.state.error = Some(format!("Error: {}", message));
            }
        }
        self.state.is_loading = false;
    }

    /// Fetch for the sprite of the held details, if they have one
    pub fn sprite_request(&self) -> Option<BoxFuture<Option<Vec<u8>>>> {
        let url = self.state.details.as_ref()?.sprites.front_default.clone()?;
        let client = Arc::clone(&self.client);
        Some(Box::pin(async move { client.fetch_sprite(&url).await }))
    }
}

impl std::fmt::Debug for PokemonInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PokemonInfo")
            .field("state", &self.state)
            .finish()
    }
}
