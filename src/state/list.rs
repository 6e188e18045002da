use std::sync::Arc;

use super::BoxFuture;
use crate::api::{CatalogClient, Summary};

/// View-state of the list screen
///
/// Holds the last fetched catalog (empty until the single startup fetch
/// lands) and the search text typed by the user.
#[derive(Debug, Default)]
pub struct PokemonList {
    pokemons: Vec<Summary>,
    query: String,
}

impl PokemonList {
    /// Create the holder together with its one and only list fetch.
    ///
    /// The caller runs the returned future in the background and feeds
    /// the result to [`PokemonList::replace`].
    pub fn new(client: Arc<dyn CatalogClient>) -> (Self, BoxFuture<Vec<Summary>>) {
        let fetch: BoxFuture<Vec<Summary>> = Box::pin(async move { client.list().await });
        (Self::default(), fetch)
    }

    /// Swap in a freshly fetched catalog. Never merges.
    pub fn replace(&mut self, pokemons: Vec<Summary>) {
        tracing::debug!("List replaced with {} entries", pokemons.len());
        self.pokemons = pokemons;
    }

    pub fn pokemons(&self) -> &[Summary] {
        &self.pokemons
    }

    /// Still waiting for entries (also the case when the fetch failed)
    pub fn is_loading(&self) -> bool {
        self.pokemons.is_empty()
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn set_query(&mut self, query: String) {
        self.query = query;
    }

    /// Entries matching the current search text
    pub fn filtered(&self) -> Vec<&Summary> {
        filter_by_name(&self.pokemons, &self.query)
    }
}

/// Case-insensitive substring filter on entry names.
///
/// A blank query keeps everything. Relative order is preserved.
pub fn filter_by_name<'a>(pokemons: &'a [Summary], query: &str) -> Vec<&'a Summary> {
    if query.trim().is_empty() {
        return pokemons.iter().collect();
    }

    let needle = query.to_lowercase();
    pokemons
        .iter()
        .filter(|pokemon| pokemon.name.to_lowercase().contains(&needle))
        .collect()
}
