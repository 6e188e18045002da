/// Navigation destinations
///
/// The app has two screens. Destinations have a path form
/// (`pokemons`, `pokemon/{id}`) so a start screen can be picked from
/// configuration.

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Destination {
    /// Searchable catalog list, no parameters
    PokemonList,
    /// Detail screen for one name or numeric id
    PokemonInfo { pokemon_id: String },
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum RouteError {
    #[error("unknown route {0:?}")]
    Unknown(String),
}

impl Destination {
    pub fn path(&self) -> String {
        match self {
            Destination::PokemonList => "pokemons".to_string(),
            Destination::PokemonInfo { pokemon_id } => format!("pokemon/{}", pokemon_id),
        }
    }

    /// Parse a path produced by [`Destination::path`]. Leading and trailing
    /// slashes are ignored.
    pub fn parse(path: &str) -> Result<Self, RouteError> {
        let trimmed = path.trim().trim_matches('/');

        if trimmed == "pokemons" || trimmed.is_empty() {
            return Ok(Destination::PokemonList);
        }

        match trimmed.split_once('/') {
            Some(("pokemon", id)) if !id.contains('/') => Ok(Destination::PokemonInfo {
                pokemon_id: id.to_string(),
            }),
            _ => Err(RouteError::Unknown(path.to_string())),
        }
    }
}

/// Back stack rooted at the list screen
#[derive(Debug, Clone)]
pub struct Navigator {
    stack: Vec<Destination>,
}

impl Default for Navigator {
    fn default() -> Self {
        Self {
            stack: vec![Destination::PokemonList],
        }
    }
}

impl Navigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> &Destination {
        // The root is never popped
        &self.stack[self.stack.len() - 1]
    }

    pub fn navigate(&mut self, destination: Destination) {
        tracing::debug!("Navigate to {}", destination.path());
        self.stack.push(destination);
    }

    /// Pop the current screen. Returns false when already at the root.
    pub fn navigate_up(&mut self) -> bool {
        if self.stack.len() <= 1 {
            return false;
        }
        self.stack.pop();
        true
    }

    pub fn depth(&self) -> usize {
        self.stack.len()
    }
}
