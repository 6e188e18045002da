use std::sync::Arc;

use iced::widget::image;
use iced::{Element, Task, Theme};

use crate::api::{CatalogClient, PokeApiClient, Summary};
use crate::config::Config;
use crate::state::detail::{DetailOutcome, PokemonInfo};
use crate::state::list::PokemonList;
use crate::ui::{self, Destination, Navigator};

/// Main application state
pub struct Pokedex {
    client: Arc<dyn CatalogClient>,
    navigator: Navigator,
    /// List screen state, alive for the whole session
    list: PokemonList,
    /// Detail screen state for the current visit, if one is shown
    visit: Option<Visit>,
    next_visit: u64,
}

/// One display of the detail screen
struct Visit {
    id: u64,
    pokemon_id: String,
    info: PokemonInfo,
    sprite: Option<image::Handle>,
}

/// Application messages (events)
#[derive(Debug, Clone)]
pub enum Message {
    /// Background list fetch finished
    ListLoaded(Vec<Summary>),
    /// User typed in the search field
    QueryChanged(String),
    /// User picked an entry in the list
    OpenPokemon(String),
    /// Back button on the detail screen
    NavigateUp,
    /// Background detail fetch finished for a visit
    DetailsLoaded { visit: u64, outcome: DetailOutcome },
    /// Sprite download finished for a visit
    SpriteLoaded { visit: u64, bytes: Option<Vec<u8>> },
}

impl Pokedex {
    /// Create the application against PokéAPI
    pub fn new(config: Config) -> (Self, Task<Message>) {
        let client: Arc<dyn CatalogClient> = Arc::new(PokeApiClient::new(&config));

        let start = match config.start_route.as_deref().map(Destination::parse) {
            Some(Ok(destination)) => Some(destination),
            Some(Err(e)) => {
                tracing::warn!("Ignoring start route: {}", e);
                None
            }
            None => None,
        };

        Self::with_client(client, start)
    }

    /// Create the application with any catalog client, optionally opening
    /// `start` on top of the list screen.
    pub fn with_client(
        client: Arc<dyn CatalogClient>,
        start: Option<Destination>,
    ) -> (Self, Task<Message>) {
        let (list, fetch) = PokemonList::new(Arc::clone(&client));

        let mut app = Pokedex {
            client,
            navigator: Navigator::new(),
            list,
            visit: None,
            next_visit: 0,
        };

        let mut tasks = vec![Task::perform(fetch, Message::ListLoaded)];

        if let Some(destination) = start.filter(|d| *d != Destination::PokemonList) {
            app.navigator.navigate(destination);
            tasks.push(app.show_current());
        }

        tracing::info!("🎨 Pokédex started on {}", app.navigator.current().path());

        (app, Task::batch(tasks))
    }

    /// Handle application messages and update state
    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::ListLoaded(pokemons) => {
                if pokemons.is_empty() {
                    tracing::warn!("Catalog list is empty; the list screen keeps loading");
                }
                self.list.replace(pokemons);
                Task::none()
            }
            Message::QueryChanged(query) => {
                self.list.set_query(query);
                Task::none()
            }
            Message::OpenPokemon(pokemon_id) => {
                self.navigator
                    .navigate(Destination::PokemonInfo { pokemon_id });
                self.show_current()
            }
            Message::NavigateUp => {
                if self.navigator.navigate_up() {
                    self.show_current()
                } else {
                    Task::none()
                }
            }
            Message::DetailsLoaded { visit, outcome } => {
                let Some(current) = self.visit.as_mut().filter(|v| v.id == visit) else {
                    tracing::debug!("Dropping detail result for abandoned visit {}", visit);
                    return Task::none();
                };

                current.info.finish(outcome);

                match current.info.sprite_request() {
                    Some(fetch) => Task::perform(fetch, move |bytes| Message::SpriteLoaded {
                        visit,
                        bytes,
                    }),
                    None => Task::none(),
                }
            }
            Message::SpriteLoaded { visit, bytes } => {
                if let Some(current) = self.visit.as_mut().filter(|v| v.id == visit) {
                    current.sprite = bytes.map(|bytes| image::Handle::from_bytes(bytes));
                }
                Task::none()
            }
        }
    }

    /// Sync per-screen state with the navigator's current destination.
    ///
    /// Entering the detail screen with a new parameter starts a fresh visit
    /// and triggers its load.
    fn show_current(&mut self) -> Task<Message> {
        let pokemon_id = match self.navigator.current() {
            Destination::PokemonList => {
                self.visit = None;
                return Task::none();
            }
            Destination::PokemonInfo { pokemon_id } => pokemon_id.clone(),
        };

        if let Some(current) = self.visit.as_mut() {
            if current.pokemon_id == pokemon_id {
                return Self::load(current);
            }
        }

        self.next_visit += 1;
        let visit = self.visit.insert(Visit {
            id: self.next_visit,
            pokemon_id,
            info: PokemonInfo::new(Arc::clone(&self.client)),
            sprite: None,
        });

        Self::load(visit)
    }

    fn load(visit: &mut Visit) -> Task<Message> {
        let id = visit.id;
        match visit.info.load_details(&visit.pokemon_id) {
            Some(fetch) => Task::perform(fetch, move |outcome| Message::DetailsLoaded {
                visit: id,
                outcome,
            }),
            None => Task::none(),
        }
    }

    /// Build the user interface
    pub fn view(&self) -> Element<'_, Message> {
        match (self.navigator.current(), &self.visit) {
            (Destination::PokemonInfo { .. }, Some(visit)) => {
                ui::detail::view(visit.info.state(), visit.sprite.as_ref())
            }
            _ => ui::list::view(&self.list),
        }
    }

    /// Set the application theme
    pub fn theme(&self) -> Theme {
        Theme::Dark
    }

    pub fn list(&self) -> &PokemonList {
        &self.list
    }

    pub fn current(&self) -> &Destination {
        self.navigator.current()
    }

    /// Detail holder and visit number of the detail screen being shown
    pub fn detail(&self) -> Option<(u64, &PokemonInfo)> {
        self.visit.as_ref().map(|v| (v.id, &v.info))
    }
}
