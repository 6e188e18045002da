/// List screen
///
/// Shows a loading indicator until the catalog arrives, then a search
/// field above the filtered entries.
use iced::widget::{button, column, container, scrollable, text, text_input, Column};
use iced::{Element, Length};

use crate::api::models::capitalize;
use crate::app::Message;
use crate::state::list::PokemonList;

/// What the list screen should show
#[derive(Debug, Clone, PartialEq)]
pub enum ListView {
    Loading,
    Ready {
        query: String,
        entries: Vec<ListEntry>,
    },
}

/// One clickable row
#[derive(Debug, Clone, PartialEq)]
pub struct ListEntry {
    /// Display label (capitalized name)
    pub label: String,
    /// Route parameter passed to the detail screen
    pub pokemon_id: String,
}

pub fn describe(list: &PokemonList) -> ListView {
    if list.is_loading() {
        return ListView::Loading;
    }

    let entries = list
        .filtered()
        .into_iter()
        .map(|pokemon| ListEntry {
            label: capitalize(&pokemon.name),
            pokemon_id: pokemon.name.clone(),
        })
        .collect();

    ListView::Ready {
        query: list.query().to_string(),
        entries,
    }
}

pub fn view(list: &PokemonList) -> Element<'_, Message> {
    match describe(list) {
        ListView::Loading => container(text("Loading Pokémon...").size(20))
            .width(Length::Fill)
            .height(Length::Fill)
            .center_x(Length::Fill)
            .center_y(Length::Fill)
            .into(),
        ListView::Ready { query, entries } => {
            let search = text_input("Search Pokémon...", &query)
                .on_input(Message::QueryChanged)
                .padding(10);

            let rows = entries.into_iter().map(|entry| {
                Element::from(
                    button(text(entry.label))
                        .on_press(Message::OpenPokemon(entry.pokemon_id))
                        .width(Length::Fill)
                        .style(button::text),
                )
            });

            let entries = scrollable(Column::with_children(rows).spacing(8)).height(Length::Fill);

            column![search, entries]
                .spacing(8)
                .padding([8, 16])
                .into()
        }
    }
}
