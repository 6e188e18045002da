/// Detail screen
///
/// Top bar with the entry name and a back button, then one of: loading
/// indicator, error text, or the detail card.
use iced::widget::{button, column, container, image, row, text, Column};
use iced::{Alignment, Color, Element, Length};

use crate::api::models::{capitalize, Details};
use crate::app::Message;
use crate::state::detail::DetailViewState;

/// Sprite edge length in logical pixels
const SPRITE_SIZE: f32 = 120.0;

#[derive(Debug, Clone, PartialEq)]
pub enum DetailView {
    Loading,
    Error(String),
    Loaded(DetailCard),
    /// Nothing requested yet
    Idle,
}

/// Text content of a loaded entry
#[derive(Debug, Clone, PartialEq)]
pub struct DetailCard {
    pub name: String,
    pub id_line: String,
    pub height_line: String,
    pub weight_line: String,
    pub types: Vec<String>,
    pub sprite_url: Option<String>,
}

impl DetailCard {
    pub fn from_details(details: &Details) -> Self {
        Self {
            name: capitalize(&details.name),
            id_line: format!("ID: {}", details.id),
            height_line: format!("Height: {}", format_height(details)),
            weight_line: format!("Weight: {}", format_weight(details)),
            types: details
                .type_names()
                .into_iter()
                .map(|name| format!("- {}", capitalize(name)))
                .collect(),
            sprite_url: details.sprites.front_default.clone(),
        }
    }
}

/// `7` decimetres -> `"0.7 m"`, `10` -> `"1.0 m"`
pub fn format_height(details: &Details) -> String {
    format!("{:.1} m", details.height_meters())
}

/// `69` hectograms -> `"6.9 kg"`, `1000` -> `"100.0 kg"`
pub fn format_weight(details: &Details) -> String {
    format!("{:.1} kg", details.weight_kilograms())
}

/// Top bar title: the capitalized name once loaded
pub fn title(state: &DetailViewState) -> String {
    state
        .details
        .as_ref()
        .map(|details| capitalize(&details.name))
        .unwrap_or_default()
}

pub fn describe(state: &DetailViewState) -> DetailView {
    if state.is_loading {
        DetailView::Loading
    } else if let Some(error) = &state.error {
        DetailView::Error(format!("Error: {}", error))
    } else if let Some(details) = &state.details {
        DetailView::Loaded(DetailCard::from_details(details))
    } else {
        DetailView::Idle
    }
}

pub fn view<'a>(state: &'a DetailViewState, sprite: Option<&'a image::Handle>) -> Element<'a, Message> {
    let top_bar = row![
        button(text("← Back"))
            .on_press(Message::NavigateUp)
            .style(button::text),
        text(title(state)).size(24),
    ]
    .spacing(16)
    .padding(8)
    .align_y(Alignment::Center);

    let body: Element<'a, Message> = match describe(state) {
        DetailView::Loading => text("Loading...").size(20).into(),
        DetailView::Error(message) => text(message)
            .color(Color::from_rgb(0.9, 0.3, 0.3))
            .into(),
        DetailView::Loaded(card) => {
            let mut content = Column::new()
                .spacing(8)
                .align_x(Alignment::Center)
                .push(text(card.name).size(32))
                .push(text(card.id_line));

            if let Some(handle) = sprite {
                content = content.push(
                    image(handle.clone())
                        .width(Length::Fixed(SPRITE_SIZE))
                        .height(Length::Fixed(SPRITE_SIZE)),
                );
            }

            content = content
                .push(text(card.height_line))
                .push(text(card.weight_line))
                .push(text("Types:").size(20));

            for line in card.types {
                content = content.push(text(line));
            }

            content.into()
        }
        DetailView::Idle => text("Loading details...").into(),
    };

    column![
        top_bar,
        container(body)
            .padding(16)
            .width(Length::Fill)
            .height(Length::Fill)
            .center_x(Length::Fill)
            .center_y(Length::Fill),
    ]
    .into()
}
