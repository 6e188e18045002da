//! A small native Pokédex browser.
//!
//! Fetches the PokéAPI catalog, shows a searchable list and a detail card
//! per entry. A local SQLite table lives alongside but is not wired into
//! the screens.

pub mod api;
pub mod app;
pub mod config;
pub mod state;
pub mod ui;
