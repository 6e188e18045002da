/// Presentation module
///
/// Each screen is split into a pure `describe` step (state -> view
/// description, easy to test) and a `view` step that turns the description
/// into iced widgets.
///
/// - Destinations and back-stack navigation (route.rs)
/// - Searchable catalog list (list.rs)
/// - Detail card (detail.rs)

pub mod detail;
pub mod list;
pub mod route;

pub use route::{Destination, Navigator};
