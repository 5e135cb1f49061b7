//! Terminal frontend and the frontend-agnostic event shape.

pub mod events;
pub mod tui;

pub use events::FrontendEvent;
pub use tui::TuiFrontend;
