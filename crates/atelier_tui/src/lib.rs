//! Terminal User Interface for the Atelier render studio.
//!
//! Provides the access gate screen, the generation form, the session history
//! panel, and the result viewer with edit re-generation. Built with ratatui
//! for terminal rendering.

mod app;
mod events;
mod runner;
mod ui;

pub use app::{App, AppMode, EditBuffer, EditField, FormField, FormState, Submission};
pub use events::{Event, EventHandler};
pub use runner::run_tui;
