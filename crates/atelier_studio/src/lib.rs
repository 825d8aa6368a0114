//! Generation orchestration and session state for Atelier.
//!
//! The [`Studio`] drives the image, video, and edit generation paths against a
//! [`RenderBackend`](atelier_gemini::RenderBackend), the [`AssetStore`] keeps the
//! session history, and the [`AccessGate`] guards the front end behind a shared
//! passphrase.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod gate;
mod store;
mod studio;

pub use config::StudioConfig;
pub use gate::AccessGate;
pub use store::AssetStore;
pub use studio::{Studio, user_message};
