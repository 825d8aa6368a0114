//! Error types for the Atelier render studio.
//!
//! This crate provides the foundation error types used throughout the Atelier workspace.
//!
//! # Error Hierarchy
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern for clean error handling:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - All errors use `#[track_caller]` for automatic location capture
//!
//! # Examples
//!
//! ```
//! use atelier_error::{AtelierResult, ConfigError};
//!
//! fn load_settings() -> AtelierResult<String> {
//!     Err(ConfigError::new("Missing required field"))?
//! }
//!
//! match load_settings() {
//!     Ok(data) => println!("Got: {}", data),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod media;
mod gemini;
#[cfg(feature = "tui")]
mod tui;
mod error;

pub use config::ConfigError;
pub use media::{MediaError, MediaErrorKind};
pub use gemini::{GeminiError, GeminiErrorKind};
#[cfg(feature = "tui")]
pub use tui::{TuiError, TuiErrorKind, TuiResult};
pub use error::{AtelierError, AtelierErrorKind, AtelierResult};
