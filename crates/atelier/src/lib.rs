//! Atelier - AI-assisted architectural rendering studio.
//!
//! Atelier turns a photo of a building into stylized still renders and short
//! video clips using Google's Gemini image models and the Veo video models.
//! Results accumulate in a session history, and any result can be re-generated
//! with add/remove edit instructions.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use atelier::{ImageOptions, SourceImage, Studio, StudioConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = StudioConfig::load()?;
//!     let studio = Studio::from_env(&config)?;
//!
//!     let source = SourceImage::from_path("house.jpg")?;
//!     let asset = studio
//!         .generate_image(source, "golden hour lighting", &ImageOptions::default())
//!         .await?;
//!     println!("Generated {} bytes", asset.result().data().len());
//!     Ok(())
//! }
//! ```
//!
//! # Architecture
//!
//! Atelier is organized as a workspace with focused crates:
//!
//! - `atelier_error` - Error types with source location tracking
//! - `atelier_core` - Media payloads, generation options, assets, prompts
//! - `atelier_gemini` - Gemini REST backend (image generation, Veo operations)
//! - `atelier_studio` - Orchestration: config, access gate, history, polling
//! - `atelier_tui` - Interactive terminal studio

#![forbid(unsafe_code)]

pub use atelier_core::{
    AspectRatio, Asset, GeneratedImage, GeneratedVideo, GenerationKind, ImageOptions,
    ImageOptionsBuilder, ImageStyle, MediaPayload, SourceImage, VideoDuration, VideoOptions,
    VideoOptionsBuilder, VideoStyle,
};
pub use atelier_error::{AtelierError, AtelierErrorKind, AtelierResult};
pub use atelier_gemini::{GeminiClient, OperationHandle, RenderBackend, VideoOperation};
pub use atelier_studio::{AccessGate, AssetStore, Studio, StudioConfig, user_message};
pub use atelier_tui::run_tui;
