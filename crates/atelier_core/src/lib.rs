//! Core data types for the Atelier render studio.
//!
//! This crate provides the foundation data types shared across the Atelier workspace:
//! media payloads, generation options, the `Asset` history record, and prompt
//! composition for the Gemini render models.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod asset;
mod media;
mod options;
mod prompt;

pub use asset::{Asset, GeneratedImage, GeneratedVideo};
pub use media::{MediaPayload, SourceImage};
pub use options::{
    AspectRatio, GenerationKind, ImageOptions, ImageOptionsBuilder, ImageStyle, VideoDuration,
    VideoOptions, VideoOptionsBuilder, VideoStyle,
};
pub use prompt::{edit_prompt, image_prompt, video_edit_prompt, video_prompt};
