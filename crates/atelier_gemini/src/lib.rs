//! Gemini REST client for Atelier image and video generation.
//!
//! This crate talks to the Google Generative Language API v1beta:
//! `generateContent` for inline image editing, and the Veo
//! `predictLongRunning` plus operations endpoints for video generation.
//! The [`RenderBackend`] trait abstracts the four calls the orchestrator
//! depends on so tests can substitute a scripted mock.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod backend;
mod client;
mod dto;

pub use backend::{OperationHandle, RenderBackend, VideoOperation};
pub use client::{GeminiClient, DEFAULT_IMAGE_MODEL, DEFAULT_VIDEO_MODEL};

use atelier_error::GeminiError;

/// Result type for Gemini-specific operations.
pub(crate) type GeminiResult<T> = Result<T, GeminiError>;
