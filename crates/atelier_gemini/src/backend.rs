//! Backend trait between the orchestrator and the hosted API.

use async_trait::async_trait;
use atelier_core::{MediaPayload, SourceImage, VideoOptions};
use atelier_error::AtelierResult;
use serde::{Deserialize, Serialize};

/// Reference to an in-progress asynchronous video generation job.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperationHandle {
    /// Server-assigned operation name, e.g.
    /// `models/veo-2.0-generate-001/operations/abc123`
    pub name: String,
}

impl OperationHandle {
    /// Wrap a server-assigned operation name.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Snapshot of a long-running video operation's state.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct VideoOperation {
    /// Whether the server reports the operation complete
    pub done: bool,
    /// Result video URI, present once the operation succeeds
    pub video_uri: Option<String>,
    /// Server-side failure message, if the operation failed
    pub error: Option<String>,
}

impl VideoOperation {
    /// A still-running operation.
    pub fn pending() -> Self {
        Self::default()
    }

    /// A completed operation carrying a result URI.
    pub fn completed(uri: impl Into<String>) -> Self {
        Self {
            done: true,
            video_uri: Some(uri.into()),
            error: None,
        }
    }

    /// A completed operation that produced no usable URI.
    pub fn completed_without_uri() -> Self {
        Self {
            done: true,
            video_uri: None,
            error: None,
        }
    }

    /// A failed operation.
    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            done: true,
            video_uri: None,
            error: Some(message.into()),
        }
    }
}

/// The generation calls the orchestrator depends on.
///
/// Implemented by [`crate::GeminiClient`] for the hosted API and by scripted
/// mocks in tests.
#[async_trait]
pub trait RenderBackend: Send + Sync {
    /// Send a source image plus composed prompt to the synchronous edit
    /// endpoint and return the inline image payload from the response.
    async fn generate_image(
        &self,
        prompt: &str,
        image: &SourceImage,
    ) -> AtelierResult<MediaPayload>;

    /// Submit an asynchronous video generation request.
    async fn start_video(
        &self,
        prompt: &str,
        image: &SourceImage,
        options: &VideoOptions,
    ) -> AtelierResult<OperationHandle>;

    /// Fetch the current state of a video operation.
    async fn poll_video(&self, handle: &OperationHandle) -> AtelierResult<VideoOperation>;

    /// Download the finished video by URI (authenticated).
    async fn fetch_video(&self, uri: &str) -> AtelierResult<MediaPayload>;

    /// Provider name for logging.
    fn provider_name(&self) -> &'static str;
}
