//! Test utilities for Atelier studio tests.
//!
//! Provides a scripted mock backend so orchestration tests run without
//! network access.

use async_trait::async_trait;
use atelier_core::{MediaPayload, SourceImage, VideoOptions};
use atelier_error::{AtelierResult, GeminiError, GeminiErrorKind};
use atelier_gemini::{OperationHandle, RenderBackend, VideoOperation};
use std::sync::{Arc, Mutex};

/// Per-method call counters, shared with the test body.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CallCounts {
    pub generate_image: usize,
    pub start_video: usize,
    pub poll_video: usize,
    pub fetch_video: usize,
}

/// Scripted backend: a fixed image response, an ordered poll script, and a
/// canned video payload.
pub struct MockBackend {
    image_response: Option<MediaPayload>,
    poll_script: Mutex<Vec<VideoOperation>>,
    video_payload: MediaPayload,
    counts: Arc<Mutex<CallCounts>>,
}

impl MockBackend {
    /// Mock whose image path succeeds with the given payload.
    pub fn image_success(payload: MediaPayload) -> Self {
        Self {
            image_response: Some(payload),
            poll_script: Mutex::new(Vec::new()),
            video_payload: MediaPayload::new(vec![0xFA], "video/mp4"),
            counts: Arc::new(Mutex::new(CallCounts::default())),
        }
    }

    /// Mock whose image path returns no inline image part.
    pub fn image_missing_part() -> Self {
        Self {
            image_response: None,
            poll_script: Mutex::new(Vec::new()),
            video_payload: MediaPayload::new(vec![0xFA], "video/mp4"),
            counts: Arc::new(Mutex::new(CallCounts::default())),
        }
    }

    /// Mock whose video path reports `pending_polls` incomplete states before
    /// completing with a URI.
    pub fn video_completing_after(pending_polls: usize, uri: &str) -> Self {
        let mut script = vec![VideoOperation::pending(); pending_polls];
        script.push(VideoOperation::completed(uri));
        Self {
            image_response: None,
            poll_script: Mutex::new(script),
            video_payload: MediaPayload::new(vec![0xFA, 0xCE], "video/mp4"),
            counts: Arc::new(Mutex::new(CallCounts::default())),
        }
    }

    /// Mock whose video path runs a custom poll script. The final entry
    /// repeats once the script is exhausted.
    pub fn video_script(script: Vec<VideoOperation>) -> Self {
        Self {
            image_response: None,
            poll_script: Mutex::new(script),
            video_payload: MediaPayload::new(vec![0xFA, 0xCE], "video/mp4"),
            counts: Arc::new(Mutex::new(CallCounts::default())),
        }
    }

    /// Shared handle onto the call counters.
    pub fn counts(&self) -> Arc<Mutex<CallCounts>> {
        Arc::clone(&self.counts)
    }
}

#[async_trait]
impl RenderBackend for MockBackend {
    async fn generate_image(
        &self,
        _prompt: &str,
        _image: &SourceImage,
    ) -> AtelierResult<MediaPayload> {
        self.counts.lock().unwrap().generate_image += 1;
        match &self.image_response {
            Some(payload) => Ok(payload.clone()),
            None => Err(GeminiError::new(GeminiErrorKind::MissingImagePart).into()),
        }
    }

    async fn start_video(
        &self,
        _prompt: &str,
        _image: &SourceImage,
        _options: &VideoOptions,
    ) -> AtelierResult<OperationHandle> {
        self.counts.lock().unwrap().start_video += 1;
        Ok(OperationHandle::new("models/mock/operations/1"))
    }

    async fn poll_video(&self, _handle: &OperationHandle) -> AtelierResult<VideoOperation> {
        self.counts.lock().unwrap().poll_video += 1;
        let mut script = self.poll_script.lock().unwrap();
        if script.len() > 1 {
            Ok(script.remove(0))
        } else {
            script
                .first()
                .cloned()
                .ok_or_else(|| GeminiError::new(GeminiErrorKind::MissingVideoUri).into())
        }
    }

    async fn fetch_video(&self, _uri: &str) -> AtelierResult<MediaPayload> {
        self.counts.lock().unwrap().fetch_video += 1;
        Ok(self.video_payload.clone())
    }

    fn provider_name(&self) -> &'static str {
        "mock"
    }
}
