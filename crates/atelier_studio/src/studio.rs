//! Generation orchestrator.

use crate::StudioConfig;
use atelier_core::{
    Asset, GeneratedImage, GeneratedVideo, ImageOptions, SourceImage, VideoOptions, edit_prompt,
    image_prompt, video_edit_prompt, video_prompt,
};
use atelier_error::{AtelierError, AtelierResult, GeminiError, GeminiErrorKind};
use atelier_gemini::{GeminiClient, RenderBackend};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, instrument, warn};

/// Drives the image, video, and edit generation paths.
///
/// The studio owns a [`RenderBackend`] and the polling policy for
/// long-running video operations. It has no side effects beyond the backend's
/// network calls; every successful path yields a fresh immutable [`Asset`].
#[derive(Clone)]
pub struct Studio {
    backend: Arc<dyn RenderBackend>,
    poll_interval: Duration,
    max_poll_attempts: u32,
}

impl std::fmt::Debug for Studio {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Studio")
            .field("provider", &self.backend.provider_name())
            .field("poll_interval", &self.poll_interval)
            .field("max_poll_attempts", &self.max_poll_attempts)
            .finish()
    }
}

impl Studio {
    /// Create a studio over an explicit backend (used by tests and embedders).
    pub fn new(backend: Arc<dyn RenderBackend>, config: &StudioConfig) -> Self {
        Self {
            backend,
            poll_interval: Duration::from_secs(config.poll_interval_secs),
            max_poll_attempts: config.max_poll_attempts,
        }
    }

    /// Create a studio backed by the hosted Gemini API.
    ///
    /// Fails with [`GeminiErrorKind::MissingApiKey`] when `GEMINI_API_KEY` is
    /// absent; callers surface that as a disabled-generation state rather than
    /// crashing.
    pub fn from_env(config: &StudioConfig) -> AtelierResult<Self> {
        let api_key = std::env::var("GEMINI_API_KEY")
            .map_err(|_| GeminiError::new(GeminiErrorKind::MissingApiKey))?;
        let client =
            GeminiClient::with_models(api_key, &config.image_model, &config.video_model);
        Ok(Self::new(Arc::new(client), config))
    }

    /// Generate an architectural render from a source image.
    #[instrument(skip(self, source, prompt, options))]
    pub async fn generate_image(
        &self,
        source: SourceImage,
        prompt: &str,
        options: &ImageOptions,
    ) -> AtelierResult<Asset> {
        let full_prompt = image_prompt(
            options.style,
            options.creativity,
            options.style_strength,
            prompt,
        );
        debug!(style = %options.style, "Generating image render");

        let result = self.backend.generate_image(&full_prompt, &source).await?;
        info!("Image render complete");

        Ok(Asset::Image(GeneratedImage::new(
            source,
            prompt,
            options.style,
            options.creativity,
            options.style_strength,
            options.aspect_ratio,
            result,
        )))
    }

    /// Generate a video clip from a source image.
    #[instrument(skip(self, source, prompt, options))]
    pub async fn generate_video(
        &self,
        source: SourceImage,
        prompt: &str,
        options: &VideoOptions,
    ) -> AtelierResult<Asset> {
        let full_prompt = video_prompt(options.style, prompt);
        let result = self.render_video(&full_prompt, &source, options).await?;

        Ok(Asset::Video(GeneratedVideo::new(
            source,
            prompt,
            options.style,
            options.duration,
            options.aspect_ratio,
            result,
        )))
    }

    /// Re-generate an existing asset with add/remove edit instructions.
    ///
    /// Image edits feed the prior result back in as the new source; video
    /// edits re-use the original source image with an extended prompt. Either
    /// way the outcome is a brand-new asset with its own identifier.
    #[instrument(skip(self, asset, positive, negative))]
    pub async fn edit(
        &self,
        asset: &Asset,
        positive: &str,
        negative: &str,
    ) -> AtelierResult<Asset> {
        let edit = edit_prompt(positive, negative);

        match asset {
            Asset::Image(image) => {
                let source = SourceImage::from(image.result().clone());
                let result = self.backend.generate_image(&edit, &source).await?;
                let prompt = format!("{}\n\nEdit: {}", image.prompt(), edit);

                Ok(Asset::Image(GeneratedImage::new(
                    source,
                    prompt,
                    *image.style(),
                    *image.creativity(),
                    *image.style_strength(),
                    *image.aspect_ratio(),
                    result,
                )))
            }
            Asset::Video(video) => {
                let full_prompt = video_edit_prompt(*video.style(), video.prompt(), &edit);
                let options = VideoOptions {
                    style: *video.style(),
                    duration: *video.duration(),
                    aspect_ratio: *video.aspect_ratio(),
                };
                let result = self
                    .render_video(&full_prompt, video.source_image(), &options)
                    .await?;

                Ok(Asset::Video(GeneratedVideo::new(
                    video.source_image().clone(),
                    full_prompt,
                    options.style,
                    options.duration,
                    options.aspect_ratio,
                    result,
                )))
            }
        }
    }

    /// Submit a video request and poll the operation handle to completion.
    ///
    /// Polls at a fixed interval, bounded by `max_poll_attempts`; the original
    /// service behavior of polling forever is deliberately not preserved.
    async fn render_video(
        &self,
        full_prompt: &str,
        source: &SourceImage,
        options: &VideoOptions,
    ) -> AtelierResult<atelier_core::MediaPayload> {
        let handle = self.backend.start_video(full_prompt, source, options).await?;
        info!(operation = %handle.name, "Video operation submitted");

        for attempt in 1..=self.max_poll_attempts {
            tokio::time::sleep(self.poll_interval).await;

            let operation = self.backend.poll_video(&handle).await?;
            if let Some(message) = operation.error {
                warn!(%message, "Video operation reported failure");
                return Err(GeminiError::new(GeminiErrorKind::OperationFailed(message)).into());
            }
            if operation.done {
                let uri = operation
                    .video_uri
                    .ok_or_else(|| GeminiError::new(GeminiErrorKind::MissingVideoUri))?;
                debug!(attempt, "Video operation complete");
                return self.backend.fetch_video(&uri).await;
            }
            debug!(attempt, "Video operation still running");
        }

        Err(GeminiError::new(GeminiErrorKind::OperationTimedOut(self.max_poll_attempts)).into())
    }
}

/// Normalize an orchestrator error to a user-facing message.
///
/// Credential-shaped errors get a friendlier rewritten message; everything
/// else surfaces its display form.
pub fn user_message(err: &AtelierError) -> String {
    let message = err.to_string();
    if message.contains("API_KEY") || message.to_lowercase().contains("api key") {
        "Could not connect to the API. Please ensure the API key is correctly configured in the environment and try again.".to_string()
    } else {
        message
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn credential_errors_get_friendly_message() {
        let err: AtelierError = GeminiError::new(GeminiErrorKind::MissingApiKey).into();
        assert!(user_message(&err).contains("correctly configured"));
    }

    #[test]
    fn other_errors_pass_through() {
        let err: AtelierError =
            GeminiError::new(GeminiErrorKind::MissingImagePart).into();
        assert!(user_message(&err).contains("failed to return an image"));
    }
}
