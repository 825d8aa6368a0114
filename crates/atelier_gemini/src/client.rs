//! Google Gemini REST API client.

use crate::GeminiResult;
use crate::backend::{OperationHandle, RenderBackend, VideoOperation};
use crate::dto::{
    Content, GenerateContentRequest, GenerateContentResponse, GenerationConfig, Operation, Part,
    PredictLongRunningRequest, PredictLongRunningResponse, VideoImage, VideoInstance,
    VideoParameters,
};
use async_trait::async_trait;
use atelier_core::{MediaPayload, SourceImage, VideoOptions};
use atelier_error::{AtelierResult, GeminiError, GeminiErrorKind};
use percent_encoding::percent_decode_str;
use reqwest::Client;
use std::env;
use tracing::{debug, error, instrument};

const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Default model for synchronous image editing.
pub const DEFAULT_IMAGE_MODEL: &str = "gemini-2.5-flash-image-preview";

/// Default model for asynchronous video generation.
pub const DEFAULT_VIDEO_MODEL: &str = "veo-2.0-generate-001";

/// Client for the Gemini render endpoints.
///
/// Covers the synchronous `generateContent` image-edit call, the Veo
/// `predictLongRunning` submission, operation polling, and the authenticated
/// download of a finished clip.
#[derive(Clone)]
pub struct GeminiClient {
    client: Client,
    api_key: String,
    image_model: String,
    video_model: String,
}

impl std::fmt::Debug for GeminiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiClient")
            .field("image_model", &self.image_model)
            .field("video_model", &self.video_model)
            .finish_non_exhaustive()
    }
}

impl GeminiClient {
    /// Create a client with the default render models.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_models(api_key, DEFAULT_IMAGE_MODEL, DEFAULT_VIDEO_MODEL)
    }

    /// Create a client with explicit model names.
    pub fn with_models(
        api_key: impl Into<String>,
        image_model: impl Into<String>,
        video_model: impl Into<String>,
    ) -> Self {
        debug!("Creating new Gemini client");
        Self {
            client: Client::new(),
            api_key: api_key.into(),
            image_model: image_model.into(),
            video_model: video_model.into(),
        }
    }

    /// Create a client from the `GEMINI_API_KEY` environment variable.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use atelier_gemini::GeminiClient;
    ///
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let client = GeminiClient::from_env()?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn from_env() -> GeminiResult<Self> {
        let api_key =
            env::var("GEMINI_API_KEY").map_err(|_| GeminiError::new(GeminiErrorKind::MissingApiKey))?;
        Ok(Self::new(api_key))
    }

    /// Model used for image editing.
    pub fn image_model(&self) -> &str {
        &self.image_model
    }

    /// Model used for video generation.
    pub fn video_model(&self) -> &str {
        &self.video_model
    }

    async fn post_json<Req, Resp>(&self, url: &str, body: &Req) -> GeminiResult<Resp>
    where
        Req: serde::Serialize,
        Resp: serde::de::DeserializeOwned,
    {
        let response = self
            .client
            .post(url)
            .header("x-goog-api-key", &self.api_key)
            .header("content-type", "application/json")
            .json(body)
            .send()
            .await
            .map_err(|e| {
                error!(error = ?e, "Failed to send request to Gemini API");
                GeminiError::new(GeminiErrorKind::ApiRequest(format!("Request failed: {}", e)))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            error!(status = %status, body = %body, "Gemini API returned error");
            return Err(GeminiError::new(GeminiErrorKind::HttpError {
                status_code: status.as_u16(),
                message: body,
            }));
        }

        response.json().await.map_err(|e| {
            error!(error = ?e, "Failed to parse Gemini response");
            GeminiError::new(GeminiErrorKind::ApiRequest(format!(
                "Failed to parse response: {}",
                e
            )))
        })
    }

    async fn get_json<Resp>(&self, url: &str) -> GeminiResult<Resp>
    where
        Resp: serde::de::DeserializeOwned,
    {
        let response = self
            .client
            .get(url)
            .header("x-goog-api-key", &self.api_key)
            .send()
            .await
            .map_err(|e| {
                error!(error = ?e, "Failed to send request to Gemini API");
                GeminiError::new(GeminiErrorKind::ApiRequest(format!("Request failed: {}", e)))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            error!(status = %status, body = %body, "Gemini API returned error");
            return Err(GeminiError::new(GeminiErrorKind::HttpError {
                status_code: status.as_u16(),
                message: body,
            }));
        }

        response.json().await.map_err(|e| {
            error!(error = ?e, "Failed to parse Gemini response");
            GeminiError::new(GeminiErrorKind::ApiRequest(format!(
                "Failed to parse response: {}",
                e
            )))
        })
    }
}

#[async_trait]
impl RenderBackend for GeminiClient {
    #[instrument(skip(self, prompt, image), fields(model = %self.image_model))]
    async fn generate_image(
        &self,
        prompt: &str,
        image: &SourceImage,
    ) -> AtelierResult<MediaPayload> {
        debug!("Sending generateContent request");

        let request = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![
                    Part::inline_data(image.mime(), image.to_base64()),
                    Part::text(prompt),
                ],
            }],
            generation_config: GenerationConfig {
                response_modalities: vec!["IMAGE".to_string(), "TEXT".to_string()],
            },
        };

        let url = format!(
            "{}/models/{}:generateContent",
            GEMINI_API_BASE, self.image_model
        );
        let response: GenerateContentResponse = self.post_json(&url, &request).await?;

        let blob = response
            .first_inline_blob()
            .ok_or_else(|| GeminiError::new(GeminiErrorKind::MissingImagePart))?;

        debug!(mime = %blob.mime_type, "Received inline image part");
        Ok(MediaPayload::from_base64(&blob.data, &blob.mime_type)?)
    }

    #[instrument(skip(self, prompt, image, options), fields(model = %self.video_model))]
    async fn start_video(
        &self,
        prompt: &str,
        image: &SourceImage,
        options: &VideoOptions,
    ) -> AtelierResult<OperationHandle> {
        debug!("Submitting predictLongRunning request");

        let request = PredictLongRunningRequest {
            instances: vec![VideoInstance {
                prompt: prompt.to_string(),
                image: VideoImage {
                    bytes_base64_encoded: image.to_base64(),
                    mime_type: image.mime().to_string(),
                },
            }],
            parameters: VideoParameters {
                aspect_ratio: options.aspect_ratio.as_str().to_string(),
                number_of_videos: 1,
                duration_seconds: options.duration.seconds(),
            },
        };

        let url = format!(
            "{}/models/{}:predictLongRunning",
            GEMINI_API_BASE, self.video_model
        );
        let response: PredictLongRunningResponse = self.post_json(&url, &request).await?;

        debug!(operation = %response.name, "Video operation started");
        Ok(OperationHandle::new(response.name))
    }

    #[instrument(skip(self), fields(operation = %handle.name))]
    async fn poll_video(&self, handle: &OperationHandle) -> AtelierResult<VideoOperation> {
        let url = format!("{}/{}", GEMINI_API_BASE, handle.name);
        let operation: Operation = self.get_json(&url).await?;

        if let Some(status_error) = &operation.error {
            return Ok(VideoOperation::failed(format!(
                "{} (code {})",
                status_error.message, status_error.code
            )));
        }

        Ok(VideoOperation {
            done: operation.done,
            video_uri: operation.first_video_uri().map(str::to_string),
            error: None,
        })
    }

    #[instrument(skip(self, uri))]
    async fn fetch_video(&self, uri: &str) -> AtelierResult<MediaPayload> {
        // The URI arrives URL-encoded and must be decoded before use.
        let decoded = percent_decode_str(uri).decode_utf8_lossy().into_owned();
        let separator = if decoded.contains('?') { '&' } else { '?' };
        let url = format!("{}{}key={}", decoded, separator, self.api_key);

        debug!("Downloading generated video");
        let response = self.client.get(&url).send().await.map_err(|e| {
            error!(error = ?e, "Failed to fetch video");
            GeminiError::new(GeminiErrorKind::ApiRequest(format!("Request failed: {}", e)))
        })?;

        if !response.status().is_success() {
            let status = response.status();
            error!(status = %status, "Video download returned error");
            return Err(GeminiError::new(GeminiErrorKind::VideoFetch(status.as_u16())).into());
        }

        let bytes = response.bytes().await.map_err(|e| {
            error!(error = ?e, "Failed to read video body");
            GeminiError::new(GeminiErrorKind::ApiRequest(format!(
                "Failed to read video body: {}",
                e
            )))
        })?;

        debug!(size = bytes.len(), "Video downloaded");
        Ok(MediaPayload::new(bytes.to_vec(), "video/mp4"))
    }

    fn provider_name(&self) -> &'static str {
        "gemini"
    }
}
