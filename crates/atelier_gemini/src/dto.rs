//! Wire types for the Generative Language API v1beta.

use serde::{Deserialize, Serialize};

// ============================================================================
// generateContent (image edit)
// ============================================================================

/// Inline binary content, base64-encoded.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Blob {
    /// MIME type of the data
    pub mime_type: String,
    /// Base64-encoded bytes
    pub data: String,
}

/// A single content part: text or inline data.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Part {
    /// Text content
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// Inline binary content
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inline_data: Option<Blob>,
}

impl Part {
    /// A text part.
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            ..Self::default()
        }
    }

    /// An inline-data part.
    pub fn inline_data(mime_type: impl Into<String>, data: impl Into<String>) -> Self {
        Self {
            inline_data: Some(Blob {
                mime_type: mime_type.into(),
                data: data.into(),
            }),
            ..Self::default()
        }
    }
}

/// Ordered parts forming one content entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Content {
    /// Content parts in order
    #[serde(default)]
    pub parts: Vec<Part>,
}

/// Generation parameters for `generateContent`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    /// Requested response modalities, e.g. ["IMAGE", "TEXT"]
    pub response_modalities: Vec<String>,
}

/// Request body for `models/{model}:generateContent`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
    /// Contents to send
    pub contents: Vec<Content>,
    /// Generation parameters
    pub generation_config: GenerationConfig,
}

/// One response candidate.
#[derive(Debug, Clone, Deserialize)]
pub struct Candidate {
    /// Candidate content
    pub content: Option<Content>,
}

/// Response body for `generateContent`.
#[derive(Debug, Clone, Deserialize)]
pub struct GenerateContentResponse {
    /// Response candidates
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

impl GenerateContentResponse {
    /// First inline-data blob across all candidate parts, if any.
    pub fn first_inline_blob(&self) -> Option<&Blob> {
        self.candidates
            .iter()
            .filter_map(|c| c.content.as_ref())
            .flat_map(|content| content.parts.iter())
            .find_map(|part| part.inline_data.as_ref())
    }
}

// ============================================================================
// predictLongRunning (video)
// ============================================================================

/// Source image for a video instance.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoImage {
    /// Base64-encoded image bytes
    pub bytes_base64_encoded: String,
    /// MIME type of the image
    pub mime_type: String,
}

/// A single prediction instance.
#[derive(Debug, Clone, Serialize)]
pub struct VideoInstance {
    /// Full composed prompt
    pub prompt: String,
    /// Source image to animate
    pub image: VideoImage,
}

/// Generation parameters for `predictLongRunning`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoParameters {
    /// Output aspect ratio in `W:H` form
    pub aspect_ratio: String,
    /// Number of clips to generate
    pub number_of_videos: u32,
    /// Clip duration in seconds
    pub duration_seconds: u32,
}

/// Request body for `models/{model}:predictLongRunning`.
#[derive(Debug, Clone, Serialize)]
pub struct PredictLongRunningRequest {
    /// Prediction instances (one per request here)
    pub instances: Vec<VideoInstance>,
    /// Generation parameters
    pub parameters: VideoParameters,
}

/// Response body for `predictLongRunning`: the operation name.
#[derive(Debug, Clone, Deserialize)]
pub struct PredictLongRunningResponse {
    /// Server-assigned operation name
    pub name: String,
}

// ============================================================================
// Operation status
// ============================================================================

/// Error detail on a failed operation.
#[derive(Debug, Clone, Deserialize)]
pub struct OperationStatusError {
    /// Status code
    #[serde(default)]
    pub code: i32,
    /// Human-readable message
    #[serde(default)]
    pub message: String,
}

/// A generated video reference.
#[derive(Debug, Clone, Deserialize)]
pub struct VideoRef {
    /// Download URI (URL-encoded as delivered)
    pub uri: Option<String>,
}

/// Wrapper around a generated sample.
#[derive(Debug, Clone, Deserialize)]
pub struct GeneratedSample {
    /// The video reference
    pub video: Option<VideoRef>,
}

/// Veo-specific operation result payload.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateVideoResponse {
    /// Generated clips; the field name varies across API revisions
    #[serde(default, alias = "generatedVideos")]
    pub generated_samples: Vec<GeneratedSample>,
}

/// Operation result envelope.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OperationResponse {
    /// Veo result payload
    pub generate_video_response: Option<GenerateVideoResponse>,
}

/// Response body for `GET /{operation_name}`.
#[derive(Debug, Clone, Deserialize)]
pub struct Operation {
    /// Operation name
    #[serde(default)]
    pub name: String,
    /// Completion flag; absent while the operation is running
    #[serde(default)]
    pub done: bool,
    /// Result payload, present once done
    pub response: Option<OperationResponse>,
    /// Failure detail, present when the operation failed
    pub error: Option<OperationStatusError>,
}

impl Operation {
    /// First generated video URI, if the operation produced one.
    pub fn first_video_uri(&self) -> Option<&str> {
        self.response
            .as_ref()?
            .generate_video_response
            .as_ref()?
            .generated_samples
            .iter()
            .filter_map(|sample| sample.video.as_ref())
            .find_map(|video| video.uri.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inline_blob_found_across_parts() {
        let json = r#"{
            "candidates": [{
                "content": {
                    "parts": [
                        {"text": "Here is the render."},
                        {"inlineData": {"mimeType": "image/jpeg", "data": "QUJD"}}
                    ]
                }
            }]
        }"#;
        let response: GenerateContentResponse =
            serde_json::from_str(json).expect("response should parse");
        let blob = response.first_inline_blob().expect("blob present");
        assert_eq!(blob.mime_type, "image/jpeg");
        assert_eq!(blob.data, "QUJD");
    }

    #[test]
    fn running_operation_parses_without_done() {
        let op: Operation = serde_json::from_str(r#"{"name": "models/veo/operations/1"}"#)
            .expect("operation should parse");
        assert!(!op.done);
        assert!(op.first_video_uri().is_none());
    }

    #[test]
    fn finished_operation_exposes_uri() {
        let json = r#"{
            "name": "models/veo/operations/1",
            "done": true,
            "response": {
                "generateVideoResponse": {
                    "generatedSamples": [{"video": {"uri": "https://dl/video.mp4?alt=media"}}]
                }
            }
        }"#;
        let op: Operation = serde_json::from_str(json).expect("operation should parse");
        assert_eq!(op.first_video_uri(), Some("https://dl/video.mp4?alt=media"));
    }

    #[test]
    fn generated_videos_alias_is_accepted() {
        let json = r#"{
            "done": true,
            "response": {
                "generateVideoResponse": {
                    "generatedVideos": [{"video": {"uri": "https://dl/clip.mp4"}}]
                }
            }
        }"#;
        let op: Operation = serde_json::from_str(json).expect("operation should parse");
        assert_eq!(op.first_video_uri(), Some("https://dl/clip.mp4"));
    }
}
