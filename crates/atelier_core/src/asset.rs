//! Generated asset records kept in the session history.

use crate::{
    AspectRatio, ImageStyle, MediaPayload, SourceImage, VideoDuration, VideoStyle,
};
use chrono::{DateTime, Utc};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A generated architectural render.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Getters)]
pub struct GeneratedImage {
    /// Unique asset identifier
    id: Uuid,
    /// Image the render was generated from
    source_image: SourceImage,
    /// User prompt recorded with the asset
    prompt: String,
    /// Rendering style
    style: ImageStyle,
    /// Creativity level (0-100)
    creativity: u8,
    /// Style strength (0-100)
    style_strength: u8,
    /// Output aspect ratio
    aspect_ratio: AspectRatio,
    /// Generated image payload
    result: MediaPayload,
    /// Creation timestamp
    created_at: DateTime<Utc>,
}

impl GeneratedImage {
    /// Create a render record with a fresh identifier and timestamp.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        source_image: SourceImage,
        prompt: impl Into<String>,
        style: ImageStyle,
        creativity: u8,
        style_strength: u8,
        aspect_ratio: AspectRatio,
        result: MediaPayload,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            source_image,
            prompt: prompt.into(),
            style,
            creativity,
            style_strength,
            aspect_ratio,
            result,
            created_at: Utc::now(),
        }
    }
}

/// A generated video clip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Getters)]
pub struct GeneratedVideo {
    /// Unique asset identifier
    id: Uuid,
    /// Image the clip was generated from
    source_image: SourceImage,
    /// Prompt recorded with the asset
    prompt: String,
    /// Camera treatment
    style: VideoStyle,
    /// Clip duration
    duration: VideoDuration,
    /// Output aspect ratio
    aspect_ratio: AspectRatio,
    /// Generated video payload
    result: MediaPayload,
    /// Creation timestamp
    created_at: DateTime<Utc>,
}

impl GeneratedVideo {
    /// Create a clip record with a fresh identifier and timestamp.
    pub fn new(
        source_image: SourceImage,
        prompt: impl Into<String>,
        style: VideoStyle,
        duration: VideoDuration,
        aspect_ratio: AspectRatio,
        result: MediaPayload,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            source_image,
            prompt: prompt.into(),
            style,
            duration,
            aspect_ratio,
            result,
            created_at: Utc::now(),
        }
    }
}

/// A single generated or edited result plus its provenance.
///
/// Assets are immutable once created; an edit produces a new asset with a
/// new identifier rather than mutating an existing one.
///
/// # Examples
///
/// ```
/// use atelier_core::{
///     Asset, AspectRatio, GeneratedImage, ImageStyle, MediaPayload, SourceImage,
/// };
///
/// let asset = Asset::Image(GeneratedImage::new(
///     SourceImage::new(vec![1], "image/png"),
///     "evening light",
///     ImageStyle::Watercolor,
///     50,
///     75,
///     AspectRatio::Widescreen,
///     MediaPayload::new(vec![2], "image/jpeg"),
/// ));
/// assert!(asset.is_image());
/// assert!(!asset.result().is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Asset {
    /// Image render variant
    Image(GeneratedImage),
    /// Video clip variant
    Video(GeneratedVideo),
}

impl Asset {
    /// Unique identifier of the asset.
    pub fn id(&self) -> Uuid {
        match self {
            Asset::Image(image) => *image.id(),
            Asset::Video(video) => *video.id(),
        }
    }

    /// Prompt recorded with the asset.
    pub fn prompt(&self) -> &str {
        match self {
            Asset::Image(image) => image.prompt(),
            Asset::Video(video) => video.prompt(),
        }
    }

    /// Image the asset was generated from.
    pub fn source_image(&self) -> &SourceImage {
        match self {
            Asset::Image(image) => image.source_image(),
            Asset::Video(video) => video.source_image(),
        }
    }

    /// Output aspect ratio.
    pub fn aspect_ratio(&self) -> AspectRatio {
        match self {
            Asset::Image(image) => *image.aspect_ratio(),
            Asset::Video(video) => *video.aspect_ratio(),
        }
    }

    /// Generated media payload.
    pub fn result(&self) -> &MediaPayload {
        match self {
            Asset::Image(image) => image.result(),
            Asset::Video(video) => video.result(),
        }
    }

    /// Creation timestamp.
    pub fn created_at(&self) -> DateTime<Utc> {
        match self {
            Asset::Image(image) => *image.created_at(),
            Asset::Video(video) => *video.created_at(),
        }
    }

    /// Embeddable `data:` URL form of the result payload.
    pub fn result_data_url(&self) -> String {
        self.result().data_url()
    }

    /// Whether this asset is an image render.
    pub fn is_image(&self) -> bool {
        matches!(self, Asset::Image(_))
    }

    /// Whether this asset is a video clip.
    pub fn is_video(&self) -> bool {
        matches!(self, Asset::Video(_))
    }

    /// Short label for history listings, e.g. "Image · Watercolor".
    pub fn label(&self) -> String {
        match self {
            Asset::Image(image) => format!("Image · {}", image.style()),
            Asset::Video(video) => format!("Video · {}", video.style()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_image() -> GeneratedImage {
        GeneratedImage::new(
            SourceImage::new(vec![1, 2], "image/png"),
            "dusk massing study",
            ImageStyle::UltraRealistic,
            50,
            75,
            AspectRatio::Widescreen,
            MediaPayload::new(vec![3, 4], "image/jpeg"),
        )
    }

    #[test]
    fn every_asset_gets_a_distinct_id() {
        let a = Asset::Image(sample_image());
        let b = Asset::Image(sample_image());
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn tagged_serialization_discriminates_variants() {
        let asset = Asset::Image(sample_image());
        let json = serde_json::to_string(&asset).expect("asset should serialize");
        assert!(json.contains("\"type\":\"image\""));
    }

    #[test]
    fn label_names_kind_and_style() {
        let asset = Asset::Image(sample_image());
        assert_eq!(asset.label(), "Image · Ultra Realistic");
    }
}
