//! Generation option enums and parameter sets.

use serde::{Deserialize, Serialize};

/// Which kind of asset a generation request produces.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display, strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
pub enum GenerationKind {
    /// Architectural render of the source image
    #[strum(to_string = "Image")]
    Image,
    /// Video flythrough generated from the source image
    #[strum(to_string = "Video")]
    Video,
}

/// Output aspect ratio, serialized in the `W:H` form the Gemini API expects.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display, strum::EnumIter,
)]
pub enum AspectRatio {
    /// 1:1
    #[serde(rename = "1:1")]
    #[strum(to_string = "1:1")]
    Square,
    /// 16:9
    #[serde(rename = "16:9")]
    #[strum(to_string = "16:9")]
    Widescreen,
    /// 9:16
    #[serde(rename = "9:16")]
    #[strum(to_string = "9:16")]
    Portrait,
    /// 4:3
    #[serde(rename = "4:3")]
    #[strum(to_string = "4:3")]
    Standard,
    /// 3:4
    #[serde(rename = "3:4")]
    #[strum(to_string = "3:4")]
    StandardPortrait,
}

impl AspectRatio {
    /// The `W:H` string form sent to the API.
    pub fn as_str(&self) -> &'static str {
        match self {
            AspectRatio::Square => "1:1",
            AspectRatio::Widescreen => "16:9",
            AspectRatio::Portrait => "9:16",
            AspectRatio::Standard => "4:3",
            AspectRatio::StandardPortrait => "3:4",
        }
    }
}

/// Rendering style for image generation.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display, strum::EnumIter,
)]
pub enum ImageStyle {
    /// Photorealistic render
    #[strum(to_string = "Ultra Realistic")]
    UltraRealistic,
    /// Watercolor illustration
    #[strum(to_string = "Watercolor")]
    Watercolor,
    /// Pen sketch
    #[strum(to_string = "Pen Sketch")]
    PenSketch,
    /// Pencil sketch
    #[strum(to_string = "Pencil Sketch")]
    PencilSketch,
}

/// Camera treatment for video generation.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display, strum::EnumIter,
)]
pub enum VideoStyle {
    /// Slow cinematic camera movement
    #[strum(to_string = "Cinematic")]
    Cinematic,
    /// Fast action camera movement
    #[strum(to_string = "Action")]
    Action,
    /// Slow, lingering shots
    #[strum(to_string = "Slow")]
    Slow,
}

/// Video duration, one of a fixed small set of second values.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter,
)]
pub enum VideoDuration {
    /// 3 seconds
    Short,
    /// 5 seconds
    Medium,
    /// 8 seconds
    Long,
}

impl VideoDuration {
    /// Duration in seconds.
    pub fn seconds(&self) -> u32 {
        match self {
            VideoDuration::Short => 3,
            VideoDuration::Medium => 5,
            VideoDuration::Long => 8,
        }
    }

    /// Human-readable label for option pickers.
    pub fn label(&self) -> &'static str {
        match self {
            VideoDuration::Short => "Short (3s)",
            VideoDuration::Medium => "Medium (5s)",
            VideoDuration::Long => "Long (8s)",
        }
    }
}

/// Parameter set for an image generation request.
///
/// # Examples
///
/// ```
/// use atelier_core::{ImageOptionsBuilder, ImageStyle};
///
/// let options = ImageOptionsBuilder::default()
///     .style(ImageStyle::Watercolor)
///     .creativity(80u8)
///     .build()
///     .unwrap();
/// assert_eq!(options.style, ImageStyle::Watercolor);
/// assert_eq!(options.style_strength, 75);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_builder::Builder)]
#[builder(default)]
pub struct ImageOptions {
    /// Rendering style
    pub style: ImageStyle,
    /// Creativity level (0-100)
    pub creativity: u8,
    /// Style strength (0-100)
    pub style_strength: u8,
    /// Output aspect ratio
    pub aspect_ratio: AspectRatio,
}

impl Default for ImageOptions {
    fn default() -> Self {
        Self {
            style: ImageStyle::UltraRealistic,
            creativity: 50,
            style_strength: 75,
            aspect_ratio: AspectRatio::Widescreen,
        }
    }
}

/// Parameter set for a video generation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_builder::Builder)]
#[builder(default)]
pub struct VideoOptions {
    /// Camera treatment
    pub style: VideoStyle,
    /// Clip duration
    pub duration: VideoDuration,
    /// Output aspect ratio
    pub aspect_ratio: AspectRatio,
}

impl Default for VideoOptions {
    fn default() -> Self {
        Self {
            style: VideoStyle::Cinematic,
            duration: VideoDuration::Medium,
            aspect_ratio: AspectRatio::Widescreen,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn aspect_ratio_strings_match_api_form() {
        let forms: Vec<&str> = AspectRatio::iter().map(|r| r.as_str()).collect();
        assert_eq!(forms, ["1:1", "16:9", "9:16", "4:3", "3:4"]);
    }

    #[test]
    fn durations_cover_fixed_seconds() {
        let secs: Vec<u32> = VideoDuration::iter().map(|d| d.seconds()).collect();
        assert_eq!(secs, [3, 5, 8]);
    }

    #[test]
    fn duration_labels_name_seconds() {
        assert_eq!(VideoDuration::Medium.label(), "Medium (5s)");
    }
}
