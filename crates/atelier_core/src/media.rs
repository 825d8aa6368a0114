//! Media payload types for source images and generated results.

use atelier_error::{AtelierResult, MediaError, MediaErrorKind};
use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// A binary media payload with its MIME type.
///
/// Used both for generated results and, via conversion, as the source for an
/// edit pass. Payloads render as `data:` URLs when an embeddable form is needed.
///
/// # Examples
///
/// ```
/// use atelier_core::MediaPayload;
///
/// let payload = MediaPayload::new(vec![0xFF, 0xD8, 0xFF], "image/jpeg");
/// assert!(payload.data_url().starts_with("data:image/jpeg;base64,"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaPayload {
    /// Raw media bytes
    data: Vec<u8>,
    /// MIME type, e.g. "image/jpeg" or "video/mp4"
    mime: String,
}

impl MediaPayload {
    /// Create a payload from raw bytes and a MIME type.
    pub fn new(data: Vec<u8>, mime: impl Into<String>) -> Self {
        Self {
            data,
            mime: mime.into(),
        }
    }

    /// Create a payload from base64-encoded content.
    pub fn from_base64(encoded: &str, mime: impl Into<String>) -> AtelierResult<Self> {
        let data = BASE64
            .decode(encoded)
            .map_err(|e| MediaError::new(MediaErrorKind::Base64Decode(e.to_string())))?;
        Ok(Self::new(data, mime))
    }

    /// Raw media bytes.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// MIME type of the payload.
    pub fn mime(&self) -> &str {
        &self.mime
    }

    /// Base64 encoding of the payload bytes.
    pub fn to_base64(&self) -> String {
        BASE64.encode(&self.data)
    }

    /// Render the payload as an embeddable `data:` URL.
    pub fn data_url(&self) -> String {
        format!("data:{};base64,{}", self.mime, self.to_base64())
    }

    /// Whether the payload carries any bytes.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

/// A source image submitted for generation.
///
/// # Examples
///
/// ```
/// use atelier_core::SourceImage;
///
/// let source = SourceImage::new(vec![0x89, 0x50, 0x4E, 0x47], "image/png");
/// assert_eq!(source.mime(), "image/png");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceImage {
    /// Raw image bytes
    data: Vec<u8>,
    /// MIME type, e.g. "image/png"
    mime: String,
}

impl SourceImage {
    /// Create a source image from raw bytes and a MIME type.
    pub fn new(data: Vec<u8>, mime: impl Into<String>) -> Self {
        Self {
            data,
            mime: mime.into(),
        }
    }

    /// Load a source image from disk, sniffing the MIME type from the extension.
    ///
    /// Supported extensions: jpg, jpeg, png, webp, heic, heif.
    pub fn from_path(path: impl AsRef<Path>) -> AtelierResult<Self> {
        let path = path.as_ref();
        let mime = mime_for_extension(path).ok_or_else(|| {
            MediaError::new(MediaErrorKind::UnsupportedType(path.display().to_string()))
        })?;
        let data = std::fs::read(path).map_err(|e| {
            MediaError::new(MediaErrorKind::Read {
                path: path.display().to_string(),
                message: e.to_string(),
            })
        })?;
        Ok(Self::new(data, mime))
    }

    /// Raw image bytes.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// MIME type of the image.
    pub fn mime(&self) -> &str {
        &self.mime
    }

    /// Base64 encoding of the image bytes, as the Gemini API expects inline data.
    pub fn to_base64(&self) -> String {
        BASE64.encode(&self.data)
    }
}

// Editing an image asset feeds its result back in as the next source.
impl From<MediaPayload> for SourceImage {
    fn from(payload: MediaPayload) -> Self {
        Self {
            data: payload.data,
            mime: payload.mime,
        }
    }
}

fn mime_for_extension(path: &Path) -> Option<&'static str> {
    let ext = path.extension()?.to_str()?.to_ascii_lowercase();
    match ext.as_str() {
        "jpg" | "jpeg" => Some("image/jpeg"),
        "png" => Some("image/png"),
        "webp" => Some("image/webp"),
        "heic" => Some("image/heic"),
        "heif" => Some("image/heif"),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payload_round_trips_base64() {
        let payload = MediaPayload::new(vec![1, 2, 3, 4], "image/png");
        let decoded = MediaPayload::from_base64(&payload.to_base64(), "image/png")
            .expect("valid base64 should decode");
        assert_eq!(decoded, payload);
    }

    #[test]
    fn data_url_carries_mime() {
        let payload = MediaPayload::new(vec![0xDE, 0xAD], "video/mp4");
        assert!(payload.data_url().starts_with("data:video/mp4;base64,"));
    }

    #[test]
    fn unsupported_extension_is_rejected() {
        let err = SourceImage::from_path("plans/site.svg").unwrap_err();
        assert!(err.to_string().contains("Unsupported"));
    }

    #[test]
    fn result_payload_converts_to_source() {
        let payload = MediaPayload::new(vec![9, 9], "image/jpeg");
        let source = SourceImage::from(payload);
        assert_eq!(source.mime(), "image/jpeg");
        assert_eq!(source.data(), &[9, 9]);
    }
}
