// Tests for the Gemini client surface.
//
// Construction and accessor tests run offline. Tests that hit the real API
// are gated behind the `api` marker feature and require GEMINI_API_KEY.

use atelier_core::SourceImage;
use atelier_gemini::{DEFAULT_IMAGE_MODEL, DEFAULT_VIDEO_MODEL, GeminiClient, RenderBackend};

// 1x1 transparent PNG
const TINY_PNG_B64: &str =
    "iVBORw0KGgoAAAANSUhEUgAAAAEAAAABCAYAAAAfFcSJAAAADUlEQVR42mP8z8BQDwAEhQGAhKmMIQAAAABJRU5ErkJggg==";

fn tiny_png() -> SourceImage {
    use base64::Engine;
    let data = base64::engine::general_purpose::STANDARD
        .decode(TINY_PNG_B64)
        .expect("embedded png should decode");
    SourceImage::new(data, "image/png")
}

#[test]
fn default_models_are_the_render_pair() {
    let client = GeminiClient::new("test-key");
    assert_eq!(client.image_model(), DEFAULT_IMAGE_MODEL);
    assert_eq!(client.video_model(), DEFAULT_VIDEO_MODEL);
}

#[test]
fn explicit_models_override_defaults() {
    let client = GeminiClient::with_models("test-key", "image-model-x", "video-model-y");
    assert_eq!(client.image_model(), "image-model-x");
    assert_eq!(client.video_model(), "video-model-y");
}

#[test]
fn provider_name_is_gemini() {
    let client = GeminiClient::new("test-key");
    assert_eq!(client.provider_name(), "gemini");
}

/// End-to-end image edit against the live API.
#[tokio::test]
#[cfg_attr(not(feature = "api"), ignore)] // Requires GEMINI_API_KEY
async fn live_generate_image_returns_payload() {
    dotenvy::dotenv().ok();
    let client = GeminiClient::from_env().expect("GEMINI_API_KEY must be set");

    let payload = client
        .generate_image(
            "Ultra Realistic architectural render of this building, with a creativity level of 50 and style strength of 75. ",
            &tiny_png(),
        )
        .await
        .expect("live image generation should succeed");

    assert!(!payload.is_empty());
    assert!(payload.mime().starts_with("image/"));
}
