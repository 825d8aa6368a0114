// Orchestrator tests against a scripted mock backend.
//
// No test here touches the network; the polling interval is zeroed so the
// video path runs immediately.

mod test_utils;

use atelier_core::{ImageOptions, MediaPayload, SourceImage, VideoOptions};
use atelier_studio::{Studio, StudioConfig};
use std::sync::Arc;
use test_utils::MockBackend;

fn fast_config(max_poll_attempts: u32) -> StudioConfig {
    StudioConfig {
        poll_interval_secs: 0,
        max_poll_attempts,
        ..StudioConfig::default()
    }
}

fn source() -> SourceImage {
    SourceImage::new(vec![0x89, 0x50, 0x4E, 0x47], "image/png")
}

#[tokio::test]
async fn image_generation_yields_image_asset_with_payload() {
    let mock = MockBackend::image_success(MediaPayload::new(vec![1, 2, 3], "image/jpeg"));
    let studio = Studio::new(Arc::new(mock), &fast_config(3));

    let asset = studio
        .generate_image(source(), "south elevation at dusk", &ImageOptions::default())
        .await
        .expect("mock image generation should succeed");

    assert!(asset.is_image());
    assert!(!asset.result().is_empty());
    assert_eq!(asset.prompt(), "south elevation at dusk");
}

#[tokio::test]
async fn image_generation_fails_without_inline_part() {
    let mock = MockBackend::image_missing_part();
    let studio = Studio::new(Arc::new(mock), &fast_config(3));

    let err = studio
        .generate_image(source(), "prompt", &ImageOptions::default())
        .await
        .unwrap_err();

    assert!(err.to_string().contains("failed to return an image"));
}

#[tokio::test]
async fn video_generation_observes_incomplete_polls_before_completion() {
    let mock = MockBackend::video_completing_after(3, "https://dl/clip.mp4?alt=media");
    let counts = mock.counts();
    let studio = Studio::new(Arc::new(mock), &fast_config(10));

    let asset = studio
        .generate_video(source(), "orbit the courtyard", &VideoOptions::default())
        .await
        .expect("mock video generation should succeed");

    assert!(asset.is_video());
    assert!(!asset.result().is_empty());

    let counts = *counts.lock().unwrap();
    assert_eq!(counts.start_video, 1);
    // Three pending states plus the completing poll.
    assert_eq!(counts.poll_video, 4);
    assert_eq!(counts.fetch_video, 1);
}

#[tokio::test]
async fn completed_operation_without_uri_is_an_error() {
    use atelier_gemini::VideoOperation;

    let mock = MockBackend::video_script(vec![
        VideoOperation::pending(),
        VideoOperation::completed_without_uri(),
    ]);
    let counts = mock.counts();
    let studio = Studio::new(Arc::new(mock), &fast_config(10));

    let err = studio
        .generate_video(source(), "prompt", &VideoOptions::default())
        .await
        .unwrap_err();

    assert!(err.to_string().contains("valid URI"));
    assert_eq!(counts.lock().unwrap().fetch_video, 0);
}

#[tokio::test]
async fn polling_is_bounded_by_the_attempt_budget() {
    use atelier_gemini::VideoOperation;

    let mock = MockBackend::video_script(vec![VideoOperation::pending()]);
    let counts = mock.counts();
    let studio = Studio::new(Arc::new(mock), &fast_config(4));

    let err = studio
        .generate_video(source(), "prompt", &VideoOptions::default())
        .await
        .unwrap_err();

    assert!(err.to_string().contains("did not complete"));
    assert_eq!(counts.lock().unwrap().poll_video, 4);
}

#[tokio::test]
async fn failed_operation_surfaces_the_server_message() {
    use atelier_gemini::VideoOperation;

    let mock = MockBackend::video_script(vec![VideoOperation::failed("quota exhausted")]);
    let studio = Studio::new(Arc::new(mock), &fast_config(4));

    let err = studio
        .generate_video(source(), "prompt", &VideoOptions::default())
        .await
        .unwrap_err();

    assert!(err.to_string().contains("quota exhausted"));
}

#[tokio::test]
async fn image_edit_produces_a_new_asset_with_new_id() {
    let mock = MockBackend::image_success(MediaPayload::new(vec![7, 7], "image/jpeg"));
    let studio = Studio::new(Arc::new(mock), &fast_config(3));

    let original = studio
        .generate_image(source(), "courtyard view", &ImageOptions::default())
        .await
        .expect("generation should succeed");

    let edited = studio
        .edit(&original, "add mature trees", "parked cars")
        .await
        .expect("edit should succeed");

    assert!(edited.is_image());
    assert_ne!(edited.id(), original.id());
    assert!(edited.prompt().contains("courtyard view"));
    assert!(edited.prompt().contains("add mature trees. Do not include: parked cars."));
    // The prior result became the edit's source.
    assert_eq!(edited.source_image().data(), original.result().data());
}

#[tokio::test]
async fn video_edit_reuses_the_original_source_image() {
    let mock = MockBackend::video_completing_after(1, "https://dl/clip.mp4");
    let studio = Studio::new(Arc::new(mock), &fast_config(10));

    let original = studio
        .generate_video(source(), "slow pan", &VideoOptions::default())
        .await
        .expect("generation should succeed");

    let edited = studio
        .edit(&original, "golden hour light", "fog")
        .await
        .expect("edit should succeed");

    assert!(edited.is_video());
    assert_ne!(edited.id(), original.id());
    assert_eq!(edited.source_image(), original.source_image());
    assert!(edited.prompt().contains("Additional instructions"));
}

#[tokio::test]
async fn failed_edit_leaves_no_new_asset() {
    let succeed = MockBackend::image_success(MediaPayload::new(vec![7], "image/jpeg"));
    let studio = Studio::new(Arc::new(succeed), &fast_config(3));
    let original = studio
        .generate_image(source(), "prompt", &ImageOptions::default())
        .await
        .expect("generation should succeed");

    let failing = MockBackend::image_missing_part();
    let broken_studio = Studio::new(Arc::new(failing), &fast_config(3));
    let result = broken_studio.edit(&original, "more glass", "people").await;

    assert!(result.is_err());
}
