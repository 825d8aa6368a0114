// Asset store ordering and selection tests.

use atelier_core::{
    Asset, AspectRatio, GeneratedImage, ImageStyle, MediaPayload, SourceImage,
};
use atelier_studio::AssetStore;
use uuid::Uuid;

fn image_asset(prompt: &str) -> Asset {
    Asset::Image(GeneratedImage::new(
        SourceImage::new(vec![1], "image/png"),
        prompt,
        ImageStyle::UltraRealistic,
        50,
        75,
        AspectRatio::Widescreen,
        MediaPayload::new(vec![2], "image/jpeg"),
    ))
}

#[test]
fn add_prepends_and_activates() {
    let mut store = AssetStore::new();
    let first = image_asset("first");
    let second = image_asset("second");
    let second_id = second.id();

    store.add(first);
    store.add(second);

    assert_eq!(store.len(), 2);
    assert_eq!(store.assets()[0].prompt(), "second");
    assert_eq!(store.active_id(), Some(second_id));
}

#[test]
fn select_known_id_changes_active() {
    let mut store = AssetStore::new();
    let first = image_asset("first");
    let first_id = first.id();
    store.add(first);
    store.add(image_asset("second"));

    assert!(store.select(first_id));
    assert_eq!(store.active().map(|a| a.prompt()), Some("first"));
}

#[test]
fn select_unknown_id_is_a_noop() {
    let mut store = AssetStore::new();
    let asset = image_asset("only");
    let id = asset.id();
    store.add(asset);

    assert!(!store.select(Uuid::new_v4()));
    assert_eq!(store.active_id(), Some(id));
}

#[test]
fn clear_active_returns_to_form_state() {
    let mut store = AssetStore::new();
    store.add(image_asset("only"));
    store.clear_active();

    assert!(store.active().is_none());
    assert_eq!(store.len(), 1);
}

#[test]
fn history_grows_by_one_per_add() {
    let mut store = AssetStore::new();
    for n in 0..5 {
        let before = store.len();
        store.add(image_asset(&format!("asset {n}")));
        assert_eq!(store.len(), before + 1);
    }
}
