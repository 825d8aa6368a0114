//! Session-local asset history.

use atelier_core::Asset;
use uuid::Uuid;

/// Ordered, session-local list of generated assets, most recent first.
///
/// Assets are only ever prepended; nothing is removed within a session and
/// nothing persists across sessions.
///
/// # Examples
///
/// ```
/// use atelier_core::{
///     Asset, AspectRatio, GeneratedImage, ImageStyle, MediaPayload, SourceImage,
/// };
/// use atelier_studio::AssetStore;
///
/// let mut store = AssetStore::new();
/// let asset = Asset::Image(GeneratedImage::new(
///     SourceImage::new(vec![1], "image/png"),
///     "prompt",
///     ImageStyle::Watercolor,
///     50,
///     75,
///     AspectRatio::Widescreen,
///     MediaPayload::new(vec![2], "image/jpeg"),
/// ));
/// let id = asset.id();
/// store.add(asset);
/// assert_eq!(store.active().map(|a| a.id()), Some(id));
/// ```
#[derive(Debug, Clone, Default)]
pub struct AssetStore {
    assets: Vec<Asset>,
    active: Option<Uuid>,
}

impl AssetStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Prepend an asset to the history and make it active.
    pub fn add(&mut self, asset: Asset) {
        self.active = Some(asset.id());
        self.assets.insert(0, asset);
    }

    /// Set the active asset if the id is present; no-op otherwise.
    /// Returns whether the id was found.
    pub fn select(&mut self, id: Uuid) -> bool {
        if self.assets.iter().any(|asset| asset.id() == id) {
            self.active = Some(id);
            true
        } else {
            false
        }
    }

    /// Clear the active selection (back to the generation form).
    pub fn clear_active(&mut self) {
        self.active = None;
    }

    /// The currently active asset, if any.
    pub fn active(&self) -> Option<&Asset> {
        let id = self.active?;
        self.assets.iter().find(|asset| asset.id() == id)
    }

    /// Id of the active asset, if any.
    pub fn active_id(&self) -> Option<Uuid> {
        self.active
    }

    /// All assets, most recent first.
    pub fn assets(&self) -> &[Asset] {
        &self.assets
    }

    /// Number of assets in the history.
    pub fn len(&self) -> usize {
        self.assets.len()
    }

    /// Whether the history is empty.
    pub fn is_empty(&self) -> bool {
        self.assets.is_empty()
    }
}
