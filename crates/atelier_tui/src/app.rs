//! Application state and core TUI types.

use atelier_core::{
    Asset, AspectRatio, GenerationKind, ImageOptions, ImageStyle, VideoDuration, VideoOptions,
    VideoStyle,
};
use atelier_studio::{AccessGate, AssetStore};
use strum::IntoEnumIterator;

/// Application mode determines which view is displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum AppMode {
    /// Access gate - passphrase entry
    Locked,
    /// Generation form - collect source image and options
    Form,
    /// Result viewer - active asset plus edit prompts
    Viewer,
}

/// Form field focus order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, strum::EnumIter)]
pub enum FormField {
    /// Path to the source image
    SourcePath,
    /// Free-text prompt
    Prompt,
    /// Image or video generation
    Kind,
    /// Image rendering style
    ImageStyle,
    /// Creativity slider (0-100)
    Creativity,
    /// Style strength slider (0-100)
    StyleStrength,
    /// Video camera treatment
    VideoStyle,
    /// Video clip duration
    Duration,
    /// Output aspect ratio
    AspectRatio,
}

/// Generation form state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormState {
    /// Path of the source image to upload
    pub source_path: String,
    /// Free-text prompt
    pub prompt: String,
    /// Which kind of asset to generate
    pub kind: GenerationKind,
    /// Image rendering style
    pub image_style: ImageStyle,
    /// Creativity level (0-100)
    pub creativity: u8,
    /// Style strength (0-100)
    pub style_strength: u8,
    /// Video camera treatment
    pub video_style: VideoStyle,
    /// Video clip duration
    pub duration: VideoDuration,
    /// Output aspect ratio
    pub aspect_ratio: AspectRatio,
    /// Currently focused field
    pub focused: FormField,
}

impl Default for FormState {
    fn default() -> Self {
        Self {
            source_path: String::new(),
            prompt: String::new(),
            kind: GenerationKind::Image,
            image_style: ImageStyle::UltraRealistic,
            creativity: 50,
            style_strength: 75,
            video_style: VideoStyle::Cinematic,
            duration: VideoDuration::Medium,
            aspect_ratio: AspectRatio::Widescreen,
            focused: FormField::SourcePath,
        }
    }
}

/// Edit field focus in the result viewer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum EditField {
    /// Things to add
    Positive,
    /// Things to remove
    Negative,
}

/// Edit prompt buffer for the result viewer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditBuffer {
    /// Positive ("add") instructions
    pub positive: String,
    /// Negative ("remove") instructions
    pub negative: String,
    /// Which field is currently focused
    pub focused: Option<EditField>,
}

impl EditBuffer {
    fn clear(&mut self) {
        self.positive.clear();
        self.negative.clear();
        self.focused = None;
    }
}

/// A generation request assembled from the UI, handed to the runner to spawn.
#[derive(Debug, Clone, PartialEq)]
pub enum Submission {
    /// Fresh image generation from the form
    Image {
        /// Path of the source image
        source_path: String,
        /// User prompt
        prompt: String,
        /// Image parameter set
        options: ImageOptions,
    },
    /// Fresh video generation from the form
    Video {
        /// Path of the source image
        source_path: String,
        /// User prompt
        prompt: String,
        /// Video parameter set
        options: VideoOptions,
    },
    /// Edit re-generation of the active asset
    Edit {
        /// Asset being edited
        asset: Box<Asset>,
        /// Positive instructions
        positive: String,
        /// Negative instructions
        negative: String,
    },
}

/// Main application state.
pub struct App {
    /// Current mode
    pub mode: AppMode,
    /// Access gate guarding the session
    pub gate: AccessGate,
    /// Passphrase entry buffer
    pub passphrase_input: String,
    /// Error shown under the passphrase field
    pub gate_error: Option<String>,
    /// Session asset history
    pub store: AssetStore,
    /// Generation form state
    pub form: FormState,
    /// Edit prompt buffer (viewer mode)
    pub edit: EditBuffer,
    /// Whether a generation is in flight
    pub pending: bool,
    /// Error modal message, if any
    pub error: Option<String>,
    /// Status message for the status bar
    pub status_message: String,
    /// Whether the credential is configured; generation is disabled otherwise
    pub api_configured: bool,
    /// Whether to quit the application
    pub should_quit: bool,
}

impl App {
    /// Create a new App instance behind a locked gate.
    pub fn new(gate: AccessGate, api_configured: bool) -> Self {
        Self {
            mode: AppMode::Locked,
            gate,
            passphrase_input: String::new(),
            gate_error: None,
            store: AssetStore::new(),
            form: FormState::default(),
            edit: EditBuffer::default(),
            pending: false,
            error: None,
            status_message: String::from("Tab: next field | Enter: generate | Ctrl+C: quit"),
            api_configured,
            should_quit: false,
        }
    }

    /// Attempt to unlock with the current passphrase buffer.
    pub fn try_unlock(&mut self) {
        let attempt = std::mem::take(&mut self.passphrase_input);
        if self.gate.unlock(&attempt) {
            self.gate_error = None;
            self.mode = AppMode::Form;
        } else {
            self.gate_error = Some("Incorrect password. Please try again.".to_string());
        }
    }

    /// Move form focus to the next field, skipping fields that do not apply
    /// to the selected generation kind.
    pub fn focus_next_field(&mut self) {
        let fields: Vec<FormField> = self.visible_fields();
        let index = fields.iter().position(|f| *f == self.form.focused).unwrap_or(0);
        self.form.focused = fields[(index + 1) % fields.len()];
    }

    /// Move form focus to the previous field.
    pub fn focus_previous_field(&mut self) {
        let fields: Vec<FormField> = self.visible_fields();
        let index = fields.iter().position(|f| *f == self.form.focused).unwrap_or(0);
        self.form.focused = fields[(index + fields.len() - 1) % fields.len()];
    }

    /// Form fields applicable to the selected generation kind, in focus order.
    pub fn visible_fields(&self) -> Vec<FormField> {
        FormField::iter()
            .filter(|field| match field {
                FormField::ImageStyle | FormField::Creativity | FormField::StyleStrength => {
                    self.form.kind == GenerationKind::Image
                }
                FormField::VideoStyle | FormField::Duration => {
                    self.form.kind == GenerationKind::Video
                }
                _ => true,
            })
            .collect()
    }

    /// Cycle the value of the focused option field.
    pub fn cycle_focused(&mut self, forward: bool) {
        match self.form.focused {
            FormField::Kind => {
                self.form.kind = cycle(self.form.kind, forward);
                // The focused field may have just disappeared.
                if !self.visible_fields().contains(&self.form.focused) {
                    self.form.focused = FormField::Kind;
                }
            }
            FormField::ImageStyle => self.form.image_style = cycle(self.form.image_style, forward),
            FormField::VideoStyle => self.form.video_style = cycle(self.form.video_style, forward),
            FormField::Duration => self.form.duration = cycle(self.form.duration, forward),
            FormField::AspectRatio => self.form.aspect_ratio = cycle(self.form.aspect_ratio, forward),
            FormField::Creativity => {
                self.form.creativity = step_slider(self.form.creativity, forward);
            }
            FormField::StyleStrength => {
                self.form.style_strength = step_slider(self.form.style_strength, forward);
            }
            FormField::SourcePath | FormField::Prompt => {}
        }
    }

    /// Push a typed character into the focused text buffer.
    pub fn type_char(&mut self, c: char) {
        match self.mode {
            AppMode::Locked => self.passphrase_input.push(c),
            AppMode::Form => match self.form.focused {
                FormField::SourcePath => self.form.source_path.push(c),
                FormField::Prompt => self.form.prompt.push(c),
                _ => {}
            },
            AppMode::Viewer => match self.edit.focused {
                Some(EditField::Positive) => self.edit.positive.push(c),
                Some(EditField::Negative) => self.edit.negative.push(c),
                None => {}
            },
        }
    }

    /// Remove the last character from the focused text buffer.
    pub fn backspace(&mut self) {
        match self.mode {
            AppMode::Locked => {
                self.passphrase_input.pop();
            }
            AppMode::Form => match self.form.focused {
                FormField::SourcePath => {
                    self.form.source_path.pop();
                }
                FormField::Prompt => {
                    self.form.prompt.pop();
                }
                _ => {}
            },
            AppMode::Viewer => match self.edit.focused {
                Some(EditField::Positive) => {
                    self.edit.positive.pop();
                }
                Some(EditField::Negative) => {
                    self.edit.negative.pop();
                }
                None => {}
            },
        }
    }

    /// Build a generation submission from the form, or None when generation
    /// is unavailable (missing credential, request in flight, no source).
    pub fn submit_generation(&mut self) -> Option<Submission> {
        if !self.api_configured {
            self.status_message =
                "Missing API key: generation features are disabled".to_string();
            return None;
        }
        if self.pending {
            return None;
        }
        if self.form.source_path.trim().is_empty() {
            self.status_message = "Select a source image first".to_string();
            return None;
        }

        self.pending = true;
        self.status_message = "Generating...".to_string();
        Some(match self.form.kind {
            GenerationKind::Image => Submission::Image {
                source_path: self.form.source_path.trim().to_string(),
                prompt: self.form.prompt.clone(),
                options: ImageOptions {
                    style: self.form.image_style,
                    creativity: self.form.creativity,
                    style_strength: self.form.style_strength,
                    aspect_ratio: self.form.aspect_ratio,
                },
            },
            GenerationKind::Video => Submission::Video {
                source_path: self.form.source_path.trim().to_string(),
                prompt: self.form.prompt.clone(),
                options: VideoOptions {
                    style: self.form.video_style,
                    duration: self.form.duration,
                    aspect_ratio: self.form.aspect_ratio,
                },
            },
        })
    }

    /// Build an edit submission for the active asset, or None when editing is
    /// unavailable.
    pub fn submit_edit(&mut self) -> Option<Submission> {
        if !self.api_configured || self.pending {
            return None;
        }
        let asset = self.store.active()?.clone();
        if self.edit.positive.trim().is_empty() && self.edit.negative.trim().is_empty() {
            self.status_message = "Enter edit instructions first".to_string();
            return None;
        }

        self.pending = true;
        self.status_message = "Re-generating...".to_string();
        Some(Submission::Edit {
            asset: Box::new(asset),
            positive: self.edit.positive.clone(),
            negative: self.edit.negative.clone(),
        })
    }

    /// Record a finished generation: prepend to history and show the viewer.
    pub fn finish_generation(&mut self, asset: Asset) {
        self.pending = false;
        self.store.add(asset);
        self.edit.clear();
        self.mode = AppMode::Viewer;
        self.status_message = "Done".to_string();
    }

    /// Record a failed generation: show the error modal, keep history intact.
    pub fn fail_generation(&mut self, message: String) {
        self.pending = false;
        self.error = Some(message);
        self.status_message = "Idle".to_string();
    }

    /// Move history selection up (toward most recent).
    pub fn select_previous(&mut self) {
        let assets = self.store.assets();
        if assets.is_empty() {
            return;
        }
        let index = self.active_index().unwrap_or(0);
        let id = assets[index.saturating_sub(1)].id();
        self.store.select(id);
    }

    /// Move history selection down (toward oldest).
    pub fn select_next(&mut self) {
        let assets = self.store.assets();
        if assets.is_empty() {
            return;
        }
        let index = match self.active_index() {
            Some(i) => (i + 1).min(assets.len() - 1),
            None => 0,
        };
        let id = assets[index].id();
        self.store.select(id);
    }

    /// Open the viewer on the active asset.
    pub fn open_viewer(&mut self) {
        if self.store.active().is_some() {
            self.edit.clear();
            self.mode = AppMode::Viewer;
        }
    }

    /// Return from the viewer to the generation form.
    pub fn back_to_studio(&mut self) {
        self.store.clear_active();
        self.edit.clear();
        self.mode = AppMode::Form;
    }

    /// Signal the main loop to exit.
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    fn active_index(&self) -> Option<usize> {
        let id = self.store.active_id()?;
        self.store.assets().iter().position(|a| a.id() == id)
    }
}

/// Advance an enum value to its next/previous variant, wrapping around.
fn cycle<T: IntoEnumIterator + PartialEq + Copy>(value: T, forward: bool) -> T {
    let variants: Vec<T> = T::iter().collect();
    let index = variants.iter().position(|v| *v == value).unwrap_or(0);
    let next = if forward {
        (index + 1) % variants.len()
    } else {
        (index + variants.len() - 1) % variants.len()
    };
    variants[next]
}

/// Step a 0-100 slider in increments of five.
fn step_slider(value: u8, forward: bool) -> u8 {
    if forward {
        value.saturating_add(5).min(100)
    } else {
        value.saturating_sub(5)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use atelier_core::{GeneratedImage, MediaPayload, SourceImage};

    fn unlocked_app(api_configured: bool) -> App {
        let mut app = App::new(AccessGate::new("CraneBay"), api_configured);
        app.passphrase_input = "CraneBay".to_string();
        app.try_unlock();
        app
    }

    fn sample_asset() -> Asset {
        Asset::Image(GeneratedImage::new(
            SourceImage::new(vec![1], "image/png"),
            "prompt",
            ImageStyle::UltraRealistic,
            50,
            75,
            AspectRatio::Widescreen,
            MediaPayload::new(vec![2], "image/jpeg"),
        ))
    }

    #[test]
    fn wrong_passphrase_clears_input_and_shows_error() {
        let mut app = App::new(AccessGate::new("CraneBay"), true);
        app.passphrase_input = "cranebay".to_string();
        app.try_unlock();
        assert_eq!(app.mode, AppMode::Locked);
        assert!(app.passphrase_input.is_empty());
        assert!(app.gate_error.is_some());
    }

    #[test]
    fn correct_passphrase_unlocks_the_form() {
        let app = unlocked_app(true);
        assert_eq!(app.mode, AppMode::Form);
        assert!(app.gate.is_unlocked());
    }

    #[test]
    fn submit_is_unreachable_without_credential() {
        let mut app = unlocked_app(false);
        app.form.source_path = "site.png".to_string();
        assert!(app.submit_generation().is_none());
        assert!(!app.pending);
        assert!(app.status_message.contains("disabled"));
    }

    #[test]
    fn submit_requires_a_source_image() {
        let mut app = unlocked_app(true);
        assert!(app.submit_generation().is_none());
        assert!(!app.pending);
    }

    #[test]
    fn submit_marks_the_app_pending() {
        let mut app = unlocked_app(true);
        app.form.source_path = "site.png".to_string();
        let submission = app.submit_generation().expect("submission should build");
        assert!(matches!(submission, Submission::Image { .. }));
        assert!(app.pending);
        // Second submit while pending is a no-op.
        assert!(app.submit_generation().is_none());
    }

    #[test]
    fn video_kind_swaps_visible_fields() {
        let mut app = unlocked_app(true);
        app.form.focused = FormField::Kind;
        app.cycle_focused(true);
        assert_eq!(app.form.kind, GenerationKind::Video);
        let fields = app.visible_fields();
        assert!(fields.contains(&FormField::Duration));
        assert!(!fields.contains(&FormField::Creativity));
    }

    #[test]
    fn finished_generation_opens_the_viewer() {
        let mut app = unlocked_app(true);
        app.pending = true;
        app.finish_generation(sample_asset());
        assert_eq!(app.mode, AppMode::Viewer);
        assert_eq!(app.store.len(), 1);
        assert!(!app.pending);
    }

    #[test]
    fn failed_generation_keeps_history_and_reports() {
        let mut app = unlocked_app(true);
        app.finish_generation(sample_asset());
        app.pending = true;
        app.fail_generation("Generation failed: boom".to_string());
        assert_eq!(app.store.len(), 1);
        assert!(app.error.as_deref().unwrap_or("").contains("boom"));
    }

    #[test]
    fn edit_submission_requires_instructions() {
        let mut app = unlocked_app(true);
        app.finish_generation(sample_asset());
        assert!(app.submit_edit().is_none());
        app.edit.positive = "more trees".to_string();
        assert!(app.submit_edit().is_some());
    }
}
