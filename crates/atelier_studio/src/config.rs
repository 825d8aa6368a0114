//! Studio configuration loading.

use atelier_error::{AtelierResult, ConfigError};
use atelier_gemini::{DEFAULT_IMAGE_MODEL, DEFAULT_VIDEO_MODEL};
use serde::Deserialize;

/// Studio settings, layered from `atelier.toml` and `ATELIER_*` environment
/// variables.
///
/// # Examples
///
/// ```
/// use atelier_studio::StudioConfig;
///
/// let config = StudioConfig::default();
/// assert_eq!(config.poll_interval_secs, 10);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct StudioConfig {
    /// Shared passphrase for the access gate (a UI toggle, not a security boundary)
    pub passphrase: String,
    /// Model used for image editing
    pub image_model: String,
    /// Model used for video generation
    pub video_model: String,
    /// Seconds between operation polls
    pub poll_interval_secs: u64,
    /// Poll attempts before the operation is abandoned
    pub max_poll_attempts: u32,
}

impl Default for StudioConfig {
    fn default() -> Self {
        Self {
            passphrase: "CraneBay".to_string(),
            image_model: DEFAULT_IMAGE_MODEL.to_string(),
            video_model: DEFAULT_VIDEO_MODEL.to_string(),
            poll_interval_secs: 10,
            max_poll_attempts: 90,
        }
    }
}

impl StudioConfig {
    /// Load configuration from `atelier.toml` (optional) with `ATELIER_*`
    /// environment overrides. Also loads a `.env` file when present.
    pub fn load() -> AtelierResult<Self> {
        dotenvy::dotenv().ok();

        let defaults = Self::default();
        let settings = config::Config::builder()
            .set_default("passphrase", defaults.passphrase.clone())
            .and_then(|b| b.set_default("image_model", defaults.image_model.clone()))
            .and_then(|b| b.set_default("video_model", defaults.video_model.clone()))
            .and_then(|b| b.set_default("poll_interval_secs", defaults.poll_interval_secs))
            .and_then(|b| b.set_default("max_poll_attempts", defaults.max_poll_attempts as u64))
            .map_err(|e| ConfigError::new(e.to_string()))?
            .add_source(config::File::with_name("atelier").required(false))
            .add_source(config::Environment::with_prefix("ATELIER"))
            .build()
            .map_err(|e| ConfigError::new(e.to_string()))?;

        settings
            .try_deserialize()
            .map_err(|e| ConfigError::new(e.to_string()).into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_hosted_models() {
        let config = StudioConfig::default();
        assert_eq!(config.image_model, DEFAULT_IMAGE_MODEL);
        assert_eq!(config.video_model, DEFAULT_VIDEO_MODEL);
        assert_eq!(config.max_poll_attempts, 90);
    }
}
