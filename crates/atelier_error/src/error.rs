//! Top-level error wrapper types.

use crate::{ConfigError, GeminiError, MediaError};
#[cfg(feature = "tui")]
use crate::TuiError;

/// This is the foundation error enum for the Atelier workspace.
///
/// # Examples
///
/// ```
/// use atelier_error::{AtelierError, ConfigError};
///
/// let config_err = ConfigError::new("Missing required field");
/// let err: AtelierError = config_err.into();
/// assert!(format!("{}", err).contains("Configuration Error"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum AtelierErrorKind {
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
    /// Media handling error
    #[from(MediaError)]
    Media(MediaError),
    /// Gemini API error
    #[from(GeminiError)]
    Gemini(GeminiError),
    /// TUI error
    #[cfg(feature = "tui")]
    #[from(TuiError)]
    Tui(TuiError),
}

/// Atelier error with kind discrimination.
///
/// # Examples
///
/// ```
/// use atelier_error::{AtelierResult, ConfigError};
///
/// fn might_fail() -> AtelierResult<()> {
///     Err(ConfigError::new("Missing field"))?
/// }
///
/// match might_fail() {
///     Ok(_) => println!("Success"),
///     Err(e) => println!("Error: {}", e),
/// }
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Atelier Error: {}", _0)]
pub struct AtelierError(Box<AtelierErrorKind>);

impl AtelierError {
    /// Create a new error from a kind.
    pub fn new(kind: AtelierErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &AtelierErrorKind {
        &self.0
    }
}

// Generic From implementation for any type that converts to AtelierErrorKind
impl<T> From<T> for AtelierError
where
    T: Into<AtelierErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Atelier operations.
///
/// # Examples
///
/// ```
/// use atelier_error::{AtelierResult, GeminiError, GeminiErrorKind};
///
/// fn fetch_data() -> AtelierResult<String> {
///     Err(GeminiError::new(GeminiErrorKind::MissingApiKey))?
/// }
/// ```
pub type AtelierResult<T> = std::result::Result<T, AtelierError>;
