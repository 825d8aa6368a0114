//! Media handling error types.

/// Media-specific error conditions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum MediaErrorKind {
    /// Failed to read a source file from disk
    #[display("Failed to read source file {}: {}", path, message)]
    Read {
        /// Path that failed to read
        path: String,
        /// Underlying I/O error message
        message: String,
    },
    /// File extension does not map to a supported MIME type
    #[display("Unsupported media type for file: {}", _0)]
    UnsupportedType(String),
    /// Base64 decoding failed
    #[display("Base64 decode error: {}", _0)]
    Base64Decode(String),
    /// Failed to write a result payload to disk
    #[display("Failed to write output file {}: {}", path, message)]
    Write {
        /// Path that failed to write
        path: String,
        /// Underlying I/O error message
        message: String,
    },
}

/// Media error with source location tracking.
///
/// # Examples
///
/// ```
/// use atelier_error::{MediaError, MediaErrorKind};
///
/// let err = MediaError::new(MediaErrorKind::UnsupportedType("plan.svg".to_string()));
/// assert!(format!("{}", err).contains("Unsupported"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Media Error: {} at line {} in {}", kind, line, file)]
pub struct MediaError {
    /// The kind of error that occurred
    pub kind: MediaErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl MediaError {
    /// Create a new MediaError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: MediaErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
