//! Manifest and folder-list serialization errors.

use std::fmt::Display;

/// `media.json` or `folders.json` could not be encoded.
///
/// Decoding problems are reported elsewhere: a bad folder list is a
/// configuration error and a bad manifest is a gallery error.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("JSON Error: {} at line {} in {}", message, line, file)]
pub struct JsonError {
    /// Target file and serializer message
    pub message: String,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl JsonError {
    /// Create a JSON error at the caller's location.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let location = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: location.line(),
            file: location.file(),
        }
    }

    /// Encoding the value destined for `target` failed.
    ///
    /// # Examples
    ///
    /// ```
    /// use mosaic_error::JsonError;
    ///
    /// let err = JsonError::serialize("public/media.json", "key must be a string");
    /// assert_eq!(err.message, "Failed to serialize public/media.json: key must be a string");
    /// ```
    #[track_caller]
    pub fn serialize(target: impl Display, source: impl Display) -> Self {
        Self::new(format!("Failed to serialize {}: {}", target, source))
    }
}
