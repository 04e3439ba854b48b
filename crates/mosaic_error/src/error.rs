//! Top-level error wrapper types.

use crate::{ConfigError, DriveError, GalleryError, JsonError, StorageError};

/// Every error a Mosaic operation can surface.
///
/// # Examples
///
/// ```
/// use mosaic_error::{ConfigError, MosaicError};
///
/// let err: MosaicError = ConfigError::new("API_KEY must be set").into();
/// assert!(format!("{}", err).contains("Configuration Error"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum MosaicErrorKind {
    /// Missing or invalid configuration
    #[from(ConfigError)]
    Config(ConfigError),
    /// Remote Drive API failure
    #[from(DriveError)]
    Drive(DriveError),
    /// JSON serialization/deserialization error
    #[from(JsonError)]
    Json(JsonError),
    /// Manifest or folder-list file I/O error
    #[from(StorageError)]
    Storage(StorageError),
    /// Gallery loading error
    #[from(GalleryError)]
    Gallery(GalleryError),
}

/// Mosaic error with kind discrimination.
///
/// # Examples
///
/// ```
/// use mosaic_error::{ConfigError, MosaicErrorKind, MosaicResult};
///
/// fn might_fail() -> MosaicResult<()> {
///     Err(ConfigError::new("No folders configured"))?
/// }
///
/// let err = might_fail().unwrap_err();
/// assert!(matches!(err.kind(), MosaicErrorKind::Config(_)));
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Mosaic Error: {}", _0)]
pub struct MosaicError(Box<MosaicErrorKind>);

impl MosaicError {
    /// Create a new error from a kind.
    pub fn new(kind: MosaicErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &MosaicErrorKind {
        &self.0
    }
}

// Generic From implementation for any type that converts to MosaicErrorKind
impl<T> From<T> for MosaicError
where
    T: Into<MosaicErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Mosaic operations.
pub type MosaicResult<T> = std::result::Result<T, MosaicError>;
