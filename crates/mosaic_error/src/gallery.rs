//! Gallery loading error types.

/// Gallery loading error conditions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum GalleryErrorKind {
    /// Manifest file could not be read
    #[display("Failed to read manifest {}: {}", path, message)]
    ManifestRead {
        /// Manifest path
        path: String,
        /// Underlying I/O message
        message: String,
    },
    /// Manifest file is not a JSON array of media items
    #[display("Invalid manifest {}: {}", path, message)]
    ManifestParse {
        /// Manifest path
        path: String,
        /// Underlying parse message
        message: String,
    },
}

/// Gallery error with source location tracking.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Gallery Error: {} at line {} in {}", kind, line, file)]
pub struct GalleryError {
    /// The kind of error that occurred
    pub kind: GalleryErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl GalleryError {
    /// Create a new GalleryError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: GalleryErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
