//! Drive API error types and retry classification.

/// Drive API error conditions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum DriveErrorKind {
    /// Non-success HTTP response from the listing or metadata endpoint
    #[display("Drive API error {} for {}: {}", status, url, body)]
    Api {
        /// HTTP status code
        status: u16,
        /// Request URL with the API key redacted
        url: String,
        /// Response body as returned by the API
        body: String,
    },
    /// Request could not be sent or the connection failed
    #[display("Drive API request failed: {}", _0)]
    Transport(String),
    /// Response body could not be decoded
    #[display("Failed to decode Drive API response: {}", _0)]
    Decode(String),
    /// The configured endpoint does not form a valid request URL
    #[display("Invalid Drive API URL: {}", _0)]
    InvalidUrl(String),
    /// The API handed back a continuation token it already returned
    #[display("Drive API repeated page token {} while listing folder {}", token, folder_id)]
    PaginationLoop {
        /// Folder being listed
        folder_id: String,
        /// The repeated token
        token: String,
    },
}

impl DriveErrorKind {
    /// Check if this error type should be retried.
    ///
    /// Transport failures and 408/429/5xx responses are transient. Every other
    /// status is permanent and fails the build immediately.
    pub fn is_retryable(&self) -> bool {
        match self {
            DriveErrorKind::Api { status, .. } => {
                matches!(*status, 408 | 429 | 500 | 502 | 503 | 504)
            }
            DriveErrorKind::Transport(_) => true,
            _ => false,
        }
    }
}

/// Drive error with source location tracking.
///
/// # Examples
///
/// ```
/// use mosaic_error::{DriveError, DriveErrorKind};
///
/// let err = DriveError::new(DriveErrorKind::Api {
///     status: 404,
///     url: "https://www.googleapis.com/drive/v3/files".to_string(),
///     body: "File not found".to_string(),
/// });
/// assert!(format!("{}", err).contains("404"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Drive Error: {} at line {} in {}", kind, line, file)]
pub struct DriveError {
    /// The kind of error that occurred
    pub kind: DriveErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl DriveError {
    /// Create a new DriveError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: DriveErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}

/// Result type for Drive API operations.
pub type DriveResult<T> = std::result::Result<T, DriveError>;

/// Trait for errors that support retry logic.
///
/// # Examples
///
/// ```
/// use mosaic_error::{DriveError, DriveErrorKind, RetryableError};
///
/// let err = DriveError::new(DriveErrorKind::Api {
///     status: 503,
///     url: "https://www.googleapis.com/drive/v3/files".to_string(),
///     body: "Service unavailable".to_string(),
/// });
///
/// assert!(err.is_retryable());
/// ```
pub trait RetryableError {
    /// Returns true if this error should trigger a retry.
    ///
    /// Transient errors like 503 (service unavailable), 429 (rate limit),
    /// or network failures should return true. Permanent errors like 403
    /// (forbidden) or 404 (not found) should return false.
    fn is_retryable(&self) -> bool;
}

impl RetryableError for DriveError {
    fn is_retryable(&self) -> bool {
        self.kind.is_retryable()
    }
}
