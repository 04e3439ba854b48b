//! Errors raised while assembling a build configuration.

/// A setting needed before any Drive request is missing or out of range.
///
/// Covers the API key, the folder source (`FOLDER_ID` or the folder list)
/// and numeric limits such as `concurrency` and `page_size`. A build never
/// starts with one of these outstanding.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Configuration Error: {} at line {} in {}", message, line, file)]
pub struct ConfigError {
    /// What is wrong and, where possible, how to fix it
    pub message: String,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl ConfigError {
    /// Create a configuration error at the caller's location.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let location = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: location.line(),
            file: location.file(),
        }
    }

    /// A required environment variable is unset or blank.
    ///
    /// # Examples
    ///
    /// ```
    /// use mosaic_error::ConfigError;
    ///
    /// let err = ConfigError::missing_env("API_KEY");
    /// assert_eq!(err.message, "API_KEY must be set in the environment.");
    /// ```
    #[track_caller]
    pub fn missing_env(var: &str) -> Self {
        Self::new(format!("{} must be set in the environment.", var))
    }
}
