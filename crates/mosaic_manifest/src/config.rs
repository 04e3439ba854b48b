//! Build configuration.
//!
//! Settings are layered, later sources overriding earlier ones:
//! 1. Bundled defaults (include_str! from mosaic.toml)
//! 2. User config file (./mosaic.toml, or the file passed with `--config`)
//! 3. Environment: `API_KEY` and `FOLDER_ID`
//! 4. Command-line overrides
//!
//! The result is validated once into a [`BuildConfig`]; a missing API key
//! fails here, before any request is made.

use config::{Config, File, FileFormat};
use mosaic_core::UrlOptions;
use mosaic_drive::{MAX_PAGE_SIZE, RetryPolicy};
use mosaic_error::{ConfigError, MosaicError, MosaicResult};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, instrument};

const DEFAULT_CONFIG: &str = include_str!("../mosaic.toml");

/// Environment variable holding the Drive API key.
pub const API_KEY_VAR: &str = "API_KEY";

/// Environment variable selecting a single folder.
pub const FOLDER_ID_VAR: &str = "FOLDER_ID";

/// The environment variables the builder reads, captured once.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvSnapshot {
    /// Value of `API_KEY`
    pub api_key: Option<String>,
    /// Value of `FOLDER_ID`
    pub folder_id: Option<String>,
}

impl EnvSnapshot {
    /// Read `API_KEY` and `FOLDER_ID` from the process environment.
    pub fn from_process() -> Self {
        Self {
            api_key: std::env::var(API_KEY_VAR).ok(),
            folder_id: std::env::var(FOLDER_ID_VAR).ok(),
        }
    }
}

/// Command-line overrides, the highest precedence layer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigOverrides {
    /// Explicit config file; must exist when given
    pub config_file: Option<PathBuf>,
    /// Manifest output path
    pub output: Option<PathBuf>,
    /// Folder list input path
    pub folders_file: Option<PathBuf>,
    /// Where to write the resolved folder list
    pub folders_output: Option<PathBuf>,
    /// Folders listed at the same time
    pub concurrency: Option<usize>,
}

#[derive(Debug, Deserialize)]
struct BuildSettings {
    #[serde(default)]
    api_key: Option<String>,
    #[serde(default)]
    folder_id: Option<String>,
    folders_file: PathBuf,
    output: PathBuf,
    #[serde(default)]
    folders_output: Option<PathBuf>,
    endpoint: String,
    page_size: u32,
    thumbnail_width: u32,
    upscale_width: u32,
    concurrency: usize,
    request_timeout_secs: u64,
    retry: RetryPolicy,
}

/// Validated settings for one build run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildConfig {
    /// Drive API key
    pub api_key: String,
    /// Single folder to scan, overriding the folder list
    pub folder_id: Option<String>,
    /// Folder list read when `folder_id` is absent
    pub folders_file: PathBuf,
    /// Manifest output path
    pub output: PathBuf,
    /// Where to write the resolved folder list, if anywhere
    pub folders_output: Option<PathBuf>,
    /// Drive API base URL
    pub endpoint: String,
    /// `files.list` page size
    pub page_size: u32,
    /// Fallback thumbnail width
    pub thumbnail_width: u32,
    /// Width requested from Drive thumbnails
    pub upscale_width: u32,
    /// Folders listed at the same time
    pub concurrency: usize,
    /// Per-request timeout in seconds
    pub request_timeout_secs: u64,
    /// Retry policy for transient Drive failures
    pub retry: RetryPolicy,
}

impl BuildConfig {
    /// Load from the process environment and the default config file locations.
    ///
    /// # Errors
    ///
    /// Returns an error if a config file is unreadable, or if validation fails.
    pub fn load(overrides: &ConfigOverrides) -> MosaicResult<Self> {
        Self::from_sources(&EnvSnapshot::from_process(), overrides)
    }

    /// Load from an explicit environment snapshot.
    ///
    /// # Errors
    ///
    /// Returns an error if `API_KEY` is missing or blank, if `concurrency` is
    /// zero, or if `page_size` is outside `1..=1000`.
    #[instrument(skip(env, overrides))]
    pub fn from_sources(env: &EnvSnapshot, overrides: &ConfigOverrides) -> MosaicResult<Self> {
        debug!("Loading build configuration");

        let mut builder =
            Config::builder().add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml));

        builder = match &overrides.config_file {
            Some(path) => builder.add_source(File::from(path.as_path()).required(true)),
            None => builder.add_source(File::with_name("mosaic").required(false)),
        };

        let settings: BuildSettings = builder
            .set_override_option("api_key", env.api_key.clone())
            .and_then(|b| b.set_override_option("folder_id", env.folder_id.clone()))
            .and_then(|b| b.set_override_option("output", path_value(&overrides.output)))
            .and_then(|b| {
                b.set_override_option("folders_file", path_value(&overrides.folders_file))
            })
            .and_then(|b| {
                b.set_override_option("folders_output", path_value(&overrides.folders_output))
            })
            .and_then(|b| {
                b.set_override_option("concurrency", overrides.concurrency.map(|c| c as u64))
            })
            .and_then(|b| b.build())
            .map_err(|e| {
                MosaicError::from(ConfigError::new(format!(
                    "Failed to build configuration: {}",
                    e
                )))
            })?
            .try_deserialize()
            .map_err(|e| {
                MosaicError::from(ConfigError::new(format!(
                    "Failed to parse configuration: {}",
                    e
                )))
            })?;

        Self::validate(settings)
    }

    fn validate(settings: BuildSettings) -> MosaicResult<Self> {
        let api_key =
            non_blank(settings.api_key).ok_or_else(|| ConfigError::missing_env(API_KEY_VAR))?;

        if settings.concurrency == 0 {
            return Err(ConfigError::new("concurrency must be at least 1").into());
        }

        if settings.page_size == 0 || settings.page_size > MAX_PAGE_SIZE {
            return Err(ConfigError::new(format!(
                "page_size must be between 1 and {}, got {}",
                MAX_PAGE_SIZE, settings.page_size
            ))
            .into());
        }

        Ok(Self {
            api_key,
            folder_id: non_blank(settings.folder_id),
            folders_file: settings.folders_file,
            output: settings.output,
            folders_output: settings.folders_output,
            endpoint: settings.endpoint,
            page_size: settings.page_size,
            thumbnail_width: settings.thumbnail_width,
            upscale_width: settings.upscale_width,
            concurrency: settings.concurrency,
            request_timeout_secs: settings.request_timeout_secs,
            retry: settings.retry,
        })
    }

    /// Thumbnail sizing for the normalizer.
    pub fn url_options(&self) -> UrlOptions {
        UrlOptions {
            thumbnail_width: self.thumbnail_width,
            upscale_width: self.upscale_width,
        }
    }

    /// Per-request timeout.
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn path_value(path: &Option<PathBuf>) -> Option<String> {
    path.as_deref()
        .map(Path::to_string_lossy)
        .map(|p| p.into_owned())
}
