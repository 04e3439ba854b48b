//! Error types for the Mosaic gallery builder.
//!
//! This crate provides the error types shared by every Mosaic crate.
//!
//! # Error Hierarchy
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - All errors use `#[track_caller]` for automatic location capture
//!
//! # Examples
//!
//! ```
//! use mosaic_error::{ConfigError, MosaicResult};
//!
//! fn load() -> MosaicResult<String> {
//!     Err(ConfigError::new("API_KEY must be set"))?
//! }
//!
//! match load() {
//!     Ok(key) => println!("Got: {}", key),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod drive;
mod error;
mod gallery;
mod json;
mod storage;

pub use config::ConfigError;
pub use drive::{DriveError, DriveErrorKind, DriveResult, RetryableError};
pub use error::{MosaicError, MosaicErrorKind, MosaicResult};
pub use gallery::{GalleryError, GalleryErrorKind};
pub use json::JsonError;
pub use storage::{StorageError, StorageErrorKind};
