//! Mosaic: a static media gallery fed by public Google Drive folders.
//!
//! A build step lists the images and videos in one or more publicly shared
//! Drive folders and writes them to `media.json`. The gallery reads that
//! file back and shows it, optionally filtered by folder.
//!
//! # Architecture
//!
//! - `mosaic_error` - Error types
//! - `mosaic_core` - Drive records, media items and URL normalization
//! - `mosaic_drive` - Drive API client, pagination and retry
//! - `mosaic_manifest` - Configuration, aggregation and manifest writing
//! - `mosaic_gallery` - Gallery state and text rendering
//!
//! This crate re-exports everything and ships the `mosaic` binary.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod cli;
mod logging;

pub use logging::init_logging;

pub use mosaic_core::*;
pub use mosaic_drive::*;
pub use mosaic_error::*;
pub use mosaic_gallery::*;
pub use mosaic_manifest::*;
