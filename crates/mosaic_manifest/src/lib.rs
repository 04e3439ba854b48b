//! Manifest building for the Mosaic gallery.
//!
//! This crate turns a [`BuildConfig`] into `media.json`:
//!
//! 1. [`resolve_folders`] picks the folders (`FOLDER_ID` or the folder list)
//! 2. missing folder names are looked up through the Drive API
//! 3. every folder is listed, a few at a time
//! 4. [`aggregate`] normalizes, de-duplicates and sorts the records
//! 5. [`stage_json`] writes the outputs beside their destinations and
//!    [`StagedFile::commit`] renames them into place
//!
//! # Example
//!
//! ```no_run
//! use mosaic_manifest::{BuildConfig, ConfigOverrides, run_build};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = BuildConfig::load(&ConfigOverrides::default())?;
//! let report = run_build(&config).await?;
//! println!("Wrote {} items", report.items());
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod aggregate;
mod config;
mod folders;
mod pipeline;
mod writer;

pub use aggregate::{Manifest, aggregate, sort_newest_first};
pub use config::{API_KEY_VAR, BuildConfig, ConfigOverrides, EnvSnapshot, FOLDER_ID_VAR};
pub use folders::{read_folder_list, resolve_folders};
pub use pipeline::{BuildReport, build_manifest, run_build};
pub use writer::{StagedFile, stage_json};
