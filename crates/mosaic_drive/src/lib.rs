//! Google Drive access for the Mosaic manifest builder.
//!
//! The [`DriveApi`] trait is the seam between the build pipeline and the
//! remote service. [`DriveClient`] implements it over HTTP, and
//! [`RetryingDriveApi`] wraps any implementation with bounded backoff for
//! transient failures. [`list_folder`] walks the continuation tokens of one
//! folder, and [`list_folders`] / [`resolve_folder_names`] fan out across
//! folders with bounded concurrency.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod api;
mod client;
mod lister;
mod query;
mod retry;

pub use api::DriveApi;
pub use client::{DEFAULT_ENDPOINT, DriveClient};
pub use lister::{list_folder, list_folders, resolve_folder_names};
pub use query::{FOLDER_FIELDS, LIST_FIELDS, MAX_PAGE_SIZE, media_query, redact_key};
pub use retry::{RetryPolicy, RetryingDriveApi};
