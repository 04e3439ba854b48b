//! Core data types for the Mosaic gallery builder.
//!
//! This crate provides the records shared by the manifest builder and the
//! gallery renderer, and the pure mapping from a Drive file record to a
//! display-ready [`MediaItem`].

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod file;
mod folder;
mod media;
mod media_kind;
mod normalize;

pub use file::{DriveFile, DriveFileBuilder, FilePage};
pub use folder::FolderRef;
pub use media::{MediaItem, MediaItemBuilder};
pub use media_kind::MediaKind;
pub use normalize::{
    UrlOptions, download_url, fallback_thumbnail_url, normalize, thumbnail_url,
    upscale_thumbnail, view_url,
};
