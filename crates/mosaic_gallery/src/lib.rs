//! Gallery view-model for Mosaic manifests.
//!
//! The renderer reads `media.json` (and `folders.json` when there is one)
//! into a [`GalleryState`]. The state is passed explicitly and changed only
//! through its setters. Views such as [`render_text`] derive everything
//! they show from it.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod load;
mod render;
mod state;

pub use load::{load_gallery, read_folders, read_manifest};
pub use render::render_text;
pub use state::{
    Card, EMPTY_FOLDER_MESSAGE, EMPTY_MESSAGE, FolderChip, GalleryState, GalleryStatus,
    LOAD_FAILED_MESSAGE, Preview,
};
