//! Loading manifests into gallery state.

use crate::GalleryState;
use mosaic_core::{FolderRef, MediaItem};
use mosaic_error::{GalleryError, GalleryErrorKind};
use std::path::Path;
use tracing::{debug, instrument, warn};

/// Load the manifest and the optional folder list together.
///
/// Both reads run concurrently and both finish before the state is built.
/// This never fails: an unreadable manifest yields a state with
/// [`crate::GalleryStatus::LoadFailed`], and an unreadable folder list
/// disables the folder filter.
#[instrument(skip_all, fields(manifest = %manifest.display()))]
pub async fn load_gallery(manifest: &Path, folders: Option<&Path>) -> GalleryState {
    let (media, folders) = tokio::join!(read_manifest(manifest), read_folders(folders));

    match media {
        Ok(media) => {
            debug!(items = media.len(), folders = folders.len(), "Loaded gallery");
            GalleryState::new(media, folders)
        }
        Err(e) => {
            warn!(error = %e, "Failed to load manifest");
            GalleryState::failed(e.kind.to_string())
        }
    }
}

/// Read and parse `media.json`.
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not an array of items.
pub async fn read_manifest(path: &Path) -> Result<Vec<MediaItem>, GalleryError> {
    let bytes = tokio::fs::read(path).await.map_err(|e| {
        GalleryError::new(GalleryErrorKind::ManifestRead {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    })?;

    serde_json::from_slice(&bytes).map_err(|e| {
        GalleryError::new(GalleryErrorKind::ManifestParse {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    })
}

/// Read `folders.json`, treating a missing or invalid file as no folders.
pub async fn read_folders(path: Option<&Path>) -> Vec<FolderRef> {
    let Some(path) = path else {
        return Vec::new();
    };

    match tokio::fs::read(path).await {
        Ok(bytes) => serde_json::from_slice(&bytes).unwrap_or_else(|e| {
            warn!(path = %path.display(), error = %e, "Ignoring invalid folder list");
            Vec::new()
        }),
        Err(e) => {
            debug!(path = %path.display(), error = %e, "No folder list");
            Vec::new()
        }
    }
}
