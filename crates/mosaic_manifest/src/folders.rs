//! Folder configuration resolution.

use crate::BuildConfig;
use mosaic_core::FolderRef;
use mosaic_error::{ConfigError, MosaicResult};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Decide which folders to scan.
///
/// `FOLDER_ID` wins when set. Otherwise the folder list file is read; it must
/// be a non-empty JSON array of `{"id", "name"?}` objects.
///
/// # Errors
///
/// Returns a [`ConfigError`] when neither source yields at least one folder,
/// or when an entry has a blank id.
#[instrument(skip(config))]
pub async fn resolve_folders(config: &BuildConfig) -> MosaicResult<Vec<FolderRef>> {
    if let Some(id) = &config.folder_id {
        info!(folder_id = %id, "Using single folder from FOLDER_ID");
        return Ok(vec![FolderRef::new(id.clone())]);
    }

    let folders = read_folder_list(&config.folders_file).await?;
    info!(
        folders = folders.len(),
        path = %config.folders_file.display(),
        "Using folder list"
    );
    Ok(folders)
}

/// Read and check a folder list file.
pub async fn read_folder_list(path: &Path) -> MosaicResult<Vec<FolderRef>> {
    let bytes = tokio::fs::read(path).await.map_err(|e| {
        ConfigError::new(format!(
            "Set FOLDER_ID or provide a folder list at {}: {}",
            path.display(),
            e
        ))
    })?;

    let folders: Vec<FolderRef> = serde_json::from_slice(&bytes).map_err(|e| {
        ConfigError::new(format!(
            "Folder list {} is not a JSON array of {{id, name}} objects: {}",
            path.display(),
            e
        ))
    })?;

    if folders.is_empty() {
        return Err(ConfigError::new(format!(
            "Folder list {} is empty; set FOLDER_ID or add folders",
            path.display()
        ))
        .into());
    }

    if let Some(index) = folders.iter().position(|f| f.id.trim().is_empty()) {
        return Err(ConfigError::new(format!(
            "Folder list {} entry {} has a blank id",
            path.display(),
            index
        ))
        .into());
    }

    debug!(folders = folders.len(), "Read folder list");
    Ok(folders
        .into_iter()
        .map(|f| FolderRef {
            id: f.id.trim().to_string(),
            name: f.name,
        })
        .collect())
}
