//! The manifest build pipeline.

use crate::{BuildConfig, aggregate, resolve_folders, stage_json};
use derive_getters::Getters;
use mosaic_drive::{DriveApi, DriveClient, RetryingDriveApi, list_folders, resolve_folder_names};
use mosaic_error::MosaicResult;
use std::path::PathBuf;
use tracing::{info, instrument};

/// Outcome of a successful build, for reporting.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct BuildReport {
    /// Items written to the manifest
    items: usize,
    /// Folders scanned
    folders: usize,
    /// Manifest path
    output: PathBuf,
    /// Folder list path, when one was written
    folders_output: Option<PathBuf>,
}

/// Run a build against the real Drive API.
///
/// # Errors
///
/// Fails on the first configuration, API or I/O error. Nothing is written
/// unless every folder listed successfully.
pub async fn run_build(config: &BuildConfig) -> MosaicResult<BuildReport> {
    let client = DriveClient::new(
        config.api_key.clone(),
        config.endpoint.clone(),
        config.page_size,
        config.request_timeout(),
    )?;
    let api = RetryingDriveApi::new(client, config.retry);
    build_manifest(&api, config).await
}

/// Resolve folders, fetch every listing, then aggregate and write.
///
/// The manifest is written only after all folder listings have finished.
/// Both outputs are staged before either is renamed into place, so a failed
/// folder-list write leaves the previous manifest alone.
#[instrument(skip(api, config), fields(output = %config.output.display()))]
pub async fn build_manifest<A>(api: &A, config: &BuildConfig) -> MosaicResult<BuildReport>
where
    A: DriveApi + ?Sized,
{
    let folders = resolve_folders(config).await?;
    let folders = resolve_folder_names(api, folders, config.concurrency).await?;

    let listed = list_folders(api, &folders, config.concurrency).await?;
    let manifest = aggregate(&listed, &config.url_options());

    let staged_manifest = stage_json(&config.output, &manifest).await?;
    if let Some(path) = &config.folders_output {
        let staged_folders = match stage_json(path, &folders).await {
            Ok(staged) => staged,
            Err(e) => {
                staged_manifest.discard().await;
                return Err(e);
            }
        };
        if let Err(e) = staged_folders.commit().await {
            staged_manifest.discard().await;
            return Err(e);
        }
    }
    staged_manifest.commit().await?;

    info!(
        items = manifest.len(),
        folders = folders.len(),
        "Wrote manifest"
    );

    Ok(BuildReport {
        items: manifest.len(),
        folders: folders.len(),
        output: config.output.clone(),
        folders_output: config.folders_output.clone(),
    })
}
