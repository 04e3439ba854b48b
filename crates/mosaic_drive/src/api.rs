//! Drive API trait definition.

use async_trait::async_trait;
use mosaic_core::{FilePage, FolderRef};
use mosaic_error::DriveResult;

/// The two Drive endpoints the manifest builder needs.
///
/// Implementations return one page per call and never follow continuation
/// tokens themselves; pagination lives in [`crate::list_folder`].
#[async_trait]
pub trait DriveApi: Send + Sync {
    /// List one page of non-trashed images and videos directly inside `folder_id`.
    async fn list_page(&self, folder_id: &str, page_token: Option<&str>) -> DriveResult<FilePage>;

    /// Fetch the id and name of a folder.
    async fn folder_metadata(&self, folder_id: &str) -> DriveResult<FolderRef>;
}
