//! Paginated folder listing and folder name resolution.

use crate::DriveApi;
use futures::{StreamExt, TryStreamExt, stream};
use mosaic_core::{DriveFile, FolderRef};
use mosaic_error::{DriveError, DriveErrorKind, DriveResult};
use std::collections::HashSet;
use tracing::{debug, info, instrument, warn};

/// Every image and video record directly inside `folder_id`, across all pages.
///
/// Pages are fetched one after another, each with the token from the page
/// before it. Records keep the API's order. Trashed records and records that
/// are neither images nor videos are dropped even if the API returns them.
///
/// # Errors
///
/// The first failed page aborts the listing. A continuation token that
/// repeats fails with [`DriveErrorKind::PaginationLoop`].
#[instrument(skip(api))]
pub async fn list_folder<A>(api: &A, folder_id: &str) -> DriveResult<Vec<DriveFile>>
where
    A: DriveApi + ?Sized,
{
    let mut files = Vec::new();
    let mut seen_tokens = HashSet::new();
    let mut page_token: Option<String> = None;
    let mut pages = 0usize;

    loop {
        let page = api.list_page(folder_id, page_token.as_deref()).await?;
        pages += 1;
        debug!(page = pages, records = page.files.len(), "Fetched page");

        let next = page.continuation().map(str::to_string);

        for file in page.files {
            if file.is_listable_media() {
                files.push(file);
            } else {
                warn!(
                    file_id = %file.id,
                    mime_type = %file.mime_type,
                    trashed = file.trashed,
                    "Dropping record outside the media filter"
                );
            }
        }

        match next {
            Some(token) => {
                if !seen_tokens.insert(token.clone()) {
                    return Err(DriveError::new(DriveErrorKind::PaginationLoop {
                        folder_id: folder_id.to_string(),
                        token,
                    }));
                }
                page_token = Some(token);
            }
            None => break,
        }
    }

    info!(pages, files = files.len(), "Listed folder");
    Ok(files)
}

/// List every folder, at most `concurrency` at a time.
///
/// The result is in the same order as `folders`, whatever order the listings
/// finish in. The first failure cancels the rest.
#[instrument(skip(api, folders), fields(folders = folders.len()))]
pub async fn list_folders<A>(
    api: &A,
    folders: &[FolderRef],
    concurrency: usize,
) -> DriveResult<Vec<(FolderRef, Vec<DriveFile>)>>
where
    A: DriveApi + ?Sized,
{
    stream::iter(folders.iter().cloned())
        .map(|folder| async move {
            let files = list_folder(api, &folder.id).await?;
            Ok::<_, DriveError>((folder, files))
        })
        .buffered(concurrency.max(1))
        .try_collect()
        .await
}

/// Fill in missing folder names from the Drive API.
///
/// Folders that already have a name are passed through without a request.
/// Lookups run concurrently and the output keeps the input order.
///
/// # Errors
///
/// Any failed lookup fails the whole call; the error carries the request URL,
/// which names the folder id, plus the status and body.
#[instrument(skip(api, folders), fields(folders = folders.len()))]
pub async fn resolve_folder_names<A>(
    api: &A,
    folders: Vec<FolderRef>,
    concurrency: usize,
) -> DriveResult<Vec<FolderRef>>
where
    A: DriveApi + ?Sized,
{
    stream::iter(folders)
        .map(|folder| async move {
            if !folder.needs_name() {
                return Ok(folder);
            }
            let meta = api.folder_metadata(&folder.id).await?;
            debug!(folder_id = %folder.id, name = ?meta.name, "Resolved folder name");
            Ok::<_, DriveError>(FolderRef {
                id: folder.id,
                name: meta.name.or(folder.name),
            })
        })
        .buffered(concurrency.max(1))
        .try_collect()
        .await
}
