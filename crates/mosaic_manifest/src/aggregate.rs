//! Manifest aggregation and ordering.

use mosaic_core::{DriveFile, FolderRef, MediaItem, UrlOptions, normalize};
use std::cmp::Reverse;
use std::collections::HashSet;
use tracing::{debug, warn};

/// The ordered list of media items written to `media.json`.
pub type Manifest = Vec<MediaItem>;

/// Merge per-folder listings into one ordered manifest.
///
/// Listings are concatenated in folder order and normalized. A file id seen
/// in an earlier folder is skipped, since a Drive file can have several
/// parents. The result is sorted newest first; see [`sort_newest_first`].
pub fn aggregate(listed: &[(FolderRef, Vec<DriveFile>)], opts: &UrlOptions) -> Manifest {
    let mut seen = HashSet::new();
    let mut items = Vec::with_capacity(listed.iter().map(|(_, files)| files.len()).sum());

    for (folder, files) in listed {
        for file in files {
            if !seen.insert(file.id.as_str()) {
                warn!(
                    file_id = %file.id,
                    folder_id = %folder.id,
                    "Skipping file already listed from another folder"
                );
                continue;
            }
            items.push(normalize(file, &folder.id, opts));
        }
    }

    sort_newest_first(&mut items);
    debug!(items = items.len(), "Aggregated manifest");
    items
}

/// Sort by `createdTime`, newest first.
///
/// Items without a parseable RFC 3339 timestamp go after all dated items. The
/// sort is stable, so undated items and equal timestamps keep their folder
/// and API order.
pub fn sort_newest_first(items: &mut [MediaItem]) {
    items.sort_by_key(|item| Reverse(item.created_at()));
}
