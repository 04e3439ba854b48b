//! Whole-file JSON output.
//!
//! Output is written in two steps. [`stage_json`] serializes into a sibling
//! temp file, and [`StagedFile::commit`] renames it over the destination.
//! Readers see either the old file or the complete new one. A caller with
//! several outputs can stage all of them before committing any.

use mosaic_error::{JsonError, MosaicResult, StorageError, StorageErrorKind};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::{debug, instrument, warn};

/// Serialized JSON waiting next to its destination.
#[derive(Debug)]
#[must_use = "a staged file only reaches its destination through commit"]
pub struct StagedFile {
    temp: PathBuf,
    target: PathBuf,
}

/// Serialize `value` as indented JSON into a temp file beside `path`.
///
/// Parent directories are created. `path` itself is untouched until the
/// returned file is committed.
///
/// # Errors
///
/// Returns an error if serialization, directory creation or the write fails.
#[instrument(skip(path, value), fields(path = %path.display()))]
pub async fn stage_json<T>(path: &Path, value: &T) -> MosaicResult<StagedFile>
where
    T: Serialize + ?Sized,
{
    let mut data =
        serde_json::to_vec_pretty(value).map_err(|e| JsonError::serialize(path.display(), e))?;
    data.push(b'\n');

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent).await.map_err(|e| {
            StorageError::new(StorageErrorKind::DirectoryCreation(format!(
                "{}: {}",
                parent.display(),
                e
            )))
        })?;
    }

    let temp = temp_path_for(path);
    tokio::fs::write(&temp, &data).await.map_err(|e| {
        StorageError::new(StorageErrorKind::FileWrite(format!(
            "{}: {}",
            temp.display(),
            e
        )))
    })?;

    debug!(bytes = data.len(), temp = %temp.display(), "Staged JSON file");
    Ok(StagedFile {
        temp,
        target: path.to_path_buf(),
    })
}

impl StagedFile {
    /// Final destination.
    pub fn target(&self) -> &Path {
        &self.target
    }

    /// Rename the temp file over the destination.
    ///
    /// # Errors
    ///
    /// Returns an error if the rename fails. The temp file is removed.
    pub async fn commit(self) -> MosaicResult<()> {
        if let Err(e) = tokio::fs::rename(&self.temp, &self.target).await {
            let _ = tokio::fs::remove_file(&self.temp).await;
            return Err(StorageError::new(StorageErrorKind::FileWrite(format!(
                "rename {} to {}: {}",
                self.temp.display(),
                self.target.display(),
                e
            )))
            .into());
        }
        debug!(path = %self.target.display(), "Committed JSON file");
        Ok(())
    }

    /// Remove the temp file, leaving the destination as it was.
    pub async fn discard(self) {
        if let Err(e) = tokio::fs::remove_file(&self.temp).await {
            warn!(temp = %self.temp.display(), error = %e, "Failed to remove staged file");
        }
    }
}

fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn destination_untouched_until_commit() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("out").join("media.json");

        let staged = stage_json(&path, &vec![1, 2]).await.unwrap();
        assert!(!path.exists());
        assert_eq!(staged.target(), path.as_path());

        staged.commit().await.unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "[\n  1,\n  2\n]\n");
        assert!(!dir.path().join("out").join("media.json.tmp").exists());
    }

    #[tokio::test]
    async fn discard_keeps_previous_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("media.json");
        std::fs::write(&path, "old").unwrap();

        stage_json(&path, &["new"]).await.unwrap().discard().await;

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "old");
        assert!(!dir.path().join("media.json.tmp").exists());
    }
}
