//! Gallery browse command handler.

use super::BrowseArgs;
use mosaic_error::{MosaicResult, StorageError, StorageErrorKind};
use mosaic_gallery::{load_gallery, render_text};
use std::io::Write;
use tracing::warn;

/// Render the gallery to stdout.
pub async fn browse(args: BrowseArgs) -> MosaicResult<()> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    browse_into(&args, &mut out).await
}

/// Load the gallery, apply the folder selection and render it to `out`.
///
/// A manifest that fails to load is reported in the output, not as an error.
///
/// # Errors
///
/// Returns an error only if writing to `out` fails.
pub async fn browse_into<W: Write>(args: &BrowseArgs, out: &mut W) -> MosaicResult<()> {
    let mut state = load_gallery(&args.manifest, Some(args.folders.as_path())).await;

    if args.all {
        state.clear_selection();
    } else if let Some(id) = &args.folder
        && !state.select_folder(id)
    {
        warn!(folder = %id, "Unknown folder, keeping the default selection");
    }

    render_text(&state, out).map_err(|e| {
        StorageError::new(StorageErrorKind::FileWrite(format!("gallery output: {}", e)))
    })?;
    Ok(())
}
