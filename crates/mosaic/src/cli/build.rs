//! Manifest build command handler.

use super::BuildArgs;
use mosaic_error::MosaicResult;
use mosaic_manifest::{BuildConfig, run_build};

/// Load the configuration, run the build and print a summary.
///
/// # Errors
///
/// Returns configuration, Drive API and file errors unchanged. Nothing is
/// written when the build fails.
pub async fn build(args: BuildArgs) -> MosaicResult<()> {
    let config = BuildConfig::load(&args.overrides())?;
    let report = run_build(&config).await?;

    println!(
        "Wrote {} items from {} folders to {}",
        report.items(),
        report.folders(),
        report.output().display()
    );
    if let Some(path) = report.folders_output() {
        println!("Wrote folder list to {}", path.display());
    }
    Ok(())
}
