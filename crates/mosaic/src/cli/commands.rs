//! CLI command definitions.

use clap::{Args, Parser, Subcommand};
use mosaic_manifest::ConfigOverrides;
use std::path::PathBuf;

/// Mosaic - media gallery built from public Google Drive folders
#[derive(Parser, Debug)]
#[command(name = "mosaic")]
#[command(about = "Build and browse a media gallery from public Google Drive folders", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Command to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List the Drive folders and write media.json
    Build(BuildArgs),

    /// Print the gallery for an existing media.json
    Browse(BrowseArgs),
}

/// Options for `mosaic build`
#[derive(Args, Debug, Default)]
pub struct BuildArgs {
    /// Config file to layer over the built-in defaults
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Where to write media.json
    #[arg(long)]
    pub output: Option<PathBuf>,

    /// Folder list to scan when FOLDER_ID is not set
    #[arg(long)]
    pub folders: Option<PathBuf>,

    /// Also write the resolved folder list, with names, to this path
    #[arg(long)]
    pub folders_out: Option<PathBuf>,

    /// Number of folders listed at the same time
    #[arg(long)]
    pub concurrency: Option<usize>,
}

impl BuildArgs {
    /// Command-line values that override the config file.
    pub fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            config_file: self.config.clone(),
            output: self.output.clone(),
            folders_file: self.folders.clone(),
            folders_output: self.folders_out.clone(),
            concurrency: self.concurrency,
        }
    }
}

/// Options for `mosaic browse`
#[derive(Args, Debug)]
pub struct BrowseArgs {
    /// Manifest to display
    #[arg(long, default_value = "public/media.json")]
    pub manifest: PathBuf,

    /// Folder list used for the folder filter
    #[arg(long, default_value = "public/folders.json")]
    pub folders: PathBuf,

    /// Folder to show instead of the first one
    #[arg(long)]
    pub folder: Option<String>,

    /// Show items from every folder
    #[arg(long, conflicts_with = "folder")]
    pub all: bool,
}
