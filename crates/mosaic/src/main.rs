//! Mosaic CLI binary.
//!
//! - `mosaic build` lists the configured Drive folders and writes the manifest
//! - `mosaic browse` prints the gallery for an existing manifest

use clap::Parser;
use mosaic::cli::{Cli, Commands, browse, build};
use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    // API_KEY and FOLDER_ID may come from a local .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    mosaic::init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Build(args) => build(args).await,
        Commands::Browse(args) => browse(args).await,
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
