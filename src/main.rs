mod commands;
mod manifest;
mod report;
mod validation;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "source-manifest",
    version,
    about = "Generate and validate SHA-256 source manifests for archive mirrors"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Hash every .zip archive under a directory and write a source manifest
    Generate {
        /// Directory to search for archives
        #[arg(long, default_value = ".")]
        root: PathBuf,
        /// Manifest file to write
        #[arg(long, default_value = "output.source")]
        output: PathBuf,
    },
    /// Validate the format of an existing source manifest
    Check {
        /// Manifest file to read
        #[arg(long, default_value = "output.source")]
        manifest: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Generate { root, output } => commands::generate::run(&root, &output),
        Commands::Check { manifest } => commands::check::run(&manifest),
    };
    if let Err(e) = result {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}
