//! xtask - Development tasks for todo

use clap::{Parser, Subcommand};
use std::fs;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "Development tasks for todo")]
struct Xtask {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate CLI documentation from clap definitions
    GenDocs {
        /// Where to write the reference (defaults to docs/cli/reference.md)
        #[arg(long)]
        out: Option<PathBuf>,
    },
}

fn main() {
    let args = Xtask::parse();
    match args.command {
        Commands::GenDocs { out } => generate_cli_docs(out),
    }
}

fn generate_cli_docs(out: Option<PathBuf>) {
    let markdown = clap_markdown::help_markdown::<todo::cli::Cli>();

    let output_path = out.unwrap_or_else(|| PathBuf::from("docs/cli/reference.md"));
    if let Some(parent) = output_path.parent() {
        fs::create_dir_all(parent).expect("Failed to create docs directory");
    }
    fs::write(&output_path, markdown).expect("Failed to write CLI reference");

    println!("Generated CLI documentation at {}", output_path.display());
}
