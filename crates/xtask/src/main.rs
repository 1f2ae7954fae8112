//! Development tasks for the turnable workspace
//!
//! This binary provides development utilities using the cargo-xtask pattern.
//! Run with: `cargo xtask <command>`

mod commands;
mod dirs;

use anyhow::Result;
use clap::Parser;
use commands::{BuildLevel, InspectMap};

/// Development tasks for turnable
#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "Development tools for turnable levels", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Parser)]
enum Command {
    /// Print the layers, objects and properties of a Tiled map
    InspectMap(InspectMap),

    /// Build a level through the level factory and summarize it
    BuildLevel(BuildLevel),
}

fn main() -> Result<()> {
    // Load .env file if it exists (for TURNABLE_DATA_DIR and RUST_LOG)
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::InspectMap(cmd) => cmd.execute(),
        Command::BuildLevel(cmd) => cmd.execute(),
    }
}
