//! navgen CLI - navbar generator for static documentation sites.
//!
//! Provides commands for:
//! - `nav`: Print the navbar generated from the docs source directory
//! - `manifest`: Print the full site configuration object for the framework

mod commands;
mod error;
mod output;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{ManifestArgs, NavArgs};
use output::Output;

/// navgen - navbar generator for static documentation sites.
#[derive(Parser)]
#[command(name = "navgen", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the navbar generated from the source directory.
    Nav(NavArgs),
    /// Print the full site manifest (settings, plugins and navbar).
    Manifest(ManifestArgs),
}

impl Commands {
    fn verbose(&self) -> bool {
        match self {
            Self::Nav(args) => args.source.verbose,
            Self::Manifest(args) => args.source.verbose,
        }
    }
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    // --verbose enables INFO level, otherwise use RUST_LOG or default to ERROR
    let filter = if cli.command.verbose() {
        EnvFilter::new("info")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Nav(args) => args.execute(),
        Commands::Manifest(args) => args.execute(),
    };

    if let Err(err) = result {
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}
