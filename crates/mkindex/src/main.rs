//! mkindex CLI - per-topic index pages for mkdocs sites.
//!
//! Provides commands for:
//! - `generate`: Write `docs/<topic>/index.md` for every eligible topic
//! - `list`: Show which topics get an index and why others are skipped

mod commands;
mod error;
mod output;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{GenerateArgs, ListArgs};
use output::Output;

/// mkindex - Topic index generator for mkdocs.
#[derive(Parser)]
#[command(name = "mkindex", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate topic index pages.
    Generate(GenerateArgs),
    /// List top-level topics and whether they get an index.
    List(ListArgs),
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    let verbose = matches!(&cli.command, Commands::Generate(args) if args.verbose);

    // --verbose enables INFO level, otherwise use RUST_LOG or default to WARN
    let filter = if verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Generate(args) => args.execute(),
        Commands::List(args) => args.execute(),
    };

    if let Err(err) = result {
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}
