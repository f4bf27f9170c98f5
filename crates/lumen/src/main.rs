//! # lumen
//!
//! Lumen - Accessible-content linting for JSX documents.
//!
//! ## Name Origin
//!
//! **Lumen** is the unit of light a source gives off. A screen reader can only
//! announce what an element gives off to it; this tool measures that.
//!
//! Documents are JSX ASTs serialized as JSON by a host parser (see
//! `lumen_relief`). Set `LUMEN_LOG=debug` for engine logs on stderr.

mod commands;
mod config;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "lumen")]
#[command(about = "Accessible-content linting for JSX documents", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Lint serialized JSX documents
    #[command(visible_alias = "patina")]
    Lint(commands::lint::LintArgs),

    /// Print the JSON Schema of lumen.config.json
    Schema(commands::schema::SchemaArgs),
}

/// Log to stderr, filtered by `LUMEN_LOG` (default: warn)
fn init_logging() {
    let filter = EnvFilter::try_from_env("LUMEN_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();
}

fn main() {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Lint(args) => commands::lint::run(args),
        Commands::Schema(args) => commands::schema::run(args),
    }
}
