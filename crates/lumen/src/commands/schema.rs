//! Schema command - Print or write the config JSON Schema

use crate::config::{write_schema, LUMEN_CONFIG_SCHEMA};
use clap::Args;
use std::path::PathBuf;

#[derive(Args)]
pub struct SchemaArgs {
    /// Write the schema under this project directory instead of printing it
    #[arg(long)]
    pub write: Option<PathBuf>,
}

pub fn run(args: SchemaArgs) {
    let Some(dir) = args.write else {
        println!("{LUMEN_CONFIG_SCHEMA}");
        return;
    };

    match write_schema(&dir) {
        Ok(path) => println!("Wrote {}", path.display()),
        Err(e) => {
            eprintln!("Failed to write schema: {e}");
            std::process::exit(1);
        }
    }
}
