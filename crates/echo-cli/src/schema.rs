//! # Schema Subcommand
//!
//! Writes the Draft 2020-12 JSON Schema for one record shape, to stdout or
//! a file.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use echo_schema::{json_schema, Shape};

/// Arguments for the schema subcommand.
#[derive(Args, Debug)]
pub struct SchemaArgs {
    /// Record shape to describe (`nested` or `flat`).
    #[arg(long)]
    pub shape: Shape,

    /// Write the schema here instead of stdout.
    #[arg(long, short)]
    pub output: Option<PathBuf>,
}

/// Execute the schema subcommand.
pub fn run_schema(args: &SchemaArgs) -> Result<u8> {
    let rendered = render_schema(args.shape)?;
    match &args.output {
        Some(path) => {
            std::fs::write(path, format!("{rendered}\n"))
                .with_context(|| format!("failed to write schema: {}", path.display()))?;
            tracing::info!(shape = %args.shape, path = %path.display(), "schema written");
        }
        None => println!("{rendered}"),
    }
    Ok(0)
}

/// Pretty-printed schema document for `shape`.
pub fn render_schema(shape: Shape) -> Result<String> {
    serde_json::to_string_pretty(&json_schema(shape)).context("failed to serialize schema")
}
