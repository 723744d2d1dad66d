//! # echo-lca CLI entry point
//!
//! Parses command-line arguments and dispatches to subcommand handlers.

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use echo_cli::schema::{run_schema, SchemaArgs};
use echo_cli::validate::{run_validate, ValidateArgs};

/// ECHO lifecycle-carbon record toolkit.
///
/// Validates building life-cycle assessment records in the nested or flat
/// shape and exports the matching JSON Schema documents.
#[derive(Parser, Debug)]
#[command(name = "echo-lca", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Validate a payload file as an ECHO record.
    Validate(ValidateArgs),

    /// Export the JSON Schema for a record shape.
    Schema(SchemaArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // RUST_LOG wins over the -v count when set.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!("echo-lca starting");

    let result = match cli.command {
        Commands::Validate(args) => run_validate(&args),
        Commands::Schema(args) => run_schema(&args),
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            eprintln!("error: {e:#}");
            ExitCode::from(2)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use echo_cli::validate::{OutputFormat, ShapeSelection};
    use echo_schema::Shape;
    use std::path::PathBuf;

    #[test]
    fn cli_parse_validate_defaults() {
        let cli = Cli::try_parse_from(["echo-lca", "validate", "record.json"]).unwrap();
        let Commands::Validate(args) = cli.command else {
            panic!("expected validate");
        };
        assert_eq!(args.file, PathBuf::from("record.json"));
        assert_eq!(args.shape, ShapeSelection::Auto);
        assert_eq!(args.format, OutputFormat::Text);
    }

    #[test]
    fn cli_parse_validate_options() {
        let cli = Cli::try_parse_from([
            "echo-lca", "-vv", "validate", "record.yaml", "--shape", "flat", "--format", "json",
        ])
        .unwrap();
        assert_eq!(cli.verbose, 2);
        let Commands::Validate(args) = cli.command else {
            panic!("expected validate");
        };
        assert_eq!(args.shape, ShapeSelection::Flat);
        assert_eq!(args.format, OutputFormat::Json);
    }

    #[test]
    fn cli_parse_validate_rejects_unknown_shape() {
        assert!(Cli::try_parse_from(["echo-lca", "validate", "r.json", "--shape", "tree"]).is_err());
    }

    #[test]
    fn cli_parse_schema() {
        let cli = Cli::try_parse_from(["echo-lca", "schema", "--shape", "nested", "-o", "out.json"])
            .unwrap();
        let Commands::Schema(args) = cli.command else {
            panic!("expected schema");
        };
        assert_eq!(args.shape, Shape::Nested);
        assert_eq!(args.output, Some(PathBuf::from("out.json")));
    }

    #[test]
    fn cli_parse_schema_requires_shape() {
        assert!(Cli::try_parse_from(["echo-lca", "schema"]).is_err());
        assert!(Cli::try_parse_from(["echo-lca", "schema", "--shape", "auto"]).is_err());
    }
}
