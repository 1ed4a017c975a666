//! # routegen CLI entry point
//!
//! Parses command-line arguments and dispatches to subcommand handlers.

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use routegen_cli::generate::{run_generate, GenerateArgs};
use routegen_cli::validate::{run_validate, ValidateArgs};

/// Deterministic daily route generator for the Banthat Thong food guide.
///
/// Validates the venue source catalog and derives the day's routes (one
/// venue per group and time slot) from the calendar date, producing the
/// static JSON asset embedded by the site build.
#[derive(Parser, Debug)]
#[command(name = "routegen", version, about)]
struct Cli {
    /// Enable verbose output. Repeat for more detail (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Validate a venue catalog file against the full rule set.
    Validate(ValidateArgs),

    /// Generate the routes asset for a date from a validated catalog.
    Generate(GenerateArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Route diagnostics to stderr; stdout carries command output only.
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Validate(args) => run_validate(&args),
        Commands::Generate(args) => run_generate(&args),
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(err) => {
            tracing::error!("{err:#}");
            ExitCode::from(1)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_parse_validate() {
        let cli = Cli::try_parse_from(["routegen", "validate", "--input", "catalog.json"]).unwrap();
        match cli.command {
            Commands::Validate(args) => {
                assert_eq!(args.input.to_str(), Some("catalog.json"));
            }
            other => panic!("Expected Validate, got: {other:?}"),
        }
    }

    #[test]
    fn cli_parse_generate_with_all_options() {
        let cli = Cli::try_parse_from([
            "routegen",
            "generate",
            "--input",
            "catalog.json",
            "--date",
            "2026-03-15",
            "--output",
            "routes.json",
            "--pretty",
        ])
        .unwrap();
        match cli.command {
            Commands::Generate(args) => {
                assert_eq!(args.input.to_str(), Some("catalog.json"));
                assert_eq!(args.date, Some("2026-03-15".parse().unwrap()));
                assert_eq!(args.output.as_deref().and_then(|p| p.to_str()), Some("routes.json"));
                assert!(args.pretty);
            }
            other => panic!("Expected Generate, got: {other:?}"),
        }
    }

    #[test]
    fn cli_parse_generate_minimal() {
        let cli =
            Cli::try_parse_from(["routegen", "generate", "--input", "catalog.json"]).unwrap();
        match cli.command {
            Commands::Generate(args) => {
                assert_eq!(args.date, None);
                assert_eq!(args.output, None);
                assert!(!args.pretty);
            }
            other => panic!("Expected Generate, got: {other:?}"),
        }
    }

    #[test]
    fn cli_parse_rejects_malformed_date() {
        let result = Cli::try_parse_from([
            "routegen",
            "generate",
            "--input",
            "catalog.json",
            "--date",
            "2026-13-99",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn cli_parse_requires_input() {
        assert!(Cli::try_parse_from(["routegen", "validate"]).is_err());
        assert!(Cli::try_parse_from(["routegen", "generate"]).is_err());
    }

    #[test]
    fn cli_parse_requires_subcommand() {
        assert!(Cli::try_parse_from(["routegen"]).is_err());
        assert!(Cli::try_parse_from(["routegen", "frobnicate"]).is_err());
    }

    #[test]
    fn cli_parse_verbosity_counts() {
        let cli =
            Cli::try_parse_from(["routegen", "-vv", "validate", "--input", "catalog.json"])
                .unwrap();
        assert_eq!(cli.verbose, 2);

        let cli = Cli::try_parse_from(["routegen", "validate", "--input", "c.json"]).unwrap();
        assert_eq!(cli.verbose, 0);
    }
}
