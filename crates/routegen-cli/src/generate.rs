//! # Generate Subcommand
//!
//! Produces the routes asset for a date: validate the catalog, run the
//! seeded selection, and either write the JSON file for the site build or
//! print it to stdout.
//!
//! The reported digest always refers to the canonical form, so it
//! identifies the routes content even when `--pretty` changes the bytes
//! on disk.
//!
//! ## Commands
//!
//! - `routegen generate --input <FILE> [--date YYYY-MM-DD]
//!   [--output <FILE>] [--pretty]` - generate the routes for a date.

use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::{NaiveDate, Utc};
use clap::Args;
use routegen_core::{canonical_json, content_digest, generate_daily_routes};

use crate::load_catalog;

/// Arguments for the `routegen generate` subcommand.
#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Path to the venue catalog JSON file.
    #[arg(long, short)]
    pub input: PathBuf,

    /// Calendar date to generate for (YYYY-MM-DD). Defaults to the
    /// current UTC date.
    #[arg(long)]
    pub date: Option<NaiveDate>,

    /// Write the routes JSON to this file instead of stdout.
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// Emit human-readable JSON instead of canonical bytes.
    #[arg(long)]
    pub pretty: bool,
}

/// Execute the generate subcommand.
///
/// Returns exit code 0 on success and 1 when the catalog fails
/// validation. Nothing is written on a validation failure.
pub fn run_generate(args: &GenerateArgs) -> Result<u8> {
    let catalog = match load_catalog(&args.input)? {
        Ok(catalog) => catalog,
        Err(err) => {
            eprintln!("{err}");
            return Ok(1);
        }
    };

    let date = args.date.unwrap_or_else(|| Utc::now().date_naive());
    tracing::info!(%date, input = %args.input.display(), "generating daily routes");

    let routes = generate_daily_routes(&catalog, date);
    let digest = content_digest(&routes).context("failed to digest generated routes")?;

    let rendered = if args.pretty {
        let mut text =
            serde_json::to_string_pretty(&routes).context("failed to serialize routes")?;
        text.push('\n');
        text
    } else {
        canonical_json(&routes).context("failed to canonicalize routes")?
    };

    match &args.output {
        Some(path) => {
            std::fs::write(path, &rendered)
                .with_context(|| format!("failed to write routes file: {}", path.display()))?;
            println!("OK: generated routes for {date}");
            println!("  Digest: sha256:{digest}");
            println!("  Output: {}", path.display());
        }
        None => {
            tracing::debug!(%digest, "routes to stdout");
            println!("{rendered}");
        }
    }
    Ok(0)
}
