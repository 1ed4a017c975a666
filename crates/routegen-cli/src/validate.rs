//! # Validate Subcommand
//!
//! Checks a venue catalog file against the full rule set and reports
//! every violation in one pass.
//!
//! ## Commands
//!
//! - `routegen validate --input <FILE>` - validate and summarize the
//!   catalog.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use routegen_core::{FOOD_GROUP_COUNT, TIME_SLOT_COUNT};

use crate::load_catalog;

/// Arguments for the `routegen validate` subcommand.
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Path to the venue catalog JSON file.
    #[arg(long, short)]
    pub input: PathBuf,
}

/// Execute the validate subcommand.
///
/// Returns exit code 0 when the catalog is valid and 1 when violations
/// were found.
pub fn run_validate(args: &ValidateArgs) -> Result<u8> {
    tracing::info!(input = %args.input.display(), "validating venue catalog");

    match load_catalog(&args.input)? {
        Ok(catalog) => {
            println!("OK: valid venue catalog: {}", args.input.display());
            println!("  Groups: {FOOD_GROUP_COUNT}");
            println!("  Pools:  {}", FOOD_GROUP_COUNT * TIME_SLOT_COUNT);
            println!("  Venues: {}", catalog.venue_count());
            Ok(0)
        }
        Err(err) => {
            eprintln!("{err}");
            Ok(1)
        }
    }
}
