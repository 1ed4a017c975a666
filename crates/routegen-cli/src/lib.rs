//! # routegen-cli - Build-Pipeline Commands
//!
//! Library surface of the `routegen` binary: one module per subcommand.
//! Each handler is a thin sequencing layer over `routegen-core` calls
//! (read, validate, generate, write); all route semantics live in the
//! core crate.
//!
//! Handlers return `Ok(exit_code)` for expected outcomes, including
//! validation failures, and `Err` only for hard faults such as unreadable
//! files.

use std::path::Path;

use anyhow::{Context, Result};
use routegen_core::{SourceCatalog, ValidationError};

pub mod generate;
pub mod validate;

/// Read and validate the venue catalog file.
///
/// I/O problems are hard errors. Validation failure is the expected
/// failure mode and comes back in the `Ok` envelope so handlers can print
/// the violation list and exit 1 without an error-context stack.
pub fn load_catalog(path: &Path) -> Result<Result<SourceCatalog, ValidationError>> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read catalog file: {}", path.display()))?;
    Ok(SourceCatalog::validate_json(&text))
}
