//! # Canonical Output - JCS Serialization and Content Digest
//!
//! Byte-stable rendering of generated routes for the embed step.
//! Canonical form is RFC 8785 (JSON Canonicalization Scheme) via
//! `serde_jcs`: lexicographically sorted keys, no insignificant
//! whitespace, ES6 number rendering. The content digest is the SHA-256 of
//! those bytes, used to name the day's asset in build logs and to detect
//! day-over-day changes without diffing.
//!
//! ## Determinism Invariant
//!
//! Equal values produce identical canonical bytes, and therefore
//! identical digests, on every platform. Venue ratings are the only
//! floating-point field in the output; JCS renders them in the shortest
//! ES6 round-trip form, which is itself deterministic.

use serde::Serialize;
use sha2::{Digest, Sha256};
use thiserror::Error;

/// Canonical serialization failed.
///
/// Cannot occur for the route types in this crate, but the condition is
/// propagated rather than swallowed.
#[derive(Error, Debug)]
pub enum CanonicalError {
    /// The value could not be rendered as canonical JSON.
    #[error("canonical serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Render a value as RFC 8785 canonical JSON.
///
/// The value is converted to a `serde_json::Value` first so map keys of
/// any serializable type (such as [`crate::taxonomy::FoodGroup`]) pass
/// through the standard key-to-string path before canonicalization.
///
/// # Errors
///
/// Returns [`CanonicalError`] if the value cannot be represented as JSON.
pub fn canonical_json<T: Serialize>(value: &T) -> Result<String, CanonicalError> {
    let value = serde_json::to_value(value)?;
    Ok(serde_jcs::to_string(&value)?)
}

/// Lowercase hex SHA-256 of a value's canonical JSON bytes.
///
/// # Errors
///
/// Returns [`CanonicalError`] if the value cannot be represented as JSON.
pub fn content_digest<T: Serialize>(value: &T) -> Result<String, CanonicalError> {
    let canonical = canonical_json(value)?;
    let digest = Sha256::digest(canonical.as_bytes());
    Ok(digest.iter().map(|b| format!("{b:02x}")).collect())
}
