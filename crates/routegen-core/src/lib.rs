//! # routegen-core - Deterministic Daily Route Generation
//!
//! Core library of the Banthat Thong food-guide route generator. It
//! validates the venue source catalog and derives one venue per (group,
//! slot) pair for a given calendar date. The date fully determines the
//! result: the site build regenerates the routes nightly and embeds them
//! as a static asset, and any machine building the same date produces the
//! same bytes.
//!
//! ## Key Design Principles
//!
//! 1. **Validation is the only construction path.** A [`SourceCatalog`]
//!    can only be built by [`SourceCatalog::validate`], so holding one
//!    proves the document passed every structural and field-level check.
//!    The generator re-checks nothing.
//!
//! 2. **Closed taxonomy.** [`FoodGroup`] and [`TimeSlot`] are the single
//!    definitions of the four groups and four slots. Matches on them are
//!    exhaustive, so adding a variant is a compile-visible event.
//!
//! 3. **Determinism by construction.** Selection draws come from SHA-256
//!    in counter mode keyed by the hashed date string, folded onto pool
//!    index ranges by rejection sampling. No platform entropy, no PRNG
//!    crate whose stream may change between versions.
//!
//! 4. **Canonical output.** The emitted asset serializes as RFC 8785
//!    canonical JSON with a SHA-256 content digest, so equal routes are
//!    byte-identical and day-over-day changes are cheap to detect.
//!
//! ## Crate Policy
//!
//! - No internal dependencies (the CLI depends on this crate, never the
//!   reverse).
//! - No `unsafe` code, no I/O, no global state.
//! - No `panic!()` or `.unwrap()` outside tests, with one documented
//!   exception: [`DrawSequence::next_index`] panics on an empty pool,
//!   which a validated catalog rules out.

pub mod canonical;
pub mod catalog;
pub mod generate;
pub mod routes;
pub mod seed;
pub mod taxonomy;
pub mod validate;

// Re-export primary types for ergonomic imports.
pub use canonical::{canonical_json, content_digest, CanonicalError};
pub use catalog::{GroupCatalog, SlotPool, SourceCatalog, Venue};
pub use generate::generate_daily_routes;
pub use routes::{DailyRoutes, GroupRoute};
pub use seed::{DateSeed, DrawSequence};
pub use taxonomy::{
    FoodGroup, TimeSlot, UnknownNameError, FOOD_GROUP_COUNT, MAX_RATING, MAX_VENUES_PER_SLOT,
    MIN_RATING, MIN_VENUES_PER_SLOT, TIME_SLOT_COUNT, TOTAL_DAILY_VENUES,
};
pub use validate::{ValidationError, Violation, Violations};
