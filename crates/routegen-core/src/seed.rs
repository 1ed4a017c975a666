//! # Date Seeding - Deterministic Draw Sequence
//!
//! Turns a calendar date into the deterministic draw stream that drives
//! venue selection. The construction is SHA-256 in counter mode:
//!
//! ```text
//! key     = SHA-256(date rendered as "YYYY-MM-DD")
//! draw[i] = first 8 bytes of SHA-256(key || u64_be(i)), read big-endian
//! ```
//!
//! ## Reproducibility Invariant
//!
//! The stream depends only on the seed string bytes. No platform entropy,
//! no floating point, no PRNG crate whose output may change between
//! versions. The definition above reproduces from any language with a
//! SHA-256 implementation; known-answer vectors are pinned in tests and
//! cross-checked against Python's hashlib.
//!
//! ## Fairness Invariant
//!
//! [`DrawSequence::next_index`] maps raw draws onto `[0, pool_size)` by
//! rejection sampling. Draws above the largest full multiple of
//! `pool_size` are discarded and the counter advances, so every index is
//! exactly equally likely rather than approximately so.

use std::fmt;

use chrono::NaiveDate;
use sha2::{Digest, Sha256};

/// Render format for the seed string. Zero-padded, no timezone.
const SEED_DATE_FORMAT: &str = "%Y-%m-%d";

/// The seed derived from one calendar date.
///
/// Holds the human-readable seed string and the hashed 32-byte key the
/// draw sequence is keyed with. The string is rendered from the parsed
/// date, never taken from user input, so equivalent spellings of a date
/// cannot produce different seeds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateSeed {
    string: String,
    key: [u8; 32],
}

impl DateSeed {
    /// Build the seed for a calendar date.
    pub fn new(date: NaiveDate) -> Self {
        let string = date.format(SEED_DATE_FORMAT).to_string();
        let key: [u8; 32] = Sha256::digest(string.as_bytes()).into();
        Self { string, key }
    }

    /// The "YYYY-MM-DD" seed string.
    pub fn as_str(&self) -> &str {
        &self.string
    }

    /// The 32-byte key for the draw sequence.
    pub fn key(&self) -> &[u8; 32] {
        &self.key
    }
}

impl fmt::Display for DateSeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.string)
    }
}

/// The deterministic u64 stream for one seed.
///
/// Each [`next_u64`] hashes the seed key together with an advancing
/// counter. The sequence is consumed in a fixed traversal order by the
/// generator; see [`crate::generate`].
///
/// [`next_u64`]: DrawSequence::next_u64
#[derive(Debug, Clone)]
pub struct DrawSequence {
    key: [u8; 32],
    counter: u64,
}

impl DrawSequence {
    /// Start the sequence for a seed, counter at zero.
    pub fn new(seed: &DateSeed) -> Self {
        Self {
            key: *seed.key(),
            counter: 0,
        }
    }

    /// The next raw 64-bit draw.
    pub fn next_u64(&mut self) -> u64 {
        let mut hasher = Sha256::new();
        hasher.update(self.key);
        hasher.update(self.counter.to_be_bytes());
        let block = hasher.finalize();
        self.counter += 1;

        let mut word = [0u8; 8];
        word.copy_from_slice(&block[..8]);
        u64::from_be_bytes(word)
    }

    /// Draw a uniform index in `[0, pool_size)`.
    ///
    /// Draws in the truncated tail above the largest full multiple of
    /// `pool_size` are rejected and redrawn. For pools of three to five a
    /// rejection is vanishingly rare, but the loop is what makes the
    /// uniformity exact.
    ///
    /// # Panics
    ///
    /// Panics if `pool_size` is zero. A validated catalog never holds an
    /// empty pool, so drawing from one is a programming error, not a data
    /// error.
    pub fn next_index(&mut self, pool_size: usize) -> usize {
        assert!(pool_size > 0, "cannot draw an index from an empty pool");
        let n = pool_size as u64;
        let zone = u64::MAX - (u64::MAX % n + 1) % n;
        loop {
            let draw = self.next_u64();
            if draw <= zone {
                return (draw % n) as usize;
            }
        }
    }
}
