//! # Venue Catalog - Validated Source Data
//!
//! Typed model of the venue source document. A [`SourceCatalog`] can only
//! be built by the validator (see [`crate::validate`]), so holding one is
//! proof that every structural and field-level check passed: all four
//! groups, all four slots per group, three to five venues per pool, and
//! the per-venue field rules.
//!
//! ## Index Invariant
//!
//! Groups and slot pools are stored in arrays indexed by
//! [`FoodGroup::index`] and [`TimeSlot::index`], so lookups cannot miss.
//! Venues within a pool are ordered by name regardless of the key order in
//! the source file; a draw index always lands on the same venue.

use serde::{Deserialize, Serialize};

use crate::taxonomy::{FoodGroup, TimeSlot, FOOD_GROUP_COUNT, TIME_SLOT_COUNT};

/// A single venue and its published fields.
///
/// In the source document the name is the JSON map key and the remaining
/// fields form the value object; in generated routes the name is inlined
/// alongside the other fields. `rating` is the only floating-point field
/// in the data model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Venue {
    /// Venue name, unique within its slot pool.
    pub name: String,
    /// Venue category, e.g. "Chinese Restaurant".
    #[serde(rename = "primaryType")]
    pub primary_type: String,
    /// Short cultural narrative for the venue.
    pub story: String,
    /// Google Places rating, 1.0 to 5.0 inclusive.
    pub rating: f64,
    /// Navigation link; must use https.
    #[serde(rename = "googleMapsUri")]
    pub google_maps_uri: String,
}

/// The candidate venues for one (group, slot) pair, in name order.
#[derive(Debug, Clone, PartialEq)]
pub struct SlotPool {
    venues: Vec<Venue>,
}

impl SlotPool {
    pub(crate) fn new(venues: Vec<Venue>) -> Self {
        Self { venues }
    }

    /// Number of venues in this pool. Between 3 and 5 for a validated pool.
    pub fn len(&self) -> usize {
        self.venues.len()
    }

    /// True if the pool holds no venues. Never the case after validation.
    pub fn is_empty(&self) -> bool {
        self.venues.is_empty()
    }

    /// All venues in name order. A draw index selects from this slice.
    pub fn venues(&self) -> &[Venue] {
        &self.venues
    }
}

/// One food group's description and its four slot pools.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupCatalog {
    description: String,
    pools: [SlotPool; TIME_SLOT_COUNT],
}

impl GroupCatalog {
    pub(crate) fn new(description: String, pools: [SlotPool; TIME_SLOT_COUNT]) -> Self {
        Self { description, pools }
    }

    /// The group description shown alongside the day's route.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// The venue pool for a slot.
    pub fn pool(&self, slot: TimeSlot) -> &SlotPool {
        &self.pools[slot.index()]
    }
}

/// The full validated catalog: one [`GroupCatalog`] per [`FoodGroup`].
///
/// The only construction path is [`SourceCatalog::validate`], so a value
/// of this type always satisfies every catalog invariant. The generator
/// relies on that and re-checks nothing.
#[derive(Debug, Clone, PartialEq)]
pub struct SourceCatalog {
    groups: [GroupCatalog; FOOD_GROUP_COUNT],
}

impl SourceCatalog {
    pub(crate) fn from_groups(groups: [GroupCatalog; FOOD_GROUP_COUNT]) -> Self {
        Self { groups }
    }

    /// The catalog entry for a group.
    pub fn group(&self, group: FoodGroup) -> &GroupCatalog {
        &self.groups[group.index()]
    }

    /// Total venue count across all sixteen pools.
    pub fn venue_count(&self) -> usize {
        FoodGroup::all()
            .iter()
            .flat_map(|group| {
                TimeSlot::all()
                    .iter()
                    .map(|slot| self.group(*group).pool(*slot).len())
            })
            .sum()
    }
}
