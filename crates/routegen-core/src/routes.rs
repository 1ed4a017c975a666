//! # Daily Routes - Generated Output Model
//!
//! The serializable result of one generation run. Keys and field names
//! match the embedded-asset contract exactly: group names as top-level
//! keys, `groupDescription`, slot names as keys, and venue objects with
//! the name inlined.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::catalog::Venue;
use crate::taxonomy::{FoodGroup, TimeSlot, TIME_SLOT_COUNT};

/// One group's selections for the day: the group description plus one
/// venue per slot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupRoute {
    /// Description copied verbatim from the source catalog.
    #[serde(rename = "groupDescription")]
    pub group_description: String,
    /// Selected venue for the morning slot.
    #[serde(rename = "Morning")]
    pub morning: Venue,
    /// Selected venue for the lunch slot.
    #[serde(rename = "Lunch")]
    pub lunch: Venue,
    /// Selected venue for the afternoon slot.
    #[serde(rename = "Afternoon")]
    pub afternoon: Venue,
    /// Selected venue for the evening slot.
    #[serde(rename = "Evening")]
    pub evening: Venue,
}

impl GroupRoute {
    /// The selected venue for a slot.
    pub fn venue(&self, slot: TimeSlot) -> &Venue {
        match slot {
            TimeSlot::Morning => &self.morning,
            TimeSlot::Lunch => &self.lunch,
            TimeSlot::Afternoon => &self.afternoon,
            TimeSlot::Evening => &self.evening,
        }
    }
}

/// The full day's routes: one [`GroupRoute`] per food group.
///
/// Serializes as a plain JSON object keyed by group name. The generator
/// always produces all four groups; a deserialized value may hold fewer,
/// so lookups return `Option`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DailyRoutes {
    routes: BTreeMap<FoodGroup, GroupRoute>,
}

impl DailyRoutes {
    pub(crate) fn new(routes: BTreeMap<FoodGroup, GroupRoute>) -> Self {
        Self { routes }
    }

    /// The route for a group, if present.
    pub fn group(&self, group: FoodGroup) -> Option<&GroupRoute> {
        self.routes.get(&group)
    }

    /// Number of groups present.
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    /// True if no groups are present.
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// Iterate groups in canonical order with their routes.
    pub fn iter(&self) -> impl Iterator<Item = (FoodGroup, &GroupRoute)> {
        self.routes.iter().map(|(group, route)| (*group, route))
    }

    /// Total selected venues, one per slot per group present.
    pub fn venue_count(&self) -> usize {
        self.routes.len() * TIME_SLOT_COUNT
    }
}
