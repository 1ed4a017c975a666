//! # Route Taxonomy - Fixed Groups, Slots, and Catalog Bounds
//!
//! The single definition of the four food groups and four time slots, plus
//! the size constants every other module checks against. Group and slot
//! names double as JSON keys in both the source catalog and the generated
//! routes, so the serde names here carry the exact published spelling.
//!
//! ## Ordering Invariant
//!
//! The orders returned by [`FoodGroup::all`] and [`TimeSlot::all`] define
//! the traversal order of the generator's draw sequence. Reordering either
//! table changes which venue a given date selects. Both orders are pinned
//! by tests and must never change.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Number of food groups in the catalog.
pub const FOOD_GROUP_COUNT: usize = 4;

/// Number of time slots per group.
pub const TIME_SLOT_COUNT: usize = 4;

/// Minimum venues a slot pool may hold.
pub const MIN_VENUES_PER_SLOT: usize = 3;

/// Maximum venues a slot pool may hold.
pub const MAX_VENUES_PER_SLOT: usize = 5;

/// Venues selected for one day (4 groups x 4 slots).
pub const TOTAL_DAILY_VENUES: usize = FOOD_GROUP_COUNT * TIME_SLOT_COUNT;

/// Lowest acceptable venue rating.
pub const MIN_RATING: f64 = 1.0;

/// Highest acceptable venue rating.
pub const MAX_RATING: f64 = 5.0;

/// Error returned when a name does not belong to the fixed taxonomy.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown {kind} name: {name:?}")]
pub struct UnknownNameError {
    kind: &'static str,
    name: String,
}

impl UnknownNameError {
    fn group(name: &str) -> Self {
        Self {
            kind: "food group",
            name: name.to_string(),
        }
    }

    fn slot(name: &str) -> Self {
        Self {
            kind: "time slot",
            name: name.to_string(),
        }
    }

    /// The name that failed to parse.
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// The four thematic food groups of the guide.
///
/// Variant order is canonical order: it drives generator traversal, the
/// `Ord` used by route maps, and the display order on the site.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum FoodGroup {
    /// Chinese, Japanese, Korean, and fusion kitchens.
    #[serde(rename = "Pan-Asian Flavors")]
    PanAsianFlavors,
    /// Tucked-away cafes and bars off the main road.
    #[serde(rename = "Urban Hideaways")]
    UrbanHideaways,
    /// Dessert houses, bakeries, and sweet street stalls.
    #[serde(rename = "Sweet Bangkok")]
    SweetBangkok,
    /// Old-school Thai shophouses and street food.
    #[serde(rename = "Local Thai Experience")]
    LocalThaiExperience,
}

impl FoodGroup {
    /// All groups in canonical order.
    pub fn all() -> &'static [FoodGroup; FOOD_GROUP_COUNT] {
        &[
            FoodGroup::PanAsianFlavors,
            FoodGroup::UrbanHideaways,
            FoodGroup::SweetBangkok,
            FoodGroup::LocalThaiExperience,
        ]
    }

    /// The exact JSON key and display name for this group.
    pub fn as_str(&self) -> &'static str {
        match self {
            FoodGroup::PanAsianFlavors => "Pan-Asian Flavors",
            FoodGroup::UrbanHideaways => "Urban Hideaways",
            FoodGroup::SweetBangkok => "Sweet Bangkok",
            FoodGroup::LocalThaiExperience => "Local Thai Experience",
        }
    }

    /// Position of this group in canonical order.
    pub fn index(&self) -> usize {
        match self {
            FoodGroup::PanAsianFlavors => 0,
            FoodGroup::UrbanHideaways => 1,
            FoodGroup::SweetBangkok => 2,
            FoodGroup::LocalThaiExperience => 3,
        }
    }
}

impl fmt::Display for FoodGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FoodGroup {
    type Err = UnknownNameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Pan-Asian Flavors" => Ok(FoodGroup::PanAsianFlavors),
            "Urban Hideaways" => Ok(FoodGroup::UrbanHideaways),
            "Sweet Bangkok" => Ok(FoodGroup::SweetBangkok),
            "Local Thai Experience" => Ok(FoodGroup::LocalThaiExperience),
            other => Err(UnknownNameError::group(other)),
        }
    }
}

/// The four time slots of a day's route, in visit order.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum TimeSlot {
    Morning,
    Lunch,
    Afternoon,
    Evening,
}

impl TimeSlot {
    /// All slots in canonical (visit) order.
    pub fn all() -> &'static [TimeSlot; TIME_SLOT_COUNT] {
        &[
            TimeSlot::Morning,
            TimeSlot::Lunch,
            TimeSlot::Afternoon,
            TimeSlot::Evening,
        ]
    }

    /// The exact JSON key and display name for this slot.
    pub fn as_str(&self) -> &'static str {
        match self {
            TimeSlot::Morning => "Morning",
            TimeSlot::Lunch => "Lunch",
            TimeSlot::Afternoon => "Afternoon",
            TimeSlot::Evening => "Evening",
        }
    }

    /// Position of this slot in canonical order.
    pub fn index(&self) -> usize {
        match self {
            TimeSlot::Morning => 0,
            TimeSlot::Lunch => 1,
            TimeSlot::Afternoon => 2,
            TimeSlot::Evening => 3,
        }
    }
}

impl fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TimeSlot {
    type Err = UnknownNameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Morning" => Ok(TimeSlot::Morning),
            "Lunch" => Ok(TimeSlot::Lunch),
            "Afternoon" => Ok(TimeSlot::Afternoon),
            "Evening" => Ok(TimeSlot::Evening),
            other => Err(UnknownNameError::slot(other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    #[test]
    fn test_group_count_matches_constant() {
        assert_eq!(FoodGroup::all().len(), FOOD_GROUP_COUNT);
    }

    #[test]
    fn test_slot_count_matches_constant() {
        assert_eq!(TimeSlot::all().len(), TIME_SLOT_COUNT);
    }

    #[test]
    fn test_total_daily_venues() {
        assert_eq!(TOTAL_DAILY_VENUES, 16);
    }

    #[test]
    fn test_canonical_group_order_is_pinned() {
        let names: Vec<&str> = FoodGroup::all().iter().map(|g| g.as_str()).collect();
        assert_eq!(
            names,
            [
                "Pan-Asian Flavors",
                "Urban Hideaways",
                "Sweet Bangkok",
                "Local Thai Experience",
            ]
        );
    }

    #[test]
    fn test_canonical_slot_order_is_pinned() {
        let names: Vec<&str> = TimeSlot::all().iter().map(|s| s.as_str()).collect();
        assert_eq!(names, ["Morning", "Lunch", "Afternoon", "Evening"]);
    }

    #[test]
    fn test_group_index_matches_canonical_position() {
        for (i, group) in FoodGroup::all().iter().enumerate() {
            assert_eq!(group.index(), i);
        }
    }

    #[test]
    fn test_slot_index_matches_canonical_position() {
        for (i, slot) in TimeSlot::all().iter().enumerate() {
            assert_eq!(slot.index(), i);
        }
    }

    #[test]
    fn test_group_ord_follows_canonical_order() {
        // BTreeMap iteration order must equal `all()` order, since route
        // maps rely on it.
        let map: BTreeMap<FoodGroup, usize> = FoodGroup::all()
            .iter()
            .map(|g| (*g, g.index()))
            .collect();
        let keys: Vec<FoodGroup> = map.keys().copied().collect();
        assert_eq!(&keys[..], &FoodGroup::all()[..]);
    }

    #[test]
    fn test_group_from_str_round_trip() {
        for group in FoodGroup::all() {
            assert_eq!(FoodGroup::from_str(group.as_str()), Ok(*group));
        }
    }

    #[test]
    fn test_slot_from_str_round_trip() {
        for slot in TimeSlot::all() {
            assert_eq!(TimeSlot::from_str(slot.as_str()), Ok(*slot));
        }
    }

    #[test]
    fn test_from_str_is_case_sensitive() {
        assert!(FoodGroup::from_str("pan-asian flavors").is_err());
        assert!(FoodGroup::from_str("SWEET BANGKOK").is_err());
        assert!(TimeSlot::from_str("morning").is_err());
        assert!(TimeSlot::from_str("EVENING").is_err());
    }

    #[test]
    fn test_from_str_rejects_unknown_names() {
        let err = FoodGroup::from_str("Night Market Finds").unwrap_err();
        assert_eq!(err.name(), "Night Market Finds");
        assert!(err.to_string().contains("food group"));

        let err = TimeSlot::from_str("Midnight").unwrap_err();
        assert_eq!(err.name(), "Midnight");
        assert!(err.to_string().contains("time slot"));

        assert!(FoodGroup::from_str("").is_err());
        assert!(TimeSlot::from_str("").is_err());
    }

    #[test]
    fn test_display_matches_as_str() {
        for group in FoodGroup::all() {
            assert_eq!(group.to_string(), group.as_str());
        }
        for slot in TimeSlot::all() {
            assert_eq!(slot.to_string(), slot.as_str());
        }
    }

    #[test]
    fn test_serde_names_match_as_str() {
        for group in FoodGroup::all() {
            let json = serde_json::to_string(group).unwrap();
            assert_eq!(json, format!("\"{}\"", group.as_str()));
            let back: FoodGroup = serde_json::from_str(&json).unwrap();
            assert_eq!(back, *group);
        }
        for slot in TimeSlot::all() {
            let json = serde_json::to_string(slot).unwrap();
            assert_eq!(json, format!("\"{}\"", slot.as_str()));
            let back: TimeSlot = serde_json::from_str(&json).unwrap();
            assert_eq!(back, *slot);
        }
    }

    #[test]
    fn test_group_serializes_as_map_key() {
        // Route maps are keyed by FoodGroup; the key must render as the
        // group name, not a struct-like variant.
        let mut map = BTreeMap::new();
        map.insert(FoodGroup::PanAsianFlavors, 1);
        let json = serde_json::to_string(&map).unwrap();
        assert_eq!(json, r#"{"Pan-Asian Flavors":1}"#);

        let back: BTreeMap<FoodGroup, i32> = serde_json::from_str(&json).unwrap();
        assert_eq!(back.get(&FoodGroup::PanAsianFlavors), Some(&1));
    }

    #[test]
    fn test_exhaustive_match_compiles() {
        // Forces a compile error if a variant is ever added without
        // updating consumers.
        fn slot_label(slot: TimeSlot) -> &'static str {
            match slot {
                TimeSlot::Morning => "morning",
                TimeSlot::Lunch => "lunch",
                TimeSlot::Afternoon => "afternoon",
                TimeSlot::Evening => "evening",
            }
        }
        assert_eq!(slot_label(TimeSlot::Lunch), "lunch");
    }
}
