//! # Daily Route Generation
//!
//! The pure selection step: a validated catalog plus a calendar date in,
//! the day's routes out. Equal inputs produce equal output, bit for bit.
//!
//! ## Traversal Invariant
//!
//! Draws are consumed in a fixed order: groups in [`FoodGroup::all`]
//! order, slots Morning, Lunch, Afternoon, Evening within each group. One
//! index draw per (group, slot) cell, sixteen in total. Consuming the
//! sequence in any other order would change which venues a date selects,
//! so the traversal is part of the output contract, not an implementation
//! detail.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::catalog::{GroupCatalog, SourceCatalog, Venue};
use crate::routes::{DailyRoutes, GroupRoute};
use crate::seed::{DateSeed, DrawSequence};
use crate::taxonomy::{FoodGroup, TimeSlot};

/// Generate the routes for one calendar date.
///
/// Trusts the catalog's invariants (the validator is the only way to
/// build one) and performs no checking of its own. The returned routes
/// own their data; selected venues are copies, not borrows into the
/// catalog.
pub fn generate_daily_routes(catalog: &SourceCatalog, date: NaiveDate) -> DailyRoutes {
    let seed = DateSeed::new(date);
    let mut draws = DrawSequence::new(&seed);

    let mut routes = BTreeMap::new();
    for group in FoodGroup::all() {
        let entry = catalog.group(*group);
        routes.insert(*group, route_for_group(entry, &mut draws));
    }
    DailyRoutes::new(routes)
}

/// Select one venue per slot for a single group, in canonical slot order.
fn route_for_group(entry: &GroupCatalog, draws: &mut DrawSequence) -> GroupRoute {
    let morning = select(entry, TimeSlot::Morning, draws);
    let lunch = select(entry, TimeSlot::Lunch, draws);
    let afternoon = select(entry, TimeSlot::Afternoon, draws);
    let evening = select(entry, TimeSlot::Evening, draws);
    GroupRoute {
        group_description: entry.description().to_string(),
        morning,
        lunch,
        afternoon,
        evening,
    }
}

/// Draw the next index and copy the venue it lands on.
fn select(entry: &GroupCatalog, slot: TimeSlot, draws: &mut DrawSequence) -> Venue {
    let pool = entry.pool(slot);
    let index = draws.next_index(pool.len());
    pool.venues()[index].clone()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Map, Value};

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    fn venue_value() -> Value {
        json!({
            "primaryType": "Restaurant",
            "story": "A fixture venue.",
            "rating": 4.2,
            "googleMapsUri": "https://maps.google.com/?cid=1"
        })
    }

    fn pool_value(count: usize) -> Value {
        let mut pool = Map::new();
        for i in 0..count {
            pool.insert(format!("Venue {}", char::from(b'A' + i as u8)), venue_value());
        }
        Value::Object(pool)
    }

    fn group_value(sizes: [usize; 4]) -> Value {
        json!({
            "group_description": "A fixture group.",
            "Morning": pool_value(sizes[0]),
            "Lunch": pool_value(sizes[1]),
            "Afternoon": pool_value(sizes[2]),
            "Evening": pool_value(sizes[3])
        })
    }

    /// Catalog where the pool for group `g`, slot `s` (canonical indices)
    /// holds `3 + (g + s) % 3` venues, mixing all three legal sizes.
    fn mixed_catalog() -> SourceCatalog {
        let mut doc = Map::new();
        for group in FoodGroup::all() {
            let g = group.index();
            let sizes = [
                3 + g % 3,
                3 + (g + 1) % 3,
                3 + (g + 2) % 3,
                3 + (g + 3) % 3,
            ];
            doc.insert(group.as_str().to_string(), group_value(sizes));
        }
        SourceCatalog::validate(&Value::Object(doc)).unwrap()
    }

    fn uniform_catalog(count: usize) -> SourceCatalog {
        let mut doc = Map::new();
        for group in FoodGroup::all() {
            doc.insert(group.as_str().to_string(), group_value([count; 4]));
        }
        SourceCatalog::validate(&Value::Object(doc)).unwrap()
    }

    #[test]
    fn test_same_date_reproduces_exactly() {
        let catalog = mixed_catalog();
        let first = generate_daily_routes(&catalog, date("2026-03-15"));
        let second = generate_daily_routes(&catalog, date("2026-03-15"));
        assert_eq!(first, second);
    }

    #[test]
    fn test_known_selection_vector_mixed_pools() {
        // Pinned against an independent Python implementation of the draw
        // construction applied to the same mixed pool sizes.
        let routes = generate_daily_routes(&mixed_catalog(), date("2026-03-15"));

        let expected = [
            (FoodGroup::PanAsianFlavors, ["A", "D", "C", "B"]),
            (FoodGroup::UrbanHideaways, ["B", "A", "B", "D"]),
            (FoodGroup::SweetBangkok, ["D", "A", "A", "C"]),
            (FoodGroup::LocalThaiExperience, ["A", "D", "C", "B"]),
        ];
        for (group, names) in expected {
            let route = routes.group(group).unwrap();
            assert_eq!(route.morning.name, format!("Venue {}", names[0]), "{group} Morning");
            assert_eq!(route.lunch.name, format!("Venue {}", names[1]), "{group} Lunch");
            assert_eq!(route.afternoon.name, format!("Venue {}", names[2]), "{group} Afternoon");
            assert_eq!(route.evening.name, format!("Venue {}", names[3]), "{group} Evening");
        }
    }

    #[test]
    fn test_adjacent_dates_select_differently() {
        // Not guaranteed for arbitrary date pairs, but pinned here: the
        // first draw of 2026-03-16 lands on a different index than
        // 2026-03-15 for a five-venue pool.
        let catalog = uniform_catalog(5);
        let first = generate_daily_routes(&catalog, date("2026-03-15"));
        let second = generate_daily_routes(&catalog, date("2026-03-16"));
        assert_ne!(first, second);
    }

    #[test]
    fn test_all_groups_and_slots_filled() {
        let routes = generate_daily_routes(&mixed_catalog(), date("2026-03-15"));
        assert_eq!(routes.len(), 4);
        assert_eq!(routes.venue_count(), 16);
        for group in FoodGroup::all() {
            let route = routes.group(*group).unwrap();
            for slot in TimeSlot::all() {
                assert!(!route.venue(*slot).name.is_empty());
            }
        }
    }

    #[test]
    fn test_selections_come_from_matching_pool() {
        let catalog = mixed_catalog();
        let routes = generate_daily_routes(&catalog, date("2027-09-09"));
        for group in FoodGroup::all() {
            let route = routes.group(*group).unwrap();
            for slot in TimeSlot::all() {
                let selected = route.venue(*slot);
                let pool = catalog.group(*group).pool(*slot);
                assert!(
                    pool.venues().iter().any(|venue| venue == selected),
                    "selection for {group}/{slot} not found in its pool"
                );
            }
        }
    }

    #[test]
    fn test_group_description_copied_verbatim() {
        let routes = generate_daily_routes(&uniform_catalog(3), date("2026-03-15"));
        for group in FoodGroup::all() {
            assert_eq!(
                routes.group(*group).unwrap().group_description,
                "A fixture group."
            );
        }
    }
}
