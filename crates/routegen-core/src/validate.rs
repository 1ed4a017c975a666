//! # Catalog Validation - The Trust Boundary
//!
//! Accumulating validator for the venue source document. Every structural
//! and field-level defect is reported in a single pass with its exact
//! location (group, slot, venue, field), so a data file with ten problems
//! needs one run to fix, not ten.
//!
//! ## Construction Invariant
//!
//! [`SourceCatalog::validate`] is the only way to obtain a
//! [`SourceCatalog`]. Everything the generator relies on (all groups and
//! slots present, pools of three to five venues, ratings in range) is
//! guaranteed here or not at all.
//!
//! ## Ordering Invariant
//!
//! The violation list is deterministic: document-level defects first, then
//! groups in canonical order, slots in canonical order within each group,
//! venues in name order within each pool. Pools are also built in venue
//! name order, never in source key order, so the key layout of the input
//! file cannot shift draw results.

use std::fmt;
use std::str::FromStr;

use serde_json::{Map, Value};
use thiserror::Error;

use crate::catalog::{GroupCatalog, SlotPool, SourceCatalog, Venue};
use crate::taxonomy::{
    FoodGroup, TimeSlot, FOOD_GROUP_COUNT, MAX_RATING, MAX_VENUES_PER_SLOT, MIN_RATING,
    MIN_VENUES_PER_SLOT, TIME_SLOT_COUNT,
};

/// JSON key carrying the group description inside each group object.
const DESCRIPTION_KEY: &str = "group_description";

/// Required scheme prefix for venue navigation links.
const URI_PREFIX: &str = "https://";

/// A single validation defect with its structural location.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Violation {
    /// A node that must be a JSON object is something else, or a venue
    /// entry has an empty name.
    #[error("malformed input at {location}: {detail}")]
    MalformedInput { location: String, detail: String },

    /// A required group key is absent from the document.
    #[error("missing required group \"{group}\"")]
    MissingGroup { group: FoodGroup },

    /// A top-level key that is not one of the four group names.
    #[error("unexpected group \"{name}\"")]
    UnexpectedGroup { name: String },

    /// The group description is absent, not a string, or blank.
    #[error("group \"{group}\" is missing a non-empty {}", DESCRIPTION_KEY)]
    MissingDescription { group: FoodGroup },

    /// A required slot key is absent from a group object.
    #[error("group \"{group}\" is missing slot \"{slot}\"")]
    MissingSlot { group: FoodGroup, slot: TimeSlot },

    /// A group object key that is neither a slot name nor the description.
    #[error("group \"{group}\" has unexpected key \"{name}\"")]
    UnexpectedSlotKey { group: FoodGroup, name: String },

    /// A slot pool with fewer than three or more than five venues.
    #[error(
        "pool \"{group}\"/\"{slot}\" has {count} venues (expected {} to {})",
        MIN_VENUES_PER_SLOT,
        MAX_VENUES_PER_SLOT
    )]
    PoolSizeOutOfRange {
        group: FoodGroup,
        slot: TimeSlot,
        count: usize,
    },

    /// A required venue field is absent or blank.
    #[error("venue \"{venue}\" in \"{group}\"/\"{slot}\" is missing a non-empty \"{field}\"")]
    MissingField {
        group: FoodGroup,
        slot: TimeSlot,
        venue: String,
        field: &'static str,
    },

    /// A venue field present with the wrong JSON type.
    #[error(
        "venue \"{venue}\" in \"{group}\"/\"{slot}\" has \"{field}\" of type {found} (expected {expected})"
    )]
    WrongFieldType {
        group: FoodGroup,
        slot: TimeSlot,
        venue: String,
        field: &'static str,
        expected: &'static str,
        found: &'static str,
    },

    /// A rating outside the 1.0 to 5.0 band.
    #[error(
        "venue \"{venue}\" in \"{group}\"/\"{slot}\" has rating {rating} (expected {} to {})",
        MIN_RATING,
        MAX_RATING
    )]
    RatingOutOfRange {
        group: FoodGroup,
        slot: TimeSlot,
        venue: String,
        rating: f64,
    },

    /// A navigation link that does not start with `https://`.
    #[error(
        "venue \"{venue}\" in \"{group}\"/\"{slot}\" has googleMapsUri {uri:?} (must start with {:?})",
        URI_PREFIX
    )]
    InvalidUri {
        group: FoodGroup,
        slot: TimeSlot,
        venue: String,
        uri: String,
    },
}

/// Collection of violations in deterministic report order.
#[derive(Debug, Clone, PartialEq)]
pub struct Violations {
    violations: Vec<Violation>,
}

impl Violations {
    /// Number of violations.
    pub fn len(&self) -> usize {
        self.violations.len()
    }

    /// True if the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    /// All violations in report order.
    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    /// Consumes self and returns the violation list.
    pub fn into_inner(self) -> Vec<Violation> {
        self.violations
    }
}

impl fmt::Display for Violations {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, violation) in self.violations.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "  - {violation}")?;
        }
        Ok(())
    }
}

/// The source document failed validation.
///
/// Carries every violation found in the pass. There is no repair path; the
/// data file must be fixed and re-validated.
#[derive(Error, Debug, Clone, PartialEq)]
#[error(
    "venue catalog failed validation with {} violation(s):\n{violations}",
    .violations.len()
)]
pub struct ValidationError {
    violations: Violations,
}

impl ValidationError {
    /// `violations` is non-empty on every path that constructs this error.
    fn new(violations: Vec<Violation>) -> Self {
        Self {
            violations: Violations { violations },
        }
    }

    /// All violations in report order.
    pub fn violations(&self) -> &Violations {
        &self.violations
    }

    /// Consumes self and returns the violation collection.
    pub fn into_violations(self) -> Violations {
        self.violations
    }
}

impl SourceCatalog {
    /// Validate a parsed JSON document and build the typed catalog.
    ///
    /// Runs every check and accumulates all violations; the catalog is
    /// returned only when the list is empty.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError`] carrying every violation found.
    pub fn validate(raw: &Value) -> Result<SourceCatalog, ValidationError> {
        let Some(doc) = raw.as_object() else {
            return Err(ValidationError::new(vec![Violation::MalformedInput {
                location: "document root".to_string(),
                detail: format!("expected an object, found {}", json_type_name(raw)),
            }]));
        };

        let mut violations = Vec::new();

        // Top-level keys outside the fixed taxonomy, in name order.
        let mut unexpected: Vec<&String> = doc
            .keys()
            .filter(|key| FoodGroup::from_str(key.as_str()).is_err())
            .collect();
        unexpected.sort_unstable();
        for name in unexpected {
            violations.push(Violation::UnexpectedGroup { name: name.clone() });
        }

        let mut built: [Option<GroupCatalog>; FOOD_GROUP_COUNT] = [None, None, None, None];
        for group in FoodGroup::all() {
            match doc.get(group.as_str()) {
                None => violations.push(Violation::MissingGroup { group: *group }),
                Some(value) => {
                    built[group.index()] = validate_group(*group, value, &mut violations);
                }
            }
        }

        // A group builds only when it contributed no violations, so a None
        // slot always comes with a non-empty list.
        match built {
            [Some(pan_asian), Some(hideaways), Some(sweet), Some(local)]
                if violations.is_empty() =>
            {
                Ok(SourceCatalog::from_groups([
                    pan_asian, hideaways, sweet, local,
                ]))
            }
            _ => Err(ValidationError::new(violations)),
        }
    }

    /// Parse `text` as JSON and validate the resulting document.
    ///
    /// A JSON syntax error is reported as a [`Violation::MalformedInput`]
    /// so callers see one error shape for every unusable input.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError`] on syntax errors or failed validation.
    pub fn validate_json(text: &str) -> Result<SourceCatalog, ValidationError> {
        match serde_json::from_str::<Value>(text) {
            Ok(value) => Self::validate(&value),
            Err(err) => Err(ValidationError::new(vec![Violation::MalformedInput {
                location: "document root".to_string(),
                detail: format!("invalid JSON: {err}"),
            }])),
        }
    }
}

/// Validate one group object. Returns `Some` only when no violation was
/// recorded for this group.
fn validate_group(
    group: FoodGroup,
    value: &Value,
    violations: &mut Vec<Violation>,
) -> Option<GroupCatalog> {
    let Some(map) = value.as_object() else {
        violations.push(Violation::MalformedInput {
            location: format!("group \"{group}\""),
            detail: format!("expected an object, found {}", json_type_name(value)),
        });
        return None;
    };
    let before = violations.len();

    // Keys inside the group that are neither slots nor the description,
    // in name order.
    let mut unexpected: Vec<&String> = map
        .keys()
        .filter(|key| key.as_str() != DESCRIPTION_KEY && TimeSlot::from_str(key.as_str()).is_err())
        .collect();
    unexpected.sort_unstable();
    for name in unexpected {
        violations.push(Violation::UnexpectedSlotKey {
            group,
            name: name.clone(),
        });
    }

    let description = match map.get(DESCRIPTION_KEY) {
        Some(Value::String(text)) if !text.trim().is_empty() => Some(text.clone()),
        _ => {
            violations.push(Violation::MissingDescription { group });
            None
        }
    };

    let mut pools: [Option<SlotPool>; TIME_SLOT_COUNT] = [None, None, None, None];
    for slot in TimeSlot::all() {
        match map.get(slot.as_str()) {
            None => violations.push(Violation::MissingSlot { group, slot: *slot }),
            Some(value) => {
                pools[slot.index()] = validate_pool(group, *slot, value, violations);
            }
        }
    }

    if violations.len() > before {
        return None;
    }
    let [morning, lunch, afternoon, evening] = pools;
    Some(GroupCatalog::new(
        description?,
        [morning?, lunch?, afternoon?, evening?],
    ))
}

/// Validate one slot pool. Returns `Some` only when no violation was
/// recorded for this pool.
fn validate_pool(
    group: FoodGroup,
    slot: TimeSlot,
    value: &Value,
    violations: &mut Vec<Violation>,
) -> Option<SlotPool> {
    let Some(map) = value.as_object() else {
        violations.push(Violation::MalformedInput {
            location: format!("group \"{group}\", slot \"{slot}\""),
            detail: format!("expected an object, found {}", json_type_name(value)),
        });
        return None;
    };
    let before = violations.len();

    let count = map.len();
    if !(MIN_VENUES_PER_SLOT..=MAX_VENUES_PER_SLOT).contains(&count) {
        violations.push(Violation::PoolSizeOutOfRange { group, slot, count });
    }

    // Venue order is name order, never source key order.
    let mut names: Vec<&String> = map.keys().collect();
    names.sort_unstable();

    let mut venues = Vec::with_capacity(count);
    for name in names {
        if name.trim().is_empty() {
            violations.push(Violation::MalformedInput {
                location: format!("group \"{group}\", slot \"{slot}\""),
                detail: "venue entry with an empty name".to_string(),
            });
            continue;
        }
        if let Some(venue) = validate_venue(group, slot, name, &map[name.as_str()], violations) {
            venues.push(venue);
        }
    }

    if violations.len() > before {
        return None;
    }
    Some(SlotPool::new(venues))
}

/// Validate one venue object. Returns `Some` only when every field check
/// passed.
fn validate_venue(
    group: FoodGroup,
    slot: TimeSlot,
    name: &str,
    value: &Value,
    violations: &mut Vec<Violation>,
) -> Option<Venue> {
    let Some(fields) = value.as_object() else {
        violations.push(Violation::MalformedInput {
            location: format!("venue \"{name}\" in \"{group}\"/\"{slot}\""),
            detail: format!("expected an object, found {}", json_type_name(value)),
        });
        return None;
    };
    let before = violations.len();

    let primary_type = required_string(group, slot, name, fields, "primaryType", violations);
    let story = required_string(group, slot, name, fields, "story", violations);

    let rating = match fields.get("rating") {
        None => {
            violations.push(Violation::MissingField {
                group,
                slot,
                venue: name.to_string(),
                field: "rating",
            });
            None
        }
        Some(Value::Number(number)) => {
            // Plain JSON numbers always convert; NaN fails the band check
            // below rather than panicking.
            let rating = number.as_f64().unwrap_or(f64::NAN);
            if (MIN_RATING..=MAX_RATING).contains(&rating) {
                Some(rating)
            } else {
                violations.push(Violation::RatingOutOfRange {
                    group,
                    slot,
                    venue: name.to_string(),
                    rating,
                });
                None
            }
        }
        Some(other) => {
            violations.push(Violation::WrongFieldType {
                group,
                slot,
                venue: name.to_string(),
                field: "rating",
                expected: "number",
                found: json_type_name(other),
            });
            None
        }
    };

    let uri = match fields.get("googleMapsUri") {
        None => {
            violations.push(Violation::MissingField {
                group,
                slot,
                venue: name.to_string(),
                field: "googleMapsUri",
            });
            None
        }
        Some(Value::String(text)) if text.trim().is_empty() => {
            violations.push(Violation::MissingField {
                group,
                slot,
                venue: name.to_string(),
                field: "googleMapsUri",
            });
            None
        }
        Some(Value::String(text)) => {
            if text.starts_with(URI_PREFIX) {
                Some(text.clone())
            } else {
                violations.push(Violation::InvalidUri {
                    group,
                    slot,
                    venue: name.to_string(),
                    uri: text.clone(),
                });
                None
            }
        }
        Some(other) => {
            violations.push(Violation::WrongFieldType {
                group,
                slot,
                venue: name.to_string(),
                field: "googleMapsUri",
                expected: "string",
                found: json_type_name(other),
            });
            None
        }
    };

    if violations.len() > before {
        return None;
    }
    Some(Venue {
        name: name.to_string(),
        primary_type: primary_type?,
        story: story?,
        rating: rating?,
        google_maps_uri: uri?,
    })
}

/// Check a required non-empty string field. Absent and blank are the same
/// defect.
fn required_string(
    group: FoodGroup,
    slot: TimeSlot,
    venue: &str,
    fields: &Map<String, Value>,
    field: &'static str,
    violations: &mut Vec<Violation>,
) -> Option<String> {
    match fields.get(field) {
        None => {
            violations.push(Violation::MissingField {
                group,
                slot,
                venue: venue.to_string(),
                field,
            });
            None
        }
        Some(Value::String(text)) => {
            if text.trim().is_empty() {
                violations.push(Violation::MissingField {
                    group,
                    slot,
                    venue: venue.to_string(),
                    field,
                });
                None
            } else {
                Some(text.clone())
            }
        }
        Some(other) => {
            violations.push(Violation::WrongFieldType {
                group,
                slot,
                venue: venue.to_string(),
                field,
                expected: "string",
                found: json_type_name(other),
            });
            None
        }
    }
}

/// JSON type name for diagnostics.
fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
