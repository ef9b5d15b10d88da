//! Pure facility query engine: predicate filtering, distance ordering, and
//! distance annotation.
//!
//! Every function here is stateless and total over its documented inputs:
//! it reads immutable snapshots, never mutates the caller's collections,
//! and produces the same output for the same input. Out-of-range values
//! that slip past the entity-creation boundary are handled arithmetically
//! rather than raised as faults.

use serde::{Deserialize, Serialize};

use super::facility::Facility;
use super::geo::{Position, format_distance};

/// Predicate set applied by [`filter`].
///
/// `paid` is tri-state: `None` means no constraint. The three amenity
/// flags are one-directional: `true` means "must have", `false` means "no
/// constraint" and never excludes. That asymmetry is deliberate product
/// behaviour, not an oversight to fix.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(deny_unknown_fields)]
pub struct FilterCriteria {
    /// Payment constraint; `None` keeps both paid and free facilities.
    pub paid: Option<bool>,
    /// Require wheelchair accessibility.
    pub wheelchair_accessible: bool,
    /// Require sanitary products.
    pub sanitary_products: bool,
    /// Require showers.
    pub showers: bool,
    /// Minimum hygiene rating, inclusive.
    pub min_rating: f32,
}

impl Default for FilterCriteria {
    /// The open filter: no payment constraint, no amenity requirements,
    /// and the lowest meaningful rating floor.
    fn default() -> Self {
        Self {
            paid: None,
            wheelchair_accessible: false,
            sanitary_products: false,
            showers: false,
            min_rating: 1.0,
        }
    }
}

impl FilterCriteria {
    /// Whether `facility` satisfies every active predicate.
    pub fn matches(&self, facility: &Facility) -> bool {
        if self.paid.is_some_and(|paid| facility.paid() != paid) {
            return false;
        }
        if self.wheelchair_accessible && !facility.wheelchair_accessible() {
            return false;
        }
        if self.sanitary_products && !facility.sanitary_products() {
            return false;
        }
        if self.showers && !facility.showers() {
            return false;
        }
        facility.hygiene_rating() >= self.min_rating
    }
}

/// A facility annotated with its distance from the reference position.
///
/// The presentation layer renders the label verbatim; both fields are
/// `None` when no reference position was available.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FacilityWithDistance {
    /// The matching facility.
    pub facility: Facility,
    /// Great-circle distance from the reference, kilometres.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance_km: Option<f64>,
    /// Display label for the distance, e.g. `"156m"` or `"3.2km"`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance_label: Option<String>,
}

/// Keeps the facilities satisfying every active predicate in `criteria`.
///
/// The filter is stable: surviving facilities keep their input order.
/// Empty input yields empty output.
pub fn filter(facilities: &[Facility], criteria: &FilterCriteria) -> Vec<Facility> {
    facilities
        .iter()
        .filter(|facility| criteria.matches(facility))
        .cloned()
        .collect()
}

/// Orders facilities by ascending distance from `reference`.
///
/// With no reference position the input order is returned unchanged; that
/// is a product decision, not an error. The sort is stable, so equidistant
/// facilities keep their original relative order.
pub fn sort_by_distance(facilities: &[Facility], reference: Option<Position>) -> Vec<Facility> {
    let Some(origin) = reference else {
        return facilities.to_vec();
    };

    let mut keyed: Vec<(f64, Facility)> = facilities
        .iter()
        .map(|facility| (facility.position().distance_km(origin), facility.clone()))
        .collect();
    keyed.sort_by(|a, b| a.0.total_cmp(&b.0));
    keyed.into_iter().map(|(_, facility)| facility).collect()
}

/// Filters, orders, and annotates facilities for presentation.
///
/// Composition of [`filter`] and [`sort_by_distance`], with each surviving
/// facility annotated by its distance and display label relative to
/// `reference` (absent annotations when no reference is available).
pub fn query(
    facilities: &[Facility],
    criteria: &FilterCriteria,
    reference: Option<Position>,
) -> Vec<FacilityWithDistance> {
    let matching = filter(facilities, criteria);
    sort_by_distance(&matching, reference)
        .into_iter()
        .map(|facility| {
            let distance_km = reference.map(|origin| facility.position().distance_km(origin));
            FacilityWithDistance {
                facility,
                distance_km,
                distance_label: distance_km.map(format_distance),
            }
        })
        .collect()
}
