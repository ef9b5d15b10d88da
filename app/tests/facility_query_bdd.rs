//! Behavioural tests for the facility query engine.
//!
//! These tests validate filtering, distance ordering, and annotation
//! against Gherkin scenarios.

// `expect` is idiomatic in test code for failing fast on precondition violations.
#![expect(
    clippy::expect_used,
    reason = "test code uses expect for clear failure messages"
)]

use app::domain::facility::{Facility, FacilityDraft};
use app::domain::{FacilityWithDistance, FilterCriteria, Position, query};
use rstest::fixture;
use rstest_bdd::Slot;
use rstest_bdd_macros::{ScenarioState, given, scenario, then, when};
use uuid::Uuid;

/// City-centre reference used by the scenarios.
const CENTRE: (f64, f64) = (8.5241, 76.9366);

/// Test world holding the catalogue, query inputs, and the projection.
#[derive(Default, ScenarioState)]
struct World {
    facilities: Slot<Vec<Facility>>,
    criteria: Slot<FilterCriteria>,
    reference: Slot<Option<Position>>,
    result: Slot<Vec<FacilityWithDistance>>,
}

impl World {
    fn facilities(&self) -> Vec<Facility> {
        self.facilities.get().expect("catalogue should be set")
    }

    fn result(&self) -> Vec<FacilityWithDistance> {
        self.result.get().expect("query should have run")
    }

    fn result_names(&self) -> Vec<String> {
        self.result()
            .iter()
            .map(|entry| entry.facility.name().to_owned())
            .collect()
    }
}

fn catalogue_facility(name: &str, lat: f64, lng: f64, paid: bool, rating: f32) -> Facility {
    Facility::new(FacilityDraft {
        id: Uuid::new_v4(),
        name: name.to_owned(),
        position: Position::new(lat, lng).expect("valid position"),
        paid,
        price: paid.then(|| "₹5".to_owned()),
        hygiene_rating: rating,
        wheelchair_accessible: false,
        sanitary_products: false,
        showers: false,
        reviews: Vec::new(),
    })
    .expect("valid facility draft")
}

#[fixture]
fn world() -> World {
    World::default()
}

// ============================================================================
// Given steps
// ============================================================================

#[given("a facility catalogue with mixed payment and ratings")]
fn a_facility_catalogue(world: &World) {
    let (lat, lng) = CENTRE;
    world.facilities.set(vec![
        // Roughly 1.1 km north of the centre.
        catalogue_facility("Fort Free", lat + 0.01, lng, false, 3.5),
        // Roughly 156 m north-east of the centre.
        catalogue_facility("Museum Paid", lat + 0.001, lng + 0.001, true, 4.8),
        // Roughly 5.6 km north of the centre.
        catalogue_facility("Palace Paid", lat + 0.05, lng, true, 5.0),
    ]);
}

#[given("a filter requiring paid facilities")]
fn a_filter_requiring_paid(world: &World) {
    world.criteria.set(FilterCriteria {
        paid: Some(true),
        ..FilterCriteria::default()
    });
}

#[given("a filter with minimum rating five")]
fn a_filter_with_minimum_rating_five(world: &World) {
    world.criteria.set(FilterCriteria {
        min_rating: 5.0,
        ..FilterCriteria::default()
    });
}

#[given("the open filter")]
fn the_open_filter(world: &World) {
    world.criteria.set(FilterCriteria::default());
}

#[given("a reference position at the city centre")]
fn a_reference_position(world: &World) {
    let (lat, lng) = CENTRE;
    world
        .reference
        .set(Some(Position::new(lat, lng).expect("valid position")));
}

#[given("no reference position")]
fn no_reference_position(world: &World) {
    world.reference.set(None);
}

// ============================================================================
// When steps
// ============================================================================

#[when("the catalogue is queried")]
fn the_catalogue_is_queried(world: &World) {
    let facilities = world.facilities();
    let criteria = world.criteria.get().expect("criteria should be set");
    let reference = world.reference.get().expect("reference should be set");
    world.result.set(query(&facilities, &criteria, reference));
}

// ============================================================================
// Then steps
// ============================================================================

#[then("only paid facilities remain in their original order")]
fn only_paid_facilities_remain(world: &World) {
    assert_eq!(world.result_names(), ["Museum Paid", "Palace Paid"]);
    assert!(world.result().iter().all(|entry| entry.facility.paid()));
}

#[then("only facilities rated five remain")]
fn only_facilities_rated_five_remain(world: &World) {
    assert_eq!(world.result_names(), ["Palace Paid"]);
}

#[then("facilities are ordered nearest first with distance labels")]
fn facilities_are_ordered_nearest_first(world: &World) {
    assert_eq!(
        world.result_names(),
        ["Museum Paid", "Fort Free", "Palace Paid"]
    );

    let labels: Vec<Option<String>> = world
        .result()
        .iter()
        .map(|entry| entry.distance_label.clone())
        .collect();
    assert_eq!(
        labels,
        [
            Some("156m".to_owned()),
            Some("1.1km".to_owned()),
            Some("5.6km".to_owned()),
        ]
    );
}

#[then("the catalogue order is unchanged")]
fn the_catalogue_order_is_unchanged(world: &World) {
    let original: Vec<String> = world
        .facilities()
        .iter()
        .map(|facility| facility.name().to_owned())
        .collect();
    assert_eq!(world.result_names(), original);
    assert!(world.result().iter().all(|entry| entry.distance_label.is_none()));
}

// ============================================================================
// Scenario bindings
// ============================================================================

#[scenario(
    path = "tests/features/facility_query.feature",
    name = "Paid filter keeps only paid facilities"
)]
fn paid_filter_keeps_only_paid_facilities(world: World) {
    let _ = world;
}

#[scenario(
    path = "tests/features/facility_query.feature",
    name = "Minimum rating filter keeps only top-rated facilities"
)]
fn minimum_rating_filter_keeps_only_top_rated_facilities(world: World) {
    let _ = world;
}

#[scenario(
    path = "tests/features/facility_query.feature",
    name = "Reference position orders facilities nearest first"
)]
fn reference_position_orders_facilities_nearest_first(world: World) {
    let _ = world;
}

#[scenario(
    path = "tests/features/facility_query.feature",
    name = "Missing reference position keeps catalogue order"
)]
fn missing_reference_position_keeps_catalogue_order(world: World) {
    let _ = world;
}
