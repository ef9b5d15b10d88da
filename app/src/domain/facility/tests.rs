//! Unit tests for facility construction and review attachment.

use chrono::{TimeZone, Utc};
use rstest::rstest;
use uuid::Uuid;

use super::*;
use crate::domain::auth::Actor;
use crate::domain::review::{ReviewDraft, ReviewStatus};

fn draft() -> FacilityDraft {
    FacilityDraft {
        id: Uuid::new_v4(),
        name: "Central Station Public Toilet".to_owned(),
        position: Position::new(8.5241, 76.9366).expect("valid position"),
        paid: true,
        price: Some("₹5".to_owned()),
        hygiene_rating: 4.2,
        wheelchair_accessible: true,
        sanitary_products: false,
        showers: false,
        reviews: Vec::new(),
    }
}

fn review(status_actor: Actor) -> Review {
    Review::submit(
        ReviewDraft {
            user_name: "Meera".to_owned(),
            rating: 4.0,
            comment: "Spotless.".to_owned(),
            audio_url: None,
        },
        status_actor,
        Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0)
            .single()
            .expect("valid timestamp"),
    )
    .expect("valid review draft")
}

#[test]
fn valid_draft_constructs() {
    let facility = Facility::new(draft()).expect("valid draft");
    assert_eq!(facility.name(), "Central Station Public Toilet");
    assert_eq!(facility.price(), Some("₹5"));
    assert!(facility.reviews().is_empty());
}

#[rstest]
#[case("")]
#[case("   ")]
fn blank_names_are_rejected(#[case] name: &str) {
    let result = Facility::new(FacilityDraft {
        name: name.to_owned(),
        ..draft()
    });
    assert!(matches!(
        result,
        Err(FacilityValidationError::EmptyField {
            field: "facility.name",
        })
    ));
}

#[rstest]
#[case(0.0)]
#[case(5.5)]
fn out_of_range_ratings_are_rejected(#[case] rating: f32) {
    let result = Facility::new(FacilityDraft {
        hygiene_rating: rating,
        ..draft()
    });
    assert!(matches!(
        result,
        Err(FacilityValidationError::InvalidRating { .. })
    ));
}

#[test]
fn free_facilities_cannot_carry_a_price_label() {
    let result = Facility::new(FacilityDraft {
        paid: false,
        price: Some("₹5".to_owned()),
        ..draft()
    });
    assert_eq!(result, Err(FacilityValidationError::PriceWithoutPayment));
}

#[test]
fn free_facilities_without_price_construct() {
    let result = Facility::new(FacilityDraft {
        paid: false,
        price: None,
        ..draft()
    });
    assert!(result.is_ok());
}

#[test]
fn with_review_prepends_and_leaves_the_original_untouched() {
    let facility = Facility::new(draft()).expect("valid draft");
    let first = review(Actor::Admin);
    let second = review(Actor::Admin);

    let once = facility.with_review(first.clone());
    let twice = once.with_review(second.clone());

    assert!(facility.reviews().is_empty());
    assert_eq!(once.reviews().len(), 1);
    assert_eq!(twice.reviews().first().map(|r| r.id), Some(second.id));
    assert_eq!(twice.reviews().get(1).map(|r| r.id), Some(first.id));
}

#[test]
fn approved_reviews_hide_the_moderation_queue() {
    let facility = Facility::new(draft())
        .expect("valid draft")
        .with_review(review(Actor::User))
        .with_review(review(Actor::Admin));

    let approved: Vec<_> = facility.approved_reviews().collect();
    assert_eq!(approved.len(), 1);
    assert_eq!(approved.first().map(|r| r.status), Some(ReviewStatus::Approved));
}

#[test]
fn deserialising_validates_the_draft() {
    let json = r#"{
        "id": "3fa85f64-5717-4562-b3fc-2c963f66afa6",
        "name": "Beach Road Public Toilet",
        "position": {"lat": 8.51, "lng": 76.93},
        "paid": false,
        "hygieneRating": 3.5,
        "wheelchairAccessible": false,
        "sanitaryProducts": true,
        "showers": false
    }"#;
    let facility: Facility = serde_json::from_str(json).expect("valid facility JSON");
    assert!(facility.reviews().is_empty());

    let invalid = json.replace("3.5", "9.0");
    let result: Result<Facility, _> = serde_json::from_str(&invalid);
    assert!(result.is_err());
}
