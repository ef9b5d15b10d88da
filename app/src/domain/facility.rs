//! Facility aggregate: a public sanitary amenity location.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::geo::Position;
use super::review::Review;

/// Validation errors returned by the facility constructor.
#[derive(Debug, Clone, PartialEq)]
pub enum FacilityValidationError {
    /// A required text field was blank once trimmed.
    EmptyField {
        /// Name of the offending field.
        field: &'static str,
    },
    /// Hygiene rating fell outside `[1, 5]`.
    InvalidRating {
        /// The rejected value.
        rating: f32,
    },
    /// A price label was supplied for a free facility.
    PriceWithoutPayment,
}

impl std::fmt::Display for FacilityValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyField { field } => write!(f, "{field} must not be empty"),
            Self::InvalidRating { rating } => {
                write!(f, "hygiene rating must be between 1.0 and 5.0 (got {rating})")
            }
            Self::PriceWithoutPayment => {
                write!(f, "price labels are only meaningful for paid facilities")
            }
        }
    }
}

impl std::error::Error for FacilityValidationError {}

/// Input payload for [`Facility::new`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(deny_unknown_fields)]
pub struct FacilityDraft {
    /// Unique facility identifier.
    pub id: Uuid,
    /// Display name.
    pub name: String,
    /// Location on the map.
    pub position: Position,
    /// Whether the facility charges an entry fee.
    pub paid: bool,
    /// Fee label, accepted only when `paid` is set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<String>,
    /// Hygiene rating in `[1, 5]`.
    pub hygiene_rating: f32,
    /// Wheelchair accessibility flag.
    pub wheelchair_accessible: bool,
    /// Sanitary products availability flag.
    pub sanitary_products: bool,
    /// Showers availability flag.
    pub showers: bool,
    /// Existing reviews, newest first. New facilities start empty.
    #[serde(default)]
    pub reviews: Vec<Review>,
}

/// A validated facility record.
///
/// Reviews are kept newest first: submission prepends.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Facility {
    id: Uuid,
    name: String,
    position: Position,
    paid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    price: Option<String>,
    hygiene_rating: f32,
    wheelchair_accessible: bool,
    sanitary_products: bool,
    showers: bool,
    reviews: Vec<Review>,
}

impl Facility {
    /// Validate and construct a facility.
    ///
    /// # Errors
    ///
    /// Returns [`FacilityValidationError`] if the name is blank, the
    /// hygiene rating is out of range, or a price label accompanies a free
    /// facility.
    pub fn new(draft: FacilityDraft) -> Result<Self, FacilityValidationError> {
        Self::try_from(draft)
    }

    /// Unique facility identifier.
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Display name.
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Location on the map.
    pub fn position(&self) -> Position {
        self.position
    }

    /// Whether the facility charges an entry fee.
    pub fn paid(&self) -> bool {
        self.paid
    }

    /// Fee label shown instead of "Free".
    pub fn price(&self) -> Option<&str> {
        self.price.as_deref()
    }

    /// Hygiene rating in `[1, 5]`.
    pub fn hygiene_rating(&self) -> f32 {
        self.hygiene_rating
    }

    /// Wheelchair accessibility flag.
    pub fn wheelchair_accessible(&self) -> bool {
        self.wheelchair_accessible
    }

    /// Sanitary products availability flag.
    pub fn sanitary_products(&self) -> bool {
        self.sanitary_products
    }

    /// Showers availability flag.
    pub fn showers(&self) -> bool {
        self.showers
    }

    /// All reviews, newest first, regardless of moderation state.
    pub fn reviews(&self) -> &[Review] {
        self.reviews.as_slice()
    }

    /// Reviews visible in public listings, newest first.
    pub fn approved_reviews(&self) -> impl Iterator<Item = &Review> {
        self.reviews.iter().filter(|review| review.is_approved())
    }

    /// Returns a copy of this facility with `review` prepended.
    pub fn with_review(&self, review: Review) -> Self {
        let mut updated = self.clone();
        updated.reviews.insert(0, review);
        updated
    }
}

impl TryFrom<FacilityDraft> for Facility {
    type Error = FacilityValidationError;

    fn try_from(draft: FacilityDraft) -> Result<Self, Self::Error> {
        let name = draft.name;
        if name.trim().is_empty() {
            return Err(FacilityValidationError::EmptyField {
                field: "facility.name",
            });
        }

        if !(1.0..=5.0).contains(&draft.hygiene_rating) {
            return Err(FacilityValidationError::InvalidRating {
                rating: draft.hygiene_rating,
            });
        }

        if !draft.paid && draft.price.is_some() {
            return Err(FacilityValidationError::PriceWithoutPayment);
        }

        Ok(Self {
            id: draft.id,
            name,
            position: draft.position,
            paid: draft.paid,
            price: draft.price,
            hygiene_rating: draft.hygiene_rating,
            wheelchair_accessible: draft.wheelchair_accessible,
            sanitary_products: draft.sanitary_products,
            showers: draft.showers,
            reviews: draft.reviews,
        })
    }
}

impl<'de> Deserialize<'de> for Facility {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        FacilityDraft::deserialize(deserializer)?
            .try_into()
            .map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests;
