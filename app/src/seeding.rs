//! Example facility seeding.
//!
//! Converts deterministic seed-data fixtures into validated domain
//! facilities for demos and tests. Only compiled with the `seed-data`
//! feature.

use seed_data::{FacilitySeed, GenerationError, SeedConfig, generate_facilities};
use thiserror::Error;
use tracing::info;

use crate::domain::facility::{Facility, FacilityDraft, FacilityValidationError};
use crate::domain::geo::{GeoValidationError, Position};

/// Errors raised while generating or converting example facilities.
#[derive(Debug, Error)]
pub enum SeedingError {
    /// Fixture generation failed.
    #[error("facility generation failed: {0}")]
    Generation(#[from] GenerationError),
    /// Generated coordinates failed domain validation.
    #[error("generated coordinates failed validation: {0}")]
    InvalidPosition(#[from] GeoValidationError),
    /// A generated facility failed domain validation.
    #[error("generated facility failed validation: {0}")]
    InvalidFacility(#[from] FacilityValidationError),
}

/// Expands a seed configuration into validated domain facilities.
///
/// # Errors
///
/// Returns [`SeedingError`] if generation fails or a fixture does not
/// satisfy the domain invariants.
pub fn facilities_from_config(config: &SeedConfig) -> Result<Vec<Facility>, SeedingError> {
    let facilities: Vec<Facility> = generate_facilities(config)?
        .into_iter()
        .map(facility_from_seed)
        .collect::<Result<_, _>>()?;

    info!(count = facilities.len(), "seeded example facilities");
    Ok(facilities)
}

fn facility_from_seed(seed: FacilitySeed) -> Result<Facility, SeedingError> {
    let position = Position::new(seed.lat, seed.lng)?;
    Facility::new(FacilityDraft {
        id: seed.id,
        name: seed.name,
        position,
        paid: seed.paid,
        price: seed.price,
        hygiene_rating: seed.hygiene_rating,
        wheelchair_accessible: seed.wheelchair_accessible,
        sanitary_products: seed.sanitary_products,
        showers: seed.showers,
        reviews: Vec::new(),
    })
    .map_err(Into::into)
}
