//! Deterministic facility generation from seed configurations.
//!
//! This module provides the core generation function that produces
//! reproducible facility fixtures. The same seed value always produces
//! identical output.

use fake::Fake;
use fake::faker::address::raw::StreetName;
use fake::locales::EN;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::config::SeedConfig;
use crate::error::GenerationError;

/// Maximum number of attempts to generate a usable facility name.
const MAX_NAME_ATTEMPTS: usize = 100;

/// Probability that a generated facility charges an entry fee.
const PAID_PROBABILITY: f64 = 0.5;

/// Probability that a paid facility charges the lower fee tier.
const LOW_FEE_PROBABILITY: f64 = 0.5;

/// Probability that a facility is wheelchair accessible.
const WHEELCHAIR_PROBABILITY: f64 = 0.5;

/// Probability that a facility stocks sanitary products.
const SANITARY_PRODUCTS_PROBABILITY: f64 = 0.5;

/// Probability that a facility offers showers.
const SHOWERS_PROBABILITY: f64 = 0.7;

/// Lowest hygiene rating assigned to generated facilities.
const MIN_HYGIENE_RATING: u8 = 3;

/// Highest hygiene rating assigned to generated facilities.
const MAX_HYGIENE_RATING: u8 = 5;

/// A generated facility fixture.
///
/// Plain data only: the application converts seeds into validated domain
/// entities at its own boundary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(deny_unknown_fields)]
pub struct FacilitySeed {
    /// Stable identifier, deterministically derived from the RNG.
    pub id: Uuid,
    /// Display name.
    pub name: String,
    /// Latitude, degrees.
    pub lat: f64,
    /// Longitude, degrees.
    pub lng: f64,
    /// Whether the facility charges an entry fee.
    pub paid: bool,
    /// Fee label, present only when `paid` is set.
    pub price: Option<String>,
    /// Hygiene rating in `[1, 5]`.
    pub hygiene_rating: f32,
    /// Wheelchair accessibility flag.
    pub wheelchair_accessible: bool,
    /// Sanitary products availability flag.
    pub sanitary_products: bool,
    /// Showers availability flag.
    pub showers: bool,
}

/// Generates facility fixtures from a seed configuration.
///
/// Uses the configuration's `seed` value to initialise a deterministic RNG,
/// ensuring identical output for the same configuration. Generated
/// facilities have:
///
/// - Unique UUIDs (deterministically generated)
/// - Street-based display names
/// - Positions within `spread_degrees` of the configured centre
/// - A fee label only when the facility is paid
/// - Hygiene ratings between 3 and 5
///
/// # Errors
///
/// Returns [`GenerationError`] if name generation fails after the maximum
/// number of retries.
///
/// # Example
///
/// ```
/// use seed_data::{SeedConfig, generate_facilities};
///
/// let config = SeedConfig::new(42, 3, 8.5241, 76.9366, 0.005).expect("valid");
/// let facilities = generate_facilities(&config).expect("generated");
///
/// assert_eq!(facilities.len(), 3);
/// // Same configuration produces identical facilities.
/// let again = generate_facilities(&config).expect("generated");
/// assert_eq!(facilities, again);
/// ```
pub fn generate_facilities(config: &SeedConfig) -> Result<Vec<FacilitySeed>, GenerationError> {
    let mut rng = ChaCha8Rng::seed_from_u64(config.seed());
    let mut facilities = Vec::with_capacity(config.facility_count());

    for _ in 0..config.facility_count() {
        let facility = generate_single_facility(&mut rng, config)?;
        facilities.push(facility);
    }

    Ok(facilities)
}

/// Generates a single facility with the provided RNG.
fn generate_single_facility(
    rng: &mut ChaCha8Rng,
    config: &SeedConfig,
) -> Result<FacilitySeed, GenerationError> {
    let id = Uuid::from_u128(rng.random());
    let name = generate_name(rng)?;

    let lat = jitter(rng, config.centre_lat(), config.spread_degrees()).clamp(-90.0, 90.0);
    let lng = jitter(rng, config.centre_lng(), config.spread_degrees()).clamp(-180.0, 180.0);

    let paid = rng.random_bool(PAID_PROBABILITY);
    let price = paid.then(|| {
        if rng.random_bool(LOW_FEE_PROBABILITY) {
            "₹5".to_owned()
        } else {
            "₹10".to_owned()
        }
    });

    let hygiene_rating = f32::from(rng.random_range(MIN_HYGIENE_RATING..=MAX_HYGIENE_RATING));

    Ok(FacilitySeed {
        id,
        name,
        lat,
        lng,
        paid,
        price,
        hygiene_rating,
        wheelchair_accessible: rng.random_bool(WHEELCHAIR_PROBABILITY),
        sanitary_products: rng.random_bool(SANITARY_PRODUCTS_PROBABILITY),
        showers: rng.random_bool(SHOWERS_PROBABILITY),
    })
}

/// Generates a non-empty facility name using the provided RNG.
///
/// Retries up to `MAX_NAME_ATTEMPTS` times if the faker produces a blank
/// street name.
fn generate_name(rng: &mut ChaCha8Rng) -> Result<String, GenerationError> {
    for _ in 0..MAX_NAME_ATTEMPTS {
        let street: String = StreetName(EN).fake_with_rng(rng);
        let trimmed = street.trim();
        if !trimmed.is_empty() {
            return Ok(format!("{trimmed} Public Toilet"));
        }
    }

    Err(GenerationError::NameGenerationFailed {
        max_attempts: MAX_NAME_ATTEMPTS,
    })
}

/// Offsets `centre` by a uniform value in `[-spread, spread]`.
fn jitter(rng: &mut ChaCha8Rng, centre: f64, spread: f64) -> f64 {
    centre + (rng.random::<f64>() - 0.5) * 2.0 * spread
}
