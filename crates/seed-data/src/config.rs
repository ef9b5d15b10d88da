//! Seed configuration types and JSON parsing.
//!
//! A configuration names the RNG seed, how many facilities to produce, and
//! where on the map to scatter them. Configurations are validated on
//! construction so the generator can assume well-formed input.

use serde::Deserialize;

use crate::error::ConfigError;

/// Current supported configuration version.
const SUPPORTED_VERSION: u32 = 1;

/// A validated seed configuration.
///
/// # Example
///
/// ```
/// use seed_data::SeedConfig;
///
/// let json = r#"{
///     "version": 1,
///     "seed": 42,
///     "facilityCount": 5,
///     "centre": {"lat": 8.5241, "lng": 76.9366},
///     "spreadDegrees": 0.005
/// }"#;
///
/// let config = SeedConfig::from_json(json).expect("valid configuration");
/// assert_eq!(config.facility_count(), 5);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct SeedConfig {
    seed: u64,
    facility_count: usize,
    centre_lat: f64,
    centre_lng: f64,
    spread_degrees: f64,
}

impl SeedConfig {
    /// Builds a configuration from raw parts.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the count is zero, a centre coordinate is
    /// out of range, or the spread is negative or not finite.
    pub fn new(
        seed: u64,
        facility_count: usize,
        centre_lat: f64,
        centre_lng: f64,
        spread_degrees: f64,
    ) -> Result<Self, ConfigError> {
        if facility_count == 0 {
            return Err(ConfigError::EmptyFacilityCount);
        }
        if !centre_lat.is_finite() || !(-90.0..=90.0).contains(&centre_lat) {
            return Err(ConfigError::InvalidCentre {
                field: "lat",
                value: centre_lat,
            });
        }
        if !centre_lng.is_finite() || !(-180.0..=180.0).contains(&centre_lng) {
            return Err(ConfigError::InvalidCentre {
                field: "lng",
                value: centre_lng,
            });
        }
        if !spread_degrees.is_finite() || spread_degrees < 0.0 {
            return Err(ConfigError::InvalidSpread {
                value: spread_degrees,
            });
        }

        Ok(Self {
            seed,
            facility_count,
            centre_lat,
            centre_lng,
            spread_degrees,
        })
    }

    /// Parses a configuration from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the JSON is malformed, the version is
    /// unsupported, or any value fails validation.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let raw: RawSeedConfig =
            serde_json::from_str(json).map_err(|e| ConfigError::ParseError {
                message: e.to_string(),
            })?;

        if raw.version != SUPPORTED_VERSION {
            return Err(ConfigError::UnsupportedVersion {
                expected: SUPPORTED_VERSION,
                actual: raw.version,
            });
        }

        Self::new(
            raw.seed,
            raw.facility_count,
            raw.centre.lat,
            raw.centre.lng,
            raw.spread_degrees,
        )
    }

    /// RNG seed value.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Number of facilities to generate.
    pub fn facility_count(&self) -> usize {
        self.facility_count
    }

    /// Latitude of the scatter centre, degrees.
    pub fn centre_lat(&self) -> f64 {
        self.centre_lat
    }

    /// Longitude of the scatter centre, degrees.
    pub fn centre_lng(&self) -> f64 {
        self.centre_lng
    }

    /// Maximum coordinate offset from the centre, degrees.
    pub fn spread_degrees(&self) -> f64 {
        self.spread_degrees
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(deny_unknown_fields)]
struct RawSeedConfig {
    version: u32,
    seed: u64,
    facility_count: usize,
    centre: RawCentre,
    spread_degrees: f64,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawCentre {
    lat: f64,
    lng: f64,
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    const VALID_JSON: &str = r#"{
        "version": 1,
        "seed": 42,
        "facilityCount": 5,
        "centre": {"lat": 8.5241, "lng": 76.9366},
        "spreadDegrees": 0.005
    }"#;

    #[test]
    fn parses_valid_configuration() {
        let config = SeedConfig::from_json(VALID_JSON).expect("valid configuration");
        assert_eq!(config.seed(), 42);
        assert_eq!(config.facility_count(), 5);
        assert!((config.centre_lat() - 8.5241).abs() < f64::EPSILON);
        assert!((config.centre_lng() - 76.9366).abs() < f64::EPSILON);
    }

    #[test]
    fn rejects_malformed_json() {
        let result = SeedConfig::from_json("not valid json");
        assert!(matches!(result, Err(ConfigError::ParseError { .. })));
    }

    #[test]
    fn rejects_unsupported_version() {
        let json = r#"{
            "version": 2,
            "seed": 1,
            "facilityCount": 1,
            "centre": {"lat": 0.0, "lng": 0.0},
            "spreadDegrees": 0.0
        }"#;
        let result = SeedConfig::from_json(json);
        assert_eq!(
            result,
            Err(ConfigError::UnsupportedVersion {
                expected: 1,
                actual: 2,
            })
        );
    }

    #[test]
    fn rejects_zero_facility_count() {
        let result = SeedConfig::new(1, 0, 0.0, 0.0, 0.0);
        assert_eq!(result, Err(ConfigError::EmptyFacilityCount));
    }

    #[rstest]
    #[case(91.0, 0.0, "lat")]
    #[case(-90.5, 0.0, "lat")]
    #[case(0.0, 180.5, "lng")]
    #[case(0.0, -181.0, "lng")]
    #[case(f64::NAN, 0.0, "lat")]
    fn rejects_out_of_range_centre(#[case] lat: f64, #[case] lng: f64, #[case] field: &str) {
        let result = SeedConfig::new(1, 1, lat, lng, 0.0);
        match result {
            Err(ConfigError::InvalidCentre { field: got, .. }) => assert_eq!(got, field),
            other => panic!("expected InvalidCentre, got {other:?}"),
        }
    }

    #[rstest]
    #[case(-0.001)]
    #[case(f64::INFINITY)]
    fn rejects_invalid_spread(#[case] spread: f64) {
        let result = SeedConfig::new(1, 1, 0.0, 0.0, spread);
        assert!(matches!(result, Err(ConfigError::InvalidSpread { .. })));
    }
}
