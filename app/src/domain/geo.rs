//! Geographic value objects and distance helpers.
//!
//! [`Position`] enforces coordinate ranges at the construction boundary so
//! the query engine can stay total over its inputs. Distances use the
//! haversine great-circle formula on a spherical Earth.

use serde::{Deserialize, Serialize};
use url::Url;

/// Mean Earth radius in kilometres, as used by the haversine formula.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Domain error returned when coordinate values are invalid.
#[derive(Debug, Clone, PartialEq)]
pub enum GeoValidationError {
    /// Latitude was not finite or fell outside `[-90, 90]`.
    InvalidLatitude {
        /// The rejected value.
        value: f64,
    },
    /// Longitude was not finite or fell outside `[-180, 180]`.
    InvalidLongitude {
        /// The rejected value.
        value: f64,
    },
}

impl std::fmt::Display for GeoValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidLatitude { value } => {
                write!(f, "latitude must be a finite value in [-90, 90] (got {value})")
            }
            Self::InvalidLongitude { value } => {
                write!(
                    f,
                    "longitude must be a finite value in [-180, 180] (got {value})"
                )
            }
        }
    }
}

impl std::error::Error for GeoValidationError {}

/// A point on the Earth's surface in degrees.
///
/// ## Invariants
/// - `lat` is finite and within `[-90, 90]`.
/// - `lng` is finite and within `[-180, 180]`.
///
/// # Examples
/// ```
/// use app::domain::Position;
///
/// let here = Position::new(8.5241, 76.9366)?;
/// assert_eq!(here.lat(), 8.5241);
/// # Ok::<(), app::domain::GeoValidationError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Position {
    lat: f64,
    lng: f64,
}

impl Position {
    /// Creates a validated position.
    ///
    /// # Errors
    ///
    /// Returns [`GeoValidationError`] when either coordinate is not finite
    /// or falls outside its valid range.
    pub fn new(lat: f64, lng: f64) -> Result<Self, GeoValidationError> {
        if !lat.is_finite() || !(-90.0..=90.0).contains(&lat) {
            return Err(GeoValidationError::InvalidLatitude { value: lat });
        }
        if !lng.is_finite() || !(-180.0..=180.0).contains(&lng) {
            return Err(GeoValidationError::InvalidLongitude { value: lng });
        }
        Ok(Self { lat, lng })
    }

    /// Latitude in degrees.
    pub fn lat(self) -> f64 {
        self.lat
    }

    /// Longitude in degrees.
    pub fn lng(self) -> f64 {
        self.lng
    }

    /// Great-circle distance to `other` in kilometres.
    ///
    /// Haversine formula on a sphere of radius [`EARTH_RADIUS_KM`].
    /// Symmetric, never negative, zero for coincident points, and
    /// well-defined at antipodes.
    ///
    /// # Examples
    /// ```
    /// use app::domain::Position;
    ///
    /// let a = Position::new(0.0, 0.0)?;
    /// let b = Position::new(0.0, 1.0)?;
    /// assert!((a.distance_km(b) - 111.19).abs() < 0.01);
    /// # Ok::<(), app::domain::GeoValidationError>(())
    /// ```
    pub fn distance_km(self, other: Self) -> f64 {
        let d_lat = (other.lat - self.lat).to_radians();
        let d_lng = (other.lng - self.lng).to_radians();

        let raw = (d_lat / 2.0).sin().powi(2)
            + self.lat.to_radians().cos()
                * other.lat.to_radians().cos()
                * (d_lng / 2.0).sin().powi(2);
        // Floating-point drift can push the haversine term marginally past
        // 1 at antipodes.
        let h = raw.clamp(0.0, 1.0);

        2.0 * EARTH_RADIUS_KM * h.sqrt().atan2((1.0 - h).sqrt())
    }
}

impl<'de> Deserialize<'de> for Position {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = RawPosition::deserialize(deserializer)?;
        Self::new(raw.lat, raw.lng).map_err(serde::de::Error::custom)
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(deny_unknown_fields)]
struct RawPosition {
    lat: f64,
    lng: f64,
}

/// Formats a distance for display, locale independent.
///
/// Distances below one kilometre render as whole metres; anything longer
/// renders as kilometres with one decimal place.
///
/// # Examples
/// ```
/// assert_eq!(app::domain::format_distance(0.1564), "156m");
/// assert_eq!(app::domain::format_distance(3.25), "3.2km");
/// ```
pub fn format_distance(km: f64) -> String {
    if km < 1.0 {
        format!("{}m", (km * 1000.0).round())
    } else {
        format!("{km:.1}km")
    }
}

/// Builds the external directions link between two positions.
///
/// Mirrors the hand-off the detail view performs: the user's position is the
/// origin and the facility is the destination.
///
/// # Errors
///
/// Propagates URL construction failures; not expected for validated
/// positions.
pub fn directions_url(origin: Position, destination: Position) -> Result<Url, url::ParseError> {
    Url::parse(&format!(
        "https://www.google.com/maps/dir/{},{}/{},{}",
        origin.lat, origin.lng, destination.lat, destination.lng
    ))
}
