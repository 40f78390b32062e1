//! Geographic coordinate value object
//!
//! A validated latitude/longitude pair stored as exact decimals.
//!
//! # Examples
//!
//! ```
//! use domain::value_objects::GeoCoordinate;
//!
//! let seoul = GeoCoordinate::from_degrees(37.5665, 126.9780).expect("valid coordinate");
//! let busan = GeoCoordinate::from_degrees(35.1796, 129.0756).expect("valid coordinate");
//!
//! let meters = seoul.distance_to(&busan);
//! assert!((meters - 325_000.0).abs() < 5_000.0);
//!
//! // Out-of-range values never produce a coordinate
//! assert!(GeoCoordinate::from_degrees(91.0, 0.0).is_err());
//! ```

use std::fmt;

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};

use super::decimal_bounds::{decimal_from_f64, ensure_in_range, ensure_scale};
use crate::errors::ValidationError;

/// Mean Earth radius used by the haversine formula, in meters
pub const EARTH_RADIUS_METERS: f64 = 6_371_000.0;

/// Maximum number of fractional digits accepted for either axis
pub const MAX_FRACTION_DIGITS: u32 = 8;

/// A geographic coordinate with latitude and longitude in degrees
///
/// Latitude is within [-90, 90], longitude within [-180, 180], and both carry
/// at most eight fractional digits. An instance that violates these bounds
/// cannot be constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct GeoCoordinate {
    latitude: Decimal,
    longitude: Decimal,
}

impl GeoCoordinate {
    /// Create a new coordinate with validation
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if latitude is not in [-90, 90], longitude is
    /// not in [-180, 180], or either value has more than eight fractional digits.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::str::FromStr;
    ///
    /// use domain::value_objects::GeoCoordinate;
    /// use rust_decimal::Decimal;
    ///
    /// let lat = Decimal::from_str("52.52").unwrap();
    /// let lon = Decimal::from_str("13.405").unwrap();
    /// let berlin = GeoCoordinate::new(lat, lon).unwrap();
    /// assert_eq!(berlin.latitude(), lat);
    ///
    /// let too_precise = Decimal::from_str("52.123456789").unwrap();
    /// assert!(GeoCoordinate::new(too_precise, lon).is_err());
    /// ```
    pub fn new(latitude: Decimal, longitude: Decimal) -> Result<Self, ValidationError> {
        validate_axis("latitude", latitude, 90)?;
        validate_axis("longitude", longitude, 180)?;
        Ok(Self {
            latitude,
            longitude,
        })
    }

    /// Create a coordinate from floating-point degrees
    ///
    /// Each float is converted to its shortest decimal form before validation.
    pub fn from_degrees(latitude: f64, longitude: f64) -> Result<Self, ValidationError> {
        Self::new(
            decimal_from_f64("latitude", latitude)?,
            decimal_from_f64("longitude", longitude)?,
        )
    }

    /// Get the latitude
    #[must_use]
    pub const fn latitude(&self) -> Decimal {
        self.latitude
    }

    /// Get the longitude
    #[must_use]
    pub const fn longitude(&self) -> Decimal {
        self.longitude
    }

    /// Latitude as floating-point degrees
    #[must_use]
    pub fn latitude_degrees(&self) -> f64 {
        to_degrees(self.latitude)
    }

    /// Longitude as floating-point degrees
    #[must_use]
    pub fn longitude_degrees(&self) -> f64 {
        to_degrees(self.longitude)
    }

    /// Great-circle distance to another coordinate in meters
    ///
    /// Uses the haversine formula on a spherical Earth of radius
    /// [`EARTH_RADIUS_METERS`].
    #[must_use]
    pub fn distance_to(&self, other: &Self) -> f64 {
        let lat1_rad = self.latitude_degrees().to_radians();
        let lat2_rad = other.latitude_degrees().to_radians();
        let delta_lat = (other.latitude_degrees() - self.latitude_degrees()).to_radians();
        let delta_lon = (other.longitude_degrees() - self.longitude_degrees()).to_radians();

        // Rounding can push `a` just past 1.0 for near-antipodal points.
        let a = (lat1_rad.cos() * lat2_rad.cos())
            .mul_add(
                (delta_lon / 2.0).sin().powi(2),
                (delta_lat / 2.0).sin().powi(2),
            )
            .clamp(0.0, 1.0);
        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

        EARTH_RADIUS_METERS * c
    }
}

fn validate_axis(field: &'static str, value: Decimal, limit: i64) -> Result<(), ValidationError> {
    ensure_in_range(field, value, Decimal::from(-limit), Decimal::from(limit))?;
    ensure_scale(field, value, MAX_FRACTION_DIGITS)
}

// Every Decimal in the validated ranges converts to f64.
fn to_degrees(value: Decimal) -> f64 {
    value.to_f64().unwrap_or_default()
}

impl fmt::Display for GeoCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", self.latitude, self.longitude)
    }
}

impl TryFrom<(Decimal, Decimal)> for GeoCoordinate {
    type Error = ValidationError;

    fn try_from((latitude, longitude): (Decimal, Decimal)) -> Result<Self, Self::Error> {
        Self::new(latitude, longitude)
    }
}

#[derive(Deserialize)]
struct RawGeoCoordinate {
    latitude: Decimal,
    longitude: Decimal,
}

/// Custom deserialization that validates both axes
impl<'de> Deserialize<'de> for GeoCoordinate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = RawGeoCoordinate::deserialize(deserializer)?;
        Self::new(raw.latitude, raw.longitude).map_err(serde::de::Error::custom)
    }
}
