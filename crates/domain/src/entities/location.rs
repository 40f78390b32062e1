//! Location entity
//!
//! A named place that owns zero or one validated coordinate.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::errors::DomainError;
use crate::value_objects::{GeoCoordinate, LocationId};

/// Maximum length of a location name in characters
pub const MAX_NAME_LENGTH: u64 = 120;

/// A place that can be searched by distance and reviewed
///
/// Deserialization goes through [`Location::restore`], so a stored record
/// with an invalid name is rejected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(try_from = "LocationRecord")]
pub struct Location {
    /// Unique location identifier
    id: LocationId,
    /// Display name (trimmed, 1-120 characters)
    #[validate(length(min = 1, max = MAX_NAME_LENGTH))]
    name: String,
    /// Free-form category such as "cafe" or "park"
    category: Option<String>,
    /// Geographic position, if known
    coordinate: Option<GeoCoordinate>,
    /// When the location was created
    created_at: DateTime<Utc>,
    /// When the location was last updated
    updated_at: DateTime<Utc>,
}

#[derive(Deserialize)]
struct LocationRecord {
    id: LocationId,
    name: String,
    #[serde(default)]
    category: Option<String>,
    #[serde(default)]
    coordinate: Option<GeoCoordinate>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<LocationRecord> for Location {
    type Error = DomainError;

    fn try_from(record: LocationRecord) -> Result<Self, Self::Error> {
        Self::restore(
            record.id,
            record.name,
            record.category,
            record.coordinate,
            record.created_at,
            record.updated_at,
        )
    }
}

impl Location {
    /// Create a new location without a coordinate
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidName` if the trimmed name is empty or
    /// longer than [`MAX_NAME_LENGTH`] characters.
    pub fn new(name: impl Into<String>) -> Result<Self, DomainError> {
        let now = Utc::now();
        Self::restore(LocationId::new(), name, None, None, now, now)
    }

    /// Create a new location at the given coordinate
    pub fn with_coordinate(
        name: impl Into<String>,
        coordinate: GeoCoordinate,
    ) -> Result<Self, DomainError> {
        let mut location = Self::new(name)?;
        location.coordinate = Some(coordinate);
        Ok(location)
    }

    /// Restore a location from stored fields, re-validating the name
    pub fn restore(
        id: LocationId,
        name: impl Into<String>,
        category: Option<String>,
        coordinate: Option<GeoCoordinate>,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Result<Self, DomainError> {
        let candidate = Self {
            id,
            name: name.into().trim().to_string(),
            category: category
                .map(|c| c.trim().to_lowercase())
                .filter(|c| !c.is_empty()),
            coordinate,
            created_at,
            updated_at,
        };
        candidate
            .validate()
            .map_err(|e| DomainError::InvalidName(e.to_string()))?;
        Ok(candidate)
    }

    /// Set the category, normalized to lowercase
    #[must_use]
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        let category = category.into().trim().to_lowercase();
        self.category = (!category.is_empty()).then_some(category);
        self
    }

    /// Get the location ID
    #[must_use]
    pub const fn id(&self) -> LocationId {
        self.id
    }

    /// Get the name
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the category
    #[must_use]
    pub fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    /// Get the coordinate
    #[must_use]
    pub const fn coordinate(&self) -> Option<GeoCoordinate> {
        self.coordinate
    }

    /// Get the creation timestamp
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Get the last update timestamp
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Check if the location has a coordinate
    #[must_use]
    pub const fn has_coordinate(&self) -> bool {
        self.coordinate.is_some()
    }

    /// Move the location to a new coordinate
    pub fn relocate(&mut self, coordinate: GeoCoordinate) {
        self.coordinate = Some(coordinate);
        self.updated_at = Utc::now();
    }

    /// Remove the coordinate
    pub fn clear_coordinate(&mut self) {
        self.coordinate = None;
        self.updated_at = Utc::now();
    }

    /// Distance in meters from `center`, or `None` without a coordinate
    #[must_use]
    pub fn distance_from(&self, center: &GeoCoordinate) -> Option<f64> {
        self.coordinate.map(|c| center.distance_to(&c))
    }
}
