//! JSON location catalog
//!
//! Loads locations and reviews from a JSON document, materializing every
//! coordinate and score through the validating domain constructors.
//!
//! ```json
//! {
//!   "locations": [
//!     { "id": "…uuid…", "name": "Seoul City Hall", "category": "landmark",
//!       "latitude": "37.5663", "longitude": "126.9779" }
//!   ],
//!   "reviews": [
//!     { "location_id": "…uuid…", "score": "4.5", "comment": "Great view" }
//!   ]
//! }
//! ```

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use chrono::Utc;
use domain::{
    Decimal, DomainError, GeoCoordinate, Location, LocationId, Rating, Review, ValidationError,
};
use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, info};

/// Errors raised while loading a catalog
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The catalog file could not be read
    #[error("Failed to read catalog {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The document is not valid catalog JSON
    #[error("Invalid catalog JSON: {0}")]
    Parse(#[from] serde_json::Error),

    /// A location record failed domain validation
    #[error("Location #{index}: {source}")]
    InvalidLocation {
        index: usize,
        #[source]
        source: DomainError,
    },

    /// A location record has only one of latitude and longitude
    #[error("Location #{index}: latitude and longitude must be given together")]
    PartialCoordinate { index: usize },

    /// Two location records share an ID
    #[error("Location #{index}: duplicate id {id}")]
    DuplicateLocation { index: usize, id: LocationId },

    /// A review record carries an invalid score
    #[error("Review #{index}: {source}")]
    InvalidReview {
        index: usize,
        #[source]
        source: ValidationError,
    },

    /// A review refers to a location that is not in the catalog
    #[error("Review #{index}: unknown location {id}")]
    UnknownLocation { index: usize, id: LocationId },
}

#[derive(Debug, Deserialize)]
struct CatalogDocument {
    #[serde(default)]
    locations: Vec<LocationRecord>,
    #[serde(default)]
    reviews: Vec<ReviewRecord>,
}

#[derive(Debug, Deserialize)]
struct LocationRecord {
    #[serde(default)]
    id: Option<LocationId>,
    name: String,
    #[serde(default)]
    category: Option<String>,
    #[serde(default)]
    latitude: Option<Decimal>,
    #[serde(default)]
    longitude: Option<Decimal>,
}

#[derive(Debug, Deserialize)]
struct ReviewRecord {
    location_id: LocationId,
    #[serde(default)]
    score: Option<Decimal>,
    #[serde(default)]
    comment: Option<String>,
}

/// An in-memory set of locations and their reviews
#[derive(Debug, Clone, Default)]
pub struct LocationCatalog {
    locations: Vec<Location>,
    reviews: Vec<Review>,
}

impl LocationCatalog {
    /// Read and validate a catalog file
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let catalog = Self::from_json_str(&contents)?;
        info!(
            path = %path.display(),
            locations = catalog.locations.len(),
            reviews = catalog.reviews.len(),
            "Catalog loaded"
        );
        Ok(catalog)
    }

    /// Parse and validate a catalog document
    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        let document: CatalogDocument = serde_json::from_str(json)?;

        let mut seen = HashSet::new();
        let mut locations = Vec::with_capacity(document.locations.len());
        for (index, record) in document.locations.into_iter().enumerate() {
            let location = record.into_location(index)?;
            if !seen.insert(location.id()) {
                return Err(CatalogError::DuplicateLocation {
                    index,
                    id: location.id(),
                });
            }
            locations.push(location);
        }

        let reviews = document
            .reviews
            .into_iter()
            .enumerate()
            .map(|(index, record)| record.into_review(index, &seen))
            .collect::<Result<Vec<_>, _>>()?;

        debug!(
            locations = locations.len(),
            reviews = reviews.len(),
            "Catalog parsed"
        );
        Ok(Self { locations, reviews })
    }

    /// All locations in document order
    #[must_use]
    pub fn locations(&self) -> &[Location] {
        &self.locations
    }

    /// All reviews in document order
    #[must_use]
    pub fn reviews(&self) -> &[Review] {
        &self.reviews
    }

    /// Find a location by ID or by case-insensitive name
    pub fn find(&self, key: &str) -> Result<&Location, DomainError> {
        let by_id = LocationId::parse(key).ok();
        self.locations
            .iter()
            .find(|l| Some(l.id()) == by_id || l.name().eq_ignore_ascii_case(key.trim()))
            .ok_or_else(|| DomainError::not_found("Location", key))
    }
}

impl LocationRecord {
    fn into_location(self, index: usize) -> Result<Location, CatalogError> {
        let coordinate = match (self.latitude, self.longitude) {
            (Some(latitude), Some(longitude)) => Some(
                GeoCoordinate::new(latitude, longitude).map_err(|e| {
                    CatalogError::InvalidLocation {
                        index,
                        source: e.into(),
                    }
                })?,
            ),
            (None, None) => None,
            _ => return Err(CatalogError::PartialCoordinate { index }),
        };

        let created_at = Utc::now();
        Location::restore(
            self.id.unwrap_or_default(),
            self.name,
            self.category,
            coordinate,
            created_at,
            created_at,
        )
        .map_err(|source| CatalogError::InvalidLocation { index, source })
    }
}

impl ReviewRecord {
    fn into_review(self, index: usize, known: &HashSet<LocationId>) -> Result<Review, CatalogError> {
        if !known.contains(&self.location_id) {
            return Err(CatalogError::UnknownLocation {
                index,
                id: self.location_id,
            });
        }
        let rating = self
            .score
            .map(Rating::new)
            .transpose()
            .map_err(|source| CatalogError::InvalidReview { index, source })?;
        Ok(Review::new(self.location_id, rating, self.comment))
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;
    use std::str::FromStr;

    use super::*;

    const CITY_HALL: &str = "6f1c2d3e-4b5a-4c6d-8e7f-901234567890";
    const PALACE: &str = "0a1b2c3d-4e5f-4a6b-9c7d-8e9f0a1b2c3d";

    fn sample_json() -> String {
        format!(
            r#"{{
  "locations": [
    {{ "id": "{CITY_HALL}", "name": "Seoul City Hall", "category": "Landmark",
       "latitude": "37.5663", "longitude": "126.9779" }},
    {{ "id": "{PALACE}", "name": "Gyeongbokgung", "latitude": "37.5796", "longitude": "126.977" }},
    {{ "name": "Pop-up Market" }}
  ],
  "reviews": [
    {{ "location_id": "{CITY_HALL}", "score": "4.0" }},
    {{ "location_id": "{CITY_HALL}", "score": "5", "comment": "Great view" }},
    {{ "location_id": "{PALACE}" }}
  ]
}}"#
        )
    }

    #[test]
    fn test_parse_sample_catalog() {
        let catalog = LocationCatalog::from_json_str(&sample_json()).unwrap();

        assert_eq!(catalog.locations().len(), 3);
        assert_eq!(catalog.reviews().len(), 3);

        let city_hall = &catalog.locations()[0];
        assert_eq!(city_hall.id(), LocationId::parse(CITY_HALL).unwrap());
        assert_eq!(city_hall.category(), Some("landmark"));
        assert_eq!(
            city_hall.coordinate().unwrap().latitude(),
            Decimal::from_str("37.5663").unwrap()
        );

        assert!(!catalog.locations()[2].has_coordinate());
        assert!(!catalog.reviews()[2].is_rated());
    }

    #[test]
    fn test_empty_document() {
        let catalog = LocationCatalog::from_json_str("{}").unwrap();
        assert!(catalog.locations().is_empty());
        assert!(catalog.reviews().is_empty());
    }

    #[test]
    fn test_find_by_id_and_name() {
        let catalog = LocationCatalog::from_json_str(&sample_json()).unwrap();

        assert_eq!(catalog.find(PALACE).unwrap().name(), "Gyeongbokgung");
        assert_eq!(catalog.find("seoul city hall").unwrap().name(), "Seoul City Hall");
        assert!(matches!(
            catalog.find("Busan Tower"),
            Err(DomainError::NotFound { .. })
        ));
    }

    #[test]
    fn test_out_of_range_coordinate_rejected() {
        let json = r#"{"locations": [
            {"name": "Fine", "latitude": "1", "longitude": "1"},
            {"name": "Broken", "latitude": "91", "longitude": "1"}
        ]}"#;

        let err = LocationCatalog::from_json_str(json).unwrap_err();

        assert!(matches!(err, CatalogError::InvalidLocation { index: 1, .. }));
        assert!(err.to_string().starts_with("Location #1: invalid latitude"));
    }

    #[test]
    fn test_too_precise_coordinate_rejected() {
        let json = r#"{"locations": [
            {"name": "Precise", "latitude": "37.123456789", "longitude": "1"}
        ]}"#;
        assert!(matches!(
            LocationCatalog::from_json_str(json),
            Err(CatalogError::InvalidLocation { index: 0, .. })
        ));
    }

    #[test]
    fn test_partial_coordinate_rejected() {
        let json = r#"{"locations": [{"name": "Half", "latitude": "10"}]}"#;
        assert!(matches!(
            LocationCatalog::from_json_str(json),
            Err(CatalogError::PartialCoordinate { index: 0 })
        ));
    }

    #[test]
    fn test_blank_name_rejected() {
        let json = r#"{"locations": [{"name": "  "}]}"#;
        assert!(matches!(
            LocationCatalog::from_json_str(json),
            Err(CatalogError::InvalidLocation {
                source: DomainError::InvalidName(_),
                ..
            })
        ));
    }

    #[test]
    fn test_duplicate_location_rejected() {
        let json = format!(
            r#"{{"locations": [{{"id": "{PALACE}", "name": "A"}}, {{"id": "{PALACE}", "name": "B"}}]}}"#
        );
        assert!(matches!(
            LocationCatalog::from_json_str(&json),
            Err(CatalogError::DuplicateLocation { index: 1, .. })
        ));
    }

    #[test]
    fn test_invalid_review_score_rejected() {
        let json = format!(
            r#"{{"locations": [{{"id": "{PALACE}", "name": "A"}}],
                "reviews": [{{"location_id": "{PALACE}", "score": "4.25"}}]}}"#
        );
        let err = LocationCatalog::from_json_str(&json).unwrap_err();
        assert!(matches!(err, CatalogError::InvalidReview { index: 0, .. }));
    }

    #[test]
    fn test_review_for_unknown_location_rejected() {
        let json = format!(r#"{{"reviews": [{{"location_id": "{PALACE}", "score": "3"}}]}}"#);
        assert!(matches!(
            LocationCatalog::from_json_str(&json),
            Err(CatalogError::UnknownLocation { index: 0, .. })
        ));
    }

    #[test]
    fn test_malformed_json_rejected() {
        assert!(matches!(
            LocationCatalog::from_json_str("{not json"),
            Err(CatalogError::Parse(_))
        ));
    }

    #[test]
    fn test_from_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(sample_json().as_bytes()).unwrap();

        let catalog = LocationCatalog::from_path(file.path()).unwrap();
        assert_eq!(catalog.locations().len(), 3);
    }

    #[test]
    fn test_from_missing_path() {
        let err = LocationCatalog::from_path("/nonexistent/catalog.json").unwrap_err();
        assert!(matches!(err, CatalogError::Io { .. }));
        assert!(err.to_string().contains("/nonexistent/catalog.json"));
    }
}
