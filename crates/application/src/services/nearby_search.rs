//! Nearby location search
//!
//! Ranks located places by their great-circle distance from a search center.

use std::cmp::Ordering;

use domain::{GeoCoordinate, Location};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::error::ApplicationError;

/// Default search radius in meters
const DEFAULT_RADIUS_METERS: f64 = 5_000.0;

/// Default cap on the number of results
const DEFAULT_MAX_RESULTS: usize = 20;

/// Configuration for nearby search behavior
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Radius applied when a query does not set one (`None` = unbounded)
    ///
    /// Written as `0` in configuration files, which have no null.
    #[serde(default = "default_radius", with = "unbounded_as_zero")]
    pub default_radius_meters: Option<f64>,

    /// Upper bound on results returned by a single query
    #[serde(default = "default_max_results")]
    pub max_results: usize,
}

#[allow(clippy::unnecessary_wraps)]
const fn default_radius() -> Option<f64> {
    Some(DEFAULT_RADIUS_METERS)
}

const fn default_max_results() -> usize {
    DEFAULT_MAX_RESULTS
}

/// Maps an unbounded radius to `0` and back
mod unbounded_as_zero {
    use serde::{Deserialize, Deserializer, Serializer};

    #[allow(clippy::ref_option)]
    pub fn serialize<S: Serializer>(radius: &Option<f64>, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(radius.unwrap_or(0.0))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<f64>, D::Error> {
        let radius = Option::<f64>::deserialize(deserializer)?;
        Ok(radius.filter(|r| *r != 0.0))
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            default_radius_meters: default_radius(),
            max_results: default_max_results(),
        }
    }
}

impl SearchConfig {
    /// Check that the radius is a non-negative finite number and the result cap is non-zero
    pub fn validate(&self) -> Result<(), ApplicationError> {
        if let Some(radius) = self.default_radius_meters {
            check_radius(radius).map_err(ApplicationError::Configuration)?;
        }
        if self.max_results == 0 {
            return Err(ApplicationError::Configuration(
                "max_results must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}

fn check_radius(radius: f64) -> Result<(), String> {
    if !radius.is_finite() || radius < 0.0 {
        return Err(format!(
            "radius must be a non-negative number of meters, got {radius}"
        ));
    }
    Ok(())
}

/// A single nearby search request
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NearbyQuery {
    /// Point distances are measured from
    pub center: GeoCoordinate,
    /// Maximum distance in meters, overriding the configured default
    pub radius_meters: Option<f64>,
    /// Maximum number of results, capped by the configured maximum
    pub limit: Option<usize>,
}

impl NearbyQuery {
    /// Query around `center` using configured defaults
    #[must_use]
    pub const fn new(center: GeoCoordinate) -> Self {
        Self {
            center,
            radius_meters: None,
            limit: None,
        }
    }

    #[must_use]
    pub const fn with_radius(mut self, radius_meters: f64) -> Self {
        self.radius_meters = Some(radius_meters);
        self
    }

    #[must_use]
    pub const fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }
}

/// A location paired with its distance from the search center
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NearbyLocation {
    pub location: Location,
    pub distance_meters: f64,
}

/// Distance-ranked search over a set of locations
#[derive(Debug, Clone, Default)]
pub struct NearbySearchService {
    config: SearchConfig,
}

impl NearbySearchService {
    /// Create a service, rejecting invalid configuration
    pub fn new(config: SearchConfig) -> Result<Self, ApplicationError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Get the active configuration
    #[must_use]
    pub const fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Find locations around `query.center`, nearest first
    ///
    /// Locations without a coordinate are skipped. Ties in distance are broken
    /// by name so the output order is stable.
    #[instrument(skip(self, locations), fields(candidates = locations.len()))]
    pub fn search(
        &self,
        locations: &[Location],
        query: &NearbyQuery,
    ) -> Result<Vec<NearbyLocation>, ApplicationError> {
        let radius = query.radius_meters.or(self.config.default_radius_meters);
        if let Some(radius) = radius {
            check_radius(radius).map_err(ApplicationError::InvalidQuery)?;
        }

        let limit = match query.limit {
            Some(0) => {
                return Err(ApplicationError::InvalidQuery(
                    "limit must be greater than zero".to_string(),
                ));
            },
            Some(limit) => limit.min(self.config.max_results),
            None => self.config.max_results,
        };

        let mut matches: Vec<NearbyLocation> = locations
            .iter()
            .filter_map(|location| {
                let distance_meters = location.distance_from(&query.center)?;
                Some(NearbyLocation {
                    location: location.clone(),
                    distance_meters,
                })
            })
            .filter(|hit| radius.is_none_or(|r| hit.distance_meters <= r))
            .collect();

        matches.sort_by(compare_hits);
        let total = matches.len();
        matches.truncate(limit);

        debug!(
            center = %query.center,
            radius = ?radius,
            matched = total,
            returned = matches.len(),
            "Nearby search completed"
        );

        Ok(matches)
    }
}

fn compare_hits(a: &NearbyLocation, b: &NearbyLocation) -> Ordering {
    a.distance_meters
        .total_cmp(&b.distance_meters)
        .then_with(|| a.location.name().cmp(b.location.name()))
}
