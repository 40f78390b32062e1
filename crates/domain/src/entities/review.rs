//! Review entity
//!
//! A visitor's review of a location, optionally carrying a rating.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::value_objects::{LocationId, Rating, ReviewId};

/// A review attached to a location
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Review {
    id: ReviewId,
    location_id: LocationId,
    #[serde(default)]
    rating: Option<Rating>,
    #[serde(default)]
    comment: Option<String>,
    created_at: DateTime<Utc>,
}

impl Review {
    /// Create a new review
    #[must_use]
    pub fn new(location_id: LocationId, rating: Option<Rating>, comment: Option<String>) -> Self {
        Self::restore(ReviewId::new(), location_id, rating, comment, Utc::now())
    }

    /// Restore a review from storage
    #[must_use]
    pub fn restore(
        id: ReviewId,
        location_id: LocationId,
        rating: Option<Rating>,
        comment: Option<String>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            location_id,
            rating,
            comment: comment
                .map(|c| c.trim().to_string())
                .filter(|c| !c.is_empty()),
            created_at,
        }
    }

    #[must_use]
    pub const fn id(&self) -> ReviewId {
        self.id
    }

    #[must_use]
    pub const fn location_id(&self) -> LocationId {
        self.location_id
    }

    #[must_use]
    pub const fn rating(&self) -> Option<Rating> {
        self.rating
    }

    #[must_use]
    pub fn comment(&self) -> Option<&str> {
        self.comment.as_deref()
    }

    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Check if the review carries a rating
    #[must_use]
    pub const fn is_rated(&self) -> bool {
        self.rating.is_some()
    }

    /// Check if the review belongs to the given location
    #[must_use]
    pub fn is_for(&self, location_id: LocationId) -> bool {
        self.location_id == location_id
    }
}
