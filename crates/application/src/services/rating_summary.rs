//! Aggregate rating of a location
//!
//! Averages the ratings of every review that belongs to a location.

use std::fmt;

use domain::{LocationId, Rating, Review};
use serde::Serialize;
use tracing::debug;

/// Aggregated ratings for a single location
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RatingSummary {
    /// Location the reviews belong to
    pub location_id: LocationId,
    /// Number of reviews for the location, rated or not
    pub review_count: usize,
    /// Number of those reviews that carry a rating
    pub rated_count: usize,
    /// Mean rating, absent when nothing has been rated
    pub average: Option<Rating>,
}

impl RatingSummary {
    /// Human-readable one-line summary
    #[must_use]
    pub fn display(&self) -> String {
        match self.average {
            Some(average) => {
                let noun = if self.rated_count == 1 { "rating" } else { "ratings" };
                format!("{average} from {} {noun}", self.rated_count)
            },
            None => "No ratings yet".to_string(),
        }
    }
}

impl fmt::Display for RatingSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display())
    }
}

/// Builds rating summaries from reviews
#[derive(Debug, Clone, Copy, Default)]
pub struct RatingSummaryService;

impl RatingSummaryService {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Summarize the reviews of `location_id`
    ///
    /// Reviews for other locations in `reviews` are ignored.
    #[must_use]
    pub fn summarize(&self, location_id: LocationId, reviews: &[Review]) -> RatingSummary {
        let for_location: Vec<&Review> = reviews.iter().filter(|r| r.is_for(location_id)).collect();
        let ratings: Vec<Rating> = for_location.iter().filter_map(|r| r.rating()).collect();
        let average = Rating::average(&ratings);

        debug!(
            %location_id,
            reviews = for_location.len(),
            rated = ratings.len(),
            average = ?average.map(|a| a.score()),
            "Rating summary computed"
        );

        RatingSummary {
            location_id,
            review_count: for_location.len(),
            rated_count: ratings.len(),
            average,
        }
    }
}
