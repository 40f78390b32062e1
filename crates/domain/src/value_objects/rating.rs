//! Rating value object
//!
//! Represents a validated review score between 1.0 and 5.0 with a single
//! fractional digit.
//!
//! # Examples
//!
//! ```
//! use domain::value_objects::Rating;
//!
//! let rating = Rating::from_f64(3.5).expect("valid rating");
//! assert_eq!(rating.to_stars(), 4);
//! assert_eq!(rating.to_display_string(), "★★★★☆ (3.5)");
//!
//! // Out-of-range scores are rejected
//! assert!(Rating::from_i32(6).is_err());
//!
//! // Averages are rounded to one fractional digit
//! let ratings = [Rating::from_i32(4).unwrap(), Rating::from_i32(5).unwrap()];
//! assert_eq!(Rating::average(&ratings).unwrap().to_string(), "★★★★★ (4.5)");
//! ```

use std::fmt;

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use super::decimal_bounds::{decimal_from_f64, ensure_in_range, ensure_scale};
use crate::errors::ValidationError;

const FIELD: &str = "score";
const SCORE_SCALE: u32 = 1;

/// A review score in [1.0, 5.0] with at most one fractional digit
///
/// The score is always kept at exactly one fractional digit, so `4` and `4.0`
/// produce the same rating and both display as `4.0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Rating(Decimal);

impl Rating {
    /// Number of stars in a full display string
    pub const MAX_STARS: u8 = 5;

    /// Lowest possible star count
    pub const MIN_STARS: u8 = 1;

    /// Create a new validated rating
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if the score is not in [1.0, 5.0] or has more
    /// than one significant fractional digit.
    pub fn new(score: Decimal) -> Result<Self, ValidationError> {
        ensure_in_range(
            FIELD,
            score,
            Decimal::from(Self::MIN_STARS),
            Decimal::from(Self::MAX_STARS),
        )?;
        ensure_scale(FIELD, score, SCORE_SCALE)?;

        let mut score = score.normalize();
        score.rescale(SCORE_SCALE);
        Ok(Self(score))
    }

    /// Create a rating from a float, rounding half-up to one fractional digit
    ///
    /// ```
    /// use domain::value_objects::Rating;
    ///
    /// assert_eq!(Rating::from_f64(4.26).unwrap().to_string(), "★★★★☆ (4.3)");
    /// assert!(Rating::from_f64(0.5).is_err());
    /// ```
    pub fn from_f64(score: f64) -> Result<Self, ValidationError> {
        let score = decimal_from_f64(FIELD, score)?;
        Self::new(round_half_up(score))
    }

    /// Create a rating from a whole number of stars in [1, 5]
    pub fn from_i32(stars: i32) -> Result<Self, ValidationError> {
        Self::new(Decimal::from(stars))
    }

    /// Get the score
    #[must_use]
    pub const fn score(&self) -> Decimal {
        self.0
    }

    /// Round the score half-up to a whole number of stars
    #[must_use]
    pub fn to_stars(&self) -> u8 {
        self.0
            .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
            .to_u8()
            .unwrap_or(Self::MIN_STARS)
    }

    /// Render filled and empty stars followed by the numeric score
    ///
    /// ```
    /// use domain::value_objects::Rating;
    ///
    /// assert_eq!(Rating::from_i32(3).unwrap().to_display_string(), "★★★☆☆ (3.0)");
    /// ```
    #[must_use]
    pub fn to_display_string(&self) -> String {
        let filled = usize::from(self.to_stars());
        let empty = usize::from(Self::MAX_STARS) - filled;
        format!("{}{} ({})", "★".repeat(filled), "☆".repeat(empty), self.0)
    }

    /// Arithmetic mean of a collection of ratings
    ///
    /// Returns `None` for an empty collection. The mean is rounded half-up to
    /// one fractional digit and passed through [`Rating::new`].
    #[must_use]
    pub fn average<'a, I>(ratings: I) -> Option<Self>
    where
        I: IntoIterator<Item = &'a Self>,
    {
        let (sum, count) = ratings
            .into_iter()
            .fold((Decimal::ZERO, 0usize), |(sum, count), rating| {
                (sum + rating.0, count + 1)
            });

        if count == 0 {
            return None;
        }

        // The mean of in-range scores is itself in range.
        Self::new(round_half_up(sum / Decimal::from(count))).ok()
    }
}

fn round_half_up(score: Decimal) -> Decimal {
    score.round_dp_with_strategy(SCORE_SCALE, RoundingStrategy::MidpointAwayFromZero)
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_display_string())
    }
}

impl TryFrom<Decimal> for Rating {
    type Error = ValidationError;

    fn try_from(score: Decimal) -> Result<Self, Self::Error> {
        Self::new(score)
    }
}

impl From<Rating> for Decimal {
    fn from(rating: Rating) -> Self {
        rating.0
    }
}

impl Serialize for Rating {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        Serialize::serialize(&self.0, serializer)
    }
}

/// Custom deserialization that validates the score
impl<'de> Deserialize<'de> for Rating {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let score = <Decimal as Deserialize>::deserialize(deserializer)?;
        Self::new(score).map_err(serde::de::Error::custom)
    }
}
