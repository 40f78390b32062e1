//! Value Objects - Immutable, identity-less domain primitives

mod decimal_bounds;
mod geo_coordinate;
mod location_id;
mod rating;
mod review_id;

pub use geo_coordinate::{EARTH_RADIUS_METERS, GeoCoordinate, MAX_FRACTION_DIGITS};
pub use location_id::LocationId;
pub use rating::Rating;
pub use review_id::ReviewId;
