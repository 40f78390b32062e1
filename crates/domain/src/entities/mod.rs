//! Domain entities - Objects with identity and lifecycle

mod location;
mod review;

pub use location::{Location, MAX_NAME_LENGTH};
pub use review::Review;
