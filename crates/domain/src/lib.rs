//! Domain layer for Placemark
//!
//! Contains the geospatial and rating value objects, the entities that own
//! them, and domain errors. Everything here is pure and synchronous.

pub mod entities;
pub mod errors;
pub mod value_objects;

pub use entities::*;
pub use errors::{DomainError, ValidationError};
pub use value_objects::*;

// Re-exported so callers can build coordinates and scores without naming
// the decimal crate themselves.
pub use rust_decimal::Decimal;
