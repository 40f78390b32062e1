//! Application layer - Use cases and orchestration
//!
//! Builds the response-side computations on top of the domain value objects:
//! distance-ranked location search and aggregate ratings.

pub mod error;
pub mod services;

pub use error::ApplicationError;
pub use services::*;
