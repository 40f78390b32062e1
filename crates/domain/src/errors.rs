//! Domain-level errors

use rust_decimal::Decimal;
use thiserror::Error;

/// Error raised when a value object is constructed from invalid input
///
/// Every variant names the offending field so callers can map it onto a
/// client-facing message without further context.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Value lies outside the inclusive range allowed for the field
    #[error("invalid {field}: {value} is out of range (must be {min} to {max})")]
    OutOfRange {
        field: &'static str,
        value: Decimal,
        min: Decimal,
        max: Decimal,
    },

    /// Value carries more fractional digits than the field allows
    #[error("invalid {field}: {value} has more than {max_fraction_digits} fractional digits")]
    TooPrecise {
        field: &'static str,
        value: Decimal,
        max_fraction_digits: u32,
    },

    /// Floating-point input was NaN or infinite
    #[error("invalid {field}: value must be a finite number")]
    NotFinite { field: &'static str },
}

impl ValidationError {
    /// Name of the field that failed validation
    pub const fn field(&self) -> &'static str {
        match self {
            Self::OutOfRange { field, .. }
            | Self::TooPrecise { field, .. }
            | Self::NotFinite { field } => field,
        }
    }
}

/// Errors that can occur in the domain layer
#[derive(Debug, Error)]
pub enum DomainError {
    /// A value object rejected its input
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Invalid location name
    #[error("Invalid location name: {0}")]
    InvalidName(String),

    /// Entity not found
    #[error("{entity_type} not found: {id}")]
    NotFound { entity_type: String, id: String },
}

impl DomainError {
    /// Create a not found error
    pub fn not_found(entity_type: impl Into<String>, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: entity_type.into(),
            id: id.into(),
        }
    }
}
