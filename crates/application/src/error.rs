//! Application-level errors

use domain::{DomainError, ValidationError};
use thiserror::Error;

/// Errors that can occur in the application layer
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// Domain-level error
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Search parameters were rejected before running the query
    #[error("Invalid query: {0}")]
    InvalidQuery(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl From<ValidationError> for ApplicationError {
    fn from(err: ValidationError) -> Self {
        Self::Domain(DomainError::Validation(err))
    }
}

impl ApplicationError {
    /// Check if this error is retryable
    ///
    /// Every variant describes bad input or configuration, so none are.
    pub const fn is_retryable(&self) -> bool {
        false
    }

    /// Check if the error was caused by caller-supplied input
    pub const fn is_client_error(&self) -> bool {
        matches!(self, Self::Domain(_) | Self::InvalidQuery(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_error_converts_to_domain_variant() {
        let err = ApplicationError::from(ValidationError::NotFinite { field: "latitude" });
        assert!(matches!(
            err,
            ApplicationError::Domain(DomainError::Validation(_))
        ));
        assert_eq!(
            err.to_string(),
            "invalid latitude: value must be a finite number"
        );
    }

    #[test]
    fn client_errors_are_not_retryable() {
        let err = ApplicationError::InvalidQuery("limit must be positive".to_string());
        assert!(err.is_client_error());
        assert!(!err.is_retryable());
        assert_eq!(err.to_string(), "Invalid query: limit must be positive");
    }

    #[test]
    fn configuration_error_is_not_client_error() {
        let err = ApplicationError::Configuration("bad radius".to_string());
        assert!(!err.is_client_error());
    }
}
