//! Range and precision checks shared by the decimal value objects

use rust_decimal::Decimal;
use rust_decimal::prelude::FromPrimitive;

use crate::errors::ValidationError;

/// Ensure `value` lies within `[min, max]` (inclusive)
pub(crate) fn ensure_in_range(
    field: &'static str,
    value: Decimal,
    min: Decimal,
    max: Decimal,
) -> Result<(), ValidationError> {
    if value < min || value > max {
        return Err(ValidationError::OutOfRange {
            field,
            value,
            min,
            max,
        });
    }
    Ok(())
}

/// Ensure `value` has at most `max_fraction_digits` significant fractional digits
///
/// Trailing zeros do not count: `1.50` has one fractional digit.
pub(crate) fn ensure_scale(
    field: &'static str,
    value: Decimal,
    max_fraction_digits: u32,
) -> Result<(), ValidationError> {
    if value.normalize().scale() > max_fraction_digits {
        return Err(ValidationError::TooPrecise {
            field,
            value,
            max_fraction_digits,
        });
    }
    Ok(())
}

/// Convert a float into its shortest decimal representation
pub(crate) fn decimal_from_f64(field: &'static str, value: f64) -> Result<Decimal, ValidationError> {
    if !value.is_finite() {
        return Err(ValidationError::NotFinite { field });
    }
    Decimal::from_f64(value).ok_or(ValidationError::NotFinite { field })
}
