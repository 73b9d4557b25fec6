//! Input checks shared by the adapters.

use crate::error::{EstimateError, EstimateResult};

/// Accept a JSON-style number only if it is a finite, whole, positive
/// value that fits in a `u32`.
pub fn whole_positive(field: &'static str, value: f64) -> EstimateResult<u32> {
    if !value.is_finite() {
        return Err(EstimateError::invalid(field, "must be a finite number"));
    }
    if value.fract() != 0.0 {
        return Err(EstimateError::invalid(field, format!("must be a whole number, got {}", value)));
    }
    if value < 1.0 {
        return Err(EstimateError::invalid(
            field,
            format!("must be greater than zero, got {}", value),
        ));
    }
    if value > f64::from(u32::MAX) {
        return Err(EstimateError::invalid(field, format!("is too large, got {}", value)));
    }
    Ok(value as u32)
}
