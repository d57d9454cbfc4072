//! Field-level validation helpers.
//!
//! Engines refuse to operate on payloads that fail these checks; the checks
//! return errors rather than panicking so the fallback path can take over.

use crate::error::ValidationError;

/// A payload that can be structurally validated.
///
/// Implemented by request types (checked before the pipeline runs) and by
/// result types (checked before a result is returned to the caller).
pub trait Validate {
    /// Check every constrained field, returning the first violation found.
    fn validate(&self) -> Result<(), ValidationError>;
}

/// Check that `value` is a finite number.
pub fn finite(field: &str, value: f64) -> Result<(), ValidationError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ValidationError::NotFinite {
            field: field.to_string(),
        })
    }
}

/// Check that `value` is finite and within `[min, max]`.
pub fn range(field: &str, value: f64, min: f64, max: f64) -> Result<(), ValidationError> {
    finite(field, value)?;
    if value < min || value > max {
        return Err(ValidationError::OutOfRange {
            field: field.to_string(),
            value,
            min,
            max,
        });
    }
    Ok(())
}

/// Check that `value` is finite and within the unit interval `[0, 1]`.
pub fn unit(field: &str, value: f64) -> Result<(), ValidationError> {
    range(field, value, 0.0, 1.0)
}

/// Check that `value` is finite and within `[-1, 1]`.
pub fn signed_unit(field: &str, value: f64) -> Result<(), ValidationError> {
    range(field, value, -1.0, 1.0)
}

/// Check that a string field is non-empty.
pub fn non_empty(field: &str, value: &str) -> Result<(), ValidationError> {
    if value.is_empty() {
        Err(ValidationError::Empty {
            field: field.to_string(),
        })
    } else {
        Ok(())
    }
}

/// Check that every sample in `values` is finite.
pub fn all_finite(field: &str, values: &[f64]) -> Result<(), ValidationError> {
    for &value in values {
        finite(field, value)?;
    }
    Ok(())
}

/// Check that every sample in `values` lies within `[0, 1]`.
pub fn all_unit(field: &str, values: &[f64]) -> Result<(), ValidationError> {
    for &value in values {
        unit(field, value)?;
    }
    Ok(())
}
