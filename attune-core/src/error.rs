//! Error types for the attune engine framework.

use thiserror::Error;

/// Errors produced while validating a request or result payload.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("{field} must be a finite number")]
    NotFinite { field: String },

    #[error("{field} must be within [{min}, {max}], got {value}")]
    OutOfRange {
        field: String,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("{field} must not be empty")]
    Empty { field: String },

    #[error("{field}: min bound exceeds max bound")]
    InvertedBounds { field: String },
}

/// Errors that can abort an engine pipeline.
///
/// These never escape a public entry point: [`run_with_fallback`] logs them
/// and substitutes the engine's neutral fallback result.
///
/// [`run_with_fallback`]: crate::engine::run_with_fallback
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("invalid request: {0}")]
    InvalidRequest(#[source] ValidationError),

    #[error("invalid result: {0}")]
    InvalidResult(#[source] ValidationError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_error_out_of_range_displays_field_and_bounds() {
        let error = ValidationError::OutOfRange {
            field: "context.fatigue".to_string(),
            value: 1.5,
            min: 0.0,
            max: 1.0,
        };
        let message = error.to_string();
        assert!(message.contains("context.fatigue"));
        assert!(message.contains("1.5"));
    }

    #[test]
    fn validation_error_not_finite_displays_field() {
        let error = ValidationError::NotFinite {
            field: "current_score".to_string(),
        };
        assert!(error.to_string().contains("current_score"));
    }

    #[test]
    fn engine_error_wraps_validation_error() {
        let error = EngineError::InvalidRequest(ValidationError::Empty {
            field: "user_id".to_string(),
        });
        assert!(error.to_string().contains("invalid request"));
    }

    #[test]
    fn engine_error_distinguishes_request_and_result_failures() {
        let request = EngineError::InvalidRequest(ValidationError::Empty {
            field: "user_id".to_string(),
        });
        let result = EngineError::InvalidResult(ValidationError::NotFinite {
            field: "confidence".to_string(),
        });
        assert!(request.to_string().starts_with("invalid request"));
        assert!(result.to_string().starts_with("invalid result"));
    }
}
