//! Engine contract and the never-throw boundary adapter.

use crate::error::EngineError;

/// A heuristic scoring engine.
///
/// Implementations run a validate → analyze → decide → recommend pipeline in
/// [`Engine::evaluate`] and provide a statically constructed neutral result
/// in [`Engine::fallback`]. Callers go through [`run_with_fallback`], which
/// guarantees that no error ever crosses the public boundary.
pub trait Engine {
    type Request;
    type Response;

    /// Engine name used in log events.
    fn name(&self) -> &'static str;

    /// Run the full pipeline. Any stage may abort with an error; the error
    /// is handled by [`run_with_fallback`], never by the caller.
    fn evaluate(&self, request: &Self::Request) -> Result<Self::Response, EngineError>;

    /// The neutral response substituted when the pipeline fails: maintain
    /// the current state, mid-range confidence, empty recommendations.
    fn fallback(&self, request: &Self::Request) -> Self::Response;
}

/// Execute an engine, substituting its fallback result on any error.
///
/// The error is logged for operator visibility; the caller always receives
/// a well-formed response.
pub fn run_with_fallback<E: Engine>(engine: &E, request: &E::Request) -> E::Response {
    match engine.evaluate(request) {
        Ok(response) => response,
        Err(error) => {
            tracing::error!(
                engine = engine.name(),
                %error,
                "pipeline failed, substituting fallback result"
            );
            engine.fallback(request)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidationError;

    struct ParityEngine;

    impl Engine for ParityEngine {
        type Request = i64;
        type Response = String;

        fn name(&self) -> &'static str {
            "parity"
        }

        fn evaluate(&self, request: &i64) -> Result<String, EngineError> {
            if *request % 2 == 0 {
                Ok(format!("even: {request}"))
            } else {
                Err(EngineError::InvalidRequest(ValidationError::Empty {
                    field: "request".to_string(),
                }))
            }
        }

        fn fallback(&self, _request: &i64) -> String {
            "fallback".to_string()
        }
    }

    #[test]
    fn run_with_fallback_passes_through_success() {
        assert_eq!(run_with_fallback(&ParityEngine, &4), "even: 4");
    }

    #[test]
    fn run_with_fallback_substitutes_fallback_on_error() {
        assert_eq!(run_with_fallback(&ParityEngine, &3), "fallback");
    }
}
