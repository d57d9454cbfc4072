//! Shared foundation for attune's assessment scoring engines.
//!
//! Every engine follows the same pipeline shape:
//!
//! - **Validate** ([`Validate`], [`validate`]) — requests and results are
//!   structurally checked; nothing is trusted.
//! - **Analyze** ([`stats`]) — raw sample arrays become summary statistics.
//! - **Decide** ([`OrdinalTier`], [`TierShift`]) — analyzed metrics map onto
//!   a bounded ordinal ladder, one step at a time.
//! - **Fall back** ([`Engine`], [`run_with_fallback`]) — any pipeline error
//!   is logged and replaced by the engine's neutral result, so callers never
//!   see an error.

mod engine;
mod error;
pub mod stats;
mod tier;
mod types;
pub mod validate;

pub use engine::{Engine, run_with_fallback};
pub use error::{EngineError, ValidationError};
pub use tier::{OrdinalTier, TierShift};
pub use types::{
    ImpactLevel, Insight, Opportunity, Priority, TieredRecommendations, Trend, WeightedFactor,
};
pub use validate::Validate;
