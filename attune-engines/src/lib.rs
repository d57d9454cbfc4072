//! Assessment scoring engines for attune.
//!
//! Three stateless engines share one pipeline shape (validate → analyze →
//! decide → recommend, with a never-throw fallback boundary):
//!
//! - [`AdaptiveDifficulty`] — recommends the next difficulty tier from
//!   recent performance, readiness, and context.
//! - [`CompetencyMapping`] — scores assessment responses against a
//!   competency framework and lays out a development path.
//! - [`SkillGapAnalysis`] — measures current vs. target skill levels and
//!   plans how to close the gaps.
//!
//! Every public entry point takes one structured request and returns one
//! structured result; malformed input produces the engine's documented
//! neutral fallback instead of an error.

pub mod competency;
pub mod difficulty;
pub mod skillgap;

pub use competency::{CompetencyMapping, CompetencyMappingRequest, CompetencyMappingResult};
pub use difficulty::{AdaptiveDifficulty, AdaptiveDifficultyRequest, AdaptiveDifficultyResult};
pub use skillgap::{SkillGapAnalysis, SkillGapAnalysisRequest, SkillGapAnalysisResult};
