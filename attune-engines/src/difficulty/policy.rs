//! Tunable thresholds for the adaptive difficulty engine.
//!
//! None of these constants encode a validated psychometric model; they are
//! policy knobs with conventional defaults.

use super::types::Difficulty;

/// Expected score band for a difficulty tier, on the 0–100 scale.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreBand {
    pub min: f64,
    pub max: f64,
}

/// Thresholds governing analysis and tier decisions.
#[derive(Debug, Clone, PartialEq)]
pub struct DifficultyPolicy {
    /// Samples per trend window.
    pub trend_window: usize,
    /// Score delta beyond which a trend counts as improving/declining.
    pub trend_threshold: f64,
    /// Divisor normalizing score std-dev into `[0, 1]` volatility.
    pub volatility_scale: f64,
    /// Readiness below this forces a downward step.
    pub readiness_floor: f64,
    /// Readiness above this forces an upward step.
    pub readiness_ceiling: f64,
    /// Sample count at which the data-volume confidence term saturates.
    pub sample_target: usize,
    /// Mean response time (seconds) above which difficulty looks too high.
    pub slow_response_threshold: f64,
    /// Mean accuracy below this emits a difficulty-reduction insight.
    pub low_accuracy_threshold: f64,
    /// Mean self-confidence below this emits a support insight.
    pub low_confidence_threshold: f64,
    /// Target value for every optimization track.
    pub target_optimality: f64,
    /// Expected score bands per tier, indexed by [`Difficulty`] rank.
    pub expected_bands: [ScoreBand; 3],
}

impl DifficultyPolicy {
    /// The expected band for a tier.
    #[must_use]
    pub fn expected_band(&self, difficulty: Difficulty) -> ScoreBand {
        self.expected_bands[difficulty as usize]
    }
}

impl Default for DifficultyPolicy {
    fn default() -> Self {
        Self {
            trend_window: 3,
            trend_threshold: 5.0,
            volatility_scale: 20.0,
            readiness_floor: 0.4,
            readiness_ceiling: 0.8,
            sample_target: 10,
            slow_response_threshold: 120.0,
            low_accuracy_threshold: 0.6,
            low_confidence_threshold: 0.5,
            target_optimality: 0.8,
            expected_bands: [
                ScoreBand { min: 70.0, max: 100.0 },
                ScoreBand { min: 60.0, max: 90.0 },
                ScoreBand { min: 50.0, max: 80.0 },
            ],
        }
    }
}
