//! Tunable thresholds for the competency mapping engine.

/// Score thresholds and ladder shape for profile construction.
///
/// Conventional defaults; none of these encode a validated competency model.
#[derive(Debug, Clone, PartialEq)]
pub struct CompetencyPolicy {
    /// Score points per level on the 0–100 scale.
    pub level_band_width: f64,
    /// Score assumed for a competency with no responses.
    pub default_score: f64,
    /// Score bonus granted per point of full response confidence.
    pub confidence_bonus: f64,
    /// Scores below this mark a critical development area.
    pub critical_threshold: f64,
    /// Scores below this count as a proficiency gap.
    pub proficiency_threshold: f64,
    /// Scores below this become development areas.
    pub development_threshold: f64,
    /// Scores above this count as strengths.
    pub strength_threshold: f64,
    /// Top rung of the overall ladder (zero-based).
    pub ladder_ceiling: u8,
    /// How many strengths to surface.
    pub top_strengths: usize,
    /// How many development areas the path focuses on.
    pub path_focus: usize,
    /// Domain score variance above this flags an imbalance.
    pub imbalance_variance: f64,
    /// Score delta between assessments that counts as a trend.
    pub trend_threshold: f64,
    /// Overall level below this triggers the foundational insight.
    pub low_overall_level: u8,
    /// Overall level below this triggers the long-term foundation action.
    pub foundation_level: u8,
}

impl Default for CompetencyPolicy {
    fn default() -> Self {
        Self {
            level_band_width: 20.0,
            default_score: 50.0,
            confidence_bonus: 10.0,
            critical_threshold: 40.0,
            proficiency_threshold: 60.0,
            development_threshold: 70.0,
            strength_threshold: 80.0,
            ladder_ceiling: 4,
            top_strengths: 5,
            path_focus: 3,
            imbalance_variance: 400.0,
            trend_threshold: 5.0,
            low_overall_level: 2,
            foundation_level: 3,
        }
    }
}

impl CompetencyPolicy {
    /// Map a 0–100 score onto a ladder rung by truncation, clamped to the
    /// ladder defined by `level_count`.
    #[must_use]
    pub fn level_for_score(&self, score: f64, level_count: usize) -> u8 {
        if level_count == 0 {
            return 0;
        }
        let raw = (score / self.level_band_width).floor().max(0.0) as u8;
        raw.min((level_count - 1) as u8)
    }

    /// Map a 0–100 score onto the overall ladder by rounding, clamped to
    /// the ladder ceiling.
    #[must_use]
    pub fn rounded_level(&self, score: f64) -> u8 {
        let raw = (score / self.level_band_width).round().max(0.0) as u8;
        raw.min(self.ladder_ceiling)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_for_score_truncates_into_bands() {
        let policy = CompetencyPolicy::default();
        assert_eq!(policy.level_for_score(0.0, 5), 0);
        assert_eq!(policy.level_for_score(19.9, 5), 0);
        assert_eq!(policy.level_for_score(20.0, 5), 1);
        assert_eq!(policy.level_for_score(59.0, 5), 2);
        assert_eq!(policy.level_for_score(99.0, 5), 4);
    }

    #[test]
    fn level_for_score_clamps_to_ladder_length() {
        let policy = CompetencyPolicy::default();
        assert_eq!(policy.level_for_score(100.0, 5), 4);
        assert_eq!(policy.level_for_score(100.0, 3), 2);
        assert_eq!(policy.level_for_score(85.0, 0), 0);
    }

    #[test]
    fn rounded_level_clamps_to_ceiling() {
        let policy = CompetencyPolicy::default();
        assert_eq!(policy.rounded_level(49.0), 2);
        assert_eq!(policy.rounded_level(100.0), 4);
        assert_eq!(policy.rounded_level(0.0), 0);
    }
}
