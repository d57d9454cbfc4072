//! Tunable thresholds for the skill gap analysis engine.

/// Gap thresholds and focus sizes.
///
/// Conventional defaults; none of these encode a validated model of skill
/// acquisition.
#[derive(Debug, Clone, PartialEq)]
pub struct SkillGapPolicy {
    /// Assumed height of the level ladder; level gaps are expressed as a
    /// percentage of this when aggregated per category.
    pub level_ceiling: f64,
    /// Largest level gap that can still be a quick win.
    pub quick_win_max_gap: f64,
    /// Smallest impact worth a quick win.
    pub quick_win_min_impact: f64,
    /// Overall gap (percent) that triggers the long-term foundation action.
    pub overall_gap_threshold: f64,
    /// Overall gap (percent) that triggers the significant-gaps insight.
    pub significant_gap_threshold: f64,
    /// Impact above this counts a skill as high-impact.
    pub high_impact_threshold: f64,
    /// Mean category level gap that reads as a declining trend.
    pub trend_gap_threshold: f64,
    /// How many critical gaps the immediate recommendations cover.
    pub critical_focus: usize,
    /// How many quick wins the immediate recommendations cover.
    pub quick_win_focus: usize,
    /// How many high-priority gaps the short-term plan covers.
    pub high_priority_focus: usize,
}

impl Default for SkillGapPolicy {
    fn default() -> Self {
        Self {
            level_ceiling: 5.0,
            quick_win_max_gap: 1.0,
            quick_win_min_impact: 0.3,
            overall_gap_threshold: 30.0,
            significant_gap_threshold: 40.0,
            high_impact_threshold: 0.7,
            trend_gap_threshold: 2.0,
            critical_focus: 3,
            quick_win_focus: 2,
            high_priority_focus: 5,
        }
    }
}

impl SkillGapPolicy {
    /// Express a mean level gap as a percentage of the ladder, clamped onto
    /// `[0, 100]`.
    #[must_use]
    pub fn gap_percent(&self, mean_level_gap: f64) -> f64 {
        if self.level_ceiling <= 0.0 {
            return 0.0;
        }
        (mean_level_gap / self.level_ceiling * 100.0).clamp(0.0, 100.0)
    }
}
