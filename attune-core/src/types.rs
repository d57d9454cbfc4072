//! Shared result vocabulary used by every engine.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::validate::{self, Validate};

/// Direction of movement in a sampled series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Trend {
    Improving,
    Declining,
    Stable,
}

impl Trend {
    /// Classify a windowed delta against a symmetric threshold.
    ///
    /// `None` (not enough samples) is stable by definition.
    #[must_use]
    pub fn classify(delta: Option<f64>, threshold: f64) -> Self {
        match delta {
            Some(delta) if delta > threshold => Self::Improving,
            Some(delta) if delta < -threshold => Self::Declining,
            _ => Self::Stable,
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Improving => "improving",
            Self::Declining => "declining",
            Self::Stable => "stable",
        }
    }

    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "improving" => Some(Self::Improving),
            "declining" => Some(Self::Declining),
            "stable" => Some(Self::Stable),
            _ => None,
        }
    }
}

/// Action priority, ordered least to most urgent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    Low,
    Medium,
    High,
    Critical,
}

impl Priority {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
            Self::Critical => "critical",
        }
    }

    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "low" => Some(Self::Low),
            "medium" => Some(Self::Medium),
            "high" => Some(Self::High),
            "critical" => Some(Self::Critical),
            _ => None,
        }
    }
}

/// Coarse impact classification attached to insights.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ImpactLevel {
    Low,
    Medium,
    High,
}

impl ImpactLevel {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

/// A categorized observation extracted from the analyzed input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Insight {
    pub insight: String,
    pub category: String,
    pub impact: ImpactLevel,
    /// How certain the analyzer is about this observation, in `[0, 1]`.
    pub confidence: f64,
}

impl Validate for Insight {
    fn validate(&self) -> Result<(), ValidationError> {
        validate::non_empty("insight.insight", &self.insight)?;
        validate::unit("insight.confidence", self.confidence)
    }
}

/// A named contribution to a decision, with a signed impact and a weight.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightedFactor {
    pub factor: String,
    /// Signed contribution in `[-1, 1]`; positive pushes the tier upward.
    pub impact: f64,
    /// Relative weight in `[0, 1]`.
    pub weight: f64,
}

impl Validate for WeightedFactor {
    fn validate(&self) -> Result<(), ValidationError> {
        validate::signed_unit("factor.impact", self.impact)?;
        validate::unit("factor.weight", self.weight)
    }
}

/// A development opportunity surfaced by gap or profile analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Opportunity {
    pub opportunity: String,
    pub probability: f64,
    pub potential: f64,
    pub timeframe: String,
}

impl Validate for Opportunity {
    fn validate(&self) -> Result<(), ValidationError> {
        validate::unit("opportunity.probability", self.probability)?;
        validate::unit("opportunity.potential", self.potential)
    }
}

/// Recommendations grouped into the three fixed horizons.
///
/// The item types differ per engine, so the horizon lists are generic; the
/// neutral fallback for every engine is [`TieredRecommendations::empty`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TieredRecommendations<I, S, L> {
    #[serde(default = "Vec::new", skip_serializing_if = "Vec::is_empty")]
    pub immediate: Vec<I>,
    #[serde(default = "Vec::new", skip_serializing_if = "Vec::is_empty")]
    pub short_term: Vec<S>,
    #[serde(default = "Vec::new", skip_serializing_if = "Vec::is_empty")]
    pub long_term: Vec<L>,
}

impl<I, S, L> TieredRecommendations<I, S, L> {
    /// The neutral recommendation set: all horizons empty.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            immediate: Vec::new(),
            short_term: Vec::new(),
            long_term: Vec::new(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.immediate.is_empty() && self.short_term.is_empty() && self.long_term.is_empty()
    }
}

impl<I: Validate, S: Validate, L: Validate> Validate for TieredRecommendations<I, S, L> {
    fn validate(&self) -> Result<(), ValidationError> {
        for item in &self.immediate {
            item.validate()?;
        }
        for item in &self.short_term {
            item.validate()?;
        }
        for item in &self.long_term {
            item.validate()?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trend_classify_applies_symmetric_threshold() {
        assert_eq!(Trend::classify(Some(30.0), 5.0), Trend::Improving);
        assert_eq!(Trend::classify(Some(-30.0), 5.0), Trend::Declining);
        assert_eq!(Trend::classify(Some(0.5), 5.0), Trend::Stable);
        assert_eq!(Trend::classify(Some(5.0), 5.0), Trend::Stable);
        assert_eq!(Trend::classify(Some(-5.0), 5.0), Trend::Stable);
    }

    #[test]
    fn trend_classify_treats_missing_delta_as_stable() {
        assert_eq!(Trend::classify(None, 5.0), Trend::Stable);
    }

    #[test]
    fn trend_round_trips_through_parse() {
        for trend in [Trend::Improving, Trend::Declining, Trend::Stable] {
            assert_eq!(Trend::parse(trend.as_str()), Some(trend));
        }
        assert_eq!(Trend::parse("sideways"), None);
    }

    #[test]
    fn priority_orders_least_to_most_urgent() {
        assert!(Priority::Low < Priority::Medium);
        assert!(Priority::Medium < Priority::High);
        assert!(Priority::High < Priority::Critical);
    }

    #[test]
    fn priority_serializes_as_snake_case() {
        let json = serde_json::to_string(&Priority::Critical).unwrap();
        assert_eq!(json, "\"critical\"");
    }

    #[test]
    fn insight_validates_confidence_range() {
        let insight = Insight {
            insight: "low accuracy".to_string(),
            category: "accuracy".to_string(),
            impact: ImpactLevel::High,
            confidence: 1.5,
        };
        assert!(insight.validate().is_err());
    }

    #[test]
    fn weighted_factor_accepts_negative_impact() {
        let factor = WeightedFactor {
            factor: "Performance Level".to_string(),
            impact: -0.8,
            weight: 0.4,
        };
        assert!(factor.validate().is_ok());
    }

    #[test]
    fn empty_recommendations_skip_serialization() {
        let recommendations: TieredRecommendations<Insight, Insight, Insight> =
            TieredRecommendations::empty();
        let json = serde_json::to_string(&recommendations).unwrap();
        assert_eq!(json, "{}");
        assert!(recommendations.is_empty());
    }

    #[test]
    fn recommendations_round_trip_through_serde() {
        let recommendations: TieredRecommendations<Insight, Insight, Insight> =
            TieredRecommendations {
                immediate: vec![Insight {
                    insight: "reduce difficulty".to_string(),
                    category: "difficulty".to_string(),
                    impact: ImpactLevel::High,
                    confidence: 0.9,
                }],
                short_term: Vec::new(),
                long_term: Vec::new(),
            };

        let json = serde_json::to_string(&recommendations).unwrap();
        let parsed: TieredRecommendations<Insight, Insight, Insight> =
            serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, recommendations);
    }
}
