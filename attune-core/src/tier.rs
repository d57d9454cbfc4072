//! Ordinal tier ladders.
//!
//! Difficulty tiers and competency levels share the same transition rule: a
//! recommendation may move at most one rung per call and is clamped onto the
//! caller's bounds.

use serde::{Deserialize, Serialize};

/// A position on a bounded ordinal ladder.
pub trait OrdinalTier: Copy + Eq + Ord {
    /// Zero-based rung index.
    fn rank(self) -> u8;

    /// The tier at `rank`, if the ladder has one.
    fn from_rank(rank: u8) -> Option<Self>
    where
        Self: Sized;

    /// One rung up; saturates at the top of the ladder.
    fn step_up(self) -> Self {
        Self::from_rank(self.rank().saturating_add(1)).unwrap_or(self)
    }

    /// One rung down; saturates at the bottom of the ladder.
    fn step_down(self) -> Self {
        match self.rank() {
            0 => self,
            rank => Self::from_rank(rank - 1).unwrap_or(self),
        }
    }

    /// Clamp onto the caller-specified `[min, max]` bounds.
    fn clamp_between(self, min: Self, max: Self) -> Self {
        if self < min {
            min
        } else if self > max {
            max
        } else {
            self
        }
    }
}

/// Direction of a recommended tier change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TierShift {
    Increase,
    Decrease,
    Maintain,
}

impl TierShift {
    /// The shift that takes `current` to `recommended`.
    #[must_use]
    pub fn between<T: OrdinalTier>(current: T, recommended: T) -> Self {
        match recommended.rank().cmp(&current.rank()) {
            std::cmp::Ordering::Greater => Self::Increase,
            std::cmp::Ordering::Less => Self::Decrease,
            std::cmp::Ordering::Equal => Self::Maintain,
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Increase => "increase",
            Self::Decrease => "decrease",
            Self::Maintain => "maintain",
        }
    }

    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "increase" => Some(Self::Increase),
            "decrease" => Some(Self::Decrease),
            "maintain" => Some(Self::Maintain),
            _ => None,
        }
    }
}
