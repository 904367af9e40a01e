//! Score value object for audit evaluations (1 to 5 scale).

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// Highest score still counted as a low score.
pub const LOW_SCORE_MAX: u8 = 2;

/// Lowest score counted as a high score.
pub const HIGH_SCORE_MIN: u8 = 4;

/// How well a company exhibits a tactic: 1 (no evidence) to 5 (strong).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
#[repr(u8)]
pub enum Score {
    NoEvidence = 1,
    Weak = 2,
    Moderate = 3,
    Good = 4,
    Strong = 5,
}

impl Score {
    /// Creates a Score from an integer, returning error if out of range.
    pub fn try_from_u8(value: u8) -> Result<Self, ValidationError> {
        match value {
            1 => Ok(Score::NoEvidence),
            2 => Ok(Score::Weak),
            3 => Ok(Score::Moderate),
            4 => Ok(Score::Good),
            5 => Ok(Score::Strong),
            _ => Err(ValidationError::out_of_range("score", 1, 5, value as i64)),
        }
    }

    /// Rounds an average to its nearest score category, half up.
    ///
    /// Presentation only: the average itself is never replaced by the
    /// rounded value. Averages rounding outside 1..=5 (an empty score
    /// set averages to 0) have no category.
    pub fn nearest(average: f64) -> Option<Self> {
        if !average.is_finite() {
            return None;
        }
        let rounded = (average + 0.5).floor();
        if !(1.0..=5.0).contains(&rounded) {
            return None;
        }
        Self::try_from_u8(rounded as u8).ok()
    }

    /// Returns the numeric value.
    pub fn value(&self) -> u8 {
        *self as u8
    }

    /// Returns the legend label.
    pub fn label(&self) -> &'static str {
        match self {
            Score::NoEvidence => "No Evidence",
            Score::Weak => "Weak",
            Score::Moderate => "Moderate",
            Score::Good => "Good",
            Score::Strong => "Strong",
        }
    }

    /// Returns true for scores of 2 or less.
    pub fn is_low(&self) -> bool {
        self.value() <= LOW_SCORE_MAX
    }

    /// Returns true for scores of 4 or more.
    pub fn is_high(&self) -> bool {
        self.value() >= HIGH_SCORE_MIN
    }
}

impl TryFrom<u8> for Score {
    type Error = ValidationError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::try_from_u8(value)
    }
}

impl From<Score> for u8 {
    fn from(score: Score) -> Self {
        score.value()
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}
