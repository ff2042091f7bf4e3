//! Bounded 0-100 scores used for cultural dimensions, communication style,
//! competence, and the running scenario success metric.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::DomainError;

/// An integer score on the 0-100 scale (valid by construction).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u8")]
pub struct ScaleScore(u8);

impl ScaleScore {
    pub const MIN: ScaleScore = ScaleScore(0);
    pub const MAX: ScaleScore = ScaleScore(100);

    /// Create a score, rejecting values outside 0-100.
    pub fn new(value: i64) -> Result<Self, DomainError> {
        if !(0..=100).contains(&value) {
            return Err(DomainError::score_out_of_range(value));
        }
        Ok(Self(value as u8))
    }

    /// Create a score, clamping the value into 0-100.
    pub fn clamped(value: i64) -> Self {
        Self(value.clamp(0, 100) as u8)
    }

    pub fn value(&self) -> u8 {
        self.0
    }

    /// Apply a signed delta and clamp the result back into range.
    pub fn saturating_apply(self, delta: i32) -> Self {
        Self::clamped(i64::from(self.0) + i64::from(delta))
    }
}

impl fmt::Display for ScaleScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<i64> for ScaleScore {
    type Error = DomainError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ScaleScore> for u8 {
    fn from(score: ScaleScore) -> Self {
        score.0
    }
}

/// The four communication-style scalars of a culture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommunicationStyle {
    pub directness: ScaleScore,
    pub context_sensitivity: ScaleScore,
    pub formality_level: ScaleScore,
    pub emotional_expression: ScaleScore,
}
