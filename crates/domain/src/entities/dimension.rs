//! Cultural dimension catalog (power distance, individualism, ...).

use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::value_objects::ScaleScore;
use crate::DimensionId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreRange {
    pub min: ScaleScore,
    pub max: ScaleScore,
}

impl ScoreRange {
    pub fn contains(&self, score: ScaleScore) -> bool {
        self.min <= score && score <= self.max
    }
}

/// Describes one axis a culture is scored on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CulturalDimension {
    pub id: DimensionId,
    pub name: String,
    pub description: String,
    pub typical_scores: ScoreRange,
}

impl CulturalDimension {
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.typical_scores.min > self.typical_scores.max {
            return Err(DomainError::validation(format!(
                "Dimension {} has min {} above max {}",
                self.id, self.typical_scores.min, self.typical_scores.max
            )));
        }
        Ok(())
    }
}
