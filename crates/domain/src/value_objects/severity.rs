//! Severity scale shared by knowledge base items and feedback outcomes.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::DomainError;

/// Severity / consequence label.
///
/// Carried by every cultural aspect (an etiquette rule's `consequences`, a
/// non-verbal cue's interpretation) and by every feedback outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Severity {
    Positive,
    #[default]
    Neutral,
    Negative,
    Critical,
    Advisory,
}

impl Severity {
    /// All severities, in declaration order.
    pub fn all() -> &'static [Severity] {
        &[
            Severity::Positive,
            Severity::Neutral,
            Severity::Negative,
            Severity::Critical,
            Severity::Advisory,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Positive => "Positive",
            Severity::Neutral => "Neutral",
            Severity::Negative => "Negative",
            Severity::Critical => "Critical",
            Severity::Advisory => "Advisory",
        }
    }

    /// True for outcomes that cost the learner competence.
    pub fn is_adverse(&self) -> bool {
        matches!(
            self,
            Severity::Negative | Severity::Critical | Severity::Advisory
        )
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Severity {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "positive" => Ok(Severity::Positive),
            "neutral" => Ok(Severity::Neutral),
            "negative" => Ok(Severity::Negative),
            "critical" => Ok(Severity::Critical),
            "advisory" => Ok(Severity::Advisory),
            _ => Err(DomainError::parse(format!("Unknown severity: {}", s))),
        }
    }
}
