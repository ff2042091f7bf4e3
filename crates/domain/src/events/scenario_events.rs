//! Scenario instance outcomes

use crate::value_objects::ScaleScore;

/// Result of applying one interaction to a scenario instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InteractionOutcome {
    /// The scenario goes on
    Continued {
        turn: u32,
        success_metric: ScaleScore,
        objective_completed: Option<String>,
    },
    /// The turn limit was reached with this interaction
    Completed {
        turn: u32,
        success_metric: ScaleScore,
        objective_completed: Option<String>,
        all_objectives_met: bool,
    },
}

impl InteractionOutcome {
    pub fn is_completed(&self) -> bool {
        matches!(self, InteractionOutcome::Completed { .. })
    }

    pub fn turn(&self) -> u32 {
        match self {
            InteractionOutcome::Continued { turn, .. } | InteractionOutcome::Completed { turn, .. } => {
                *turn
            }
        }
    }

    pub fn success_metric(&self) -> ScaleScore {
        match self {
            InteractionOutcome::Continued { success_metric, .. }
            | InteractionOutcome::Completed { success_metric, .. } => *success_metric,
        }
    }

    /// The objective newly marked complete by this interaction, if any.
    pub fn objective_completed(&self) -> Option<&str> {
        match self {
            InteractionOutcome::Continued {
                objective_completed,
                ..
            }
            | InteractionOutcome::Completed {
                objective_completed,
                ..
            } => objective_completed.as_deref(),
        }
    }

    pub fn all_objectives_met(&self) -> bool {
        matches!(
            self,
            InteractionOutcome::Completed {
                all_objectives_met: true,
                ..
            }
        )
    }
}
