//! Active scenario instance aggregate - one in-progress roleplay session
//!
//! The instance embeds a snapshot of the target culture taken at start, so
//! evaluation of later turns never depends on the live knowledge base.
//! State changes only through [`ActiveScenarioInstance::apply_interaction`].

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::entities::{CulturalProfile, InteractionFeedback, ScenarioTemplate, UserProfile};
use crate::error::DomainError;
use crate::events::InteractionOutcome;
use crate::value_objects::ScaleScore;
use crate::{ScenarioInstanceId, ScenarioTemplateId, UserId};

pub const DEFAULT_MAX_TURNS: u32 = 10;
pub const INITIAL_SUCCESS_METRIC: u8 = 50;

/// Role given to the user who starts a scenario.
const USER_ROLE: &str = "User";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObjectiveProgress {
    pub objective: String,
    pub completed: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    pub name: String,
    pub role: String,
    pub cultural_background: String,
}

/// A running scenario.
///
/// # Invariants
///
/// - `current_turn <= max_turns` and `max_turns >= 1`
/// - once `is_completed` is set no further interaction is accepted
/// - objectives keep template order and never revert to incomplete
/// - `success_metric` stays within 0-100 (enforced by `ScaleScore`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActiveScenarioInstance {
    id: ScenarioInstanceId,
    user_id: UserId,
    template_id: ScenarioTemplateId,
    target_culture: CulturalProfile,
    current_situation: String,
    objectives: Vec<ObjectiveProgress>,
    participants: Vec<Participant>,
    current_turn: u32,
    max_turns: u32,
    is_completed: bool,
    success_metric: ScaleScore,
    started_at: DateTime<Utc>,
}

impl ActiveScenarioInstance {
    // =========================================================================
    // Constructor
    // =========================================================================

    /// Start a scenario for `user` from `template` against `target_culture`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if `max_turns` is zero.
    pub fn start(
        template: &ScenarioTemplate,
        target_culture: CulturalProfile,
        user: &UserProfile,
        max_turns: u32,
        started_at: DateTime<Utc>,
    ) -> Result<Self, DomainError> {
        if max_turns == 0 {
            return Err(DomainError::validation("max turns must be at least 1"));
        }

        Ok(Self {
            id: ScenarioInstanceId::new(),
            user_id: user.user_id.clone(),
            template_id: template.id.clone(),
            target_culture,
            current_situation: template.initial_situation.clone(),
            objectives: template
                .objectives
                .iter()
                .map(|objective| ObjectiveProgress {
                    objective: objective.clone(),
                    completed: false,
                })
                .collect(),
            participants: vec![Participant {
                name: user.username.clone(),
                role: USER_ROLE.to_string(),
                cultural_background: user.origin_culture_id.to_string(),
            }],
            current_turn: 0,
            max_turns,
            is_completed: false,
            success_metric: ScaleScore::clamped(i64::from(INITIAL_SUCCESS_METRIC)),
            started_at,
        })
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    #[inline]
    pub fn id(&self) -> ScenarioInstanceId {
        self.id
    }

    #[inline]
    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }

    #[inline]
    pub fn template_id(&self) -> &ScenarioTemplateId {
        &self.template_id
    }

    /// Snapshot of the culture taken when the scenario started.
    #[inline]
    pub fn target_culture(&self) -> &CulturalProfile {
        &self.target_culture
    }

    #[inline]
    pub fn current_situation(&self) -> &str {
        &self.current_situation
    }

    #[inline]
    pub fn objectives(&self) -> &[ObjectiveProgress] {
        &self.objectives
    }

    #[inline]
    pub fn participants(&self) -> &[Participant] {
        &self.participants
    }

    #[inline]
    pub fn current_turn(&self) -> u32 {
        self.current_turn
    }

    #[inline]
    pub fn max_turns(&self) -> u32 {
        self.max_turns
    }

    #[inline]
    pub fn is_completed(&self) -> bool {
        self.is_completed
    }

    #[inline]
    pub fn success_metric(&self) -> ScaleScore {
        self.success_metric
    }

    #[inline]
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    pub fn is_objective_completed(&self, objective: &str) -> bool {
        self.objectives
            .iter()
            .any(|progress| progress.objective == objective && progress.completed)
    }

    pub fn all_objectives_completed(&self) -> bool {
        self.objectives.iter().all(|progress| progress.completed)
    }

    // =========================================================================
    // Builder methods (used when loading from storage)
    // =========================================================================

    pub fn with_current_turn(mut self, current_turn: u32) -> Self {
        self.current_turn = current_turn.min(self.max_turns);
        self.is_completed = self.current_turn >= self.max_turns;
        self
    }

    pub fn with_success_metric(mut self, success_metric: ScaleScore) -> Self {
        self.success_metric = success_metric;
        self
    }

    pub fn with_participant(mut self, participant: Participant) -> Self {
        self.participants.push(participant);
        self
    }

    // =========================================================================
    // State transition
    // =========================================================================

    /// Apply one evaluated interaction.
    ///
    /// Advances the turn, replaces the situation with the AI response,
    /// applies the competence impact to the success metric (clamped), marks
    /// the first incomplete objective when the impact is positive, and
    /// completes the scenario once the turn limit is reached.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidStateTransition` if the scenario is
    /// already completed or the feedback belongs to another instance.
    pub fn apply_interaction(
        &mut self,
        feedback: &InteractionFeedback,
    ) -> Result<InteractionOutcome, DomainError> {
        if self.is_completed {
            return Err(DomainError::invalid_state_transition(format!(
                "scenario {} is already completed",
                self.id
            )));
        }
        if feedback.scenario_instance_id() != self.id {
            return Err(DomainError::invalid_state_transition(format!(
                "feedback for scenario {} applied to scenario {}",
                feedback.scenario_instance_id(),
                self.id
            )));
        }

        let impact = feedback.overall_competence_impact();

        self.current_turn += 1;
        self.current_situation = feedback.ai_response().to_string();
        self.success_metric = self.success_metric.saturating_apply(impact);

        let objective_completed = if impact > 0 {
            self.objectives
                .iter_mut()
                .find(|progress| !progress.completed)
                .map(|progress| {
                    progress.completed = true;
                    progress.objective.clone()
                })
        } else {
            None
        };

        if self.current_turn >= self.max_turns {
            self.is_completed = true;
            return Ok(InteractionOutcome::Completed {
                turn: self.current_turn,
                success_metric: self.success_metric,
                objective_completed,
                all_objectives_met: self.all_objectives_completed(),
            });
        }

        Ok(InteractionOutcome::Continued {
            turn: self.current_turn,
            success_metric: self.success_metric,
            objective_completed,
        })
    }
}
