//! The feedback packet produced for every processed interaction.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::entities::UserProfile;
use crate::evaluation::{Decision, Observation};
use crate::value_objects::Severity;
use crate::{CultureId, LearningModuleId, RewardId, ScenarioInstanceId};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedbackSummary {
    pub text: String,
    pub severity: Severity,
}

/// Feedback on one cultural dimension touched by the interaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetailedFeedback {
    pub dimension: String,
    pub score: i32,
    pub explanation: String,
    pub severity: Severity,
    pub recommendations: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenRecord {
    pub id: RewardId,
    pub amount: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CertificateRecord {
    pub id: RewardId,
    pub certificate_type: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RewardRecord {
    Token(TokenRecord),
}

/// Identity and snapshot data stamped onto a packet.
#[derive(Debug, Clone)]
pub struct FeedbackContext {
    pub timestamp: DateTime<Utc>,
    pub scenario_instance_id: ScenarioInstanceId,
    pub target_culture_id: CultureId,
    pub user_profile_snapshot: UserProfile,
}

/// Complete feedback for one interaction.
///
/// Immutable once built: fields are private and there are no setters.
/// Optional lists are `None` rather than empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InteractionFeedback {
    user_input: String,
    ai_response: String,
    feedback_summary: FeedbackSummary,
    timestamp: DateTime<Utc>,
    scenario_instance_id: ScenarioInstanceId,
    target_culture_id: CultureId,
    user_profile_snapshot: UserProfile,
    detailed_feedback: Vec<DetailedFeedback>,
    overall_competence_impact: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    suggested_resources: Option<Vec<LearningModuleId>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    potential_rewards_earned: Option<Vec<RewardRecord>>,
    observation: Observation,
}

impl InteractionFeedback {
    pub fn new(
        user_input: impl Into<String>,
        observation: Observation,
        decision: Decision,
        context: FeedbackContext,
        rewards: Vec<RewardRecord>,
    ) -> Self {
        Self {
            user_input: user_input.into(),
            ai_response: decision.ai_response,
            feedback_summary: decision.summary,
            timestamp: context.timestamp,
            scenario_instance_id: context.scenario_instance_id,
            target_culture_id: context.target_culture_id,
            user_profile_snapshot: context.user_profile_snapshot,
            detailed_feedback: decision.detailed_feedback,
            overall_competence_impact: decision.competence_impact,
            suggested_resources: non_empty(decision.suggested_resources),
            potential_rewards_earned: non_empty(rewards),
            observation,
        }
    }

    #[inline]
    pub fn user_input(&self) -> &str {
        &self.user_input
    }

    #[inline]
    pub fn ai_response(&self) -> &str {
        &self.ai_response
    }

    #[inline]
    pub fn feedback_summary(&self) -> &FeedbackSummary {
        &self.feedback_summary
    }

    #[inline]
    pub fn severity(&self) -> Severity {
        self.feedback_summary.severity
    }

    #[inline]
    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    #[inline]
    pub fn scenario_instance_id(&self) -> ScenarioInstanceId {
        self.scenario_instance_id
    }

    #[inline]
    pub fn target_culture_id(&self) -> &CultureId {
        &self.target_culture_id
    }

    #[inline]
    pub fn user_profile_snapshot(&self) -> &UserProfile {
        &self.user_profile_snapshot
    }

    #[inline]
    pub fn detailed_feedback(&self) -> &[DetailedFeedback] {
        &self.detailed_feedback
    }

    #[inline]
    pub fn overall_competence_impact(&self) -> i32 {
        self.overall_competence_impact
    }

    #[inline]
    pub fn suggested_resources(&self) -> Option<&[LearningModuleId]> {
        self.suggested_resources.as_deref()
    }

    #[inline]
    pub fn potential_rewards_earned(&self) -> Option<&[RewardRecord]> {
        self.potential_rewards_earned.as_deref()
    }

    #[inline]
    pub fn observation(&self) -> &Observation {
        &self.observation
    }
}

fn non_empty<T>(items: Vec<T>) -> Option<Vec<T>> {
    if items.is_empty() {
        None
    } else {
        Some(items)
    }
}
