//! Cultural intelligence agent.
//!
//! Wraps the pure observation and decision procedure with the two effects it
//! needs: a timestamp from the clock and token issuance through the reward
//! port. Each call is independent.

use std::sync::Arc;

use culturelab_domain::{
    decide, observe, ActiveScenarioInstance, CultureId, CulturalProfile, FeedbackContext,
    InteractionFeedback, RewardRecord, ScenarioTemplate, ScenarioTemplateId, SystemSettings,
    UserId, UserProfile, TOKEN_REWARD_REASON,
};

use crate::infrastructure::ports::{ClockPort, RewardPort};

#[derive(Debug, thiserror::Error)]
pub enum EvaluationError {
    #[error("Culture {actual} does not match scenario culture {expected}")]
    CultureMismatch {
        expected: CultureId,
        actual: CultureId,
    },

    #[error("Template {actual} does not match scenario template {expected}")]
    TemplateMismatch {
        expected: ScenarioTemplateId,
        actual: ScenarioTemplateId,
    },

    #[error("User {actual} does not own scenario (owner {expected})")]
    UserMismatch { expected: UserId, actual: UserId },
}

pub struct CulturalIntelligenceAgent {
    rewards: Arc<dyn RewardPort>,
    clock: Arc<dyn ClockPort>,
}

impl CulturalIntelligenceAgent {
    pub fn new(rewards: Arc<dyn RewardPort>, clock: Arc<dyn ClockPort>) -> Self {
        Self { rewards, clock }
    }

    /// Evaluate one utterance against the scenario's culture and template.
    ///
    /// The returned packet carries a deep copy of `profile`. Tokens are
    /// requested when the decision earns them; a failed request is logged
    /// and the packet is returned without it.
    ///
    /// # Errors
    ///
    /// Returns an error if `culture`, `template` or the user do not belong
    /// to `scenario`. Nothing is evaluated in that case.
    pub async fn evaluate(
        &self,
        user_id: &UserId,
        scenario: &ActiveScenarioInstance,
        utterance: &str,
        profile: &UserProfile,
        culture: &CulturalProfile,
        settings: &SystemSettings,
        template: &ScenarioTemplate,
    ) -> Result<InteractionFeedback, EvaluationError> {
        check_context(user_id, scenario, profile, culture, template)?;

        let observation = observe(utterance, culture, template);
        tracing::debug!(
            scenario_id = %scenario.id(),
            matched = observation.matched_aspects.len(),
            intent = observation.user_intent.as_str(),
            "Observed utterance"
        );

        let decision = decide(&observation, culture, template, settings.ai_persona);

        let mut rewards = Vec::new();
        if let Some(amount) = decision.token_reward() {
            match self
                .rewards
                .issue_tokens(user_id, amount, TOKEN_REWARD_REASON)
                .await
            {
                Ok(record) => rewards.push(RewardRecord::Token(record)),
                Err(e) => tracing::warn!(
                    user_id = %user_id,
                    amount,
                    error = %e,
                    "Token issuance failed, continuing without reward"
                ),
            }
        }

        let context = FeedbackContext {
            timestamp: self.clock.now(),
            scenario_instance_id: scenario.id(),
            target_culture_id: culture.id.clone(),
            user_profile_snapshot: profile.clone(),
        };

        Ok(InteractionFeedback::new(
            utterance,
            observation,
            decision,
            context,
            rewards,
        ))
    }
}

fn check_context(
    user_id: &UserId,
    scenario: &ActiveScenarioInstance,
    profile: &UserProfile,
    culture: &CulturalProfile,
    template: &ScenarioTemplate,
) -> Result<(), EvaluationError> {
    if scenario.user_id() != user_id {
        return Err(EvaluationError::UserMismatch {
            expected: scenario.user_id().clone(),
            actual: user_id.clone(),
        });
    }
    if &profile.user_id != user_id {
        return Err(EvaluationError::UserMismatch {
            expected: user_id.clone(),
            actual: profile.user_id.clone(),
        });
    }
    if scenario.target_culture().id != culture.id {
        return Err(EvaluationError::CultureMismatch {
            expected: scenario.target_culture().id.clone(),
            actual: culture.id.clone(),
        });
    }
    if scenario.template_id() != &template.id {
        return Err(EvaluationError::TemplateMismatch {
            expected: scenario.template_id().clone(),
            actual: template.id.clone(),
        });
    }
    Ok(())
}
