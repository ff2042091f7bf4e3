use std::sync::Arc;

use culturelab_domain::{
    ActiveScenarioInstance, CertificateRecord, InteractionFeedback, InteractionOutcome,
    ScenarioHistoryEntry, ScenarioInstanceId, UserId,
};

use super::{ScenarioError, ScenarioLocks};
use crate::infrastructure::ports::{
    ClockPort, RewardPort, ScenarioInstanceRepo, ScenarioTemplateRepo, SettingsRepo,
    UserProfileRepo,
};
use crate::use_cases::evaluation::CulturalIntelligenceAgent;

/// Result of one processed interaction.
#[derive(Debug, Clone)]
pub struct InteractionProcessed {
    pub feedback: InteractionFeedback,
    /// Instance state after the transition was applied and stored.
    pub scenario: ActiveScenarioInstance,
    pub outcome: InteractionOutcome,
    /// Granted when this interaction completed the scenario with every
    /// objective met.
    pub certificate: Option<CertificateRecord>,
}

/// Evaluate an utterance and advance the scenario it belongs to.
pub struct ProcessInteraction {
    instances: Arc<dyn ScenarioInstanceRepo>,
    users: Arc<dyn UserProfileRepo>,
    templates: Arc<dyn ScenarioTemplateRepo>,
    settings: Arc<dyn SettingsRepo>,
    agent: Arc<CulturalIntelligenceAgent>,
    rewards: Arc<dyn RewardPort>,
    clock: Arc<dyn ClockPort>,
    locks: Arc<ScenarioLocks>,
}

impl ProcessInteraction {
    pub fn new(
        instances: Arc<dyn ScenarioInstanceRepo>,
        users: Arc<dyn UserProfileRepo>,
        templates: Arc<dyn ScenarioTemplateRepo>,
        settings: Arc<dyn SettingsRepo>,
        agent: Arc<CulturalIntelligenceAgent>,
        rewards: Arc<dyn RewardPort>,
        clock: Arc<dyn ClockPort>,
        locks: Arc<ScenarioLocks>,
    ) -> Self {
        Self {
            instances,
            users,
            templates,
            settings,
            agent,
            rewards,
            clock,
            locks,
        }
    }

    pub async fn execute(
        &self,
        user_id: &UserId,
        instance_id: ScenarioInstanceId,
        utterance: &str,
    ) -> Result<InteractionProcessed, ScenarioError> {
        // Instances are never removed, so only known ids get a lock entry.
        if self.instances.get(instance_id).await?.is_none() {
            return Err(ScenarioError::ScenarioNotFound(instance_id));
        }
        let _guard = self.locks.acquire(instance_id).await;

        let mut scenario = self
            .instances
            .get(instance_id)
            .await?
            .ok_or(ScenarioError::ScenarioNotFound(instance_id))?;
        if scenario.is_completed() {
            return Err(ScenarioError::ScenarioCompleted(instance_id));
        }

        let profile = self
            .users
            .get(user_id)
            .await?
            .ok_or_else(|| ScenarioError::UserNotFound(user_id.clone()))?;
        let template = self
            .templates
            .get(scenario.template_id())
            .await?
            .ok_or_else(|| ScenarioError::TemplateNotFound(scenario.template_id().clone()))?;
        let settings = self.settings.get().await?.unwrap_or_default();

        let feedback = self
            .agent
            .evaluate(
                user_id,
                &scenario,
                utterance,
                &profile,
                scenario.target_culture(),
                &settings,
                &template,
            )
            .await?;

        let outcome = scenario.apply_interaction(&feedback)?;
        self.instances.update(&scenario).await?;

        tracing::debug!(
            scenario_id = %instance_id,
            turn = outcome.turn(),
            success_metric = %outcome.success_metric(),
            objective_completed = outcome.objective_completed(),
            "Interaction applied"
        );

        let certificate = if outcome.is_completed() {
            self.finish(&scenario, &outcome).await
        } else {
            None
        };

        Ok(InteractionProcessed {
            feedback,
            scenario,
            outcome,
            certificate,
        })
    }

    /// Grant the completion certificate (if earned) and record the scenario
    /// in the user's history. The instance is already stored as completed,
    /// so failures here are logged and dropped.
    async fn finish(
        &self,
        scenario: &ActiveScenarioInstance,
        outcome: &InteractionOutcome,
    ) -> Option<CertificateRecord> {
        tracing::info!(
            scenario_id = %scenario.id(),
            user_id = %scenario.user_id(),
            turns = outcome.turn(),
            success_metric = %outcome.success_metric(),
            all_objectives_met = outcome.all_objectives_met(),
            "Scenario completed"
        );

        let certificate = if outcome.all_objectives_met() {
            let certificate_type = format!("scenario_completion:{}", scenario.template_id());
            match self
                .rewards
                .grant_certificate(scenario.user_id(), &certificate_type)
                .await
            {
                Ok(record) => Some(record),
                Err(e) => {
                    tracing::warn!(
                        scenario_id = %scenario.id(),
                        certificate_type = %certificate_type,
                        error = %e,
                        "Certificate grant failed, continuing without certificate"
                    );
                    None
                }
            }
        } else {
            None
        };

        let entry = ScenarioHistoryEntry {
            scenario_instance_id: scenario.id().to_string(),
            scenario_template_id: scenario.template_id().clone(),
            target_culture_id: scenario.target_culture().id.clone(),
            completion_date: self.clock.now(),
            final_success_metric: scenario.success_metric(),
            total_interactions: scenario.current_turn(),
            key_learnings: scenario
                .objectives()
                .iter()
                .filter(|progress| progress.completed)
                .map(|progress| progress.objective.clone())
                .collect(),
            reward_earned: certificate
                .as_ref()
                .map(|record| record.certificate_type.clone()),
        };
        if let Err(e) = self
            .users
            .append_history(scenario.user_id(), entry)
            .await
        {
            tracing::warn!(
                scenario_id = %scenario.id(),
                user_id = %scenario.user_id(),
                error = %e,
                "Recording scenario history failed, continuing"
            );
        }

        certificate
    }
}
