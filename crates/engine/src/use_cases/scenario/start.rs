use std::sync::Arc;

use culturelab_domain::{ActiveScenarioInstance, CultureId, ScenarioTemplateId, UserId};

use super::ScenarioError;
use crate::infrastructure::ports::{
    ClockPort, CultureRepo, ScenarioInstanceRepo, ScenarioTemplateRepo, UserProfileRepo,
};

/// Start a scenario for a user.
///
/// The culture is copied into the instance, so later interactions evaluate
/// against the profile as it was at start.
pub struct StartScenario {
    templates: Arc<dyn ScenarioTemplateRepo>,
    cultures: Arc<dyn CultureRepo>,
    users: Arc<dyn UserProfileRepo>,
    instances: Arc<dyn ScenarioInstanceRepo>,
    clock: Arc<dyn ClockPort>,
    max_turns: u32,
}

impl StartScenario {
    pub fn new(
        templates: Arc<dyn ScenarioTemplateRepo>,
        cultures: Arc<dyn CultureRepo>,
        users: Arc<dyn UserProfileRepo>,
        instances: Arc<dyn ScenarioInstanceRepo>,
        clock: Arc<dyn ClockPort>,
        max_turns: u32,
    ) -> Self {
        Self {
            templates,
            cultures,
            users,
            instances,
            clock,
            max_turns,
        }
    }

    pub async fn execute(
        &self,
        user_id: &UserId,
        template_id: &ScenarioTemplateId,
        culture_id: &CultureId,
    ) -> Result<ActiveScenarioInstance, ScenarioError> {
        let user = self
            .users
            .get(user_id)
            .await?
            .ok_or_else(|| ScenarioError::UserNotFound(user_id.clone()))?;
        let template = self
            .templates
            .get(template_id)
            .await?
            .ok_or_else(|| ScenarioError::TemplateNotFound(template_id.clone()))?;
        let culture = self
            .cultures
            .get(culture_id)
            .await?
            .ok_or_else(|| ScenarioError::CultureNotFound(culture_id.clone()))?;

        let instance = ActiveScenarioInstance::start(
            &template,
            culture,
            &user,
            self.max_turns,
            self.clock.now(),
        )?;
        self.instances.create(&instance).await?;

        tracing::info!(
            scenario_id = %instance.id(),
            user_id = %user_id,
            template_id = %template_id,
            culture_id = %culture_id,
            max_turns = self.max_turns,
            "Scenario started"
        );

        Ok(instance)
    }
}
