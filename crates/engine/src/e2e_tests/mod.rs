//! End-to-end tests through the composed `App`.
//!
//! Every test builds a fresh in-memory `App` from the embedded knowledge
//! base, so tests are independent and need no external services.


use std::sync::Arc;

use chrono::{TimeZone, Utc};
use culturelab_domain::{
    ActiveScenarioInstance, CultureId, ScenarioTemplateId, UserId,
};

use crate::app::{App, Repositories};
use crate::infrastructure::clock::FixedClock;
use crate::infrastructure::config::EngineConfig;
use crate::infrastructure::knowledge_base::KnowledgeBase;
use crate::infrastructure::rewards::StubRewardIssuer;
use crate::test_fixtures::knowledge_base;

fn fixed_clock() -> FixedClock {
    FixedClock(Utc.with_ymd_and_hms(2024, 6, 1, 9, 0, 0).unwrap())
}

pub(crate) struct E2EContext {
    pub app: App,
    pub user_id: UserId,
}

impl E2EContext {
    pub fn setup() -> Self {
        Self::with_knowledge_base(knowledge_base(), EngineConfig::default())
    }

    pub fn with_knowledge_base(knowledge_base: KnowledgeBase, config: EngineConfig) -> Self {
        let user_id = config.default_user.clone();
        let app = App::in_memory(
            knowledge_base,
            config,
            Arc::new(StubRewardIssuer::new()),
            Arc::new(fixed_clock()),
        );
        Self { app, user_id }
    }

    /// Seed stores from the embedded knowledge base, then let `wrap` swap
    /// individual repositories before the use cases are wired.
    pub fn with_repositories(
        config: EngineConfig,
        wrap: impl FnOnce(Repositories) -> Repositories,
    ) -> Self {
        let knowledge_base = knowledge_base();
        let default_settings = knowledge_base.settings;
        let user_id = config.default_user.clone();
        let app = App::new(
            wrap(Repositories::in_memory(knowledge_base)),
            Arc::new(StubRewardIssuer::new()),
            Arc::new(fixed_clock()),
            config,
            default_settings,
        );
        Self { app, user_id }
    }

    pub async fn start(&self, template: &str, culture: &str) -> ActiveScenarioInstance {
        self.app
            .use_cases
            .scenario
            .start
            .execute(
                &self.user_id,
                &ScenarioTemplateId::new(template).unwrap(),
                &CultureId::new(culture).unwrap(),
            )
            .await
            .expect("scenario should start")
    }

    pub async fn say(
        &self,
        scenario: &ActiveScenarioInstance,
        utterance: &str,
    ) -> crate::use_cases::InteractionProcessed {
        self.app
            .use_cases
            .scenario
            .process
            .execute(&self.user_id, scenario.id(), utterance)
            .await
            .expect("interaction should be processed")
    }
}
