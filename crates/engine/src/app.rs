//! Application state and composition.

use std::sync::Arc;

use culturelab_domain::SystemSettings;

use crate::infrastructure::{
    config::EngineConfig,
    knowledge_base::KnowledgeBase,
    memory::{
        InMemoryKnowledgeBase, InMemoryScenarioInstances, InMemorySettings, InMemoryUserProfiles,
    },
    ports::{
        ClockPort, CultureRepo, LearningModuleRepo, RewardPort, ScenarioInstanceRepo,
        ScenarioTemplateRepo, SettingsRepo, UserProfileRepo,
    },
};
use crate::use_cases;

/// Main application state.
///
/// Holds all port implementations and use cases.
pub struct App {
    pub repositories: Repositories,
    pub use_cases: UseCases,
    pub config: EngineConfig,
}

/// Container for all port implementations, injected as trait objects.
#[derive(Clone)]
pub struct Repositories {
    pub cultures: Arc<dyn CultureRepo>,
    pub templates: Arc<dyn ScenarioTemplateRepo>,
    pub modules: Arc<dyn LearningModuleRepo>,
    pub users: Arc<dyn UserProfileRepo>,
    pub instances: Arc<dyn ScenarioInstanceRepo>,
    pub settings: Arc<dyn SettingsRepo>,
}

impl Repositories {
    /// In-memory stores seeded from `knowledge_base`.
    pub fn in_memory(knowledge_base: KnowledgeBase) -> Self {
        let users = InMemoryUserProfiles::with_profiles(knowledge_base.user_profiles.clone());
        let settings = InMemorySettings::new(Some(knowledge_base.settings));
        let catalog = InMemoryKnowledgeBase::new(Arc::new(knowledge_base));

        Self {
            cultures: Arc::new(catalog.clone()),
            templates: Arc::new(catalog.clone()),
            modules: Arc::new(catalog),
            users: Arc::new(users),
            instances: Arc::new(InMemoryScenarioInstances::new()),
            settings: Arc::new(settings),
        }
    }
}

/// Container for all use cases.
pub struct UseCases {
    pub evaluation: Arc<use_cases::CulturalIntelligenceAgent>,
    pub scenario: use_cases::ScenarioUseCases,
    pub catalog: Arc<use_cases::CatalogQueries>,
    pub settings: Arc<use_cases::SettingsOps>,
}

impl App {
    /// Create a new App with all dependencies wired up.
    pub fn new(
        repositories: Repositories,
        rewards: Arc<dyn RewardPort>,
        clock: Arc<dyn ClockPort>,
        config: EngineConfig,
        default_settings: SystemSettings,
    ) -> Self {
        let agent = Arc::new(use_cases::CulturalIntelligenceAgent::new(
            rewards.clone(),
            clock.clone(),
        ));

        let scenario = use_cases::ScenarioUseCases::new(
            Arc::new(use_cases::StartScenario::new(
                repositories.templates.clone(),
                repositories.cultures.clone(),
                repositories.users.clone(),
                repositories.instances.clone(),
                clock.clone(),
                config.max_turns,
            )),
            Arc::new(use_cases::ProcessInteraction::new(
                repositories.instances.clone(),
                repositories.users.clone(),
                repositories.templates.clone(),
                repositories.settings.clone(),
                agent.clone(),
                rewards,
                clock,
                Arc::new(use_cases::ScenarioLocks::new()),
            )),
            Arc::new(use_cases::GetScenario::new(repositories.instances.clone())),
        );

        let catalog = Arc::new(use_cases::CatalogQueries::new(
            repositories.cultures.clone(),
            repositories.templates.clone(),
            repositories.modules.clone(),
            repositories.users.clone(),
        ));

        let settings = Arc::new(use_cases::SettingsOps::new(
            repositories.settings.clone(),
            default_settings,
        ));

        Self {
            repositories,
            use_cases: UseCases {
                evaluation: agent,
                scenario,
                catalog,
                settings,
            },
            config,
        }
    }

    /// Wire in-memory stores seeded from `knowledge_base`. A configured
    /// persona replaces the document's default persona.
    pub fn in_memory(
        mut knowledge_base: KnowledgeBase,
        config: EngineConfig,
        rewards: Arc<dyn RewardPort>,
        clock: Arc<dyn ClockPort>,
    ) -> Self {
        if let Some(persona) = config.ai_persona {
            knowledge_base.settings = knowledge_base.settings.with_persona(persona);
        }
        let default_settings = knowledge_base.settings;
        Self::new(
            Repositories::in_memory(knowledge_base),
            rewards,
            clock,
            config,
            default_settings,
        )
    }
}
