//! Repository port traits for knowledge base and session storage.

use async_trait::async_trait;
use culturelab_domain::{
    ActiveScenarioInstance, CultureId, CulturalDimension, CulturalProfile, LearningModule,
    LearningModuleId, ScenarioHistoryEntry, ScenarioInstanceId, ScenarioTemplate,
    ScenarioTemplateId, SystemSettings, UserId, UserProfile,
};

use super::error::RepoError;

// =============================================================================
// Settings Storage
// =============================================================================

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SettingsRepo: Send + Sync {
    async fn get(&self) -> Result<Option<SystemSettings>, RepoError>;
    async fn save(&self, settings: &SystemSettings) -> Result<(), RepoError>;
}

// =============================================================================
// Knowledge Base Ports (read-only after load)
// =============================================================================

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CultureRepo: Send + Sync {
    async fn get(&self, id: &CultureId) -> Result<Option<CulturalProfile>, RepoError>;
    async fn list(&self) -> Result<Vec<CulturalProfile>, RepoError>;
    async fn list_dimensions(&self) -> Result<Vec<CulturalDimension>, RepoError>;
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ScenarioTemplateRepo: Send + Sync {
    async fn get(&self, id: &ScenarioTemplateId) -> Result<Option<ScenarioTemplate>, RepoError>;
    async fn list(&self) -> Result<Vec<ScenarioTemplate>, RepoError>;
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LearningModuleRepo: Send + Sync {
    async fn get(&self, id: &LearningModuleId) -> Result<Option<LearningModule>, RepoError>;
    async fn list(&self) -> Result<Vec<LearningModule>, RepoError>;
}

// =============================================================================
// Session State Ports
// =============================================================================

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserProfileRepo: Send + Sync {
    async fn get(&self, id: &UserId) -> Result<Option<UserProfile>, RepoError>;
    /// Append to the stored profile's history in one step, so completions
    /// from concurrent scenarios of the same user never overwrite each other.
    async fn append_history(
        &self,
        id: &UserId,
        entry: ScenarioHistoryEntry,
    ) -> Result<(), RepoError>;
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ScenarioInstanceRepo: Send + Sync {
    /// Store a freshly started instance. Fails if the id is already taken.
    async fn create(&self, instance: &ActiveScenarioInstance) -> Result<(), RepoError>;
    async fn get(&self, id: ScenarioInstanceId)
        -> Result<Option<ActiveScenarioInstance>, RepoError>;
    /// Replace a stored instance. Fails if the id is unknown.
    async fn update(&self, instance: &ActiveScenarioInstance) -> Result<(), RepoError>;
}
