//! Read-only catalog queries over the knowledge base and user profiles.

use std::sync::Arc;

use culturelab_domain::{
    CultureId, CulturalDimension, CulturalProfile, LearningModule, LearningModuleId,
    ScenarioTemplate, ScenarioTemplateId, UserId, UserProfile,
};

use crate::infrastructure::ports::{
    CultureRepo, LearningModuleRepo, RepoError, ScenarioTemplateRepo, UserProfileRepo,
};

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Culture not found: {0}")]
    CultureNotFound(CultureId),
    #[error("Scenario template not found: {0}")]
    TemplateNotFound(ScenarioTemplateId),
    #[error("Learning module not found: {0}")]
    ModuleNotFound(LearningModuleId),
    #[error("User not found: {0}")]
    UserNotFound(UserId),
    #[error("Repository error: {0}")]
    Repo(#[from] RepoError),
}

pub struct CatalogQueries {
    cultures: Arc<dyn CultureRepo>,
    templates: Arc<dyn ScenarioTemplateRepo>,
    modules: Arc<dyn LearningModuleRepo>,
    users: Arc<dyn UserProfileRepo>,
}

impl CatalogQueries {
    pub fn new(
        cultures: Arc<dyn CultureRepo>,
        templates: Arc<dyn ScenarioTemplateRepo>,
        modules: Arc<dyn LearningModuleRepo>,
        users: Arc<dyn UserProfileRepo>,
    ) -> Self {
        Self {
            cultures,
            templates,
            modules,
            users,
        }
    }

    pub async fn list_cultures(&self) -> Result<Vec<CulturalProfile>, CatalogError> {
        Ok(self.cultures.list().await?)
    }

    pub async fn get_culture(&self, id: &CultureId) -> Result<CulturalProfile, CatalogError> {
        self.cultures
            .get(id)
            .await?
            .ok_or_else(|| CatalogError::CultureNotFound(id.clone()))
    }

    pub async fn list_dimensions(&self) -> Result<Vec<CulturalDimension>, CatalogError> {
        Ok(self.cultures.list_dimensions().await?)
    }

    pub async fn list_templates(&self) -> Result<Vec<ScenarioTemplate>, CatalogError> {
        Ok(self.templates.list().await?)
    }

    pub async fn get_template(
        &self,
        id: &ScenarioTemplateId,
    ) -> Result<ScenarioTemplate, CatalogError> {
        self.templates
            .get(id)
            .await?
            .ok_or_else(|| CatalogError::TemplateNotFound(id.clone()))
    }

    pub async fn list_learning_modules(&self) -> Result<Vec<LearningModule>, CatalogError> {
        Ok(self.modules.list().await?)
    }

    pub async fn get_learning_module(
        &self,
        id: &LearningModuleId,
    ) -> Result<LearningModule, CatalogError> {
        self.modules
            .get(id)
            .await?
            .ok_or_else(|| CatalogError::ModuleNotFound(id.clone()))
    }

    /// Learning modules covering `culture_id`, in catalog order.
    pub async fn modules_for_culture(
        &self,
        culture_id: &CultureId,
    ) -> Result<Vec<LearningModule>, CatalogError> {
        let modules = self.modules.list().await?;
        Ok(modules
            .into_iter()
            .filter(|module| module.covers(culture_id))
            .collect())
    }

    pub async fn get_user_profile(&self, id: &UserId) -> Result<UserProfile, CatalogError> {
        self.users
            .get(id)
            .await?
            .ok_or_else(|| CatalogError::UserNotFound(id.clone()))
    }
}
