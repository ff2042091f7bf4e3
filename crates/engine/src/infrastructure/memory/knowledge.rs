use std::sync::Arc;

use async_trait::async_trait;
use culturelab_domain::{
    CultureId, CulturalDimension, CulturalProfile, LearningModule, LearningModuleId,
    ScenarioTemplate, ScenarioTemplateId,
};

use crate::infrastructure::knowledge_base::KnowledgeBase;
use crate::infrastructure::ports::{
    CultureRepo, LearningModuleRepo, RepoError, ScenarioTemplateRepo,
};

/// Read-only view over a loaded knowledge base. Lists keep document order.
#[derive(Clone)]
pub struct InMemoryKnowledgeBase {
    data: Arc<KnowledgeBase>,
}

impl InMemoryKnowledgeBase {
    pub fn new(data: Arc<KnowledgeBase>) -> Self {
        Self { data }
    }
}

#[async_trait]
impl CultureRepo for InMemoryKnowledgeBase {
    async fn get(&self, id: &CultureId) -> Result<Option<CulturalProfile>, RepoError> {
        Ok(self.data.cultures.iter().find(|c| &c.id == id).cloned())
    }

    async fn list(&self) -> Result<Vec<CulturalProfile>, RepoError> {
        Ok(self.data.cultures.clone())
    }

    async fn list_dimensions(&self) -> Result<Vec<CulturalDimension>, RepoError> {
        Ok(self.data.dimensions.clone())
    }
}

#[async_trait]
impl ScenarioTemplateRepo for InMemoryKnowledgeBase {
    async fn get(&self, id: &ScenarioTemplateId) -> Result<Option<ScenarioTemplate>, RepoError> {
        Ok(self
            .data
            .scenario_templates
            .iter()
            .find(|t| &t.id == id)
            .cloned())
    }

    async fn list(&self) -> Result<Vec<ScenarioTemplate>, RepoError> {
        Ok(self.data.scenario_templates.clone())
    }
}

#[async_trait]
impl LearningModuleRepo for InMemoryKnowledgeBase {
    async fn get(&self, id: &LearningModuleId) -> Result<Option<LearningModule>, RepoError> {
        Ok(self
            .data
            .learning_modules
            .iter()
            .find(|m| &m.id == id)
            .cloned())
    }

    async fn list(&self) -> Result<Vec<LearningModule>, RepoError> {
        Ok(self.data.learning_modules.clone())
    }
}
