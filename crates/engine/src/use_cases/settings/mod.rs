//! System settings use cases.

use std::sync::Arc;

use culturelab_domain::SystemSettings;

use crate::infrastructure::ports::{RepoError, SettingsRepo};

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("Repository error: {0}")]
    Repo(#[from] RepoError),
}

/// Read and change the process-wide settings.
///
/// Falls back to the knowledge base defaults when nothing has been saved.
pub struct SettingsOps {
    repo: Arc<dyn SettingsRepo>,
    defaults: SystemSettings,
}

impl SettingsOps {
    pub fn new(repo: Arc<dyn SettingsRepo>, defaults: SystemSettings) -> Self {
        Self { repo, defaults }
    }

    pub async fn get(&self) -> Result<SystemSettings, SettingsError> {
        Ok(self.repo.get().await?.unwrap_or(self.defaults))
    }

    pub async fn update(&self, settings: SystemSettings) -> Result<SystemSettings, SettingsError> {
        self.repo.save(&settings).await?;
        tracing::info!(
            ai_persona = settings.ai_persona.as_str(),
            "Settings updated"
        );
        Ok(settings)
    }

    pub async fn reset(&self) -> Result<SystemSettings, SettingsError> {
        self.update(self.defaults).await
    }
}
