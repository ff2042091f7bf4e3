use async_trait::async_trait;
use culturelab_domain::SystemSettings;
use tokio::sync::RwLock;

use crate::infrastructure::ports::{RepoError, SettingsRepo};

/// Process-wide settings slot.
#[derive(Default)]
pub struct InMemorySettings {
    settings: RwLock<Option<SystemSettings>>,
}

impl InMemorySettings {
    pub fn new(initial: Option<SystemSettings>) -> Self {
        Self {
            settings: RwLock::new(initial),
        }
    }
}

#[async_trait]
impl SettingsRepo for InMemorySettings {
    async fn get(&self) -> Result<Option<SystemSettings>, RepoError> {
        Ok(*self.settings.read().await)
    }

    async fn save(&self, settings: &SystemSettings) -> Result<(), RepoError> {
        *self.settings.write().await = Some(*settings);
        Ok(())
    }
}
