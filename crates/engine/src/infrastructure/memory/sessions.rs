use async_trait::async_trait;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use culturelab_domain::{
    ActiveScenarioInstance, ScenarioHistoryEntry, ScenarioInstanceId, UserId, UserProfile,
};

use crate::infrastructure::ports::{RepoError, ScenarioInstanceRepo, UserProfileRepo};

/// User profiles keyed by user id.
#[derive(Default)]
pub struct InMemoryUserProfiles {
    profiles: DashMap<UserId, UserProfile>,
}

impl InMemoryUserProfiles {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed with profiles from the knowledge base.
    pub fn with_profiles(profiles: impl IntoIterator<Item = UserProfile>) -> Self {
        let store = Self::new();
        for profile in profiles {
            store.profiles.insert(profile.user_id.clone(), profile);
        }
        store
    }
}

#[async_trait]
impl UserProfileRepo for InMemoryUserProfiles {
    async fn get(&self, id: &UserId) -> Result<Option<UserProfile>, RepoError> {
        Ok(self.profiles.get(id).map(|entry| entry.value().clone()))
    }

    async fn append_history(
        &self,
        id: &UserId,
        entry: ScenarioHistoryEntry,
    ) -> Result<(), RepoError> {
        match self.profiles.get_mut(id) {
            Some(mut profile) => {
                profile.scenario_history.push(entry);
                Ok(())
            }
            None => Err(RepoError::not_found("UserProfile", id)),
        }
    }
}

/// Active scenario instances keyed by instance id. Instances are never removed.
#[derive(Default)]
pub struct InMemoryScenarioInstances {
    instances: DashMap<ScenarioInstanceId, ActiveScenarioInstance>,
}

impl InMemoryScenarioInstances {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.instances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }
}

#[async_trait]
impl ScenarioInstanceRepo for InMemoryScenarioInstances {
    async fn create(&self, instance: &ActiveScenarioInstance) -> Result<(), RepoError> {
        match self.instances.entry(instance.id()) {
            Entry::Occupied(_) => Err(RepoError::constraint(format!(
                "scenario instance {} already exists",
                instance.id()
            ))),
            Entry::Vacant(slot) => {
                slot.insert(instance.clone());
                Ok(())
            }
        }
    }

    async fn get(
        &self,
        id: ScenarioInstanceId,
    ) -> Result<Option<ActiveScenarioInstance>, RepoError> {
        Ok(self.instances.get(&id).map(|entry| entry.value().clone()))
    }

    async fn update(&self, instance: &ActiveScenarioInstance) -> Result<(), RepoError> {
        match self.instances.get_mut(&instance.id()) {
            Some(mut stored) => {
                *stored = instance.clone();
                Ok(())
            }
            None => Err(RepoError::not_found("ScenarioInstance", instance.id())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_fixtures::{alice, knowledge_base};
    use chrono::Utc;

    fn instance() -> ActiveScenarioInstance {
        let kb = knowledge_base();
        ActiveScenarioInstance::start(
            &kb.scenario_templates[0],
            kb.cultures[0].clone(),
            &alice(),
            10,
            Utc::now(),
        )
        .unwrap()
    }

    #[tokio::test]
    async fn create_then_update() {
        let store = InMemoryScenarioInstances::new();
        let instance = instance();

        store.create(&instance).await.unwrap();
        assert!(store.create(&instance).await.is_err());

        let updated = instance.clone().with_current_turn(3);
        store.update(&updated).await.unwrap();

        let loaded = store.get(instance.id()).await.unwrap().unwrap();
        assert_eq!(loaded.current_turn(), 3);
        assert_eq!(store.len(), 1);
    }

    #[tokio::test]
    async fn update_of_unknown_instance_fails() {
        let store = InMemoryScenarioInstances::new();
        let err = store.update(&instance()).await.unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn append_history_extends_stored_profile() {
        let store = InMemoryUserProfiles::with_profiles([alice()]);
        let before = alice().scenario_history.len();
        let mut entry = alice().scenario_history[0].clone();
        entry.scenario_instance_id = "hist_2".to_string();

        store
            .append_history(&alice().user_id, entry)
            .await
            .unwrap();

        let loaded = store.get(&alice().user_id).await.unwrap().unwrap();
        assert_eq!(loaded.username, "Alice Smith");
        assert_eq!(loaded.scenario_history.len(), before + 1);
        assert_eq!(
            loaded.scenario_history.last().unwrap().scenario_instance_id,
            "hist_2"
        );
    }

    #[tokio::test]
    async fn append_history_for_unknown_user_fails() {
        let store = InMemoryUserProfiles::new();
        let entry = alice().scenario_history[0].clone();
        let err = store
            .append_history(&alice().user_id, entry)
            .await
            .unwrap_err();
        assert!(err.is_not_found());
    }
}
