use std::sync::Arc;

use culturelab_domain::{ActiveScenarioInstance, ScenarioInstanceId};

use super::ScenarioError;
use crate::infrastructure::ports::ScenarioInstanceRepo;

pub struct GetScenario {
    instances: Arc<dyn ScenarioInstanceRepo>,
}

impl GetScenario {
    pub fn new(instances: Arc<dyn ScenarioInstanceRepo>) -> Self {
        Self { instances }
    }

    pub async fn execute(
        &self,
        instance_id: ScenarioInstanceId,
    ) -> Result<ActiveScenarioInstance, ScenarioError> {
        self.instances
            .get(instance_id)
            .await?
            .ok_or(ScenarioError::ScenarioNotFound(instance_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::ports::{MockScenarioInstanceRepo, RepoError};

    #[tokio::test]
    async fn missing_instance_is_not_found() {
        let id = ScenarioInstanceId::new();
        let mut repo = MockScenarioInstanceRepo::new();
        repo.expect_get()
            .withf(move |requested| *requested == id)
            .returning(|_| Ok(None));

        let result = GetScenario::new(Arc::new(repo)).execute(id).await;
        assert!(matches!(result, Err(ScenarioError::ScenarioNotFound(missing)) if missing == id));
    }

    #[tokio::test]
    async fn storage_failure_propagates() {
        let mut repo = MockScenarioInstanceRepo::new();
        repo.expect_get()
            .returning(|_| Err(RepoError::storage("get", "disk full")));

        let result = GetScenario::new(Arc::new(repo))
            .execute(ScenarioInstanceId::new())
            .await;
        assert!(matches!(result, Err(ScenarioError::Repo(_))));
    }
}
