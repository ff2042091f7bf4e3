use std::sync::Arc;

use culturelab_domain::ScenarioInstanceId;
use dashmap::DashMap;
use tokio::sync::{Mutex, OwnedMutexGuard};

/// One async mutex per scenario instance.
///
/// Held across read, evaluate, transition and write so interactions on the
/// same instance apply in order. Different instances never contend.
#[derive(Default)]
pub struct ScenarioLocks {
    locks: DashMap<ScenarioInstanceId, Arc<Mutex<()>>>,
}

impl ScenarioLocks {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn acquire(&self, id: ScenarioInstanceId) -> OwnedMutexGuard<()> {
        let lock = Arc::clone(self.locks.entry(id).or_default().value());
        lock.lock_owned().await
    }

    #[cfg(test)]
    pub(crate) fn tracked(&self) -> usize {
        self.locks.len()
    }
}
