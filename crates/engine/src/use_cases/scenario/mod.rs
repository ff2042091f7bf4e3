//! Scenario lifecycle use cases.
//!
//! Starting a scenario, processing interactions against it, and reading its
//! current state.

mod error;
mod get;
mod locks;
mod process;
mod start;

use std::sync::Arc;

pub use error::ScenarioError;
pub use get::GetScenario;
pub use locks::ScenarioLocks;
pub use process::{InteractionProcessed, ProcessInteraction};
pub use start::StartScenario;

/// Container for scenario use cases.
pub struct ScenarioUseCases {
    pub start: Arc<StartScenario>,
    pub process: Arc<ProcessInteraction>,
    pub get: Arc<GetScenario>,
}

impl ScenarioUseCases {
    pub fn new(
        start: Arc<StartScenario>,
        process: Arc<ProcessInteraction>,
        get: Arc<GetScenario>,
    ) -> Self {
        Self {
            start,
            process,
            get,
        }
    }
}
