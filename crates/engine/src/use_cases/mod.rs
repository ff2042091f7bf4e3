//! Use cases - User story orchestration.
//!
//! Each module contains use cases for a specific area. Use cases orchestrate
//! port traits and the pure domain procedure.

pub mod catalog;
pub mod evaluation;
pub mod scenario;
pub mod settings;

pub use catalog::{CatalogError, CatalogQueries};
pub use evaluation::{CulturalIntelligenceAgent, EvaluationError};
pub use scenario::{
    GetScenario, InteractionProcessed, ProcessInteraction, ScenarioError, ScenarioLocks,
    ScenarioUseCases, StartScenario,
};
pub use settings::{SettingsError, SettingsOps};
