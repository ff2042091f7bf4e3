//! In-memory port implementations.
//!
//! State lives for the lifetime of the process. The knowledge base tables
//! are immutable after load and shared through `Arc`; session state uses
//! concurrent maps.

mod knowledge;
mod sessions;
mod settings;

pub use knowledge::InMemoryKnowledgeBase;
pub use sessions::{InMemoryScenarioInstances, InMemoryUserProfiles};
pub use settings::InMemorySettings;
