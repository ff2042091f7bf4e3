//! Port traits for infrastructure boundaries.
//!
//! These are the ONLY abstractions in the engine. Everything else is concrete types.
//! Ports exist for:
//! - Knowledge base and session storage (in-memory today)
//! - Reward issuance (stubbed today)
//! - Clock (for testing)

mod error;
mod external;
mod repos;
mod testing;

// =============================================================================
// Repository Ports
// =============================================================================
pub use repos::{
    CultureRepo, LearningModuleRepo, ScenarioInstanceRepo, ScenarioTemplateRepo, SettingsRepo,
    UserProfileRepo,
};

// =============================================================================
// Errors
// =============================================================================
pub use error::{RepoError, RewardError};

// =============================================================================
// External Service Ports
// =============================================================================
pub use external::RewardPort;

// =============================================================================
// Test-Only Mocks (only available during test builds)
// =============================================================================
#[cfg(test)]
pub use repos::{
    MockCultureRepo, MockLearningModuleRepo, MockScenarioInstanceRepo, MockScenarioTemplateRepo,
    MockSettingsRepo, MockUserProfileRepo,
};

#[cfg(test)]
pub use external::MockRewardPort;

// =============================================================================
// Testing Ports
// =============================================================================
pub use testing::ClockPort;
