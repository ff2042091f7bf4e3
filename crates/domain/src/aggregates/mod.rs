//! Aggregate roots - domain objects that own their related data
//!
//! Each aggregate:
//! - Has a unique identity
//! - Exposes behavior through methods, not public fields
//! - Returns outcome enums from mutations

pub mod scenario_instance;

pub use scenario_instance::{
    ActiveScenarioInstance, ObjectiveProgress, Participant, DEFAULT_MAX_TURNS,
    INITIAL_SUCCESS_METRIC,
};
