//! Outcomes returned from aggregate mutations

mod scenario_events;

pub use scenario_events::InteractionOutcome;
