//! CultureLab engine library.
//!
//! ## Structure
//!
//! - `use_cases/` - Evaluation agent, scenario lifecycle, catalog and settings
//! - `infrastructure/` - Ports, in-memory adapters, knowledge base loading, config
//! - `app` - Application composition

pub mod app;
pub mod infrastructure;
pub mod use_cases;

#[cfg(test)]
pub(crate) mod test_fixtures;

/// End-to-end tests through the composed `App`.
#[cfg(test)]
mod e2e_tests;

pub use app::App;
