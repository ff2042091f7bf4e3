//! Unified error types for the domain layer
//!
//! Provides a common error type for knowledge base validation and scenario
//! state transitions, so adapters never have to fall back to bare strings.

use thiserror::Error;

/// Unified error type for domain operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Validation failed (e.g., invalid field values)
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Invalid ID format
    #[error("Invalid ID format: {0}")]
    InvalidId(String),

    /// Entity not found
    #[error("Entity not found: {entity_type} with id {id}")]
    NotFound {
        entity_type: &'static str,
        id: String,
    },

    /// Parse error (for value objects)
    #[error("Parse error: {0}")]
    Parse(String),

    /// State transition not allowed
    #[error("Invalid state transition: {0}")]
    InvalidStateTransition(String),

    /// Score outside of the 0-100 scale
    #[error("Score out of range: {value} (expected 0-100)")]
    ScoreOutOfRange { value: i64 },
}

impl DomainError {
    /// Creates a validation error for knowledge base or business rule violations.
    ///
    /// Use this when domain invariants are violated:
    /// - Required fields are empty
    /// - Identifiers collide within a culture or template
    /// - Curated phrases or keywords are blank
    ///
    /// # Example
    /// ```ignore
    /// if objective.trim().is_empty() {
    ///     return Err(DomainError::validation("Objective cannot be empty"));
    /// }
    /// ```
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Create a not found error
    pub fn not_found(entity_type: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type,
            id: id.into(),
        }
    }

    /// Create an invalid ID error
    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }

    /// Creates a parse error for string-to-type conversion failures.
    ///
    /// Used by the `FromStr` implementations of the closed enumerations
    /// (severity, persona, categories) when the input matches no variant.
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }

    /// Create an invalid state transition error
    pub fn invalid_state_transition(msg: impl Into<String>) -> Self {
        Self::InvalidStateTransition(msg.into())
    }

    /// Create a score-out-of-range error
    pub fn score_out_of_range(value: i64) -> Self {
        Self::ScoreOutOfRange { value }
    }
}
