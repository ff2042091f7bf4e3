//! Infrastructure implementations.
//!
//! Contains port trait implementations for external dependencies.

pub mod clock;
pub mod config;
pub mod knowledge_base;
pub mod memory;
pub mod ports;
pub mod rewards;
