//! The interaction-evaluation procedure.
//!
//! Evaluation runs in two pure stages. [`observe`] scans a culture's
//! knowledge base and the scenario template for what the utterance touches
//! and infers an intent; [`decide`] ranks the observation into a single
//! graded [`Decision`]. Timestamps, reward issuance and packaging into an
//! [`InteractionFeedback`](crate::entities::InteractionFeedback) live in the
//! engine.

mod decision;
mod observation;

pub use decision::{decide, Branch, Decision, RuleBranch, TOKEN_REWARD_REASON};
pub use observation::{observe, Observation};
