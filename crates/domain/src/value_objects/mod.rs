//! Value objects - immutable, validated building blocks.

mod intent;
mod keywords;
mod score;
mod settings;
mod severity;

pub use intent::UserIntent;
pub use keywords::{normalize_utterance, KeywordSet};
pub use score::{CommunicationStyle, ScaleScore};
pub use settings::{
    AiPersona, FeedbackVerbosity, LlmModelPreference, NotificationPreferences, SystemSettings,
};
pub use severity::Severity;
