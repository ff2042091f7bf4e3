//! CultureLab domain - knowledge base types, scenario state and the pure
//! interaction-evaluation procedure.

pub mod aggregates;
pub mod entities;
pub mod error;
pub mod evaluation;
pub mod events;
pub mod ids;
pub mod value_objects;

#[cfg(test)]
pub(crate) mod test_support;

pub use aggregates::{
    ActiveScenarioInstance, ObjectiveProgress, Participant, DEFAULT_MAX_TURNS,
    INITIAL_SUCCESS_METRIC,
};

pub use entities::{
    AspectKind, CertificateRecord, CommonMisunderstanding, CueInterpretation, CulturalAspect,
    CulturalDimension, CulturalProfile, DetailedFeedback, Difficulty, EtiquetteCategory,
    EtiquetteRule, FeedbackContext, FeedbackSummary, InteractionFeedback, InteractionFlowStep,
    LearningModule, ModuleCategory, ModuleProgress, NegotiationAspect, NegotiationPractice,
    NonVerbalCue, NonVerbalCueType, QuizOption, QuizQuestion, RewardRecord, ScenarioCategory,
    ScenarioHistoryEntry, ScenarioTemplate, ScoreRange, SocialNorm, SocialNormCategory,
    TokenRecord, UserProfile,
};

pub use error::DomainError;
pub use evaluation::{
    decide, observe, Branch, Decision, Observation, RuleBranch, TOKEN_REWARD_REASON,
};
pub use events::InteractionOutcome;

pub use ids::{
    AspectId, CultureId, DimensionId, LearningModuleId, RewardId, ScenarioInstanceId,
    ScenarioTemplateId, UserId,
};

pub use value_objects::{
    normalize_utterance, AiPersona, CommunicationStyle, FeedbackVerbosity, KeywordSet,
    LlmModelPreference, NotificationPreferences, ScaleScore, Severity, SystemSettings, UserIntent,
};
