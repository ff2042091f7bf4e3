//! Domain entities - knowledge base records, templates and profiles

mod aspect;
mod culture;
mod dimension;
mod feedback;
mod learning_module;
mod scenario_template;
mod user_profile;

pub use aspect::{AspectKind, CulturalAspect};
pub use culture::{
    CommonMisunderstanding, CueInterpretation, CulturalProfile, EtiquetteCategory,
    EtiquetteRule, NegotiationAspect, NegotiationPractice, NonVerbalCue, NonVerbalCueType,
    SocialNorm, SocialNormCategory,
};
pub use dimension::{CulturalDimension, ScoreRange};
pub use feedback::{
    CertificateRecord, DetailedFeedback, FeedbackContext, FeedbackSummary, InteractionFeedback,
    RewardRecord, TokenRecord,
};
pub use learning_module::{LearningModule, ModuleCategory, QuizOption, QuizQuestion};
pub use scenario_template::{Difficulty, InteractionFlowStep, ScenarioCategory, ScenarioTemplate};
pub use user_profile::{ModuleProgress, ScenarioHistoryEntry, UserProfile};
