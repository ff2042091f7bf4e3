use culturelab_domain::{
    CultureId, DomainError, ScenarioInstanceId, ScenarioTemplateId, UserId,
};

use crate::infrastructure::ports::RepoError;
use crate::use_cases::evaluation::EvaluationError;

/// Errors for scenario lifecycle operations.
#[derive(Debug, thiserror::Error)]
pub enum ScenarioError {
    #[error("Scenario template not found: {0}")]
    TemplateNotFound(ScenarioTemplateId),

    #[error("Culture not found: {0}")]
    CultureNotFound(CultureId),

    #[error("User not found: {0}")]
    UserNotFound(UserId),

    #[error("Scenario not found: {0}")]
    ScenarioNotFound(ScenarioInstanceId),

    #[error("Scenario {0} is already completed")]
    ScenarioCompleted(ScenarioInstanceId),

    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    #[error("Repository error: {0}")]
    Repo(#[from] RepoError),

    #[error("Evaluation error: {0}")]
    Evaluation(#[from] EvaluationError),
}
