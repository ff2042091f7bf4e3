//! Learning modules suggested alongside feedback.

use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::{CultureId, LearningModuleId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ModuleCategory {
    Communication,
    Etiquette,
    Negotiation,
    Values,
    History,
    General,
    #[serde(rename = "Non-Verbal")]
    NonVerbal,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizOption {
    pub text: String,
    pub is_correct: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizQuestion {
    pub id: String,
    pub question: String,
    pub options: Vec<QuizOption>,
    pub explanation: String,
}

impl QuizQuestion {
    pub fn correct_options(&self) -> impl Iterator<Item = &QuizOption> {
        self.options.iter().filter(|option| option.is_correct)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LearningModule {
    pub id: LearningModuleId,
    pub title: String,
    pub category: ModuleCategory,
    #[serde(default)]
    pub cultures_covered: Vec<CultureId>,
    pub content: String,
    #[serde(default)]
    pub quiz_questions: Vec<QuizQuestion>,
    pub estimated_completion_time_minutes: u32,
    #[serde(default)]
    pub prerequisites: Vec<LearningModuleId>,
}

impl LearningModule {
    pub fn covers(&self, culture_id: &CultureId) -> bool {
        self.cultures_covered.contains(culture_id)
    }

    /// Every quiz question needs at least one correct option, and a module
    /// cannot list itself as a prerequisite.
    pub fn validate(&self) -> Result<(), DomainError> {
        if let Some(question) = self
            .quiz_questions
            .iter()
            .find(|q| q.correct_options().next().is_none())
        {
            return Err(DomainError::validation(format!(
                "Learning module {} question {} has no correct option",
                self.id, question.id
            )));
        }
        if self.prerequisites.contains(&self.id) {
            return Err(DomainError::validation(format!(
                "Learning module {} lists itself as a prerequisite",
                self.id
            )));
        }
        Ok(())
    }
}
