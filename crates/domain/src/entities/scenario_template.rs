//! Scenario template entity - the static script of a roleplay scenario.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::{LearningModuleId, ScenarioTemplateId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ScenarioCategory {
    Business,
    Social,
    Academic,
    Personal,
    Diplomacy,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

/// One exchange from a worked example of the scenario.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InteractionFlowStep {
    pub user: String,
    pub ai: String,
    pub feedback: String,
}

/// A roleplay scenario definition.
///
/// # Invariants (checked by [`ScenarioTemplate::validate`])
///
/// - objectives are non-empty and unique (they key the completion map)
/// - curated positive-action and pitfall phrases are non-empty
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioTemplate {
    pub id: ScenarioTemplateId,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub category: ScenarioCategory,
    pub difficulty: Difficulty,
    pub objectives: Vec<String>,
    pub initial_situation: String,
    /// Aspect and dimension ids the scenario exercises.
    #[serde(default)]
    pub key_cultural_aspects: Vec<String>,
    #[serde(default)]
    pub interaction_flow_example: Vec<InteractionFlowStep>,
    #[serde(default)]
    pub possible_user_actions: Vec<String>,
    #[serde(default)]
    pub possible_pitfalls: Vec<String>,
    #[serde(default)]
    pub related_learning_modules: Vec<LearningModuleId>,
}

impl ScenarioTemplate {
    /// True if the lowercased utterance contains any curated positive action.
    pub fn matches_positive_action(&self, normalized_utterance: &str) -> bool {
        contains_any_phrase(&self.possible_user_actions, normalized_utterance)
    }

    /// True if the lowercased utterance contains any curated pitfall.
    pub fn matches_pitfall(&self, normalized_utterance: &str) -> bool {
        contains_any_phrase(&self.possible_pitfalls, normalized_utterance)
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        if self.title.trim().is_empty() {
            return Err(DomainError::validation(format!(
                "Scenario template {} has an empty title",
                self.id
            )));
        }
        if self.objectives.is_empty() {
            return Err(DomainError::validation(format!(
                "Scenario template {} has no objectives",
                self.id
            )));
        }

        let mut seen: HashSet<&str> = HashSet::new();
        for objective in &self.objectives {
            if objective.trim().is_empty() {
                return Err(DomainError::validation(format!(
                    "Scenario template {} has an empty objective",
                    self.id
                )));
            }
            if !seen.insert(objective.as_str()) {
                return Err(DomainError::validation(format!(
                    "Scenario template {} has duplicate objective '{}'",
                    self.id, objective
                )));
            }
        }

        let blank_phrase = self
            .possible_user_actions
            .iter()
            .chain(self.possible_pitfalls.iter())
            .any(|phrase| phrase.trim().is_empty());
        if blank_phrase {
            return Err(DomainError::validation(format!(
                "Scenario template {} has a blank curated phrase",
                self.id
            )));
        }

        Ok(())
    }
}

fn contains_any_phrase(phrases: &[String], normalized_utterance: &str) -> bool {
    phrases
        .iter()
        .any(|phrase| normalized_utterance.contains(phrase.to_lowercase().as_str()))
}
