//! System settings that shape how feedback is voiced.
//!
//! Settings are stored and handed across infrastructure boundaries, so they
//! carry serde derives with per-field defaults for forward compatibility.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::DomainError;

/// Persona the simulated counterpart speaks with.
///
/// Each persona maps to a fixed narrative prefix; nothing is generated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum AiPersona {
    #[default]
    Supportive,
    Challenging,
    Neutral,
    FormalAdvisor,
}

impl AiPersona {
    /// Fixed prefix prepended to every narrative response.
    pub fn response_prefix(&self) -> &'static str {
        match self {
            AiPersona::Supportive => "That's an interesting approach. Let's see... ",
            AiPersona::Challenging => "Consider your strategy carefully. ",
            AiPersona::FormalAdvisor => {
                "Analyzing your input, the cultural implications are as follows: "
            }
            AiPersona::Neutral => "Processing your action. ",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AiPersona::Supportive => "supportive",
            AiPersona::Challenging => "challenging",
            AiPersona::Neutral => "neutral",
            AiPersona::FormalAdvisor => "formal_advisor",
        }
    }
}

impl fmt::Display for AiPersona {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for AiPersona {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "supportive" => Ok(AiPersona::Supportive),
            "challenging" => Ok(AiPersona::Challenging),
            "neutral" => Ok(AiPersona::Neutral),
            "formal_advisor" | "formaladvisor" | "formal" => Ok(AiPersona::FormalAdvisor),
            _ => Err(DomainError::parse(format!("Unknown AI persona: {}", s))),
        }
    }
}

/// How much explanation the learner wants with each piece of feedback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum FeedbackVerbosity {
    Concise,
    Detailed,
    #[default]
    Pedagogical,
}

impl std::str::FromStr for FeedbackVerbosity {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "concise" => Ok(FeedbackVerbosity::Concise),
            "detailed" => Ok(FeedbackVerbosity::Detailed),
            "pedagogical" => Ok(FeedbackVerbosity::Pedagogical),
            _ => Err(DomainError::parse(format!("Unknown feedback verbosity: {}", s))),
        }
    }
}

/// Preferred model profile for generated content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum LlmModelPreference {
    Default,
    Fast,
    #[default]
    Detailed,
    PedagogicalMode,
    RiskAverse,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationPreferences {
    #[serde(default = "default_true")]
    pub email: bool,
    #[serde(default = "default_true")]
    pub in_app: bool,
    #[serde(default = "default_true")]
    pub scenario_recommendations: bool,
}

impl Default for NotificationPreferences {
    fn default() -> Self {
        Self {
            email: true,
            in_app: true,
            scenario_recommendations: true,
        }
    }
}

fn default_true() -> bool {
    true
}

/// Process-wide system settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct SystemSettings {
    #[serde(default)]
    pub dark_mode: bool,
    #[serde(default)]
    pub notification_preferences: NotificationPreferences,
    #[serde(default)]
    pub llm_model_preference: LlmModelPreference,
    #[serde(default)]
    pub feedback_verbosity: FeedbackVerbosity,
    #[serde(default)]
    pub ai_persona: AiPersona,
}

impl SystemSettings {
    pub fn with_persona(mut self, ai_persona: AiPersona) -> Self {
        self.ai_persona = ai_persona;
        self
    }

    pub fn with_verbosity(mut self, feedback_verbosity: FeedbackVerbosity) -> Self {
        self.feedback_verbosity = feedback_verbosity;
        self
    }
}
