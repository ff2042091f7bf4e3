//! Coarse classification of what an utterance is trying to do.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum UserIntent {
    SocialGreeting,
    DiningEtiquette,
    BusinessNegotiation,
    PositiveAction,
    PotentialPitfall,
    #[default]
    GeneralInteraction,
}

impl UserIntent {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserIntent::SocialGreeting => "social_greeting",
            UserIntent::DiningEtiquette => "dining_etiquette",
            UserIntent::BusinessNegotiation => "business_negotiation",
            UserIntent::PositiveAction => "positive_action",
            UserIntent::PotentialPitfall => "potential_pitfall",
            UserIntent::GeneralInteraction => "general_interaction",
        }
    }
}

impl fmt::Display for UserIntent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
