use serde::{Deserialize, Serialize};

use crate::entities::{CulturalAspect, CulturalProfile, EtiquetteCategory, ScenarioTemplate};
use crate::value_objects::{normalize_utterance, UserIntent};
use crate::AspectId;

/// What an utterance touched: matched aspect ids in scan order plus the
/// inferred intent.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Observation {
    pub matched_aspects: Vec<AspectId>,
    pub user_intent: UserIntent,
}

impl Observation {
    pub fn has_match(&self, id: &AspectId) -> bool {
        self.matched_aspects.contains(id)
    }
}

/// Scan every aspect of `culture` and the curated phrases of `template`.
///
/// Matching is raw substring containment on the lowercased utterance. Intent
/// is last-match-wins over the scan, then overridden by a positive-action
/// phrase, then by a pitfall phrase.
pub fn observe(
    utterance: &str,
    culture: &CulturalProfile,
    template: &ScenarioTemplate,
) -> Observation {
    let normalized = normalize_utterance(utterance);
    let mut observation = Observation::default();

    for aspect in culture.aspects() {
        if !aspect.matches(&normalized) {
            continue;
        }
        observation.matched_aspects.push(aspect.id().clone());
        if let Some(intent) = intent_signal(&aspect) {
            observation.user_intent = intent;
        }
    }

    if template.matches_positive_action(&normalized) {
        observation.user_intent = UserIntent::PositiveAction;
    }
    if template.matches_pitfall(&normalized) {
        observation.user_intent = UserIntent::PotentialPitfall;
    }

    observation
}

fn intent_signal(aspect: &CulturalAspect<'_>) -> Option<UserIntent> {
    match aspect {
        CulturalAspect::Etiquette(rule) => match rule.category {
            EtiquetteCategory::Greeting | EtiquetteCategory::Conversation => {
                Some(UserIntent::SocialGreeting)
            }
            EtiquetteCategory::Dining => Some(UserIntent::DiningEtiquette),
            EtiquetteCategory::BusinessMeeting => Some(UserIntent::BusinessNegotiation),
            _ => None,
        },
        CulturalAspect::Negotiation(_) => Some(UserIntent::BusinessNegotiation),
        CulturalAspect::SocialNorm(_)
        | CulturalAspect::Misunderstanding(_)
        | CulturalAspect::NonVerbal(_) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{business_meeting_template, dinner_template, germany, japan};

    fn ids(observation: &Observation) -> Vec<&str> {
        observation
            .matched_aspects
            .iter()
            .map(|id| id.as_str())
            .collect()
    }

    #[test]
    fn late_arrival_matches_punctuality_only() {
        let observation = observe(
            "I arrive 20 minutes late without apology",
            &germany(),
            &business_meeting_template(),
        );
        assert_eq!(ids(&observation), vec!["GE002"]);
        assert_eq!(observation.user_intent, UserIntent::BusinessNegotiation);
    }

    #[test]
    fn unrelated_utterance_matches_nothing() {
        let observation = observe(
            "I look around the room",
            &germany(),
            &business_meeting_template(),
        );
        assert!(observation.matched_aspects.is_empty());
        assert_eq!(observation.user_intent, UserIntent::GeneralInteraction);
    }

    #[test]
    fn empty_utterance_is_general_interaction() {
        let observation = observe("", &germany(), &business_meeting_template());
        assert_eq!(observation, Observation::default());
    }

    #[test]
    fn last_matching_category_wins() {
        // GE001 (Greeting) is scanned before GN001 (negotiation).
        let observation = observe(
            "A firm handshake, then my data analysis",
            &germany(),
            &business_meeting_template(),
        );
        assert_eq!(ids(&observation), vec!["GE001", "GN001"]);
        assert_eq!(observation.user_intent, UserIntent::BusinessNegotiation);
    }

    #[test]
    fn dining_category_sets_dining_intent() {
        let observation = observe(
            "I stick my chopsticks upright in the rice",
            &japan(),
            &dinner_template(),
        );
        assert_eq!(ids(&observation), vec!["JP_E003"]);
        assert_eq!(observation.user_intent, UserIntent::DiningEtiquette);
    }

    #[test]
    fn social_norm_category_does_not_drive_intent() {
        // GSN001 is a Conversation social norm; GNV001 is a cue.
        let observation = observe(
            "I keep eye contact",
            &germany(),
            &business_meeting_template(),
        );
        assert_eq!(ids(&observation), vec!["GE001", "GSN001", "GNV001"]);
        assert_eq!(observation.user_intent, UserIntent::SocialGreeting);

        let observation = observe("Sincerity matters", &germany(), &business_meeting_template());
        assert_eq!(ids(&observation), vec!["GSN001"]);
        assert_eq!(observation.user_intent, UserIntent::GeneralInteraction);
    }

    #[test]
    fn positive_action_overrides_keyword_intent() {
        let observation = observe(
            "I offer a firm handshake and maintain eye contact while greeting.",
            &germany(),
            &business_meeting_template(),
        );
        assert!(observation.has_match(&AspectId::new("GE001").unwrap()));
        assert_eq!(observation.user_intent, UserIntent::PositiveAction);
    }

    #[test]
    fn pitfall_overrides_positive_action() {
        let observation = observe(
            "Introduce yourself clearly, stating your name and company. Arriving late without apology.",
            &germany(),
            &business_meeting_template(),
        );
        assert_eq!(observation.user_intent, UserIntent::PotentialPitfall);
    }

    #[test]
    fn substring_matching_has_known_false_positives() {
        // "late" is found inside "inflated".
        let observation = observe(
            "Their estimates look inflated",
            &germany(),
            &business_meeting_template(),
        );
        assert_eq!(ids(&observation), vec!["GE002"]);
    }
}
