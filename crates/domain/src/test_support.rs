//! Shared fixtures for unit tests.

use std::collections::BTreeMap;

use chrono::{TimeZone, Utc};

use crate::entities::{
    CommonMisunderstanding, CueInterpretation, CulturalProfile, DetailedFeedback, Difficulty,
    EtiquetteCategory, EtiquetteRule, FeedbackContext, FeedbackSummary, InteractionFeedback,
    ModuleProgress, NegotiationAspect, NegotiationPractice, NonVerbalCue, NonVerbalCueType,
    ScenarioCategory, ScenarioHistoryEntry, ScenarioTemplate, SocialNorm, SocialNormCategory,
    UserProfile,
};
use crate::evaluation::{Branch, Decision, Observation};
use crate::value_objects::{CommunicationStyle, KeywordSet, ScaleScore, Severity};
use crate::{
    AspectId, CultureId, DimensionId, LearningModuleId, ScenarioInstanceId, ScenarioTemplateId,
    UserId,
};

fn aspect_id(id: &str) -> AspectId {
    AspectId::new(id).unwrap()
}

fn score(value: i64) -> ScaleScore {
    ScaleScore::new(value).unwrap()
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn etiquette(
    id: &str,
    category: EtiquetteCategory,
    rule: &str,
    description: &str,
    consequences: Severity,
    keywords: &[&str],
) -> EtiquetteRule {
    EtiquetteRule {
        id: aspect_id(id),
        category,
        rule: rule.to_string(),
        description: description.to_string(),
        consequences,
        example: None,
        keywords: KeywordSet::new(keywords.iter().copied()),
    }
}

fn practice(
    id: &str,
    aspect: NegotiationAspect,
    practice: &str,
    keywords: &[&str],
) -> NegotiationPractice {
    NegotiationPractice {
        id: aspect_id(id),
        aspect,
        practice: practice.to_string(),
        description: format!("{practice}."),
        cultural_basis: "fixture".to_string(),
        keywords: KeywordSet::new(keywords.iter().copied()),
    }
}

fn norm(id: &str, category: SocialNormCategory, norm: &str, keywords: &[&str]) -> SocialNorm {
    SocialNorm {
        id: aspect_id(id),
        category,
        norm: norm.to_string(),
        description: format!("{norm}."),
        avoid: None,
        keywords: KeywordSet::new(keywords.iter().copied()),
    }
}

fn cue(id: &str, meaning: &str, keywords: &[&str]) -> NonVerbalCue {
    NonVerbalCue {
        id: aspect_id(id),
        cue_type: NonVerbalCueType::EyeContact,
        cue: "Eye contact".to_string(),
        meaning: meaning.to_string(),
        interpretation: CueInterpretation::Positive,
        caution: None,
        keywords: KeywordSet::new(keywords.iter().copied()),
    }
}

fn profile(id: &str, name: &str, continent: &str, language: &str) -> CulturalProfile {
    CulturalProfile {
        id: CultureId::new(id).unwrap(),
        name: name.to_string(),
        continent: continent.to_string(),
        language: language.to_string(),
        hello_phrase: String::new(),
        goodbye_phrase: String::new(),
        cultural_dimensions: BTreeMap::new(),
        communication_style: CommunicationStyle {
            directness: score(50),
            context_sensitivity: score(50),
            formality_level: score(50),
            emotional_expression: score(50),
        },
        etiquette_rules: vec![],
        negotiation_practices: vec![],
        social_norms: vec![],
        common_misunderstandings: vec![],
        non_verbal_cues: vec![],
        values: vec![],
    }
}

pub(crate) fn germany() -> CulturalProfile {
    let mut culture = profile("GERMANY", "Germany", "Europe", "German");
    culture.hello_phrase = "Guten Tag".to_string();
    culture.cultural_dimensions = BTreeMap::from([
        (DimensionId::new("power_distance").unwrap(), score(35)),
        (DimensionId::new("uncertainty_avoidance").unwrap(), score(65)),
    ]);
    culture.communication_style.directness = score(85);
    culture.etiquette_rules = vec![
        etiquette(
            "GE001",
            EtiquetteCategory::Greeting,
            "Shake hands firmly",
            "A firm handshake is expected when greeting and leaving, with eye contact.",
            Severity::Negative,
            &["handshake", "firm", "eye contact", "greeting"],
        ),
        etiquette(
            "GE002",
            EtiquetteCategory::BusinessMeeting,
            "Be punctual",
            "Punctuality is extremely important; arriving late without a valid excuse is considered rude.",
            Severity::Critical,
            &["punctual", "on time", "late", "meeting"],
        ),
        etiquette(
            "GE006",
            EtiquetteCategory::Conversation,
            "Direct communication",
            "Germans prefer direct and factual communication.",
            Severity::Neutral,
            &["direct communication", "small talk", "factual"],
        ),
        etiquette(
            "GE007",
            EtiquetteCategory::BusinessMeeting,
            "Detailed preparation",
            "Come prepared with facts, figures, and a clear agenda.",
            Severity::Negative,
            &["preparation", "facts", "figures", "agenda", "logic"],
        ),
        etiquette(
            "GE010",
            EtiquetteCategory::Conversation,
            "Address by title and surname",
            "Unless invited otherwise, address individuals by their professional title and surname.",
            Severity::Negative,
            &["title", "surname", "formal address"],
        ),
    ];
    culture.negotiation_practices = vec![
        practice(
            "GN001",
            NegotiationAspect::Preparation,
            "Thorough data analysis",
            &["data analysis", "facts", "figures", "preparation"],
        ),
        practice(
            "GN004",
            NegotiationAspect::RelationshipBuilding,
            "Trust built through competence",
            &["trust", "competence", "reliability"],
        ),
    ];
    culture.social_norms = vec![norm(
        "GSN001",
        SocialNormCategory::Conversation,
        "Maintain eye contact",
        &["eye contact", "sincerity"],
    )];
    culture.common_misunderstandings = vec![CommonMisunderstanding {
        id: aspect_id("GCM001"),
        topic: "Directness".to_string(),
        description: "Directness is perceived as honest and efficient.".to_string(),
        cultural_difference: "High directness vs. indirect communication styles.".to_string(),
        advice: "Focus on clarity and facts.".to_string(),
        keywords: KeywordSet::new(["directness", "blunt", "honest", "efficient"]),
    }];
    culture.non_verbal_cues = vec![cue(
        "GNV001",
        "Sign of sincerity, attentiveness, and confidence.",
        &["eye contact", "direct", "sustained"],
    )];
    culture.values = strings(&["Order", "Punctuality"]);
    culture
}

pub(crate) fn japan() -> CulturalProfile {
    let mut culture = profile("JAPAN", "Japan", "Asia", "Japanese");
    culture.etiquette_rules = vec![
        etiquette(
            "JP_E001",
            EtiquetteCategory::Greeting,
            "Bow correctly",
            "Bowing is a complex form of greeting, showing respect.",
            Severity::Negative,
            &["bow", "greeting", "respect"],
        ),
        etiquette(
            "JP_E002",
            EtiquetteCategory::BusinessMeeting,
            "Exchange business cards (Meishi)",
            "Always present and receive business cards with both hands.",
            Severity::Critical,
            &["business card", "meishi", "two hands"],
        ),
        etiquette(
            "JP_E003",
            EtiquetteCategory::Dining,
            "Do not stick chopsticks upright in rice",
            "This resembles a funeral rite and is highly offensive.",
            Severity::Critical,
            &["chopsticks", "rice", "upright", "funeral"],
        ),
        etiquette(
            "JP_E009",
            EtiquetteCategory::Dining,
            "Slurp noodles",
            "Slurping noodles is acceptable and can indicate enjoyment.",
            Severity::Advisory,
            &["slurp noodles", "dining"],
        ),
    ];
    culture.negotiation_practices = vec![practice(
        "JP_N003",
        NegotiationAspect::DecisionMaking,
        "Consensus-based (Nemawashi)",
        &["consensus", "nemawashi", "collective decision"],
    )];
    culture.non_verbal_cues = vec![cue(
        "JP_NV001",
        "Shows respect, humility, and deference.",
        &["eye contact", "averted", "respect"],
    )];
    culture
}

/// A culture with a Positive etiquette rule, which the shipped data lacks.
pub(crate) fn courtesy_culture() -> CulturalProfile {
    let mut culture = profile("COURTESIA", "Courtesia", "Europe", "Courtesian");
    culture.etiquette_rules = vec![etiquette(
        "CT001",
        EtiquetteCategory::GiftGiving,
        "Bring a small gift",
        "A modest, wrapped gift is appreciated by hosts.",
        Severity::Positive,
        &["gift"],
    )];
    culture
}

pub(crate) fn business_meeting_template() -> ScenarioTemplate {
    ScenarioTemplate {
        id: ScenarioTemplateId::new("SCEN001").unwrap(),
        title: "First Business Meeting in Germany".to_string(),
        description: "Meet potential German business partners for the first time.".to_string(),
        category: ScenarioCategory::Business,
        difficulty: Difficulty::Beginner,
        objectives: strings(&[
            "Establish professional rapport",
            "Clearly present your proposal (briefly)",
            "Demonstrate punctuality and preparation",
            "Avoid common etiquette mistakes",
        ]),
        initial_situation: "You arrive at the meeting room. What is your first action and greeting?"
            .to_string(),
        key_cultural_aspects: strings(&["GE001", "GE002", "power_distance"]),
        interaction_flow_example: vec![],
        possible_user_actions: strings(&[
            "Offer a firm handshake and maintain eye contact while greeting.",
            "Introduce yourself clearly, stating your name and company.",
            "Arrive exactly on time or a few minutes early.",
            "Have your business agenda and materials organized.",
        ]),
        possible_pitfalls: strings(&[
            "Arriving late without apology.",
            "Using overly casual language or humor immediately.",
            "Avoiding eye contact during greetings.",
            "Ignoring formal titles if used by German counterparts.",
        ]),
        related_learning_modules: ["LM001", "LM002", "LM004"]
            .into_iter()
            .map(|id| LearningModuleId::new(id).unwrap())
            .collect(),
    }
}

pub(crate) fn dinner_template() -> ScenarioTemplate {
    ScenarioTemplate {
        id: ScenarioTemplateId::new("SCEN002").unwrap(),
        title: "Dining with Japanese Colleagues".to_string(),
        description: String::new(),
        category: ScenarioCategory::Social,
        difficulty: Difficulty::Intermediate,
        objectives: strings(&[
            "Show respect for Japanese dining etiquette",
            "Build social rapport",
        ]),
        initial_situation: "Your host says, \"Please, help yourself.\"".to_string(),
        key_cultural_aspects: vec![],
        interaction_flow_example: vec![],
        possible_user_actions: strings(&["Try small amounts of all offered dishes."]),
        possible_pitfalls: strings(&["Sticking chopsticks upright in rice."]),
        related_learning_modules: vec![LearningModuleId::new("LM003").unwrap()],
    }
}

pub(crate) fn alice() -> UserProfile {
    UserProfile {
        user_id: UserId::new("user_alice").unwrap(),
        username: "Alice Smith".to_string(),
        origin_culture_id: CultureId::new("USA").unwrap(),
        target_culture_interests: vec![
            CultureId::new("GERMANY").unwrap(),
            CultureId::new("JAPAN").unwrap(),
        ],
        cultural_competence_score: BTreeMap::from([
            (CultureId::new("GERMANY").unwrap(), score(65)),
            (CultureId::new("JAPAN").unwrap(), score(40)),
            (CultureId::new("USA").unwrap(), score(90)),
        ]),
        overall_competence: score(65),
        learning_path_progress: BTreeMap::from([(
            LearningModuleId::new("LM001").unwrap(),
            ModuleProgress {
                completed: true,
                score: Some(score(85)),
            },
        )]),
        scenario_history: vec![ScenarioHistoryEntry {
            scenario_instance_id: "hist_1".to_string(),
            scenario_template_id: ScenarioTemplateId::new("SCEN001").unwrap(),
            target_culture_id: CultureId::new("GERMANY").unwrap(),
            completion_date: Utc.with_ymd_and_hms(2024, 4, 1, 10, 0, 0).unwrap(),
            final_success_metric: score(75),
            total_interactions: 5,
            key_learnings: strings(&["Punctuality matters", "Direct eye contact"]),
            reward_earned: None,
        }],
    }
}

/// A feedback packet for `instance_id` carrying only the given impact.
pub(crate) fn feedback_with_impact(
    instance_id: ScenarioInstanceId,
    impact: i32,
) -> InteractionFeedback {
    let (branch, severity) = match impact {
        i32::MIN..=-1 => (Branch::NegativeRule, Severity::Negative),
        0 => (Branch::General, Severity::Neutral),
        _ => (Branch::PositiveRule, Severity::Positive),
    };
    let decision = Decision {
        branch,
        ai_response: format!("Response with impact {impact}"),
        summary: FeedbackSummary {
            text: "fixture".to_string(),
            severity,
        },
        detailed_feedback: vec![DetailedFeedback {
            dimension: "Fixture".to_string(),
            score: 0,
            explanation: String::new(),
            severity,
            recommendations: vec![],
        }],
        competence_impact: impact,
        suggested_resources: vec![],
    };
    InteractionFeedback::new(
        "fixture input",
        Observation::default(),
        decision,
        FeedbackContext {
            timestamp: Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap(),
            scenario_instance_id: instance_id,
            target_culture_id: CultureId::new("GERMANY").unwrap(),
            user_profile_snapshot: alice(),
        },
        vec![],
    )
}
