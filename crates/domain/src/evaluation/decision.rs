use crate::entities::{
    CulturalProfile, DetailedFeedback, EtiquetteRule, FeedbackSummary, ScenarioTemplate,
};
use crate::evaluation::Observation;
use crate::value_objects::{AiPersona, Severity, UserIntent};
use crate::LearningModuleId;

/// Reason attached to tokens minted for a strongly positive interaction.
pub const TOKEN_REWARD_REASON: &str = "Positive cultural interaction";

/// Which rule of the ranking produced the decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Branch {
    CriticalRule,
    NegativeRule,
    PositiveRule,
    ScenarioObjective,
    ScenarioPitfall,
    General,
}

/// The branches backed by a matched etiquette rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleBranch {
    Critical,
    Negative,
    Positive,
}

impl From<RuleBranch> for Branch {
    fn from(rule: RuleBranch) -> Self {
        match rule {
            RuleBranch::Critical => Branch::CriticalRule,
            RuleBranch::Negative => Branch::NegativeRule,
            RuleBranch::Positive => Branch::PositiveRule,
        }
    }
}

impl Branch {
    pub fn severity(&self) -> Severity {
        match self {
            Branch::CriticalRule => Severity::Critical,
            Branch::NegativeRule => Severity::Negative,
            Branch::PositiveRule | Branch::ScenarioObjective => Severity::Positive,
            Branch::ScenarioPitfall => Severity::Advisory,
            Branch::General => Severity::Neutral,
        }
    }

    pub fn competence_impact(&self) -> i32 {
        match self {
            Branch::CriticalRule => -25,
            Branch::NegativeRule => -10,
            Branch::PositiveRule => 15,
            Branch::ScenarioObjective => 10,
            Branch::ScenarioPitfall => -5,
            Branch::General => 0,
        }
    }

    fn dimension_score(&self) -> i32 {
        match self {
            Branch::CriticalRule => -5,
            Branch::NegativeRule => -3,
            Branch::PositiveRule => 4,
            Branch::ScenarioObjective => 3,
            Branch::ScenarioPitfall => -2,
            Branch::General => 0,
        }
    }
}

/// The graded outcome of one interaction, before packaging.
#[derive(Debug, Clone, PartialEq)]
pub struct Decision {
    pub branch: Branch,
    pub ai_response: String,
    pub summary: FeedbackSummary,
    pub detailed_feedback: Vec<DetailedFeedback>,
    pub competence_impact: i32,
    pub suggested_resources: Vec<LearningModuleId>,
}

impl Decision {
    pub fn severity(&self) -> Severity {
        self.summary.severity
    }

    /// Tokens earned for this decision, if any: `floor(impact / 5)` once the
    /// impact exceeds 10.
    pub fn token_reward(&self) -> Option<u32> {
        if self.competence_impact > 10 {
            u32::try_from(self.competence_impact / 5).ok()
        } else {
            None
        }
    }
}

/// Rank an observation into a decision. The first applicable branch wins:
/// a matched Critical etiquette rule, then Negative, then Positive, then a
/// curated positive action, then a curated pitfall, else neutral.
pub fn decide(
    observation: &Observation,
    culture: &CulturalProfile,
    template: &ScenarioTemplate,
    persona: AiPersona,
) -> Decision {
    let matched_rule = |severity: Severity| {
        culture
            .etiquette_rules
            .iter()
            .find(|rule| rule.consequences == severity && observation.has_match(&rule.id))
    };

    if let Some(rule) = matched_rule(Severity::Critical) {
        let mut decision = rule_decision(RuleBranch::Critical, rule, culture, persona);
        decision
            .suggested_resources
            .extend(template.related_learning_modules.iter().cloned());
        return decision;
    }
    if let Some(rule) = matched_rule(Severity::Negative) {
        return rule_decision(RuleBranch::Negative, rule, culture, persona);
    }
    if let Some(rule) = matched_rule(Severity::Positive) {
        return rule_decision(RuleBranch::Positive, rule, culture, persona);
    }

    match observation.user_intent {
        UserIntent::PositiveAction => scripted_decision(
            Branch::ScenarioObjective,
            persona,
            "Your action is well-received. The interaction proceeds smoothly.",
            "Positive: Aligned with scenario objectives.",
            "Scenario Objective",
            "You made a good choice, progressing the scenario positively.",
        ),
        UserIntent::PotentialPitfall => scripted_decision(
            Branch::ScenarioPitfall,
            persona,
            "A moment of awkwardness. Your action might have unintended consequences.",
            "Advisory: A potential cultural pitfall was approached.",
            "Scenario Pitfall",
            "Your action touched upon a known cultural pitfall.",
        ),
        UserIntent::SocialGreeting
        | UserIntent::DiningEtiquette
        | UserIntent::BusinessNegotiation
        | UserIntent::GeneralInteraction => scripted_decision(
            Branch::General,
            persona,
            "I understand your input. Let's see how the interaction evolves.",
            "Neutral: No strong cultural implications detected.",
            "General Interaction",
            "Your action was generally acceptable.",
        ),
    }
}

fn rule_decision(
    rule_branch: RuleBranch,
    rule: &EtiquetteRule,
    culture: &CulturalProfile,
    persona: AiPersona,
) -> Decision {
    let category = rule.category.as_str();
    let culture_name = &culture.name;
    let (framing, summary, explanation, recommendation) = match rule_branch {
        RuleBranch::Critical => (
            "The atmosphere shifts dramatically.",
            format!("Critical: {} violation.", rule.rule),
            format!(
                "{} This action is a severe cultural taboo in {}.",
                rule.description, culture_name
            ),
            format!("Avoid this action in {}.", culture_name),
        ),
        RuleBranch::Negative => (
            "There's a noticeable, subtle shift in the interaction.",
            format!("Negative: {} might be perceived poorly.", rule.rule),
            format!("{} This can lead to misunderstandings.", rule.description),
            format!("Be mindful of {} in {}.", category, culture_name),
        ),
        RuleBranch::Positive => (
            "Your counterparts react positively.",
            format!("Positive: Well-aligned with {} etiquette.", category),
            format!("{} Your action was culturally appropriate.", rule.description),
            format!("Continue to apply this principle in {}.", culture_name),
        ),
    };

    let branch = Branch::from(rule_branch);
    let severity = branch.severity();
    Decision {
        branch,
        ai_response: format!("{}{} {}", persona.response_prefix(), framing, rule.description),
        summary: FeedbackSummary {
            text: summary,
            severity,
        },
        detailed_feedback: vec![DetailedFeedback {
            dimension: format!("{} Etiquette", category),
            score: branch.dimension_score(),
            explanation,
            severity,
            recommendations: vec![recommendation],
        }],
        competence_impact: branch.competence_impact(),
        suggested_resources: Vec::new(),
    }
}

fn scripted_decision(
    branch: Branch,
    persona: AiPersona,
    response: &str,
    summary: &str,
    dimension: &str,
    explanation: &str,
) -> Decision {
    let severity = branch.severity();
    Decision {
        branch,
        ai_response: format!("{}{}", persona.response_prefix(), response),
        summary: FeedbackSummary {
            text: summary.to_string(),
            severity,
        },
        detailed_feedback: vec![DetailedFeedback {
            dimension: dimension.to_string(),
            score: branch.dimension_score(),
            explanation: explanation.to_string(),
            severity,
            recommendations: Vec::new(),
        }],
        competence_impact: branch.competence_impact(),
        suggested_resources: Vec::new(),
    }
}
