//! Cultural profile entity - the per-culture knowledge base.
//!
//! A profile carries identity, dimension scores, a communication style, and
//! five ordered collections of cultural aspects. Collection order matters:
//! the evaluation procedure scans in declaration order and "first match"
//! decisions depend on it.

use std::collections::{BTreeMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::entities::aspect::CulturalAspect;
use crate::error::DomainError;
use crate::value_objects::{CommunicationStyle, KeywordSet, ScaleScore, Severity};
use crate::{AspectId, CultureId, DimensionId};

// ============================================================================
// Aspect categories
// ============================================================================

/// Category of an etiquette rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EtiquetteCategory {
    Greeting,
    Dining,
    #[serde(rename = "Business Meeting")]
    BusinessMeeting,
    #[serde(rename = "Gift Giving")]
    GiftGiving,
    Social,
    #[serde(rename = "Dress Code")]
    DressCode,
    General,
    Conversation,
}

impl EtiquetteCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            EtiquetteCategory::Greeting => "Greeting",
            EtiquetteCategory::Dining => "Dining",
            EtiquetteCategory::BusinessMeeting => "Business Meeting",
            EtiquetteCategory::GiftGiving => "Gift Giving",
            EtiquetteCategory::Social => "Social",
            EtiquetteCategory::DressCode => "Dress Code",
            EtiquetteCategory::General => "General",
            EtiquetteCategory::Conversation => "Conversation",
        }
    }
}

/// Aspect of the negotiation process a practice belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NegotiationAspect {
    Preparation,
    Process,
    #[serde(rename = "Decision Making")]
    DecisionMaking,
    #[serde(rename = "Relationship Building")]
    RelationshipBuilding,
    Strategy,
    Communication,
}

impl NegotiationAspect {
    pub fn as_str(&self) -> &'static str {
        match self {
            NegotiationAspect::Preparation => "Preparation",
            NegotiationAspect::Process => "Process",
            NegotiationAspect::DecisionMaking => "Decision Making",
            NegotiationAspect::RelationshipBuilding => "Relationship Building",
            NegotiationAspect::Strategy => "Strategy",
            NegotiationAspect::Communication => "Communication",
        }
    }
}

/// Category of a social norm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SocialNormCategory {
    Conversation,
    #[serde(rename = "Personal Space")]
    PersonalSpace,
    Hospitality,
    #[serde(rename = "Public Behavior")]
    PublicBehavior,
    Family,
    Respect,
}

impl SocialNormCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            SocialNormCategory::Conversation => "Conversation",
            SocialNormCategory::PersonalSpace => "Personal Space",
            SocialNormCategory::Hospitality => "Hospitality",
            SocialNormCategory::PublicBehavior => "Public Behavior",
            SocialNormCategory::Family => "Family",
            SocialNormCategory::Respect => "Respect",
        }
    }
}

/// Kind of non-verbal cue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NonVerbalCueType {
    #[serde(rename = "Eye Contact")]
    EyeContact,
    Gestures,
    #[serde(rename = "Personal Space")]
    PersonalSpace,
    Touch,
    #[serde(rename = "Facial Expression")]
    FacialExpression,
    Posture,
    Vocalics,
    Silence,
}

impl NonVerbalCueType {
    pub fn as_str(&self) -> &'static str {
        match self {
            NonVerbalCueType::EyeContact => "Eye Contact",
            NonVerbalCueType::Gestures => "Gestures",
            NonVerbalCueType::PersonalSpace => "Personal Space",
            NonVerbalCueType::Touch => "Touch",
            NonVerbalCueType::FacialExpression => "Facial Expression",
            NonVerbalCueType::Posture => "Posture",
            NonVerbalCueType::Vocalics => "Vocalics",
            NonVerbalCueType::Silence => "Silence",
        }
    }
}

/// How a non-verbal cue is read by the target culture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CueInterpretation {
    Positive,
    Neutral,
    Negative,
}

impl CueInterpretation {
    pub fn severity(&self) -> Severity {
        match self {
            CueInterpretation::Positive => Severity::Positive,
            CueInterpretation::Neutral => Severity::Neutral,
            CueInterpretation::Negative => Severity::Negative,
        }
    }
}

// ============================================================================
// Aspect records
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EtiquetteRule {
    pub id: AspectId,
    pub category: EtiquetteCategory,
    pub rule: String,
    pub description: String,
    pub consequences: Severity,
    #[serde(default)]
    pub example: Option<String>,
    #[serde(default)]
    pub keywords: KeywordSet,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NegotiationPractice {
    pub id: AspectId,
    pub aspect: NegotiationAspect,
    pub practice: String,
    pub description: String,
    pub cultural_basis: String,
    #[serde(default)]
    pub keywords: KeywordSet,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SocialNorm {
    pub id: AspectId,
    pub category: SocialNormCategory,
    pub norm: String,
    pub description: String,
    #[serde(default)]
    pub avoid: Option<String>,
    #[serde(default)]
    pub keywords: KeywordSet,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommonMisunderstanding {
    pub id: AspectId,
    pub topic: String,
    pub description: String,
    pub cultural_difference: String,
    pub advice: String,
    #[serde(default)]
    pub keywords: KeywordSet,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NonVerbalCue {
    pub id: AspectId,
    #[serde(rename = "type")]
    pub cue_type: NonVerbalCueType,
    pub cue: String,
    pub meaning: String,
    pub interpretation: CueInterpretation,
    #[serde(default)]
    pub caution: Option<String>,
    #[serde(default)]
    pub keywords: KeywordSet,
}

// ============================================================================
// Cultural profile
// ============================================================================

/// A culture's complete etiquette knowledge base.
///
/// # Invariants (checked by [`CulturalProfile::validate`])
///
/// - aspect ids are unique across all five collections
/// - name, continent and language are non-empty
/// - dimension and style scores are 0-100 (enforced by `ScaleScore`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CulturalProfile {
    pub id: CultureId,
    pub name: String,
    pub continent: String,
    pub language: String,
    #[serde(default)]
    pub hello_phrase: String,
    #[serde(default)]
    pub goodbye_phrase: String,
    #[serde(default)]
    pub cultural_dimensions: BTreeMap<DimensionId, ScaleScore>,
    pub communication_style: CommunicationStyle,
    #[serde(default)]
    pub etiquette_rules: Vec<EtiquetteRule>,
    #[serde(default)]
    pub negotiation_practices: Vec<NegotiationPractice>,
    #[serde(default)]
    pub social_norms: Vec<SocialNorm>,
    #[serde(default)]
    pub common_misunderstandings: Vec<CommonMisunderstanding>,
    #[serde(default)]
    pub non_verbal_cues: Vec<NonVerbalCue>,
    #[serde(default)]
    pub values: Vec<String>,
}

impl CulturalProfile {
    /// Iterate every aspect across the five collections in scan order:
    /// etiquette rules, negotiation practices, social norms,
    /// misunderstandings, non-verbal cues.
    pub fn aspects(&self) -> impl Iterator<Item = CulturalAspect<'_>> {
        self.etiquette_rules
            .iter()
            .map(CulturalAspect::Etiquette)
            .chain(
                self.negotiation_practices
                    .iter()
                    .map(CulturalAspect::Negotiation),
            )
            .chain(self.social_norms.iter().map(CulturalAspect::SocialNorm))
            .chain(
                self.common_misunderstandings
                    .iter()
                    .map(CulturalAspect::Misunderstanding),
            )
            .chain(self.non_verbal_cues.iter().map(CulturalAspect::NonVerbal))
    }

    /// Look up any aspect by id.
    pub fn aspect(&self, id: &AspectId) -> Option<CulturalAspect<'_>> {
        self.aspects().find(|aspect| aspect.id() == id)
    }

    pub fn dimension_score(&self, id: &DimensionId) -> Option<ScaleScore> {
        self.cultural_dimensions.get(id).copied()
    }

    /// Check the profile's invariants.
    pub fn validate(&self) -> Result<(), DomainError> {
        for (field, value) in [
            ("name", &self.name),
            ("continent", &self.continent),
            ("language", &self.language),
        ] {
            if value.trim().is_empty() {
                return Err(DomainError::validation(format!(
                    "Culture {} has an empty {}",
                    self.id, field
                )));
            }
        }

        let mut seen: HashSet<&AspectId> = HashSet::new();
        for aspect in self.aspects() {
            if !seen.insert(aspect.id()) {
                return Err(DomainError::validation(format!(
                    "Culture {} has duplicate aspect id {}",
                    self.id,
                    aspect.id()
                )));
            }
        }

        Ok(())
    }
}
