//! Uniform view over the five kinds of knowledge base items.
//!
//! Etiquette rules and social norms are discriminated by a `category`,
//! negotiation practices by an `aspect`, non-verbal cues by a `type`, and
//! misunderstandings by a free-text topic. `CulturalAspect` lets the
//! evaluation procedure scan all of them through one iterator while keeping
//! that distinction as the variant.

use crate::entities::culture::{
    CommonMisunderstanding, EtiquetteRule, NegotiationPractice, NonVerbalCue, SocialNorm,
};
use crate::value_objects::{KeywordSet, Severity};
use crate::AspectId;

/// Which collection an aspect came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AspectKind {
    EtiquetteRule,
    NegotiationPractice,
    SocialNorm,
    Misunderstanding,
    NonVerbalCue,
}

/// A borrowed, taggable cultural aspect.
#[derive(Debug, Clone, Copy)]
pub enum CulturalAspect<'a> {
    Etiquette(&'a EtiquetteRule),
    Negotiation(&'a NegotiationPractice),
    SocialNorm(&'a SocialNorm),
    Misunderstanding(&'a CommonMisunderstanding),
    NonVerbal(&'a NonVerbalCue),
}

impl<'a> CulturalAspect<'a> {
    pub fn id(&self) -> &'a AspectId {
        match self {
            CulturalAspect::Etiquette(rule) => &rule.id,
            CulturalAspect::Negotiation(practice) => &practice.id,
            CulturalAspect::SocialNorm(norm) => &norm.id,
            CulturalAspect::Misunderstanding(item) => &item.id,
            CulturalAspect::NonVerbal(cue) => &cue.id,
        }
    }

    pub fn kind(&self) -> AspectKind {
        match self {
            CulturalAspect::Etiquette(_) => AspectKind::EtiquetteRule,
            CulturalAspect::Negotiation(_) => AspectKind::NegotiationPractice,
            CulturalAspect::SocialNorm(_) => AspectKind::SocialNorm,
            CulturalAspect::Misunderstanding(_) => AspectKind::Misunderstanding,
            CulturalAspect::NonVerbal(_) => AspectKind::NonVerbalCue,
        }
    }

    pub fn keywords(&self) -> &'a KeywordSet {
        match self {
            CulturalAspect::Etiquette(rule) => &rule.keywords,
            CulturalAspect::Negotiation(practice) => &practice.keywords,
            CulturalAspect::SocialNorm(norm) => &norm.keywords,
            CulturalAspect::Misunderstanding(item) => &item.keywords,
            CulturalAspect::NonVerbal(cue) => &cue.keywords,
        }
    }

    /// Severity label of the item.
    ///
    /// Only etiquette rules and non-verbal cues are authored with one; the
    /// other collections are guidance and read as advisory.
    pub fn severity(&self) -> Severity {
        match self {
            CulturalAspect::Etiquette(rule) => rule.consequences,
            CulturalAspect::NonVerbal(cue) => cue.interpretation.severity(),
            CulturalAspect::Negotiation(_)
            | CulturalAspect::SocialNorm(_)
            | CulturalAspect::Misunderstanding(_) => Severity::Advisory,
        }
    }

    /// Human-readable tag: category, aspect, topic, or cue type.
    pub fn tag(&self) -> &'a str {
        match self {
            CulturalAspect::Etiquette(rule) => rule.category.as_str(),
            CulturalAspect::Negotiation(practice) => practice.aspect.as_str(),
            CulturalAspect::SocialNorm(norm) => norm.category.as_str(),
            CulturalAspect::Misunderstanding(item) => &item.topic,
            CulturalAspect::NonVerbal(cue) => cue.cue_type.as_str(),
        }
    }

    /// True if any keyword occurs in the already-lowercased utterance.
    pub fn matches(&self, normalized_utterance: &str) -> bool {
        self.keywords().matches(normalized_utterance)
    }
}
