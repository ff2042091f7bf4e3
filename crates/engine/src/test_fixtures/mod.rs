//! Shared test fixtures built from the embedded knowledge base.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use culturelab_domain::{
    ActiveScenarioInstance, AspectId, Branch, CulturalProfile, Decision, DetailedFeedback,
    EtiquetteCategory, EtiquetteRule, FeedbackContext, FeedbackSummary, InteractionFeedback,
    KeywordSet, Observation, ScenarioHistoryEntry, ScenarioInstanceId, ScenarioTemplate, Severity,
    UserId, UserProfile,
};

use crate::infrastructure::knowledge_base::KnowledgeBase;
use crate::infrastructure::ports::{RepoError, ScenarioInstanceRepo, UserProfileRepo};

pub(crate) fn knowledge_base() -> KnowledgeBase {
    KnowledgeBase::embedded().expect("embedded knowledge base should load")
}

pub(crate) fn alice() -> UserProfile {
    knowledge_base()
        .user_profiles
        .into_iter()
        .find(|u| u.user_id.as_str() == "user_alice")
        .expect("seed data should contain user_alice")
}

pub(crate) fn template(id: &str) -> ScenarioTemplate {
    knowledge_base()
        .scenario_templates
        .into_iter()
        .find(|t| t.id.as_str() == id)
        .expect("seed data should contain the template")
}

/// Germany plus a Positive gift-giving rule, since the seed data has no
/// Positive etiquette rule to exercise the +15 branch.
pub(crate) fn positive_germany() -> CulturalProfile {
    let mut germany = knowledge_base()
        .cultures
        .into_iter()
        .find(|c| c.id.as_str() == "GERMANY")
        .expect("seed data should contain GERMANY");
    germany.etiquette_rules.push(EtiquetteRule {
        id: AspectId::new("GE_TEST_GIFT").expect("literal id"),
        category: EtiquetteCategory::GiftGiving,
        rule: "Bring a modest gift".to_string(),
        description: "A small, quality gift is appreciated by hosts.".to_string(),
        consequences: Severity::Positive,
        example: None,
        keywords: KeywordSet::new(["gift"]),
    });
    germany
}

/// Seed knowledge base with [`positive_germany`] in place of Germany.
pub(crate) fn knowledge_base_with_positive_rule() -> KnowledgeBase {
    let mut kb = knowledge_base();
    let germany = positive_germany();
    for culture in &mut kb.cultures {
        if culture.id == germany.id {
            *culture = germany.clone();
        }
    }
    kb
}

/// A graded packet for `instance` carrying only `impact`.
pub(crate) fn feedback_with_impact(
    instance: &ActiveScenarioInstance,
    impact: i32,
) -> InteractionFeedback {
    let (branch, severity) = match impact {
        i32::MIN..=-1 => (Branch::NegativeRule, Severity::Negative),
        0 => (Branch::General, Severity::Neutral),
        _ => (Branch::ScenarioObjective, Severity::Positive),
    };
    let decision = Decision {
        branch,
        ai_response: format!("Replayed response ({impact})"),
        summary: FeedbackSummary {
            text: "replayed".to_string(),
            severity,
        },
        detailed_feedback: vec![DetailedFeedback {
            dimension: "Replay".to_string(),
            score: 0,
            explanation: String::new(),
            severity,
            recommendations: vec![],
        }],
        competence_impact: impact,
        suggested_resources: vec![],
    };
    InteractionFeedback::new(
        "replayed input",
        Observation::default(),
        decision,
        FeedbackContext {
            timestamp: Utc.with_ymd_and_hms(2024, 6, 1, 9, 30, 0).unwrap(),
            scenario_instance_id: instance.id(),
            target_culture_id: instance.target_culture().id.clone(),
            user_profile_snapshot: alice(),
        },
        vec![],
    )
}

/// Instance store that hands control back to the scheduler after every read,
/// so concurrent callers interleave between their read and their write.
pub(crate) struct YieldingInstances(pub Arc<dyn ScenarioInstanceRepo>);

#[async_trait]
impl ScenarioInstanceRepo for YieldingInstances {
    async fn create(&self, instance: &ActiveScenarioInstance) -> Result<(), RepoError> {
        self.0.create(instance).await
    }

    async fn get(
        &self,
        id: ScenarioInstanceId,
    ) -> Result<Option<ActiveScenarioInstance>, RepoError> {
        let found = self.0.get(id).await;
        tokio::task::yield_now().await;
        found
    }

    async fn update(&self, instance: &ActiveScenarioInstance) -> Result<(), RepoError> {
        self.0.update(instance).await
    }
}

/// Profile store that yields after every read, like [`YieldingInstances`].
pub(crate) struct YieldingUserProfiles(pub Arc<dyn UserProfileRepo>);

#[async_trait]
impl UserProfileRepo for YieldingUserProfiles {
    async fn get(&self, id: &UserId) -> Result<Option<UserProfile>, RepoError> {
        let found = self.0.get(id).await;
        tokio::task::yield_now().await;
        found
    }

    async fn append_history(
        &self,
        id: &UserId,
        entry: ScenarioHistoryEntry,
    ) -> Result<(), RepoError> {
        self.0.append_history(id, entry).await
    }
}
