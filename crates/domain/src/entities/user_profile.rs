//! User cultural profile - competence scores, learning progress, history.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::value_objects::ScaleScore;
use crate::{CultureId, LearningModuleId, ScenarioTemplateId, UserId};

/// Completion state of one learning module.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleProgress {
    pub completed: bool,
    #[serde(default)]
    pub score: Option<ScaleScore>,
}

/// A finished scenario, as recorded on the profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioHistoryEntry {
    /// Free-form so hand-authored history ("hist_1") loads alongside UUIDs.
    pub scenario_instance_id: String,
    pub scenario_template_id: ScenarioTemplateId,
    pub target_culture_id: CultureId,
    pub completion_date: DateTime<Utc>,
    pub final_success_metric: ScaleScore,
    pub total_interactions: u32,
    #[serde(default)]
    pub key_learnings: Vec<String>,
    #[serde(default)]
    pub reward_earned: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub user_id: UserId,
    pub username: String,
    pub origin_culture_id: CultureId,
    #[serde(default)]
    pub target_culture_interests: Vec<CultureId>,
    #[serde(default)]
    pub cultural_competence_score: BTreeMap<CultureId, ScaleScore>,
    pub overall_competence: ScaleScore,
    #[serde(default)]
    pub learning_path_progress: BTreeMap<LearningModuleId, ModuleProgress>,
    #[serde(default)]
    pub scenario_history: Vec<ScenarioHistoryEntry>,
}

impl UserProfile {
    /// Competence for one culture; cultures never practiced score zero.
    pub fn competence_for(&self, culture_id: &CultureId) -> ScaleScore {
        self.cultural_competence_score
            .get(culture_id)
            .copied()
            .unwrap_or(ScaleScore::MIN)
    }

    pub fn has_completed_module(&self, module_id: &LearningModuleId) -> bool {
        self.learning_path_progress
            .get(module_id)
            .is_some_and(|progress| progress.completed)
    }
}
