//! Knowledge base document loading and validation.
//!
//! The document bundles every load-time static table: cultures, the
//! dimension catalog, scenario templates, learning modules, seed user
//! profiles and default settings. A default document is embedded in the
//! binary; `CULTURELAB_KNOWLEDGE_BASE` may point to a replacement file.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use culturelab_domain::{
    CulturalDimension, CulturalProfile, DomainError, LearningModule, ScenarioTemplate,
    SystemSettings, UserProfile,
};
use serde::{Deserialize, Serialize};

const EMBEDDED_KNOWLEDGE_BASE: &str = include_str!("../../data/knowledge_base.json");

#[derive(Debug, thiserror::Error)]
pub enum KnowledgeBaseError {
    #[error("Failed to read knowledge base at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse knowledge base: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid knowledge base: {0}")]
    Invalid(#[from] DomainError),

    #[error("Duplicate {kind} id in knowledge base: {id}")]
    DuplicateId { kind: &'static str, id: String },
}

/// All static tables, as loaded from one document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KnowledgeBase {
    pub cultures: Vec<CulturalProfile>,
    #[serde(default)]
    pub dimensions: Vec<CulturalDimension>,
    pub scenario_templates: Vec<ScenarioTemplate>,
    #[serde(default)]
    pub learning_modules: Vec<LearningModule>,
    #[serde(default)]
    pub user_profiles: Vec<UserProfile>,
    #[serde(default)]
    pub settings: SystemSettings,
}

impl KnowledgeBase {
    /// The document shipped with the engine.
    pub fn embedded() -> Result<Self, KnowledgeBaseError> {
        Self::from_json_str(EMBEDDED_KNOWLEDGE_BASE)
    }

    /// Load a document from disk.
    pub fn load_from_path(path: &Path) -> Result<Self, KnowledgeBaseError> {
        let raw = std::fs::read_to_string(path).map_err(|source| KnowledgeBaseError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::info!(path = %path.display(), "Loading knowledge base from file");
        Self::from_json_str(&raw)
    }

    /// Load from an optional override path, falling back to the embedded document.
    pub fn load(path: Option<&Path>) -> Result<Self, KnowledgeBaseError> {
        match path {
            Some(path) => Self::load_from_path(path),
            None => Self::embedded(),
        }
    }

    /// Parse and validate a JSON document.
    pub fn from_json_str(raw: &str) -> Result<Self, KnowledgeBaseError> {
        let knowledge_base: KnowledgeBase = serde_json::from_str(raw)?;
        knowledge_base.validate()?;
        tracing::debug!(
            cultures = knowledge_base.cultures.len(),
            templates = knowledge_base.scenario_templates.len(),
            modules = knowledge_base.learning_modules.len(),
            users = knowledge_base.user_profiles.len(),
            "Knowledge base loaded"
        );
        Ok(knowledge_base)
    }

    /// Reject structural violations; warn on dangling cross references.
    pub fn validate(&self) -> Result<(), KnowledgeBaseError> {
        unique_ids("culture", self.cultures.iter().map(|c| c.id.as_str()))?;
        unique_ids("dimension", self.dimensions.iter().map(|d| d.id.as_str()))?;
        unique_ids(
            "scenario template",
            self.scenario_templates.iter().map(|t| t.id.as_str()),
        )?;
        unique_ids(
            "learning module",
            self.learning_modules.iter().map(|m| m.id.as_str()),
        )?;
        unique_ids("user", self.user_profiles.iter().map(|u| u.user_id.as_str()))?;

        for culture in &self.cultures {
            culture.validate()?;
        }
        for dimension in &self.dimensions {
            dimension.validate()?;
        }
        for template in &self.scenario_templates {
            template.validate()?;
        }
        for module in &self.learning_modules {
            module.validate()?;
        }

        self.warn_on_dangling_references();
        Ok(())
    }

    fn warn_on_dangling_references(&self) {
        let modules: HashSet<&str> = self
            .learning_modules
            .iter()
            .map(|m| m.id.as_str())
            .collect();
        for template in &self.scenario_templates {
            for module_id in &template.related_learning_modules {
                if !modules.contains(module_id.as_str()) {
                    tracing::warn!(
                        template_id = %template.id,
                        module_id = %module_id,
                        "Scenario template references an unknown learning module"
                    );
                }
            }
        }

        let dimensions: HashSet<&str> = self.dimensions.iter().map(|d| d.id.as_str()).collect();
        if !dimensions.is_empty() {
            for culture in &self.cultures {
                for dimension_id in culture.cultural_dimensions.keys() {
                    if !dimensions.contains(dimension_id.as_str()) {
                        tracing::warn!(
                            culture_id = %culture.id,
                            dimension_id = %dimension_id,
                            "Culture scores an unknown cultural dimension"
                        );
                    }
                }
            }
        }

        let cultures: HashSet<&str> = self.cultures.iter().map(|c| c.id.as_str()).collect();
        for profile in &self.user_profiles {
            if !cultures.contains(profile.origin_culture_id.as_str()) {
                tracing::debug!(
                    user_id = %profile.user_id,
                    origin = %profile.origin_culture_id,
                    "User origin culture has no knowledge base entry"
                );
            }
        }
    }
}

fn unique_ids<'a>(
    kind: &'static str,
    ids: impl Iterator<Item = &'a str>,
) -> Result<(), KnowledgeBaseError> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(KnowledgeBaseError::DuplicateId {
                kind,
                id: id.to_string(),
            });
        }
    }
    Ok(())
}
