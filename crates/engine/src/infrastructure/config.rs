//! Engine configuration read from the environment.

use std::path::{Path, PathBuf};

use culturelab_domain::{AiPersona, UserId, DEFAULT_MAX_TURNS};

pub const KNOWLEDGE_BASE_VAR: &str = "CULTURELAB_KNOWLEDGE_BASE";
pub const MAX_TURNS_VAR: &str = "CULTURELAB_MAX_TURNS";
pub const USER_VAR: &str = "CULTURELAB_USER";
pub const AI_PERSONA_VAR: &str = "CULTURELAB_AI_PERSONA";

const DEFAULT_USER: &str = "user_alice";
const MAX_TURNS_LIMIT: u32 = 100;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    /// Replacement knowledge base document; the embedded one is used if unset.
    pub knowledge_base_path: Option<PathBuf>,
    pub max_turns: u32,
    /// User the runner plays as.
    pub default_user: UserId,
    /// Overrides the persona in the knowledge base's default settings.
    pub ai_persona: Option<AiPersona>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            knowledge_base_path: None,
            max_turns: DEFAULT_MAX_TURNS,
            default_user: default_user(),
            ai_persona: None,
        }
    }
}

impl EngineConfig {
    /// Read configuration from process environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through `lookup`. Invalid values are logged and
    /// replaced by defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(path) = lookup(KNOWLEDGE_BASE_VAR).filter(|v| !v.trim().is_empty()) {
            config.knowledge_base_path = Some(PathBuf::from(path.trim()));
        }

        if let Some(val) = lookup(MAX_TURNS_VAR) {
            match val.trim().parse::<u32>() {
                Ok(turns) if (1..=MAX_TURNS_LIMIT).contains(&turns) => {
                    config.max_turns = turns;
                    tracing::info!(turns, "Applied CULTURELAB_MAX_TURNS environment variable");
                }
                Ok(turns) => {
                    tracing::warn!(
                        turns,
                        "CULTURELAB_MAX_TURNS out of range [1, 100], ignoring"
                    );
                }
                Err(_) => {
                    tracing::warn!(
                        val = %val,
                        "CULTURELAB_MAX_TURNS is not a valid u32, ignoring"
                    );
                }
            }
        }

        if let Some(val) = lookup(USER_VAR) {
            match UserId::new(val) {
                Ok(user) => config.default_user = user,
                Err(e) => tracing::warn!(error = %e, "CULTURELAB_USER is invalid, ignoring"),
            }
        }

        if let Some(val) = lookup(AI_PERSONA_VAR) {
            match val.parse::<AiPersona>() {
                Ok(persona) => {
                    config.ai_persona = Some(persona);
                    tracing::info!(
                        persona = persona.as_str(),
                        "Applied CULTURELAB_AI_PERSONA environment variable"
                    );
                }
                Err(_) => {
                    tracing::warn!(
                        val = %val,
                        "CULTURELAB_AI_PERSONA is not a known persona, ignoring"
                    );
                }
            }
        }

        config
    }

    pub fn knowledge_base_path(&self) -> Option<&Path> {
        self.knowledge_base_path.as_deref()
    }
}

fn default_user() -> UserId {
    match UserId::new(DEFAULT_USER) {
        Ok(user) => user,
        Err(_) => unreachable!("default user id is a non-empty literal"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_without_environment() {
        let config = EngineConfig::from_lookup(lookup(&[]));
        assert_eq!(config, EngineConfig::default());
        assert_eq!(config.max_turns, 10);
        assert_eq!(config.default_user.as_str(), "user_alice");
        assert!(config.knowledge_base_path().is_none());
    }

    #[test]
    fn reads_all_variables() {
        let config = EngineConfig::from_lookup(lookup(&[
            (KNOWLEDGE_BASE_VAR, "/tmp/kb.json"),
            (MAX_TURNS_VAR, "4"),
            (USER_VAR, "user_bob"),
            (AI_PERSONA_VAR, "formal_advisor"),
        ]));
        assert_eq!(config.knowledge_base_path(), Some(Path::new("/tmp/kb.json")));
        assert_eq!(config.max_turns, 4);
        assert_eq!(config.default_user.as_str(), "user_bob");
        assert_eq!(config.ai_persona, Some(AiPersona::FormalAdvisor));
    }

    #[test]
    fn invalid_values_fall_back_to_defaults() {
        let config = EngineConfig::from_lookup(lookup(&[
            (KNOWLEDGE_BASE_VAR, "  "),
            (MAX_TURNS_VAR, "0"),
            (USER_VAR, " "),
            (AI_PERSONA_VAR, "grumpy"),
        ]));
        assert_eq!(config, EngineConfig::default());

        let config = EngineConfig::from_lookup(lookup(&[(MAX_TURNS_VAR, "ten")]));
        assert_eq!(config.max_turns, 10);
    }
}
