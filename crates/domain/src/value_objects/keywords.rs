//! Keyword sets used to match free-text utterances against the knowledge base.
//!
//! Matching is plain substring containment on a lowercased utterance. It is
//! not tokenized and not word-boundary aware, so the keyword `"late"` also
//! matches inside `"inflated"`. This is a known limitation kept for
//! compatibility with the authored knowledge base.

use serde::{Deserialize, Serialize};

/// An ordered, lowercase-normalized set of keywords.
///
/// # Invariants
///
/// - every keyword is trimmed and lowercase
/// - no keyword is empty (an empty keyword would match every utterance)
/// - no duplicates; first occurrence order is preserved
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct KeywordSet(Vec<String>);

impl KeywordSet {
    pub fn new<I, S>(keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut normalized: Vec<String> = Vec::new();
        for keyword in keywords {
            let keyword = keyword.as_ref().trim().to_lowercase();
            if keyword.is_empty() || normalized.contains(&keyword) {
                continue;
            }
            normalized.push(keyword);
        }
        Self(normalized)
    }

    pub fn empty() -> Self {
        Self(Vec::new())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// Check whether any keyword occurs in an already-lowercased utterance.
    ///
    /// An empty set never matches.
    pub fn matches(&self, normalized_utterance: &str) -> bool {
        self.0
            .iter()
            .any(|keyword| normalized_utterance.contains(keyword.as_str()))
    }
}

impl From<Vec<String>> for KeywordSet {
    fn from(keywords: Vec<String>) -> Self {
        Self::new(keywords)
    }
}

impl From<KeywordSet> for Vec<String> {
    fn from(set: KeywordSet) -> Self {
        set.0
    }
}

/// Lowercase an utterance for keyword and phrase matching.
pub fn normalize_utterance(utterance: &str) -> String {
    utterance.to_lowercase()
}
