use serde::{Deserialize, Serialize};

use crate::domain::errors::RubricError;

/// A single scoring rule: a value matches when `min <= value <= max`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BucketRule {
    pub min: f64,
    pub max: f64,
    pub score: i64,
}

impl BucketRule {
    pub fn matches(&self, value: f64) -> bool {
        self.min <= value && value <= self.max
    }
}

/// Return the score of the first rule matching `value`, in listed order.
///
/// Rules may overlap; the listed order decides. `None` means the caller's
/// fallback score applies.
pub fn first_matching_score(rules: &[BucketRule], value: f64) -> Option<i64> {
    rules.iter().find(|rule| rule.matches(value)).map(|rule| rule.score)
}

/// Weights for the five rubric sections.
///
/// The document must contain exactly these five keys; anything extra or
/// missing is rejected at load time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SectionWeights {
    pub content_structure: f64,
    pub speech_rate: f64,
    pub language_grammar: f64,
    pub clarity: f64,
    pub engagement: f64,
}

/// The static rubric driving all five sub-scorers.
///
/// Loaded once at process start and shared read-only for the process
/// lifetime; changing the rubric requires a restart.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RubricConfig {
    pub content_checks: Vec<String>,
    pub speech_rate_map: Vec<BucketRule>,
    pub grammar_map: Vec<BucketRule>,
    pub filler_rate_map: Vec<BucketRule>,
    pub sentiment_map: Vec<BucketRule>,
    pub filler_words: Vec<String>,
    pub weights: SectionWeights,
}

impl RubricConfig {
    /// Load and validate a rubric document from a JSON file.
    pub fn from_path(path: &str) -> Result<Self, RubricError> {
        let raw = std::fs::read_to_string(path).map_err(|e| RubricError::ReadFailed {
            path: path.to_string(),
            reason: e.to_string(),
        })?;
        Self::from_json(&raw)
    }

    /// Parse a rubric document from raw JSON.
    pub fn from_json(raw: &str) -> Result<Self, RubricError> {
        serde_json::from_str(raw).map_err(|e| RubricError::Malformed(e.to_string()))
    }
}
