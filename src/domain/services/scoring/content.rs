use std::collections::BTreeMap;

use crate::domain::services::scoring::CONTENT_MAX_BASIS;

/// Coverage of the rubric's required content phrases.
#[derive(Debug, Clone, PartialEq)]
pub struct ContentCoverage {
    /// Coverage ratio scaled onto [0, 40].
    pub score: f64,
    /// Presence of each configured check key.
    pub details: BTreeMap<String, bool>,
}

/// Checks the transcript for each configured phrase key.
///
/// A key like "special_thing_about_family" is matched as the phrase
/// "special thing about family", case-insensitively, verbatim substring
/// only. No partial credit for near-matches.
pub struct ContentCoverageScorer {
    checks: Vec<String>,
}

impl ContentCoverageScorer {
    pub fn new(checks: &[String]) -> Self {
        ContentCoverageScorer {
            checks: checks.to_vec(),
        }
    }

    pub fn calculate(&self, transcript: &str) -> ContentCoverage {
        let lower = transcript.to_lowercase();

        let mut details = BTreeMap::new();
        for key in &self.checks {
            let phrase = key.replace('_', " ").to_lowercase();
            details.insert(key.clone(), lower.contains(&phrase));
        }

        let matched = details.values().filter(|&&present| present).count();
        let coverage = if details.is_empty() {
            0.0
        } else {
            matched as f64 / details.len() as f64
        };

        ContentCoverage {
            score: coverage * CONTENT_MAX_BASIS,
            details,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn checks(keys: &[&str]) -> Vec<String> {
        keys.iter().map(|k| k.to_string()).collect()
    }

    #[test]
    fn test_content_score_all_phrases_present() {
        let scorer = ContentCoverageScorer::new(&checks(&["my_name_is", "years_old"]));
        let coverage = scorer.calculate("My name is Asha and I am twelve years old.");
        assert_eq!(coverage.score, 40.0);
        assert!(coverage.details["my_name_is"]);
        assert!(coverage.details["years_old"]);
    }

    #[test]
    fn test_content_score_no_phrases_present() {
        let scorer = ContentCoverageScorer::new(&checks(&["my_name_is", "thank_you"]));
        let coverage = scorer.calculate("Good morning everyone.");
        assert_eq!(coverage.score, 0.0);
        assert!(coverage.details.values().all(|&present| !present));
    }

    #[test]
    fn test_content_score_partial_coverage() {
        let scorer =
            ContentCoverageScorer::new(&checks(&["my_name_is", "my_hobbies", "thank_you", "my_school"]));
        let coverage = scorer.calculate("My name is Ravi. My hobbies are chess and cricket.");
        // 2 of 4 phrases -> 0.5 * 40
        assert_eq!(coverage.score, 20.0);
        assert!(coverage.details["my_name_is"]);
        assert!(coverage.details["my_hobbies"]);
        assert!(!coverage.details["thank_you"]);
    }

    #[test]
    fn test_content_score_case_insensitive() {
        let scorer = ContentCoverageScorer::new(&checks(&["My_Name_Is"]));
        let coverage = scorer.calculate("MY NAME IS PRIYA");
        assert_eq!(coverage.score, 40.0);
    }

    #[test]
    fn test_content_score_no_partial_phrase_credit() {
        let scorer = ContentCoverageScorer::new(&checks(&["special_thing_about_family"]));
        // phrase words present but not as a contiguous substring
        let coverage = scorer.calculate("A special fact about my family is a thing.");
        assert_eq!(coverage.score, 0.0);
    }

    #[test]
    fn test_content_score_empty_check_list() {
        let scorer = ContentCoverageScorer::new(&[]);
        let coverage = scorer.calculate("My name is Asha.");
        assert_eq!(coverage.score, 0.0);
        assert!(coverage.details.is_empty());
    }

    #[test]
    fn test_content_score_empty_transcript() {
        let scorer = ContentCoverageScorer::new(&checks(&["my_name_is"]));
        let coverage = scorer.calculate("");
        assert_eq!(coverage.score, 0.0);
    }
}
