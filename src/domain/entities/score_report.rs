use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Sub-scores for the five rubric sections.
///
/// `content_structure` is a 0-40 coverage score rounded to 2 decimals; the
/// other sections carry the discrete bucket score from the rubric.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionScores {
    pub content_structure: f64,
    pub speech_rate: i64,
    pub language_grammar: i64,
    pub clarity: i64,
    pub engagement: i64,
}

/// Complete result of scoring one spoken self-introduction.
///
/// Field names and nesting are a compatibility contract with API consumers;
/// do not rename. `content_details` is a `BTreeMap` so identical inputs
/// serialize to byte-identical JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreReport {
    pub word_count: usize,
    /// Words per minute, rounded to 2 decimals.
    pub wpm: f64,
    /// Match count reported by the grammar service.
    pub grammar_errors: usize,
    /// Filler-word rate in percent, rounded to 2 decimals.
    pub filler_rate: f64,
    /// Sentiment polarity in [-1, 1], rounded to 3 decimals.
    pub sentiment: f64,
    pub section_scores: SectionScores,
    /// Presence of each configured content check phrase.
    pub content_details: BTreeMap<String, bool>,
    /// Weighted composite, rounded to 2 decimals. Not clamped: rubrics that
    /// assign bucket scores above a section's basis can push this past 100.
    pub final_score: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_report() -> ScoreReport {
        ScoreReport {
            word_count: 42,
            wpm: 126.0,
            grammar_errors: 1,
            filler_rate: 4.76,
            sentiment: 0.42,
            section_scores: SectionScores {
                content_structure: 30.0,
                speech_rate: 10,
                language_grammar: 8,
                clarity: 12,
                engagement: 15,
            },
            content_details: BTreeMap::from([
                ("my_name_is".to_string(), true),
                ("thank_you".to_string(), false),
            ]),
            final_score: 80.0,
        }
    }

    #[test]
    fn test_report_serializes_with_contract_field_names() {
        let json = serde_json::to_value(sample_report()).unwrap();
        assert!(json.get("word_count").is_some());
        assert!(json.get("wpm").is_some());
        assert!(json.get("grammar_errors").is_some());
        assert!(json.get("filler_rate").is_some());
        assert!(json.get("sentiment").is_some());
        assert!(json.get("final_score").is_some());
        assert!(json["section_scores"].get("content_structure").is_some());
        assert!(json["section_scores"].get("engagement").is_some());
        assert_eq!(json["content_details"]["my_name_is"], true);
    }

    #[test]
    fn test_report_serialization_is_deterministic() {
        let a = serde_json::to_string(&sample_report()).unwrap();
        let b = serde_json::to_string(&sample_report()).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_report_round_trips_through_json() {
        let report = sample_report();
        let json = serde_json::to_string(&report).unwrap();
        let back: ScoreReport = serde_json::from_str(&json).unwrap();
        assert_eq!(back, report);
    }
}
