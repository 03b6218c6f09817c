use crate::domain::entities::rubric::{first_matching_score, BucketRule};
use crate::domain::services::scoring::round_to;
use crate::domain::services::text_metrics::whitespace_tokens;

/// Score assigned when the filler rate falls outside every configured bucket.
const FALLBACK_SCORE: i64 = 3;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FillerScore {
    pub score: i64,
    /// Filler rate in percent, rounded to 2 decimals.
    pub rate: f64,
}

/// Counts configured filler words among whitespace tokens and maps the
/// resulting rate onto the rubric's `filler_rate_map` buckets.
pub struct FillerRateScorer {
    filler_words: Vec<String>,
    buckets: Vec<BucketRule>,
}

impl FillerRateScorer {
    pub fn new(filler_words: &[String], buckets: &[BucketRule]) -> Self {
        FillerRateScorer {
            filler_words: filler_words.iter().map(|w| w.to_lowercase()).collect(),
            buckets: buckets.to_vec(),
        }
    }

    pub fn calculate(&self, transcript: &str) -> FillerScore {
        let tokens = whitespace_tokens(transcript);
        // empty transcripts score against a total of 1
        let total = if tokens.is_empty() { 1 } else { tokens.len() };

        // Occurrences are summed per configured entry, so a duplicated
        // filler word double-counts
        let filler_count: usize = self
            .filler_words
            .iter()
            .map(|filler| tokens.iter().filter(|token| *token == filler).count())
            .sum();

        let rate = filler_count as f64 / total as f64 * 100.0;
        let score = first_matching_score(&self.buckets, rate).unwrap_or(FALLBACK_SCORE);

        FillerScore {
            score,
            rate: round_to(rate, 2),
        }
    }
}
