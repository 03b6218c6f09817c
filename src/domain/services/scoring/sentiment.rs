use crate::domain::entities::rubric::{first_matching_score, BucketRule};
use crate::domain::services::scoring::round_to;

/// Score assigned when the polarity falls outside every configured bucket.
const FALLBACK_SCORE: i64 = 3;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SentimentScore {
    pub score: i64,
    /// Compound polarity in [-1, 1], rounded to 3 decimals.
    pub polarity: f64,
}

/// Maps the transcript's sentiment polarity onto the rubric's
/// `sentiment_map` buckets.
///
/// Polarity is the VADER compound score, a deterministic lexicon-based
/// value; identical transcripts always produce identical polarity.
pub struct SentimentScorer {
    buckets: Vec<BucketRule>,
}

impl SentimentScorer {
    pub fn new(buckets: &[BucketRule]) -> Self {
        SentimentScorer {
            buckets: buckets.to_vec(),
        }
    }

    pub fn calculate(&self, transcript: &str) -> SentimentScore {
        let analyzer = vader_sentiment::SentimentIntensityAnalyzer::new();
        let polarity = analyzer
            .polarity_scores(transcript)
            .get("compound")
            .copied()
            .unwrap_or(0.0);

        let score = first_matching_score(&self.buckets, polarity).unwrap_or(FALLBACK_SCORE);

        SentimentScore {
            score,
            polarity: round_to(polarity, 3),
        }
    }
}
