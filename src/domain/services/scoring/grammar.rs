use crate::domain::entities::rubric::{first_matching_score, BucketRule};

/// Score assigned when the error count falls outside every configured bucket.
const FALLBACK_SCORE: i64 = 2;

/// Maps a grammar error count onto the rubric's `grammar_map` buckets.
///
/// The count itself comes from the injected `GrammarChecker` service; this
/// scorer only does the bucket mapping.
pub struct GrammarScorer {
    buckets: Vec<BucketRule>,
}

impl GrammarScorer {
    pub fn new(buckets: &[BucketRule]) -> Self {
        GrammarScorer {
            buckets: buckets.to_vec(),
        }
    }

    pub fn calculate(&self, error_count: usize) -> i64 {
        first_matching_score(&self.buckets, error_count as f64).unwrap_or(FALLBACK_SCORE)
    }
}
