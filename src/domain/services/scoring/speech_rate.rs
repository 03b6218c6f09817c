use crate::domain::entities::rubric::{first_matching_score, BucketRule};
use crate::domain::services::scoring::round_to;

/// Score assigned when the computed WPM falls outside every configured bucket.
const FALLBACK_SCORE: i64 = 2;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpeechRateScore {
    pub score: i64,
    /// Words per minute, rounded to 2 decimals.
    pub wpm: f64,
}

/// Maps speaking pace onto the rubric's `speech_rate_map` buckets.
pub struct SpeechRateScorer {
    buckets: Vec<BucketRule>,
}

impl SpeechRateScorer {
    pub fn new(buckets: &[BucketRule]) -> Self {
        SpeechRateScorer {
            buckets: buckets.to_vec(),
        }
    }

    pub fn calculate(&self, word_count: usize, duration_seconds: f64) -> SpeechRateScore {
        // Non-positive durations are treated as one second
        let duration = if duration_seconds <= 0.0 { 1.0 } else { duration_seconds };
        let wpm = word_count as f64 / (duration / 60.0);

        // Bucket lookup runs on the unrounded value
        let score = first_matching_score(&self.buckets, wpm).unwrap_or(FALLBACK_SCORE);

        SpeechRateScore {
            score,
            wpm: round_to(wpm, 2),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scorer() -> SpeechRateScorer {
        SpeechRateScorer::new(&[
            BucketRule { min: 111.0, max: 140.0, score: 10 },
            BucketRule { min: 90.0, max: 110.99, score: 8 },
            BucketRule { min: 0.0, max: 89.99, score: 4 },
        ])
    }

    #[test]
    fn test_wpm_computation() {
        let result = scorer().calculate(150, 60.0);
        assert_eq!(result.wpm, 150.0);
    }

    #[test]
    fn test_wpm_half_minute() {
        let result = scorer().calculate(60, 30.0);
        assert_eq!(result.wpm, 120.0);
        assert_eq!(result.score, 10);
    }

    #[test]
    fn test_zero_duration_treated_as_one_second() {
        let result = scorer().calculate(2, 0.0);
        // 2 words / (1s / 60) = 120 wpm
        assert_eq!(result.wpm, 120.0);
        assert_eq!(result.score, 10);
    }

    #[test]
    fn test_negative_duration_treated_as_one_second() {
        let result = scorer().calculate(1, -5.0);
        assert_eq!(result.wpm, 60.0);
        assert_eq!(result.score, 4);
    }

    #[test]
    fn test_bucket_boundaries_are_inclusive() {
        assert_eq!(scorer().calculate(111, 60.0).score, 10);
        assert_eq!(scorer().calculate(140, 60.0).score, 10);
        assert_eq!(scorer().calculate(90, 60.0).score, 8);
    }

    #[test]
    fn test_fallback_score_when_no_bucket_matches() {
        // 300 wpm is outside every configured bucket
        let result = scorer().calculate(300, 60.0);
        assert_eq!(result.score, 2);
        assert_eq!(result.wpm, 300.0);
    }

    #[test]
    fn test_wpm_rounded_to_two_decimals() {
        // 100 words in 45s -> 133.333... wpm
        let result = scorer().calculate(100, 45.0);
        assert_eq!(result.wpm, 133.33);
        assert_eq!(result.score, 10);
    }

    #[test]
    fn test_zero_words() {
        let result = scorer().calculate(0, 30.0);
        assert_eq!(result.wpm, 0.0);
        assert_eq!(result.score, 4);
    }
}
