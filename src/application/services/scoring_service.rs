use std::sync::Arc;

use tracing::info;

use crate::domain::entities::rubric::RubricConfig;
use crate::domain::entities::score_report::ScoreReport;
use crate::domain::errors::ScoringError;
use crate::domain::repositories::grammar_checker::GrammarChecker;
use crate::domain::services::scoring::IntroScoreAggregator;

/// Process-wide scoring context.
///
/// Owns the immutable rubric and the shared grammar service handle; one
/// instance is built at startup and served behind `Arc` to all requests.
/// Every scoring call is a pure function of its input plus this shared
/// state, so concurrent requests need no locking.
pub struct ScoringService {
    rubric: Arc<RubricConfig>,
    grammar_checker: Arc<dyn GrammarChecker>,
    aggregator: IntroScoreAggregator,
}

impl ScoringService {
    pub fn new(rubric: Arc<RubricConfig>, grammar_checker: Arc<dyn GrammarChecker>) -> Self {
        let aggregator = IntroScoreAggregator::new(&rubric);
        info!(
            content_checks = rubric.content_checks.len(),
            filler_words = rubric.filler_words.len(),
            "Scoring service initialized"
        );
        ScoringService {
            rubric,
            grammar_checker,
            aggregator,
        }
    }

    /// Score one spoken self-introduction.
    pub async fn score(
        &self,
        transcript: &str,
        duration_seconds: f64,
    ) -> Result<ScoreReport, ScoringError> {
        self.aggregator
            .calculate(transcript, duration_seconds, self.grammar_checker.as_ref())
            .await
    }

    pub fn rubric(&self) -> &RubricConfig {
        &self.rubric
    }

    /// Probe the grammar service with a tiny fixed input.
    pub async fn grammar_service_available(&self) -> bool {
        self.grammar_checker.count_errors("ping").await.is_ok()
    }
}
