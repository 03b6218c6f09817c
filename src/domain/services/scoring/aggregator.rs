use tracing::debug;

use crate::domain::entities::rubric::{RubricConfig, SectionWeights};
use crate::domain::entities::score_report::{ScoreReport, SectionScores};
use crate::domain::errors::ScoringError;
use crate::domain::repositories::grammar_checker::GrammarChecker;
use crate::domain::services::scoring::{
    round_to, ContentCoverageScorer, FillerRateScorer, GrammarScorer, SentimentScorer,
    SpeechRateScorer, CLARITY_MAX_BASIS, CONTENT_MAX_BASIS, ENGAGEMENT_MAX_BASIS,
    GRAMMAR_MAX_BASIS, SPEECH_RATE_MAX_BASIS,
};
use crate::domain::services::text_metrics;

/// Runs the five section scorers over one transcript and combines their
/// scores into the final composite.
///
/// The sub-scorers are independent pure functions over the same input; only
/// the grammar count goes through the injected `GrammarChecker` service.
pub struct IntroScoreAggregator {
    content: ContentCoverageScorer,
    speech_rate: SpeechRateScorer,
    grammar: GrammarScorer,
    filler: FillerRateScorer,
    sentiment: SentimentScorer,
    weights: SectionWeights,
}

impl IntroScoreAggregator {
    pub fn new(rubric: &RubricConfig) -> Self {
        IntroScoreAggregator {
            content: ContentCoverageScorer::new(&rubric.content_checks),
            speech_rate: SpeechRateScorer::new(&rubric.speech_rate_map),
            grammar: GrammarScorer::new(&rubric.grammar_map),
            filler: FillerRateScorer::new(&rubric.filler_words, &rubric.filler_rate_map),
            sentiment: SentimentScorer::new(&rubric.sentiment_map),
            weights: rubric.weights,
        }
    }

    /// Score one transcript.
    ///
    /// # Arguments
    /// * `transcript` - Raw transcript text
    /// * `duration_seconds` - Spoken duration; non-positive values are
    ///   treated as one second by the speech rate scorer
    /// * `grammar_checker` - Process-wide grammar service handle
    pub async fn calculate(
        &self,
        transcript: &str,
        duration_seconds: f64,
        grammar_checker: &dyn GrammarChecker,
    ) -> Result<ScoreReport, ScoringError> {
        let word_count = text_metrics::count_words(transcript);
        debug!(
            word_count,
            duration_seconds, "Starting intro score calculation"
        );

        let content = self.content.calculate(transcript);
        debug!(
            content_score = content.score,
            matched = content.details.values().filter(|&&p| p).count(),
            "Calculated content coverage"
        );

        let speech = self.speech_rate.calculate(word_count, duration_seconds);
        debug!(
            wpm = speech.wpm,
            speech_score = speech.score,
            "Calculated speech rate score"
        );

        let grammar_errors = grammar_checker.count_errors(transcript).await?;
        let grammar_score = self.grammar.calculate(grammar_errors);
        debug!(
            grammar_errors,
            grammar_score, "Calculated grammar quality score"
        );

        let filler = self.filler.calculate(transcript);
        debug!(
            filler_rate = filler.rate,
            filler_score = filler.score,
            "Calculated filler rate score"
        );

        let sentiment = self.sentiment.calculate(transcript);
        debug!(
            polarity = sentiment.polarity,
            sentiment_score = sentiment.score,
            "Calculated sentiment score"
        );

        let w = &self.weights;
        let final_score = content.score * (w.content_structure / CONTENT_MAX_BASIS)
            + speech.score as f64 * (w.speech_rate / SPEECH_RATE_MAX_BASIS)
            + grammar_score as f64 * (w.language_grammar / GRAMMAR_MAX_BASIS)
            + filler.score as f64 * (w.clarity / CLARITY_MAX_BASIS)
            + sentiment.score as f64 * (w.engagement / ENGAGEMENT_MAX_BASIS);

        let report = ScoreReport {
            word_count,
            wpm: speech.wpm,
            grammar_errors,
            filler_rate: filler.rate,
            sentiment: sentiment.polarity,
            section_scores: SectionScores {
                content_structure: round_to(content.score, 2),
                speech_rate: speech.score,
                language_grammar: grammar_score,
                clarity: filler.score,
                engagement: sentiment.score,
            },
            content_details: content.details,
            final_score: round_to(final_score, 2),
        };

        debug!(
            final_score = report.final_score,
            "Completed intro score calculation"
        );

        Ok(report)
    }
}
