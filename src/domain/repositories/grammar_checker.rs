//! Grammar Checker Trait
//!
//! Common interface for the external grammar-checking service. Keeping the
//! scoring pipeline behind this trait decouples it from the concrete HTTP
//! client and enables mocking in tests.

use async_trait::async_trait;

use crate::domain::errors::GrammarCheckError;

/// Common result type for grammar checking operations
pub type GrammarResult<T> = Result<T, GrammarCheckError>;

/// Port for the external grammar-checking service.
///
/// A single implementation instance is constructed at process start and
/// shared read-only across concurrent requests (see `ScoringService`).
/// Invocations are stateless; the count for a fixed input is deterministic
/// as far as the backing service is.
#[async_trait]
pub trait GrammarChecker: Send + Sync {
    /// Count grammar issues in `text`.
    ///
    /// The returned count is matched against the rubric's `grammar_map`.
    async fn count_errors(&self, text: &str) -> GrammarResult<usize>;
}
