use thiserror::Error;

/// Errors raised while loading the rubric document at startup.
///
/// These are fatal: the process refuses to serve without a valid rubric.
#[derive(Debug, Error)]
pub enum RubricError {
    #[error("Failed to read rubric document {path}: {reason}")]
    ReadFailed { path: String, reason: String },

    #[error("Malformed rubric document: {0}")]
    Malformed(String),
}

#[derive(Debug, Error, Clone)]
pub enum GrammarCheckError {
    #[error("Grammar service request failed: {0}")]
    RequestFailed(String),

    #[error("Grammar service returned status {0}")]
    UnexpectedStatus(u16),

    #[error("Failed to parse grammar service response: {0}")]
    InvalidResponse(String),
}

/// Errors a scoring request can surface to the caller.
///
/// Bucket misses are not errors (they fall back to per-scorer defaults);
/// only the external grammar dependency can fail a request.
#[derive(Debug, Error)]
pub enum ScoringError {
    #[error("Grammar check failed: {0}")]
    GrammarCheck(#[from] GrammarCheckError),
}
