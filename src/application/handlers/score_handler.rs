use std::collections::HashMap;
use std::sync::Arc;

use axum::{extract::State, http::StatusCode, Json};
use serde::{Deserialize, Serialize};
use tracing::error;

use crate::application::services::scoring_service::ScoringService;
use crate::domain::entities::score_report::ScoreReport;
use crate::domain::errors::ScoringError;

fn default_duration_seconds() -> f64 {
    30.0
}

/// Request body for the score endpoint
#[derive(Debug, Serialize, Deserialize)]
pub struct ScoreRequest {
    pub transcript: String,
    /// Spoken duration; defaults to the sample-audio length of 30 seconds
    #[serde(default = "default_duration_seconds")]
    pub duration_seconds: f64,
}

/// Error response
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Service banner for the root path
pub async fn service_banner() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "message": "Intro scoring service is running.",
        "usage": "POST /score with { \"transcript\": \"...\", \"duration_seconds\": 30.0 }"
    }))
}

/// Health check endpoint
pub async fn health_check(
    State(service): State<Arc<ScoringService>>,
) -> Json<HashMap<String, serde_json::Value>> {
    let grammar_available = service.grammar_service_available().await;

    let mut response = HashMap::new();
    response.insert("status".to_string(), serde_json::json!("running"));
    response.insert(
        "grammar_service".to_string(),
        serde_json::json!(grammar_available),
    );
    response.insert(
        "content_checks".to_string(),
        serde_json::json!(service.rubric().content_checks.len()),
    );

    Json(response)
}

/// Score a spoken self-introduction
pub async fn score_intro(
    State(service): State<Arc<ScoringService>>,
    Json(request): Json<ScoreRequest>,
) -> Result<Json<ScoreReport>, (StatusCode, Json<ErrorResponse>)> {
    match service
        .score(&request.transcript, request.duration_seconds)
        .await
    {
        Ok(report) => Ok(Json(report)),
        Err(e) => {
            error!("Scoring request failed: {}", e);
            let status = match e {
                ScoringError::GrammarCheck(_) => StatusCode::BAD_GATEWAY,
            };
            Err((status, Json(ErrorResponse { error: e.to_string() })))
        }
    }
}
