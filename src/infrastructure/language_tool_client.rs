use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use crate::domain::errors::GrammarCheckError;
use crate::domain::repositories::grammar_checker::{GrammarChecker, GrammarResult};

/// Check endpoint of the LanguageTool HTTP API
const CHECK_PATH: &str = "/v2/check";

/// Connection settings for a LanguageTool-compatible server
#[derive(Debug, Clone)]
pub struct LanguageToolConfig {
    pub base_url: String,
    pub language: String,
}

impl LanguageToolConfig {
    pub fn new(base_url: &str, language: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            language: language.to_string(),
        }
    }
}

/// Subset of the LanguageTool check response
#[derive(Debug, Deserialize)]
struct CheckResponse {
    matches: Vec<RuleMatch>,
}

#[derive(Debug, Deserialize)]
struct RuleMatch {
    message: String,
}

/// Grammar checker backed by a LanguageTool-compatible HTTP server.
///
/// One client (and its connection pool) is created per process and shared
/// across requests; invocations are stateless.
pub struct LanguageToolClient {
    client: Client,
    config: LanguageToolConfig,
}

impl LanguageToolClient {
    pub fn new(config: LanguageToolConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }
}

#[async_trait]
impl GrammarChecker for LanguageToolClient {
    async fn count_errors(&self, text: &str) -> GrammarResult<usize> {
        let url = format!("{}{}", self.config.base_url, CHECK_PATH);
        let params = [("text", text), ("language", self.config.language.as_str())];

        let response = self
            .client
            .post(&url)
            .form(&params)
            .send()
            .await
            .map_err(|e| GrammarCheckError::RequestFailed(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(GrammarCheckError::UnexpectedStatus(status.as_u16()));
        }

        let body: CheckResponse = response
            .json()
            .await
            .map_err(|e| GrammarCheckError::InvalidResponse(e.to_string()))?;

        for rule_match in &body.matches {
            debug!(message = %rule_match.message, "Grammar rule match");
        }

        Ok(body.matches.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_trims_trailing_slash() {
        let config = LanguageToolConfig::new("http://localhost:8010/", "en-US");
        assert_eq!(config.base_url, "http://localhost:8010");
        assert_eq!(config.language, "en-US");
    }

    #[test]
    fn test_check_response_parses_match_count() {
        let raw = r#"{
            "software": {"name": "LanguageTool"},
            "matches": [
                {"message": "Possible spelling mistake found.", "offset": 3, "length": 5},
                {"message": "This sentence does not start with an uppercase letter.", "offset": 0, "length": 2}
            ]
        }"#;
        let parsed: CheckResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(parsed.matches.len(), 2);
        assert_eq!(parsed.matches[0].message, "Possible spelling mistake found.");
    }

    #[test]
    fn test_check_response_parses_clean_result() {
        let parsed: CheckResponse = serde_json::from_str(r#"{"matches": []}"#).unwrap();
        assert!(parsed.matches.is_empty());
    }
}
