//! HTTP access to the generation endpoint.
//!
//! ERROR HANDLING
//! ==============
//! Every failure becomes an [`ApiError`] whose display text is what the view
//! shows. Server error bodies pass through verbatim; a failing status with no
//! usable body reads `Error: {status}`.

use std::time::Duration;

use crate::wire::{GenerationRequest, GenerationResponse};

pub const GENERATE_QUESTION_PATH: &str = "/api/generate-question";
const REQUEST_TIMEOUT_SECS: u64 = 130;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("{0}")]
    Server(String),
    #[error("Error: {0}")]
    Status(u16),
    #[error("{0}")]
    Transport(String),
    #[error("{0}")]
    Decode(String),
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),
}

/// Anything that can turn a request into question text. Enables mocking in tests.
#[async_trait::async_trait]
pub trait QuestionApi: Send + Sync {
    /// # Errors
    ///
    /// Returns an [`ApiError`] describing why no question came back.
    async fn generate_question(&self, request: &GenerationRequest) -> Result<String, ApiError>;
}

pub struct HttpQuestionApi {
    http: reqwest::Client,
    endpoint: String,
}

impl HttpQuestionApi {
    /// Client for the server at `base_url` (e.g. `http://127.0.0.1:3000`).
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::HttpClientBuild`] if the TLS backend fails to initialize.
    pub fn new(base_url: &str) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .map_err(|e| ApiError::HttpClientBuild(e.to_string()))?;
        let endpoint = format!("{}{GENERATE_QUESTION_PATH}", base_url.trim_end_matches('/'));
        Ok(Self { http, endpoint })
    }

    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait::async_trait]
impl QuestionApi for HttpQuestionApi {
    async fn generate_question(&self, request: &GenerationRequest) -> Result<String, ApiError> {
        let response = self
            .http
            .post(&self.endpoint)
            .json(request)
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        let status = response.status().as_u16();
        let text = response
            .text()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        parse_response(status, &text)
    }
}

pub(crate) fn parse_response(status: u16, body: &str) -> Result<String, ApiError> {
    if !(200..300).contains(&status) {
        return Err(match serde_json::from_str::<GenerationResponse>(body) {
            Ok(GenerationResponse::Error { error }) if !error.is_empty() => ApiError::Server(error),
            _ => ApiError::Status(status),
        });
    }
    match serde_json::from_str::<GenerationResponse>(body).map_err(|e| ApiError::Decode(e.to_string()))? {
        GenerationResponse::Question { question } => Ok(question),
        GenerationResponse::Error { error } => Err(ApiError::Server(error)),
    }
}

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;
