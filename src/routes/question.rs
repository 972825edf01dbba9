//! Question generation route.

use axum::body::Bytes;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use tracing::warn;

use crate::services::question::QuestionError;
use crate::state::AppState;
use crate::wire::{GenerationRequest, GenerationResponse};

/// `POST /api/generate-question`: generate one question, optionally about a topic.
///
/// The body is parsed as JSON whatever its `Content-Type`. Every failure,
/// including an unreadable body, answers 500 with `{ error }`.
pub async fn generate_question(State(state): State<AppState>, body: Bytes) -> Response {
    let request = match serde_json::from_slice::<GenerationRequest>(&body) {
        Ok(request) => request,
        Err(err) => {
            warn!(error = %err, "question: unreadable request body");
            return error_response(err.to_string());
        }
    };

    match state.questions.generate(request.topic.as_deref()).await {
        Ok(question) => Json(GenerationResponse::Question { question }).into_response(),
        Err(err) => err.into_response(),
    }
}

impl IntoResponse for QuestionError {
    fn into_response(self) -> Response {
        error_response(self.to_string())
    }
}

fn error_response(error: String) -> Response {
    (StatusCode::INTERNAL_SERVER_ERROR, Json(GenerationResponse::Error { error })).into_response()
}

#[cfg(test)]
#[path = "question_test.rs"]
mod tests;
