//! JSON bodies exchanged between the client view and the generation endpoint.

use serde::{Deserialize, Serialize};

/// `POST /api/generate-question` request body.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub topic: Option<String>,
}

impl GenerationRequest {
    /// An empty topic is sent as no topic at all.
    #[must_use]
    pub fn for_topic(topic: &str) -> Self {
        Self { topic: (!topic.is_empty()).then(|| topic.to_string()) }
    }
}

/// Exactly one of `question` or `error` is populated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum GenerationResponse {
    Question { question: String },
    Error { error: String },
}

#[cfg(test)]
#[path = "wire_test.rs"]
mod tests;
