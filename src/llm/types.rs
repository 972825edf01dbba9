//! LLM types: provider-neutral generation parameters and errors.
//!
//! Shared by every provider client. The question service only ever sees
//! [`TextGenerator`], so tests can swap in a scripted generator.

// =============================================================================
// ERROR
// =============================================================================

/// Errors produced by LLM client operations.
#[derive(Debug, thiserror::Error)]
pub enum LlmError {
    /// A configuration value could not be parsed.
    #[error("config parse failed: {0}")]
    ConfigParse(String),

    /// The HTTP request to the LLM provider failed.
    #[error("API request failed: {0}")]
    ApiRequest(String),

    /// The LLM provider returned a non-success HTTP status.
    ///
    /// `message` is the provider's own error text when the body carried one,
    /// otherwise the raw body.
    #[error("{message}")]
    ApiResponse { status: u16, message: String },

    /// The LLM provider response body could not be deserialized.
    #[error("API response parse failed: {0}")]
    ApiParse(String),

    /// The underlying HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),
}

impl LlmError {
    /// Whether the failure looks like a rejected or missing credential.
    #[must_use]
    pub fn is_auth_failure(&self) -> bool {
        let message = self.to_string();
        message.contains("authentication") || message.contains("API key")
    }
}

// =============================================================================
// GENERATION PARAMETERS
// =============================================================================

/// Sampling bounds passed with every generation request.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GenerationParams {
    pub max_tokens: u32,
    pub temperature: f32,
}

/// Result of a single generation call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Generation {
    pub text: String,
    pub model: String,
    pub input_tokens: u64,
    pub output_tokens: u64,
}

// =============================================================================
// TEXT GENERATOR TRAIT
// =============================================================================

/// Provider-neutral async trait for one-shot text generation. Enables mocking in tests.
#[async_trait::async_trait]
pub trait TextGenerator: Send + Sync {
    /// Send a single prompt to the provider and return its text.
    ///
    /// # Errors
    ///
    /// Returns an [`LlmError`] if the request fails, the provider rejects it,
    /// or the response is malformed.
    async fn generate(&self, prompt: &str, params: GenerationParams) -> Result<Generation, LlmError>;
}

#[cfg(test)]
#[path = "types_test.rs"]
mod tests;
