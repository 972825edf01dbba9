//! LLM: provider adapter for question generation.
//!
//! DESIGN
//! ======
//! Only the `OpenAI`-compatible provider is wired up. `LlmClient` owns the
//! HTTP client plus the model name and implements [`TextGenerator`], which is
//! the only surface the question service depends on.

pub mod config;
pub mod openai;
pub mod types;

use config::LlmConfig;
pub use types::TextGenerator;
use types::{Generation, GenerationParams, LlmError};

// =============================================================================
// CLIENT
// =============================================================================

/// Concrete LLM client backed by an `OpenAI`-compatible API.
pub struct LlmClient {
    inner: openai::OpenAiClient,
    model: String,
}

impl LlmClient {
    /// Build an LLM client for `api_key`, reading the rest from the environment.
    ///
    /// # Errors
    ///
    /// Returns an error if a config value is malformed or the HTTP client fails.
    pub fn from_env(api_key: String) -> Result<Self, LlmError> {
        let config = LlmConfig::from_env(api_key)?;
        Self::from_config(config)
    }

    /// Build an LLM client from a parsed typed config.
    ///
    /// # Errors
    ///
    /// Returns an error if the provider HTTP client fails to build.
    pub fn from_config(config: LlmConfig) -> Result<Self, LlmError> {
        let inner =
            openai::OpenAiClient::new(config.api_key, config.openai_mode, config.openai_base_url, config.timeouts)?;
        Ok(Self { inner, model: config.model })
    }

    /// Return the configured model name (e.g. `"gpt-4.1-nano"`).
    #[must_use]
    pub fn model(&self) -> &str {
        &self.model
    }
}

#[async_trait::async_trait]
impl TextGenerator for LlmClient {
    async fn generate(&self, prompt: &str, params: GenerationParams) -> Result<Generation, LlmError> {
        self.inner.generate(&self.model, prompt, params).await
    }
}
