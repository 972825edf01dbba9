//! Question service: topic → prompt → provider → question text.
//!
//! DESIGN
//! ======
//! The generation route is chosen once, at construction, from the credentials
//! that were present at start-up. Routes are an ordered table of
//! `(predicate, route)` pairs; the first match wins:
//!
//! 1. no credential at all → mock question (never an error)
//! 2. `OpenAI` key → provider call
//! 3. Anthropic key only → fixed "prefer `OpenAI`" error
//! 4. anything else → fixed "not configured" error
//!
//! Provider output is returned verbatim. The prompt asks for a bare question,
//! but nothing here strips quotes or preambles.

use std::sync::Arc;

use rand::Rng;
use tracing::{error, info, warn};

use crate::config::ProviderCredentials;
use crate::llm::TextGenerator;
use crate::llm::types::{GenerationParams, LlmError};

pub const MAX_OUTPUT_TOKENS: u32 = 60;
pub const TEMPERATURE: f32 = 0.75;

pub const GENERATION_PARAMS: GenerationParams = GenerationParams { max_tokens: MAX_OUTPUT_TOKENS, temperature: TEMPERATURE };

pub const MOCK_QUESTIONS: [&str; 3] = [
    "If you could have any superpower, what would it be and why? (Mock)",
    "What's a skill you'd like to learn this year? (Mock)",
    "What's your favorite way to unwind after a busy day? (Mock)",
];

pub const PREFER_OPENAI_MESSAGE: &str =
    "OpenAI API key preferred for this example. Other providers need specific SDK setup.";
pub const NOT_CONFIGURED_MESSAGE: &str = "AI provider API key not configured.";
pub const AUTH_FAILED_MESSAGE: &str = "AI provider authentication failed. Please check your API key.";

// =============================================================================
// TYPES
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum QuestionError {
    #[error("{}", PREFER_OPENAI_MESSAGE)]
    ProviderNotWired,
    #[error("{}", NOT_CONFIGURED_MESSAGE)]
    NotConfigured,
    /// The `OpenAI` key is set but the client could not be built at start-up.
    #[error("AI provider client failed to initialize: {0}")]
    ClientInit(String),
    #[error("{}", provider_failure_message(.0))]
    Provider(#[from] LlmError),
}

/// Caller-facing text for a provider fault. Credential problems collapse to
/// one fixed message so raw provider wording about keys never leaks.
fn provider_failure_message(err: &LlmError) -> String {
    if err.is_auth_failure() { AUTH_FAILED_MESSAGE.to_string() } else { err.to_string() }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Mock,
    OpenAi,
    PreferOpenAi,
    Unconfigured,
}

// =============================================================================
// ROUTE SELECTION
// =============================================================================

type RoutePredicate = fn(&ProviderCredentials) -> bool;

fn no_credentials(creds: &ProviderCredentials) -> bool {
    creds.none_present()
}

fn has_openai(creds: &ProviderCredentials) -> bool {
    creds.openai.is_some()
}

fn has_anthropic(creds: &ProviderCredentials) -> bool {
    creds.anthropic.is_some()
}

const ROUTES: [(RoutePredicate, Route); 3] =
    [(no_credentials, Route::Mock), (has_openai, Route::OpenAi), (has_anthropic, Route::PreferOpenAi)];

#[must_use]
pub fn select_route(creds: &ProviderCredentials) -> Route {
    ROUTES
        .iter()
        .find(|(matches, _)| matches(creds))
        .map_or(Route::Unconfigured, |(_, route)| *route)
}

// =============================================================================
// SERVICE
// =============================================================================

/// Provider client as it came out of start-up.
enum Generator {
    Missing,
    Ready(Arc<dyn TextGenerator>),
    InitFailed(String),
}

/// Stateless per call; shared across handlers behind an `Arc`.
pub struct QuestionService {
    route: Route,
    generator: Generator,
}

impl QuestionService {
    #[must_use]
    pub fn new(credentials: &ProviderCredentials, generator: Option<Arc<dyn TextGenerator>>) -> Self {
        let generator = generator.map_or(Generator::Missing, Generator::Ready);
        Self { route: select_route(credentials), generator }
    }

    /// Service whose provider client failed to build. The route is still chosen
    /// from `credentials`; provider calls answer [`QuestionError::ClientInit`].
    #[must_use]
    pub fn client_init_failed(credentials: &ProviderCredentials, error: impl Into<String>) -> Self {
        Self { route: select_route(credentials), generator: Generator::InitFailed(error.into()) }
    }

    #[must_use]
    pub fn route(&self) -> Route {
        self.route
    }

    /// Produce one question, optionally about `topic`. An empty topic counts as none.
    ///
    /// # Errors
    ///
    /// Returns [`QuestionError`] when only an unsupported provider is configured,
    /// the provider client failed to build, or the provider call fails.
    pub async fn generate(&self, topic: Option<&str>) -> Result<String, QuestionError> {
        let topic = topic.filter(|t| !t.is_empty());
        match self.route {
            Route::Mock => {
                warn!("no AI provider API key found; serving mock question");
                Ok(random_mock_question(topic))
            }
            Route::OpenAi => {
                let generator = match &self.generator {
                    Generator::Ready(generator) => generator,
                    Generator::Missing => return Err(QuestionError::NotConfigured),
                    Generator::InitFailed(error) => return Err(QuestionError::ClientInit(error.clone())),
                };
                let prompt = build_prompt(topic);
                let generation = generator
                    .generate(&prompt, GENERATION_PARAMS)
                    .await
                    .inspect_err(|e| error!(error = %e, "question: provider call failed"))?;
                info!(
                    model = %generation.model,
                    input_tokens = generation.input_tokens,
                    output_tokens = generation.output_tokens,
                    has_topic = topic.is_some(),
                    "question: generated"
                );
                Ok(generation.text)
            }
            Route::PreferOpenAi => Err(QuestionError::ProviderNotWired),
            Route::Unconfigured => Err(QuestionError::NotConfigured),
        }
    }
}

// =============================================================================
// PROMPT + MOCK
// =============================================================================

#[must_use]
pub fn build_prompt(topic: Option<&str>) -> String {
    let topic_clause = match topic {
        Some(topic) => format!("The question should be related to the topic: \"{topic}\"."),
        None => "The question can be on any general, engaging topic.".to_string(),
    };
    format!(
        "Generate a single, concise \"question of the day\" for a team.\n\
         The question should be suitable for a work environment and serve as a bit of fun in daily meetings.\n\
         {topic_clause}\n\
         Do not include any preamble, explanation, or quotation marks around the question itself. Just return the question text.\n\
         Ensure the question is relatively short and easy to understand. DO NOT be cringe. Do not make the question team related."
    )
}

/// Templated text when a topic is given, otherwise a stock question picked by `rng`.
pub fn mock_question<R: Rng + ?Sized>(topic: Option<&str>, rng: &mut R) -> String {
    match topic {
        Some(topic) => format!("Mock question about {topic}: What's new?"),
        None => MOCK_QUESTIONS[rng.random_range(0..MOCK_QUESTIONS.len())].to_string(),
    }
}

fn random_mock_question(topic: Option<&str>) -> String {
    mock_question(topic, &mut rand::rng())
}

#[cfg(test)]
#[path = "question_test.rs"]
mod tests;
