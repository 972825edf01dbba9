use super::*;
use crate::llm::types::Generation;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::sync::Mutex;

// =========================================================================
// Mock generators
// =========================================================================

/// Records every prompt and returns a fixed reply.
struct RecordingGenerator {
    reply: String,
    calls: Mutex<Vec<(String, GenerationParams)>>,
}

impl RecordingGenerator {
    fn new(reply: &str) -> Arc<Self> {
        Arc::new(Self { reply: reply.to_string(), calls: Mutex::new(Vec::new()) })
    }
}

#[async_trait::async_trait]
impl TextGenerator for RecordingGenerator {
    async fn generate(&self, prompt: &str, params: GenerationParams) -> Result<Generation, LlmError> {
        self.calls
            .lock()
            .unwrap()
            .push((prompt.to_string(), params));
        Ok(Generation { text: self.reply.clone(), model: "mock".into(), input_tokens: 1, output_tokens: 1 })
    }
}

struct FailingGenerator {
    make_error: fn() -> LlmError,
}

#[async_trait::async_trait]
impl TextGenerator for FailingGenerator {
    async fn generate(&self, _prompt: &str, _params: GenerationParams) -> Result<Generation, LlmError> {
        Err((self.make_error)())
    }
}

fn creds(openai: bool, anthropic: bool, google: bool) -> ProviderCredentials {
    ProviderCredentials {
        openai: openai.then(|| "sk".to_string()),
        anthropic: anthropic.then(|| "ak".to_string()),
        google: google.then(|| "gk".to_string()),
    }
}

fn with_generator(creds: ProviderCredentials, generator: Arc<dyn TextGenerator>) -> QuestionService {
    QuestionService::new(&creds, Some(generator))
}

// =========================================================================
// select_route
// =========================================================================

#[test]
fn route_mock_without_credentials() {
    assert_eq!(select_route(&creds(false, false, false)), Route::Mock);
}

#[test]
fn route_openai_wins_over_alternates() {
    assert_eq!(select_route(&creds(true, false, false)), Route::OpenAi);
    assert_eq!(select_route(&creds(true, true, true)), Route::OpenAi);
}

#[test]
fn route_anthropic_only_prefers_openai() {
    assert_eq!(select_route(&creds(false, true, false)), Route::PreferOpenAi);
    assert_eq!(select_route(&creds(false, true, true)), Route::PreferOpenAi);
}

#[test]
fn route_google_only_is_unconfigured() {
    assert_eq!(select_route(&creds(false, false, true)), Route::Unconfigured);
}

// =========================================================================
// mock path
// =========================================================================

#[test]
fn mock_question_embeds_topic_verbatim() {
    let mut rng = StdRng::seed_from_u64(7);
    assert_eq!(
        mock_question(Some("space travel"), &mut rng),
        "Mock question about space travel: What's new?"
    );
}

#[test]
fn mock_question_without_topic_is_stock() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..20 {
        let question = mock_question(None, &mut rng);
        assert!(MOCK_QUESTIONS.contains(&question.as_str()));
    }
}

#[tokio::test]
async fn mock_route_with_topic_is_deterministic() {
    let service = QuestionService::new(&creds(false, false, false), None);
    let first = service.generate(Some("space travel")).await.unwrap();
    let second = service.generate(Some("space travel")).await.unwrap();
    assert_eq!(first, "Mock question about space travel: What's new?");
    assert_eq!(first, second);
}

#[tokio::test]
async fn mock_route_empty_topic_is_stock_question() {
    let service = QuestionService::new(&creds(false, false, false), None);
    let question = service.generate(Some("")).await.unwrap();
    assert!(MOCK_QUESTIONS.contains(&question.as_str()));
}

#[tokio::test]
async fn mock_route_never_calls_generator() {
    let generator = RecordingGenerator::new("unused");
    let service = with_generator(creds(false, false, false), generator.clone());
    service.generate(None).await.unwrap();
    assert!(generator.calls.lock().unwrap().is_empty());
}

// =========================================================================
// prompt
// =========================================================================

#[test]
fn prompt_without_topic_allows_any_topic() {
    let prompt = build_prompt(None);
    assert!(prompt.contains("any general, engaging topic"));
    assert!(!prompt.contains("related to the topic"));
    assert!(prompt.contains("DO NOT be cringe"));
    assert!(prompt.contains("Do not make the question team related"));
}

#[test]
fn prompt_with_topic_adds_constraint() {
    let prompt = build_prompt(Some("coffee"));
    assert!(prompt.contains("The question should be related to the topic: \"coffee\"."));
    assert!(!prompt.contains("any general, engaging topic"));
}

// =========================================================================
// provider path
// =========================================================================

#[tokio::test]
async fn openai_route_returns_raw_text() {
    let generator = RecordingGenerator::new("\"What's your go-to snack?\"\n");
    let service = with_generator(creds(true, false, false), generator.clone());
    let question = service.generate(Some("food")).await.unwrap();
    assert_eq!(question, "\"What's your go-to snack?\"\n");

    let calls = generator.calls.lock().unwrap();
    assert_eq!(calls.len(), 1);
    assert!(calls[0].0.contains("\"food\""));
    assert_eq!(calls[0].1, GenerationParams { max_tokens: 60, temperature: 0.75 });
}

#[tokio::test]
async fn openai_route_without_client_is_not_configured() {
    let service = QuestionService::new(&creds(true, false, false), None);
    let err = service.generate(None).await.unwrap_err();
    assert!(matches!(err, QuestionError::NotConfigured));
}

#[tokio::test]
async fn openai_route_with_failed_client_reports_init_error() {
    let lookup = |key: &str| (key == "LLM_OPENAI_MODE").then(|| "bad_mode".to_string());
    let init_error = crate::llm::config::LlmConfig::from_lookup("sk".into(), lookup).unwrap_err();
    let service = QuestionService::client_init_failed(&creds(true, false, false), init_error.to_string());
    assert_eq!(service.route(), Route::OpenAi);

    let err = service.generate(Some("coffee")).await.unwrap_err();
    assert!(matches!(err, QuestionError::ClientInit(_)));
    let message = err.to_string();
    assert!(message.starts_with("AI provider client failed to initialize: "));
    assert!(message.contains("unsupported openai_api mode"));
    assert_ne!(message, NOT_CONFIGURED_MESSAGE);
}

#[tokio::test]
async fn openai_route_empty_topic_uses_general_prompt() {
    let generator = RecordingGenerator::new("Q?");
    let service = with_generator(creds(true, false, false), generator.clone());
    service.generate(Some("")).await.unwrap();
    assert!(generator.calls.lock().unwrap()[0].0.contains("any general, engaging topic"));
}

#[tokio::test]
async fn anthropic_only_returns_fixed_error_regardless_of_topic() {
    let generator = RecordingGenerator::new("unused");
    let service = with_generator(creds(false, true, false), generator.clone());
    for topic in [None, Some("space travel"), Some("")] {
        let err = service.generate(topic).await.unwrap_err();
        assert_eq!(
            err.to_string(),
            "OpenAI API key preferred for this example. Other providers need specific SDK setup."
        );
    }
    assert!(generator.calls.lock().unwrap().is_empty());
}

#[tokio::test]
async fn google_only_returns_not_configured() {
    let service = QuestionService::new(&creds(false, false, true), None);
    let err = service.generate(None).await.unwrap_err();
    assert_eq!(err.to_string(), NOT_CONFIGURED_MESSAGE);
}

// =========================================================================
// provider failures
// =========================================================================

#[tokio::test]
async fn api_key_error_is_normalized() {
    let generator = Arc::new(FailingGenerator {
        make_error: || LlmError::ApiResponse { status: 401, message: "Invalid API key provided".into() },
    });
    let service = with_generator(creds(true, false, false), generator);
    let err = service.generate(None).await.unwrap_err();
    assert_eq!(err.to_string(), "AI provider authentication failed. Please check your API key.");
}

#[tokio::test]
async fn authentication_error_is_normalized() {
    let generator =
        Arc::new(FailingGenerator { make_error: || LlmError::ApiRequest("authentication handshake failed".into()) });
    let service = with_generator(creds(true, false, false), generator);
    let err = service.generate(None).await.unwrap_err();
    assert_eq!(err.to_string(), AUTH_FAILED_MESSAGE);
}

#[tokio::test]
async fn other_provider_errors_pass_through() {
    let generator = Arc::new(FailingGenerator {
        make_error: || LlmError::ApiResponse { status: 429, message: "You exceeded your current quota".into() },
    });
    let service = with_generator(creds(true, false, false), generator);
    let err = service.generate(None).await.unwrap_err();
    assert_eq!(err.to_string(), "You exceeded your current quota");
}
