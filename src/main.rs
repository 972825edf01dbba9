use std::sync::Arc;

use qotd::config::AppConfig;
use qotd::llm::{LlmClient, TextGenerator};
use qotd::services::question::QuestionService;
use qotd::{routes, state};

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let config = AppConfig::from_env().expect("invalid configuration");

    // Initialize LLM client (non-fatal: an init failure is reported on each provider call).
    let credentials = &config.credentials;
    let questions = match credentials.openai.clone() {
        Some(api_key) => match LlmClient::from_env(api_key) {
            Ok(client) => {
                tracing::info!(model = client.model(), "LLM client initialized");
                QuestionService::new(credentials, Some(Arc::new(client) as Arc<dyn TextGenerator>))
            }
            Err(e) => {
                tracing::error!(error = %e, "LLM client init failed");
                QuestionService::client_init_failed(credentials, e.to_string())
            }
        },
        None => {
            tracing::info!("OPENAI_API_KEY not set; provider calls disabled");
            QuestionService::new(credentials, None)
        }
    };

    let state = state::AppState::from_service(questions);
    tracing::info!(route = ?state.questions.route(), "question route selected");

    let app = routes::app(state, &config.static_dir);
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.port))
        .await
        .expect("failed to bind");

    tracing::info!(port = config.port, "qotd listening");
    axum::serve(listener, app).await.expect("server failed");
}
