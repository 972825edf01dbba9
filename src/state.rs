//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor.
//! It holds the question service, which is built once at start-up from the
//! provider credentials and never mutated afterwards.

use std::sync::Arc;

use crate::config::ProviderCredentials;
use crate::llm::TextGenerator;
use crate::services::question::QuestionService;

/// Shared application state, injected into Axum handlers via State extractor.
/// Clone is required by Axum; the service is Arc-wrapped.
#[derive(Clone)]
pub struct AppState {
    pub questions: Arc<QuestionService>,
}

impl AppState {
    #[must_use]
    pub fn new(credentials: &ProviderCredentials, llm: Option<Arc<dyn TextGenerator>>) -> Self {
        Self::from_service(QuestionService::new(credentials, llm))
    }

    #[must_use]
    pub fn from_service(questions: QuestionService) -> Self {
        Self { questions: Arc::new(questions) }
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================


#[cfg(test)]
#[path = "state_test.rs"]
mod tests;
