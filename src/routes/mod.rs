//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! Binds the generation API and a health check under a single Axum router.
//! The question page is served as static files from the configured
//! directory for every path the API does not claim.

pub mod question;

use std::path::Path;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// API routes only; no static fallback.
pub fn api_routes(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/generate-question", post(question::generate_question))
        .route("/healthz", get(healthz))
        .layer(cors)
        .with_state(state)
}

/// Full application: API routes, request tracing, and the static page at `/`.
pub fn app(state: AppState, static_dir: &Path) -> Router {
    let page = ServeDir::new(static_dir).append_index_html_on_directories(true);
    api_routes(state)
        .fallback_service(page)
        .layer(TraceLayer::new_for_http())
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
