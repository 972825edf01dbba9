//! Question of the day: generation endpoint, provider adapter, and client view.

pub mod config;
pub mod llm;
pub mod routes;
pub mod services;
pub mod state;
pub mod view;
pub mod wire;
