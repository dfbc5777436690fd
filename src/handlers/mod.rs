//! HTTP request handlers for the Analyst Relay API

use crate::config::Config;
use crate::middleware::request_id_middleware;
use crate::provider::CompletionClient;
use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

pub mod ask;
pub mod health;

/// Application state shared across all handlers
///
/// Contains the configuration and the completion client. Both are Arc'd for
/// cheap cloning across Axum handlers; nothing here is mutable after startup.
#[derive(Clone)]
pub struct AppState {
    config: Arc<Config>,
    client: Arc<CompletionClient>,
}

impl AppState {
    /// Create a new AppState from configuration and the process-wide API key
    pub fn new(config: Arc<Config>, api_key: Option<String>) -> Self {
        let client = Arc::new(CompletionClient::new(&config.provider, api_key));
        Self { config, client }
    }

    /// Get reference to the configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Get reference to the completion client
    pub fn client(&self) -> &CompletionClient {
        &self.client
    }
}

/// Build the application router
///
/// Shared between `main` and integration tests so both exercise the same
/// routes and middleware stack.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::handler))
        .route("/api/askAnalyst", post(ask::handler))
        .layer(axum::middleware::from_fn(request_id_middleware))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
