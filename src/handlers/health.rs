//! Health check endpoint
//!
//! Provides a simple liveness check for monitoring and load balancers.

use axum::{Json, http::StatusCode};
use serde::Serialize;

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Service status
    pub status: &'static str,
}

/// Health check handler
///
/// Returns 200 OK whenever the process is serving requests. The upstream
/// provider is not probed - a dead provider surfaces on the ask endpoint.
pub async fn handler() -> (StatusCode, Json<HealthResponse>) {
    (StatusCode::OK, Json(HealthResponse { status: "OK" }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_health_handler_returns_ok() {
        let (status, Json(body)) = handler().await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.status, "OK");
    }
}
