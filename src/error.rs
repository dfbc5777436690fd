//! Error types for Analyst Relay
//!
//! All errors implement `IntoResponse` for Axum handlers.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

/// Main error type for the application
///
/// Display texts for `MissingMessage` and `Upstream` are part of the HTTP
/// contract - clients match on them verbatim. Upstream detail (status codes,
/// response bodies, transport errors) never appears here; it is logged at the
/// handler boundary instead.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Message is required.")]
    MissingMessage,

    #[error("Failed to get a response from the Cerebras API.")]
    Upstream,

    #[error("Configuration error: {0}")]
    Config(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::MissingMessage => StatusCode::BAD_REQUEST,
            Self::Upstream => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = Json(serde_json::json!({
            "error": self.to_string(),
        }));

        (status, body).into_response()
    }
}

/// Convenience type alias for Results
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_message_display_is_fixed() {
        let err = AppError::MissingMessage;
        assert_eq!(err.to_string(), "Message is required.");
    }

    #[test]
    fn test_upstream_display_is_fixed() {
        let err = AppError::Upstream;
        assert_eq!(
            err.to_string(),
            "Failed to get a response from the Cerebras API."
        );
    }

    #[test]
    fn test_config_error_creates() {
        let err = AppError::Config("bad toml".to_string());
        assert_eq!(err.to_string(), "Configuration error: bad toml");
    }

    #[test]
    fn test_missing_message_response_status() {
        let err = AppError::MissingMessage;
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_upstream_response_status() {
        let err = AppError::Upstream;
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_config_response_status() {
        let err = AppError::Config("test".to_string());
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
