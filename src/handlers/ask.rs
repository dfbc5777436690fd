//! Ask endpoint handler
//!
//! Handles POST /api/askAnalyst: validates the message, assembles the
//! outbound message list (system prompt + history + new user turn), makes
//! one call to the completion API, and relays the reply.

use crate::error::{AppError, AppResult};
use crate::handlers::AppState;
use crate::middleware::RequestId;
use crate::provider::ChatTurn;
use axum::{Extension, Json, extract::State, response::IntoResponse};
use serde::{Deserialize, Serialize};

/// Chat request from client
///
/// `message` stays an `Option` so that an absent or `null` field reaches the
/// handler and maps to the fixed 400 body, rather than bouncing off the Json
/// extractor with a generic rejection. History defaults to empty and its
/// entries are forwarded verbatim - roles are not validated here.
#[derive(Debug, Clone, Deserialize)]
pub struct AskRequest {
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    history: Vec<ChatTurn>,
}

impl AskRequest {
    /// Get the message, rejecting absent/null/empty values
    ///
    /// Whitespace-only messages pass - the contract rejects only the empty
    /// string, and the provider sees everything else untouched.
    pub fn message(&self) -> AppResult<&str> {
        match self.message.as_deref() {
            Some(m) if !m.is_empty() => Ok(m),
            _ => Err(AppError::MissingMessage),
        }
    }

    /// Get the conversation history
    pub fn history(&self) -> &[ChatTurn] {
        &self.history
    }
}

/// Chat response to client
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AskResponse {
    reply: String,
}

impl AskResponse {
    /// Create a response wrapping the assistant's reply
    pub fn new(reply: impl Into<String>) -> Self {
        Self {
            reply: reply.into(),
        }
    }

    /// Get the reply text
    pub fn reply(&self) -> &str {
        &self.reply
    }
}

/// Assemble the outbound message sequence
///
/// The order is fixed: system prompt first, caller history in its original
/// order, the new user turn last.
fn assemble_messages(system_prompt: &str, history: &[ChatTurn], message: &str) -> Vec<ChatTurn> {
    let mut messages = Vec::with_capacity(history.len() + 2);
    messages.push(ChatTurn::system(system_prompt));
    messages.extend_from_slice(history);
    messages.push(ChatTurn::user(message));
    messages
}

/// POST /api/askAnalyst handler
///
/// Validation failures never reach the provider. All outbound failures are
/// logged with their detail and collapsed into the generic upstream error so
/// provider internals don't leak to the caller.
pub async fn handler(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    Json(request): Json<AskRequest>,
) -> Result<impl IntoResponse, AppError> {
    let message = request.message()?;

    tracing::debug!(
        request_id = %request_id,
        message_length = message.len(),
        history_turns = request.history().len(),
        "Received ask request"
    );

    let messages = assemble_messages(
        &state.config().provider.system_prompt,
        request.history(),
        message,
    );

    let reply = state.client().complete(messages).await.map_err(|e| {
        tracing::error!(
            request_id = %request_id,
            error = %e,
            "Completion call failed"
        );
        AppError::Upstream
    })?;

    tracing::info!(
        request_id = %request_id,
        reply_length = reply.len(),
        "Request completed successfully"
    );

    Ok(Json(AskResponse::new(reply)))
}
