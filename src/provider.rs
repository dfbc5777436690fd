//! Cerebras chat-completion wire types and outbound client
//!
//! These types follow the OpenAI-style chat completions shape the Cerebras
//! API accepts: `{model, messages}` out, `{choices: [{message: {content}}]}`
//! back. Only the first choice's content is consumed.

use crate::config::ProviderConfig;
use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

/// Message role in the conversation
///
/// Known roles map to the usual lowercase strings. Anything else arriving in
/// caller-supplied history is carried in `Other` and forwarded to the provider
/// verbatim - the relay does not police roles it doesn't recognize.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Role {
    System,
    User,
    Assistant,
    /// Pass-through for roles this relay doesn't know about
    Other(String),
}

impl Role {
    /// Get the wire representation of this role
    pub fn as_str(&self) -> &str {
        match self {
            Role::System => "system",
            Role::User => "user",
            Role::Assistant => "assistant",
            Role::Other(s) => s,
        }
    }
}

impl<'de> Deserialize<'de> for Role {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(match s.as_str() {
            "system" => Role::System,
            "user" => Role::User,
            "assistant" => Role::Assistant,
            _ => Role::Other(s),
        })
    }
}

impl Serialize for Role {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

/// A single turn in the conversation
///
/// Immutable once constructed. History entries deserialized from the inbound
/// request are forwarded as-is, including empty content and unknown roles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatTurn {
    role: Role,
    content: String,
}

impl ChatTurn {
    /// Create a turn with an explicit role
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }

    /// Create a system turn
    pub fn system(content: impl Into<String>) -> Self {
        Self::new(Role::System, content)
    }

    /// Create a user turn
    pub fn user(content: impl Into<String>) -> Self {
        Self::new(Role::User, content)
    }

    /// Get the role
    pub fn role(&self) -> &Role {
        &self.role
    }

    /// Get the content
    pub fn content(&self) -> &str {
        &self.content
    }
}

/// Outbound request body for the completions endpoint
#[derive(Debug, Clone, Serialize)]
pub struct CompletionRequest {
    model: String,
    messages: Vec<ChatTurn>,
}

impl CompletionRequest {
    pub fn new(model: impl Into<String>, messages: Vec<ChatTurn>) -> Self {
        Self {
            model: model.into(),
            messages,
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn messages(&self) -> &[ChatTurn] {
        &self.messages
    }
}

/// Provider response body - only the fields this relay reads
#[derive(Debug, Deserialize)]
struct CompletionResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    content: String,
}

/// Failures of the outbound call
///
/// Carries the upstream detail for logging. The handler collapses all
/// variants into the generic `AppError::Upstream` before responding.
#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("provider returned {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("malformed provider response: {0}")]
    MalformedResponse(String),
}

/// Client for the Cerebras chat-completions API
///
/// Holds the shared `reqwest::Client`, the configured base URL and model, and
/// the optional bearer key. No timeout is configured beyond reqwest's
/// defaults, and `complete` issues exactly one request - retries are the
/// caller's decision (and this service makes none).
#[derive(Debug, Clone)]
pub struct CompletionClient {
    http: reqwest::Client,
    base_url: String,
    model: String,
    api_key: Option<String>,
}

impl CompletionClient {
    /// Create a client from provider configuration and the process-wide key
    ///
    /// A missing key does not fail construction: the request goes out without
    /// an Authorization header and the provider's rejection surfaces as an
    /// upstream failure, matching the original deployment's behavior.
    pub fn new(config: &ProviderConfig, api_key: Option<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            model: config.model.clone(),
            api_key,
        }
    }

    /// Get the configured model identifier
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Get the completions endpoint URL
    pub fn completions_url(&self) -> String {
        format!("{}/chat/completions", self.base_url)
    }

    /// Send one completion request and return the first choice's content
    pub async fn complete(&self, messages: Vec<ChatTurn>) -> Result<String, ProviderError> {
        let payload = CompletionRequest::new(&self.model, messages);

        let mut request = self.http.post(self.completions_url()).json(&payload);
        if let Some(key) = &self.api_key {
            request = request.bearer_auth(key);
        }

        let response = request.send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ProviderError::Status { status, body });
        }

        let completion: CompletionResponse = response
            .json()
            .await
            .map_err(|e| ProviderError::MalformedResponse(e.to_string()))?;

        let first = completion
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| ProviderError::MalformedResponse("empty choices array".to_string()))?;

        Ok(first.message.content)
    }
}
