//! Configuration management for Analyst Relay
//!
//! Parses TOML configuration files and provides typed access to settings.
//! Every field has a default matching the original deployment, so an empty
//! (or absent) config file yields a working service. The Cerebras API key is
//! deliberately not a config field - it is read from the `CEREBRAS_API_KEY`
//! environment variable at process start and never written to disk.

use crate::error::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default system prompt defining the assistant persona.
///
/// Prepended as the first turn of every outbound request.
pub const DEFAULT_SYSTEM_PROMPT: &str = "You are 'Instant Analyst', an AI assistant powered by \
    the Cerebras high-speed hardware. Your goal is to provide accurate, concise, and incredibly \
    fast answers. Get straight to the point. Do not use conversational fluff.";

/// Root configuration structure
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub provider: ProviderConfig,
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn from_file(path: impl AsRef<Path>) -> AppResult<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|e| {
            AppError::Config(format!("failed to read {}: {}", path.display(), e))
        })?;
        toml::from_str(&contents)
            .map_err(|e| AppError::Config(format!("failed to parse {}: {}", path.display(), e)))
    }
}

/// Server configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3000
}

/// Completion provider configuration
///
/// `base_url` is the API root; the client appends `/chat/completions`.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ProviderConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_model")]
    pub model: String,
    #[serde(default = "default_system_prompt")]
    pub system_prompt: String,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            model: default_model(),
            system_prompt: default_system_prompt(),
        }
    }
}

fn default_base_url() -> String {
    "https://cloud.cerebras.ai/v1".to_string()
}

fn default_model() -> String {
    "llama-4-scout-17b-16e-instruct".to_string()
}

fn default_system_prompt() -> String {
    DEFAULT_SYSTEM_PROMPT.to_string()
}

/// Observability configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ObservabilityConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_toml_yields_defaults() {
        let config: Config = toml::from_str("").expect("empty config should parse");
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.provider.base_url, "https://cloud.cerebras.ai/v1");
        assert_eq!(config.provider.model, "llama-4-scout-17b-16e-instruct");
        assert_eq!(config.provider.system_prompt, DEFAULT_SYSTEM_PROMPT);
        assert_eq!(config.observability.log_level, "info");
    }

    #[test]
    fn test_parses_full_config() {
        let toml = r#"
[server]
host = "127.0.0.1"
port = 8080

[provider]
base_url = "http://localhost:9000/v1"
model = "test-model"
system_prompt = "You are a test assistant."

[observability]
log_level = "debug"
"#;
        let config: Config = toml::from_str(toml).expect("should parse config");
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.provider.base_url, "http://localhost:9000/v1");
        assert_eq!(config.provider.model, "test-model");
        assert_eq!(config.provider.system_prompt, "You are a test assistant.");
        assert_eq!(config.observability.log_level, "debug");
    }

    #[test]
    fn test_partial_section_keeps_other_defaults() {
        let toml = r#"
[provider]
model = "llama-3.3-70b"
"#;
        let config: Config = toml::from_str(toml).expect("should parse config");
        assert_eq!(config.provider.model, "llama-3.3-70b");
        assert_eq!(config.provider.base_url, "https://cloud.cerebras.ai/v1");
        assert_eq!(config.server.port, 3000);
    }

    #[test]
    fn test_from_file_missing_path_errors() {
        let result = Config::from_file("/nonexistent/analyst-relay.toml");
        assert!(result.is_err());
        let msg = result.unwrap_err().to_string();
        assert!(
            msg.contains("failed to read"),
            "error should mention the read failure, got: {}",
            msg
        );
    }

    #[test]
    fn test_from_file_invalid_toml_errors() {
        let dir = tempfile::tempdir().expect("should create temp dir");
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "not = [valid").expect("should write file");

        let result = Config::from_file(&path);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("failed to parse"));
    }
}
