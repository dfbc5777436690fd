//! Tests for the `config` template subcommand output

use analyst_relay::cli::generate_config_template;
use analyst_relay::config::{Config, DEFAULT_SYSTEM_PROMPT};

#[test]
fn test_template_parses_as_valid_config() {
    let template = generate_config_template();
    let config: Config = toml::from_str(template).expect("template should parse as Config");

    // The template documents the defaults; parsing it must reproduce them
    assert_eq!(config.server.host, "0.0.0.0");
    assert_eq!(config.server.port, 3000);
    assert_eq!(config.provider.base_url, "https://cloud.cerebras.ai/v1");
    assert_eq!(config.provider.model, "llama-4-scout-17b-16e-instruct");
    assert_eq!(config.provider.system_prompt, DEFAULT_SYSTEM_PROMPT);
    assert_eq!(config.observability.log_level, "info");
}

#[test]
fn test_template_never_mentions_a_key_value() {
    // The secret lives in the environment, not the config file
    let template = generate_config_template();
    assert!(!template.contains("api_key ="));
    assert!(template.contains("CEREBRAS_API_KEY"));
}
