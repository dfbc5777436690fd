//! Command-line interface for Analyst Relay
//!
//! Provides argument parsing and subcommand handling for the binary.

use clap::{Parser, Subcommand};

/// HTTP relay for the Instant Analyst assistant
#[derive(Parser)]
#[command(name = "analyst-relay")]
#[command(version)]
#[command(about = "HTTP relay that forwards chat turns to the Cerebras completion API")]
#[command(
    long_about = "Analyst Relay exposes POST /api/askAnalyst, prepends the Instant Analyst \
    system prompt to the caller's message and history, and relays the Cerebras API's reply."
)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "config.toml", global = true)]
    pub config: String,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Generate a template configuration file
    Config {
        /// Output file path (prints to stdout if not specified)
        #[arg(short, long)]
        output: Option<String>,
    },
}

/// Generate template configuration content
///
/// The API key is intentionally absent: set CEREBRAS_API_KEY in the
/// environment instead of writing it to disk.
pub fn generate_config_template() -> &'static str {
    r#"# Analyst Relay Configuration
# ============================
#
# All values below are the defaults; omit any section to keep them.
# The Cerebras API key is NOT configured here - export CEREBRAS_API_KEY
# in the service environment.

[server]
# IP address to bind to (0.0.0.0 for all interfaces, 127.0.0.1 for localhost only)
host = "0.0.0.0"

# Port to listen on
port = 3000

[provider]
# Root of the completion API; /chat/completions is appended
base_url = "https://cloud.cerebras.ai/v1"

# Model identifier sent with every request
model = "llama-4-scout-17b-16e-instruct"

# System prompt prepended as the first turn of every request
system_prompt = "You are 'Instant Analyst', an AI assistant powered by the Cerebras high-speed hardware. Your goal is to provide accurate, concise, and incredibly fast answers. Get straight to the point. Do not use conversational fluff."

[observability]
# Log level: trace, debug, info, warn, error (RUST_LOG overrides this)
log_level = "info"
"#
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_parses() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_default_config_path() {
        let cli = Cli::parse_from(["analyst-relay"]);
        assert_eq!(cli.config, "config.toml");
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_config_subcommand_with_output() {
        let cli = Cli::parse_from(["analyst-relay", "config", "--output", "out.toml"]);
        match cli.command {
            Some(Command::Config { output }) => assert_eq!(output.as_deref(), Some("out.toml")),
            None => panic!("expected config subcommand"),
        }
    }
}
