//! Analyst Relay HTTP server
//!
//! Starts an Axum web server exposing the askAnalyst relay endpoint.

use analyst_relay::cli::{Cli, Command, generate_config_template};
use analyst_relay::config::Config;
use analyst_relay::handlers::{self, AppState};
use analyst_relay::telemetry;
use clap::Parser;
use std::net::SocketAddr;
use std::path::Path;
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    if let Some(Command::Config { output }) = cli.command {
        let template = generate_config_template();
        match output {
            Some(path) => {
                std::fs::write(&path, template)?;
                println!("Wrote configuration template to {}", path);
            }
            None => print!("{}", template),
        }
        return Ok(());
    }

    // Fall back to built-in defaults when no config file is present; the
    // defaults describe the production Cerebras deployment.
    let config = if Path::new(&cli.config).exists() {
        Config::from_file(&cli.config)?
    } else {
        Config::default()
    };

    telemetry::init(&config.observability.log_level);

    if !Path::new(&cli.config).exists() {
        tracing::info!(path = %cli.config, "No config file found, using defaults");
    }

    // The secret is read once here and is immutable afterwards. A missing key
    // is not fatal at startup: requests will fail at the outbound call when
    // the provider rejects them.
    let api_key = std::env::var("CEREBRAS_API_KEY").ok();
    if api_key.is_none() {
        tracing::warn!("CEREBRAS_API_KEY is not set; every ask request will fail upstream");
    }

    tracing::info!(
        "Starting Analyst Relay on {}:{}",
        config.server.host,
        config.server.port
    );

    let addr = SocketAddr::from((
        config
            .server
            .host
            .parse::<std::net::IpAddr>()
            .unwrap_or_else(|_| std::net::IpAddr::from([0, 0, 0, 0])),
        config.server.port,
    ));

    let state = AppState::new(Arc::new(config), api_key);
    let app = handlers::app(state);

    tracing::info!("Listening on {}", addr);
    tracing::info!("Ask endpoint available at http://{}/api/askAnalyst", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
