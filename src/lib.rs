//! Analyst Relay - HTTP relay for the Instant Analyst assistant
//!
//! This library exposes a single chat endpoint that forwards a message plus
//! conversation history to the Cerebras chat-completions API, injecting a
//! fixed system prompt and relaying the first choice back to the caller.

pub mod cli;
pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod provider;
pub mod telemetry;
