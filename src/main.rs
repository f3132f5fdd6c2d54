//! Gloat4 - Connect 4 opponent backend
//!
//! Binds the HTTP server and wires the configured LLM client into it.

#![warn(missing_docs)]

mod board;
mod cli;
mod config;
mod llm_client;
mod parser;
mod prompt;
mod server;

use anyhow::Result;
use clap::Parser;
use cli::Cli;
use config::ServerConfig;
use llm_client::LlmClient;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let config = if cli.config.exists() {
        ServerConfig::from_file(&cli.config)?
    } else {
        info!(
            "Config file not found at {}, using defaults",
            cli.config.display()
        );
        ServerConfig::default()
    };

    info!(
        provider = ?config.llm_provider(),
        model = %config.llm_model(),
        "Starting gloat4 move server"
    );

    let llm_config = config.create_llm_config()?;
    let client = LlmClient::new(llm_config);
    let app = server::router(Arc::new(client));

    let listener = tokio::net::TcpListener::bind((cli.host.as_str(), cli.port)).await?;
    info!("Server ready at http://{}:{}/api/llm-move", cli.host, cli.port);

    axum::serve(listener, app).await?;

    Ok(())
}
