//! Othello Table - Unified CLI
//!
//! HTTP game server for chat-hosted Othello.

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use othello_table::{GameController, TableConfig, build_router};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Command::Serve { config, host, port } => {
            let config = TableConfig::load(&config)?.with_overrides(host, port);
            init_tracing(config.log_filter());
            run_http_server(config).await
        }
    }
}

/// Installs the fmt subscriber, preferring `RUST_LOG` over the configured filter.
fn init_tracing(fallback: &str) {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback)),
        )
        .init();
}

/// Run the HTTP game server
#[instrument(skip_all, fields(host = %config.host(), port = config.port()))]
async fn run_http_server(config: TableConfig) -> Result<()> {
    info!("Starting Othello Table server");

    let app = build_router(GameController::new());

    let listener = tokio::net::TcpListener::bind((config.host().as_str(), *config.port())).await?;
    info!("Server ready at http://{}:{}/", config.host(), config.port());

    axum::serve(listener, app).await?;

    info!("Server stopped");
    Ok(())
}
