//! Binary crate for the weather data HTTP service.
//!
//! This crate focuses on:
//! - Parsing CLI arguments and loading configuration
//! - Wiring the provider clients into the router
//! - Binding the listener and running the server

use anyhow::Context;
use clap::Parser;
use std::net::Ipv4Addr;
use tracing::info;
use tracing_subscriber::EnvFilter;
use weather_core::Config;
use weather_server::{
    cli::Cli,
    routes::{self, AppState},
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    let port = cli.port.unwrap_or(config.port);

    let app = routes::router(AppState::from_config(&config));

    let listener = tokio::net::TcpListener::bind((Ipv4Addr::UNSPECIFIED, port))
        .await
        .with_context(|| format!("Failed to bind port {port}"))?;

    info!("Weather API server running on port {port}");
    info!("Health endpoint: http://localhost:{port}/health");
    info!("Weather data endpoint: http://localhost:{port}/retrieve-data?place=<city-name>");

    axum::serve(listener, app).await.context("HTTP server terminated")?;

    Ok(())
}
