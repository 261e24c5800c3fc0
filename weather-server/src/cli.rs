use clap::Parser;
use std::path::PathBuf;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "weather-server", version, about = "Weather data HTTP service")]
pub struct Cli {
    /// Port to listen on; overrides the configured port.
    #[arg(long)]
    pub port: Option<u16>,

    /// Path to a TOML config file; defaults to the platform config directory.
    #[arg(long)]
    pub config: Option<PathBuf>,
}
