//! CLI configuration for the API server

use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;

/// Commodity price forecast API server
#[derive(Debug, Clone, Parser)]
#[command(name = "price_api")]
#[command(about = "HTTP API serving historical and forecasted commodity prices")]
pub struct Config {
    /// Server host
    #[arg(long, default_value = "0.0.0.0")]
    pub host: String,

    /// Server port
    #[arg(short, long, default_value = "8080")]
    pub port: u16,

    /// Path to the wide-format monthly price table
    #[arg(short, long, default_value = "monthly_data.csv")]
    pub data: PathBuf,

    /// Upper bound on a single model fit, in seconds
    #[arg(long, default_value = "30")]
    pub fit_timeout_secs: u64,

    /// Logging level
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

impl Config {
    pub fn fit_timeout(&self) -> Duration {
        Duration::from_secs(self.fit_timeout_secs)
    }
}
