//! Commodity price forecast API server binary

use anyhow::Context;
use clap::Parser;
use price_api::{router, AppState, Config};
use price_store::PriceStore;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    let log_level = match config.log_level.as_str() {
        "trace" => tracing::Level::TRACE,
        "debug" => tracing::Level::DEBUG,
        "info" => tracing::Level::INFO,
        "warn" => tracing::Level::WARN,
        "error" => tracing::Level::ERROR,
        _ => tracing::Level::INFO,
    };
    tracing_subscriber::fmt().with_max_level(log_level).init();

    // The store either loads completely or the process refuses to serve.
    let store = PriceStore::from_csv(&config.data)
        .with_context(|| format!("failed to load price table from {}", config.data.display()))?;
    info!(
        commodities = store.commodities().len(),
        months = store.periods(),
        "price store loaded"
    );

    let state = AppState::new(store, config.fit_timeout());
    let app = router(state);

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    info!("listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
