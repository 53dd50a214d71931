mod api;
mod config;
mod errors;
mod logging;
mod models;
mod recommendations;
mod scoring;

use anyhow::Context;
use api::{ApiServer, AppState};
use config::Config;
use logging::Logger;
use recommendations::StaticRecommendations;
use scoring::StaticFraudScorer;
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env()?;

    // held for the life of the process; dropping it flushes both sinks
    let logger = Logger::new(&config.logging)
        .with_context(|| format!("failed to open log directory {}", config.logging.dir.display()))?;
    logger.install()?;
    logging::install_panic_hook();

    tracing::info!("Starting Cryptix API server...");

    let state = AppState::new(
        Arc::new(StaticFraudScorer::default()),
        Arc::new(StaticRecommendations::default()),
    );

    let result = ApiServer::new(state).run(&config).await;
    if let Err(e) = &result {
        tracing::error!("Server error: {:#}", e);
    }
    drop(logger);
    result
}
