pub mod docs;
pub mod handlers;
pub mod models;
pub mod router;


use crate::config::Config;
use crate::recommendations::RecommendationEngine;
use crate::scoring::FraudScorer;
use std::net::SocketAddr;
use std::sync::Arc;

/// Capabilities the handlers delegate to. Swapping an implementation
/// never touches the routing code.
#[derive(Clone)]
pub struct AppState {
    pub fraud: Arc<dyn FraudScorer>,
    pub recommender: Arc<dyn RecommendationEngine>,
}

impl AppState {
    pub fn new(fraud: Arc<dyn FraudScorer>, recommender: Arc<dyn RecommendationEngine>) -> Self {
        Self { fraud, recommender }
    }
}

pub struct ApiServer {
    state: AppState,
}

impl ApiServer {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }

    /// Binds the server to the configured address and serves until Ctrl+C
    /// or SIGTERM.
    pub async fn run(self, config: &Config) -> anyhow::Result<()> {
        let app = router::build(self.state);
        let addr = config.bind_addr();

        let listener = tokio::net::TcpListener::bind(addr).await?;
        tracing::info!("API server listening on http://{}", addr);

        axum::serve(
            listener,
            app.into_make_service_with_connect_info::<SocketAddr>(),
        )
        .with_graceful_shutdown(shutdown_signal())
        .await?;

        tracing::info!("Shutting down...");
        Ok(())
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
