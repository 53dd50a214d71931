use super::handlers;
use super::AppState;
use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use axum::Router;
use tower::ServiceBuilder;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{Any, CorsLayer};

/// Builds and returns the full Axum router with all routes and shared state.
pub fn build(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(handlers::index))
        .route("/health", get(handlers::health))
        .route("/log", get(handlers::log_request).post(handlers::log_request))
        .route("/fraud", post(handlers::analyze_fraud))
        .route("/recommendations", get(handlers::get_recommendations))
        .fallback(handlers::not_found)
        .method_not_allowed_fallback(handlers::method_not_allowed)
        .with_state(state)
        .layer(
            ServiceBuilder::new()
                .layer(cors)
                .layer(CatchPanicLayer::custom(handlers::panic_response))
                .layer(DefaultBodyLimit::max(handlers::MAX_BODY_BYTES)),
        )
}
