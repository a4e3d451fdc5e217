//! API route configuration

use axum::{
    routing::{get, post},
    Router,
};
use serde_json::json;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;

use crate::api::identify::{handlers as identify_handlers, IdentifyState};
use crate::metrics::METRICS;

/// Maximum inbound body size (data URLs for large photos get big)
const MAX_BODY_BYTES: usize = 10 * 1024 * 1024;

/// Build the application router
pub fn build_router(identify_state: IdentifyState) -> Router {
    Router::new()
        .route(
            "/api/identify-part",
            post(identify_handlers::identify_part)
                .fallback(identify_handlers::method_not_allowed),
        )
        .route("/health", get(health))
        .route("/metrics", get(metrics))
        .layer(RequestBodyLimitLayer::new(MAX_BODY_BYTES))
        .layer(TraceLayer::new_for_http())
        .with_state(identify_state)
}

/// Liveness probe
///
/// GET /health
async fn health() -> axum::Json<serde_json::Value> {
    axum::Json(json!({ "status": "ok" }))
}

/// Prometheus exposition
///
/// GET /metrics
async fn metrics() -> String {
    METRICS.gather()
}
