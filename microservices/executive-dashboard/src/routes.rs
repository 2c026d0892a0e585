//! Router configuration for the Executive Dashboard API

use axum::{
    routing::{get, post},
    Router,
};

use crate::handlers;
use crate::AppState;

/// Create the main router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health & Metrics
        .route("/health", get(handlers::health))
        .route("/ready", get(handlers::ready))
        .route("/stats", get(handlers::stats))
        // Snapshots
        .route("/api/v1/snapshot", get(handlers::snapshot))
        .route("/api/v1/snapshot/preview", get(handlers::preview))
        .route("/api/v1/refresh", post(handlers::refresh))
        // Individual generators
        .route("/api/v1/live", get(handlers::live))
        .route("/api/v1/kpis", get(handlers::kpis))
        .with_state(state)
}
