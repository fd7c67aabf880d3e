//! Route Configuration
//!
//! Configures all HTTP routes for the API.

use axum::{
    middleware,
    response::IntoResponse,
    routing::{delete, get, post, put},
    Router,
};

use super::handlers;
use crate::infrastructure::metrics;
use crate::startup::AppState;

/// Create the main API router
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .nest("/api/v1", api_routes())
        // Health check endpoints
        .route("/health", get(handlers::health::health_check))
        .route("/health/live", get(handlers::health::liveness))
        .route("/health/ready", get(handlers::health::readiness))
        // Prometheus metrics endpoint
        .route("/metrics", get(metrics_handler))
        .layer(middleware::from_fn(metrics::track_metrics))
        .with_state(state)
}

/// Prometheus metrics endpoint handler
async fn metrics_handler() -> impl IntoResponse {
    let metrics = metrics::gather_metrics();
    (
        [(
            axum::http::header::CONTENT_TYPE,
            "text/plain; version=0.0.4; charset=utf-8",
        )],
        metrics,
    )
}

/// API v1 routes
fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/clients", client_routes())
        .nest("/accounts", account_routes())
        .nest("/movements", movement_routes())
}

/// Client routes
fn client_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(handlers::client::create_client))
        .route("/", get(handlers::client::list_clients))
        .route("/{client_id}", get(handlers::client::get_client))
        .route("/{client_id}", put(handlers::client::update_client))
        .route("/{client_id}", delete(handlers::client::delete_client))
        .route(
            "/{client_id}/accounts",
            get(handlers::client::get_client_accounts),
        )
}

/// Account routes
fn account_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(handlers::account::create_account))
        .route("/{account_id}", get(handlers::account::get_account))
        .route("/{account_id}", put(handlers::account::update_account))
        .route("/{account_id}", delete(handlers::account::delete_account))
        .route(
            "/{account_id}/movements",
            get(handlers::account::get_account_movements),
        )
}

/// Movement routes
fn movement_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(handlers::movement::create_movement))
        .route("/{movement_id}", get(handlers::movement::get_movement))
        .route("/{movement_id}", put(handlers::movement::update_movement))
        .route("/{movement_id}", delete(handlers::movement::delete_movement))
}
