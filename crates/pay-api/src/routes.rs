//! # Routes
//!
//! Axum router configuration for the order API.

use crate::handlers;
use crate::state::AppState;
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

/// Create the main application router
///
/// Routes:
/// - POST /api/orders - Create an order
/// - POST /api/orders/{order_id}/capture - Capture an order
/// - GET  /health - Health check
pub fn create_router(state: AppState) -> Router {
    // The checkout page may be served from any origin
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Health check at root
        .route("/health", get(handlers::health))
        .route("/", get(handlers::health))
        // Orders
        .route("/api/orders", post(handlers::create_order))
        .route("/api/orders/{order_id}/capture", post(handlers::capture_order))
        // Middleware
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        // State
        .with_state(state)
}
