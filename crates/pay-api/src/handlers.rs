//! # Request Handlers
//!
//! Axum request handlers for the order API.
//! Processor responses are relayed verbatim; every local failure becomes a
//! fixed 500 with a generic message, and the detail only reaches the log.

use crate::state::AppState;
use axum::{
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use pay_core::{OrderRequest, OrderResult, PaymentError};
use serde::Serialize;
use serde_json::Value;
use tracing::{error, info, instrument, warn};

pub const CREATE_ORDER_FAILED: &str = "Failed to create order.";
pub const CAPTURE_ORDER_FAILED: &str = "Failed to capture order.";

/// Error response
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

type HandlerResult = Result<(StatusCode, Json<Value>), (StatusCode, Json<ErrorResponse>)>;

fn relay(result: OrderResult) -> (StatusCode, Json<Value>) {
    let status = StatusCode::from_u16(result.status).unwrap_or(StatusCode::BAD_GATEWAY);
    (status, Json(result.body))
}

fn internal_error(message: &str) -> (StatusCode, Json<ErrorResponse>) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse::new(message)),
    )
}

fn log_failure(action: &str, err: &PaymentError) {
    error!(
        kind = err.kind(),
        upstream_status = ?err.upstream_status(),
        "Failed to {}: {}",
        action,
        err
    );
}

// =============================================================================
// Handlers
// =============================================================================

/// Health check endpoint
pub async fn health(State(state): State<AppState>) -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "service": "paypal-orders",
        "provider": state.provider(),
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// Create an order: `POST /api/orders` with `{ "product": { "cost": "10.00" } }`
///
/// The body is parsed here rather than by the `Json` extractor so that a
/// malformed payload takes the same 500 path as a processor failure.
#[instrument(skip(state, body), fields(provider = state.provider()))]
pub async fn create_order(State(state): State<AppState>, body: Bytes) -> HandlerResult {
    let request = match OrderRequest::from_slice(&body) {
        Ok(request) => request,
        Err(e) => {
            warn!("Request body: {}", String::from_utf8_lossy(&body));
            log_failure("create order", &e);
            return Err(internal_error(CREATE_ORDER_FAILED));
        }
    };

    info!("Creating order: cost={}", request.cost());

    match state.strategy.create_order(&request).await {
        Ok(result) => Ok(relay(result)),
        Err(e) => {
            warn!("Request body: {}", String::from_utf8_lossy(&body));
            log_failure("create order", &e);
            Err(internal_error(CREATE_ORDER_FAILED))
        }
    }
}

/// Capture an order: `POST /api/orders/{order_id}/capture`
///
/// A processor-side rejection (e.g. 422 DECLINED) is relayed as-is; only
/// transport and parse failures produce the generic 500.
#[instrument(skip(state), fields(provider = state.provider()))]
pub async fn capture_order(
    State(state): State<AppState>,
    Path(order_id): Path<String>,
) -> HandlerResult {
    info!("Capturing order: {}", order_id);

    state
        .strategy
        .capture_order(&order_id)
        .await
        .map(relay)
        .map_err(|e| {
            log_failure("capture order", &e);
            internal_error(CAPTURE_ORDER_FAILED)
        })
}
