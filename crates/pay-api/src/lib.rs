//! # pay-api
//!
//! HTTP API layer for paypal-orders-rs.
//!
//! This crate provides:
//! - Axum-based HTTP server
//! - REST endpoints that relay order creation and capture to the processor
//!
//! ## Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | GET | `/health` | Health check |
//! | POST | `/api/orders` | Create order |
//! | POST | `/api/orders/{order_id}/capture` | Capture order |

pub mod handlers;
pub mod routes;
pub mod state;

pub use routes::create_router;
pub use state::{AppConfig, AppState};
