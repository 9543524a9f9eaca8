//! # pay-core
//!
//! Core types and traits for the paypal-orders payment broker.
//!
//! This crate provides:
//! - `PaymentStrategy` trait implemented by processor clients
//! - `OrderRequest` and `OrderResult` for the order flow
//! - `PaymentError` for typed error handling
//!
//! ## Example
//!
//! ```rust,ignore
//! use pay_core::{OrderRequest, PaymentStrategy};
//!
//! let request = OrderRequest::new("10.00");
//! let created = strategy.create_order(&request).await?;
//!
//! let order_id = created.body["id"].as_str().unwrap_or_default();
//! let captured = strategy.capture_order(order_id).await?;
//! ```

pub mod error;
pub mod order;
pub mod strategy;

// Re-exports for convenience
pub use error::{PaymentError, PaymentResult};
pub use order::{OrderRequest, OrderResult, Product};
pub use strategy::{BoxedPaymentStrategy, PaymentStrategy};
