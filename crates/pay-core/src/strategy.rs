//! # Payment Strategy Trait
//!
//! Seam between the HTTP layer and a payment processor.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    PaymentStrategy (trait)                  │
//! │  ├── create_order()                                         │
//! │  ├── capture_order()                                        │
//! │  └── provider_name()                                        │
//! └─────────────────────────────────────────────────────────────┘
//!                            ▲
//!                    ┌───────┴───────┐
//!                    │ PayPalOrder   │
//!                    │    Client     │
//!                    └───────────────┘
//! ```

use crate::error::PaymentResult;
use crate::order::{OrderRequest, OrderResult};
use async_trait::async_trait;
use std::sync::Arc;

/// Order operations offered by a payment processor.
#[async_trait]
pub trait PaymentStrategy: Send + Sync {
    /// Create an order for immediate capture.
    ///
    /// Returns the processor's body and status on a 2xx response. Any other
    /// status is an error.
    async fn create_order(&self, request: &OrderRequest) -> PaymentResult<OrderResult>;

    /// Capture a previously created order.
    ///
    /// The processor's status and body are returned whatever the status is;
    /// only transport and parse failures are errors.
    async fn capture_order(&self, order_id: &str) -> PaymentResult<OrderResult>;

    /// Get the provider name (for logging).
    fn provider_name(&self) -> &'static str;
}

/// Type alias for a boxed payment strategy (dynamic dispatch)
pub type BoxedPaymentStrategy = Arc<dyn PaymentStrategy>;
