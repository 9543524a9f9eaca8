//! # pay-paypal
//!
//! PayPal Orders v2 strategy for paypal-orders-rs.
//!
//! - **PayPalTokenProvider** - OAuth2 client-credentials exchange, one fresh
//!   token per call
//! - **PayPalOrderClient** - create (intent `CAPTURE`, USD) and capture orders
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use pay_paypal::PayPalOrderClient;
//! use pay_core::{OrderRequest, PaymentStrategy};
//!
//! let client = PayPalOrderClient::from_env()?;
//!
//! let created = client.create_order(&OrderRequest::new("10.00")).await?;
//! // created.status == 201, created.body["id"] holds the order id
//!
//! let captured = client.capture_order("5O190127TN364715T").await?;
//! // captured.status is whatever PayPal answered, 422 included
//! ```

pub mod config;
pub mod orders;
pub mod token;

// Re-exports
pub use config::{Credentials, PayPalConfig, DEFAULT_API_BASE_URL};
pub use orders::{PayPalOrderClient, CURRENCY_CODE};
pub use token::PayPalTokenProvider;
