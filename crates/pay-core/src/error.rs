//! # Payment Error Types
//!
//! Typed error handling for the paypal-orders payment broker.
//! All processor operations return `Result<T, PaymentError>`.

use thiserror::Error;

/// Core error type for all payment operations
#[derive(Debug, Error)]
pub enum PaymentError {
    /// Client id or secret is empty; raised before any network call
    #[error("Missing API credentials: PAYPAL_CLIENT_ID and PAYPAL_CLIENT_SECRET must be set")]
    MissingCredentials,

    /// The processor rejected the client-credentials exchange
    #[error("Failed to generate access token (HTTP {status}): {description}")]
    AuthenticationFailed { status: u16, description: String },

    /// Network/HTTP error reaching the processor (DNS, connect, timeout)
    #[error("Transport error: {0}")]
    Transport(String),

    /// The processor answered order creation with a non-2xx status
    #[error("Request failed with status {status}: {body}")]
    OrderCreateFailed { status: u16, body: String },

    /// Inbound request payload could not be understood
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Processor body was not the JSON we expected
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Configuration errors (unbuildable HTTP client, bad base URL)
    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl PaymentError {
    /// Short, stable label used as a structured log field
    pub fn kind(&self) -> &'static str {
        match self {
            PaymentError::MissingCredentials => "missing_credentials",
            PaymentError::AuthenticationFailed { .. } => "authentication_failed",
            PaymentError::Transport(_) => "transport",
            PaymentError::OrderCreateFailed { .. } => "order_create_failed",
            PaymentError::InvalidRequest(_) => "invalid_request",
            PaymentError::Serialization(_) => "serialization",
            PaymentError::Configuration(_) => "configuration",
        }
    }

    /// HTTP status reported by the processor, when the error came from one
    pub fn upstream_status(&self) -> Option<u16> {
        match self {
            PaymentError::AuthenticationFailed { status, .. }
            | PaymentError::OrderCreateFailed { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Result type alias for payment operations
pub type PaymentResult<T> = Result<T, PaymentError>;
