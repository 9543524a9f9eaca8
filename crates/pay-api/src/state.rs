//! # Application State
//!
//! Shared state for the Axum application.
//! Holds the payment strategy and the server configuration; both are
//! read-only once the server starts.

use pay_core::BoxedPaymentStrategy;
use pay_paypal::{PayPalConfig, PayPalOrderClient};
use std::net::{AddrParseError, SocketAddr};
use std::sync::Arc;

/// Port used when `PORT` is unset or unparsable
pub const DEFAULT_PORT: u16 = 8888;

/// Application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Host to bind to
    pub host: String,
    /// Port to listen on
    pub port: u16,
    /// Environment (development, staging, production)
    pub environment: String,
}

impl AppConfig {
    /// Load from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            host: lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            port: lookup("PORT")
                .and_then(|p| p.parse().ok())
                .unwrap_or(DEFAULT_PORT),
            environment: lookup("ENVIRONMENT").unwrap_or_else(|| "development".to_string()),
        }
    }

    /// Get the socket address to bind to
    pub fn socket_addr(&self) -> Result<SocketAddr, AddrParseError> {
        format!("{}:{}", self.host, self.port).parse()
    }

    /// Check if running in production
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::from_env()
    }
}

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Order operations against the processor
    pub strategy: BoxedPaymentStrategy,
    /// Application config
    pub config: AppConfig,
}

impl AppState {
    /// Create a new AppState backed by PayPal
    pub fn new(config: AppConfig, paypal: PayPalConfig) -> anyhow::Result<Self> {
        let client = PayPalOrderClient::new(paypal)
            .map_err(|e| anyhow::anyhow!("Failed to initialize PayPal: {}", e))?;

        Ok(Self::with_strategy(config, Arc::new(client)))
    }

    /// Create with an explicit strategy (tests, alternative processors)
    pub fn with_strategy(config: AppConfig, strategy: BoxedPaymentStrategy) -> Self {
        Self { strategy, config }
    }

    /// Name of the active payment provider
    pub fn provider(&self) -> &'static str {
        self.strategy.provider_name()
    }
}
