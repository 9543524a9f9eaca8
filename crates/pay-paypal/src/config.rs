//! # PayPal Configuration
//!
//! Configuration management for the PayPal integration.
//! Secrets are loaded from environment variables once, at startup.

use pay_core::{PaymentError, PaymentResult};
use reqwest::{Client, Url};
use std::fmt;
use std::time::Duration;

/// Sandbox REST endpoint; switch to `https://api-m.paypal.com` for live.
pub const DEFAULT_API_BASE_URL: &str = "https://api-m.sandbox.paypal.com";

/// Deadline applied to every outbound call unless overridden
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// OAuth2 client credentials
#[derive(Clone, Default)]
pub struct Credentials {
    pub client_id: String,
    pub client_secret: String,
}

impl Credentials {
    pub fn new(client_id: impl Into<String>, client_secret: impl Into<String>) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
        }
    }

    /// Both halves present
    pub fn is_complete(&self) -> bool {
        !self.client_id.is_empty() && !self.client_secret.is_empty()
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("client_id", &self.client_id)
            .field("client_secret", &"<redacted>")
            .finish()
    }
}

/// PayPal REST API configuration
#[derive(Debug, Clone)]
pub struct PayPalConfig {
    pub credentials: Credentials,

    /// API base URL (sandbox by default, overridable for testing/mocking)
    pub api_base_url: String,

    /// Per-call deadline for token, create and capture requests
    pub request_timeout: Duration,
}

impl PayPalConfig {
    /// Load configuration from environment variables.
    ///
    /// Recognized env vars:
    /// - `PAYPAL_CLIENT_ID`
    /// - `PAYPAL_CLIENT_SECRET`
    /// - `PAYPAL_API_BASE_URL` (optional)
    /// - `PAYPAL_REQUEST_TIMEOUT_SECS` (optional)
    ///
    /// Missing credentials do not fail here. Every token request reports
    /// them instead, so the server still starts. A `.env` file, if any, is
    /// loaded by the binary before this runs.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup (env, test map)
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let credentials = Credentials::new(
            lookup("PAYPAL_CLIENT_ID").unwrap_or_default(),
            lookup("PAYPAL_CLIENT_SECRET").unwrap_or_default(),
        );

        let api_base_url = lookup("PAYPAL_API_BASE_URL")
            .filter(|url| !url.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string());

        let timeout_secs = lookup("PAYPAL_REQUEST_TIMEOUT_SECS")
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_REQUEST_TIMEOUT_SECS);

        Self {
            credentials,
            api_base_url: api_base_url.trim_end_matches('/').to_string(),
            request_timeout: Duration::from_secs(timeout_secs),
        }
    }

    /// Create config with explicit values (for testing)
    pub fn new(client_id: impl Into<String>, client_secret: impl Into<String>) -> Self {
        Self {
            credentials: Credentials::new(client_id, client_secret),
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
        }
    }

    /// Check if pointed at the sandbox
    pub fn is_sandbox(&self) -> bool {
        self.api_base_url.contains("sandbox")
    }

    pub fn token_url(&self) -> String {
        format!("{}/v1/oauth2/token", self.api_base_url)
    }

    pub fn orders_url(&self) -> String {
        format!("{}/v2/checkout/orders", self.api_base_url)
    }

    /// Capture endpoint for one order.
    ///
    /// The id is pushed as a single percent-encoded path segment, so `/`, `?`
    /// and `#` inside it cannot reach another endpoint.
    pub fn capture_url(&self, order_id: &str) -> PaymentResult<Url> {
        if matches!(order_id, "" | "." | "..") {
            return Err(PaymentError::InvalidRequest(format!(
                "Invalid order id: {:?}",
                order_id
            )));
        }

        let mut url = Url::parse(&self.orders_url()).map_err(|e| {
            PaymentError::Configuration(format!("Invalid PAYPAL_API_BASE_URL: {}", e))
        })?;
        url.path_segments_mut()
            .map_err(|_| {
                PaymentError::Configuration("PAYPAL_API_BASE_URL cannot carry a path".to_string())
            })?
            .push(order_id)
            .push("capture");

        Ok(url)
    }

    /// HTTP client shared by the token provider and the order client
    pub fn build_http_client(&self) -> PaymentResult<Client> {
        Client::builder()
            .timeout(self.request_timeout)
            .build()
            .map_err(|e| PaymentError::Configuration(format!("Failed to create HTTP client: {}", e)))
    }

    /// Builder: set custom API base URL (for testing)
    pub fn with_api_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    /// Builder: set the per-call deadline
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }
}
