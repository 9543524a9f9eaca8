//! # PayPal OAuth2 Token Provider
//!
//! Client-credentials exchange against `/v1/oauth2/token`.
//! Tokens are never cached: every call performs a fresh exchange.

use crate::config::{Credentials, PayPalConfig};
use pay_core::{PaymentError, PaymentResult};
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use tracing::{debug, error, instrument};

/// Fetches bearer tokens for authenticated PayPal calls
#[derive(Debug, Clone)]
pub struct PayPalTokenProvider {
    credentials: Credentials,
    token_url: String,
    client: Client,
}

impl PayPalTokenProvider {
    pub fn new(config: &PayPalConfig, client: Client) -> Self {
        Self {
            credentials: config.credentials.clone(),
            token_url: config.token_url(),
            client,
        }
    }

    /// Exchange the client credentials for an access token.
    ///
    /// Fails with `MissingCredentials` without touching the network when
    /// either credential is empty.
    #[instrument(skip(self))]
    pub async fn generate_access_token(&self) -> PaymentResult<String> {
        if !self.credentials.is_complete() {
            error!("Failed to generate access token: missing API credentials");
            return Err(PaymentError::MissingCredentials);
        }

        let response = self
            .client
            .post(&self.token_url)
            .basic_auth(
                &self.credentials.client_id,
                Some(&self.credentials.client_secret),
            )
            .form(&[("grant_type", "client_credentials")])
            .send()
            .await
            .map_err(|e| {
                error!("Failed to generate access token: {}", e);
                PaymentError::Transport(e.to_string())
            })?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| PaymentError::Transport(e.to_string()))?;

        if status != StatusCode::OK {
            let description = serde_json::from_str::<TokenErrorResponse>(&body)
                .ok()
                .and_then(|e| e.error_description)
                .unwrap_or(body);
            error!(
                "Failed to generate access token: status={}, description={}",
                status, description
            );
            return Err(PaymentError::AuthenticationFailed {
                status: status.as_u16(),
                description,
            });
        }

        let token: TokenResponse = serde_json::from_str(&body).map_err(|e| {
            PaymentError::Serialization(format!("Failed to parse token response: {}", e))
        })?;

        debug!("Generated access token, expires_in={:?}", token.expires_in);

        Ok(token.access_token)
    }
}

// =============================================================================
// PayPal OAuth Types
// =============================================================================

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    #[serde(default)]
    expires_in: Option<u64>,
}

#[derive(Debug, Deserialize)]
struct TokenErrorResponse {
    #[serde(default)]
    error_description: Option<String>,
}
