//! # PayPal Orders v2
//!
//! Create and capture orders through the Orders v2 REST API.
//! Every operation fetches its own bearer token first.

use crate::config::PayPalConfig;
use crate::token::PayPalTokenProvider;
use async_trait::async_trait;
use pay_core::{OrderRequest, OrderResult, PaymentError, PaymentResult, PaymentStrategy};
use reqwest::{header, Client, Response};
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, error, info, instrument, warn};

/// Only currency this broker charges in
pub const CURRENCY_CODE: &str = "USD";

/// Capture funds as soon as the buyer approves
const INTENT_CAPTURE: &str = "CAPTURE";

/// PayPal order strategy
///
/// Thin relay over Orders v2: the processor's JSON bodies are returned as-is.
pub struct PayPalOrderClient {
    config: PayPalConfig,
    client: Client,
    tokens: PayPalTokenProvider,
}

impl PayPalOrderClient {
    /// Create a new PayPal order client
    pub fn new(config: PayPalConfig) -> PaymentResult<Self> {
        let client = config.build_http_client()?;
        let tokens = PayPalTokenProvider::new(&config, client.clone());

        Ok(Self {
            config,
            client,
            tokens,
        })
    }

    /// Create from environment variables
    pub fn from_env() -> PaymentResult<Self> {
        Self::new(PayPalConfig::from_env())
    }

    pub fn config(&self) -> &PayPalConfig {
        &self.config
    }

    /// Build the single line-item order payload
    fn build_order_payload(cost: &str) -> PayPalOrderPayload<'_> {
        PayPalOrderPayload {
            intent: INTENT_CAPTURE,
            purchase_units: vec![PayPalPurchaseUnit {
                amount: PayPalAmount {
                    currency_code: CURRENCY_CODE,
                    value: cost,
                },
            }],
        }
    }
}

#[async_trait]
impl PaymentStrategy for PayPalOrderClient {
    #[instrument(skip(self, request), fields(cost = %request.cost()))]
    async fn create_order(&self, request: &OrderRequest) -> PaymentResult<OrderResult> {
        let access_token = self.tokens.generate_access_token().await?;
        let payload = Self::build_order_payload(request.cost());

        debug!("Creating PayPal order: value={} {}", request.cost(), CURRENCY_CODE);

        let response = self
            .client
            .post(self.config.orders_url())
            .bearer_auth(&access_token)
            .json(&payload)
            .send()
            .await
            .map_err(|e| PaymentError::Transport(e.to_string()))?;

        let status = response.status();

        if !status.is_success() {
            let body = response
                .text()
                .await
                .map_err(|e| PaymentError::Transport(e.to_string()))?;
            error!("PayPal order creation failed: status={}, body={}", status, body);
            return Err(PaymentError::OrderCreateFailed {
                status: status.as_u16(),
                body,
            });
        }

        let result = read_json(response).await?;

        info!(
            "Created PayPal order: id={}, status={}",
            result.body.get("id").and_then(|id| id.as_str()).unwrap_or("unknown"),
            result.status
        );

        Ok(result)
    }

    #[instrument(skip(self))]
    async fn capture_order(&self, order_id: &str) -> PaymentResult<OrderResult> {
        let url = self.config.capture_url(order_id)?;
        let access_token = self.tokens.generate_access_token().await?;

        let response = self
            .client
            .post(url)
            .bearer_auth(&access_token)
            .header(header::CONTENT_TYPE, "application/json")
            .send()
            .await
            .map_err(|e| PaymentError::Transport(e.to_string()))?;

        // Processor-reported failures are relayed, not raised
        let result = read_json(response).await?;

        if result.is_success() {
            info!("Captured PayPal order: id={}, status={}", order_id, result.status);
        } else {
            warn!(
                "PayPal rejected capture: id={}, status={}, body={}",
                order_id, result.status, result.body
            );
        }

        Ok(result)
    }

    fn provider_name(&self) -> &'static str {
        "paypal"
    }
}

async fn read_json(response: Response) -> PaymentResult<OrderResult> {
    let status = response.status().as_u16();
    let body = response
        .text()
        .await
        .map_err(|e| PaymentError::Transport(e.to_string()))?;

    let body: Value = serde_json::from_str(&body).map_err(|e| {
        PaymentError::Serialization(format!("Failed to parse PayPal response: {}", e))
    })?;

    Ok(OrderResult::new(body, status))
}

// =============================================================================
// PayPal API Types
// =============================================================================

#[derive(Debug, Serialize)]
struct PayPalOrderPayload<'a> {
    intent: &'static str,
    purchase_units: Vec<PayPalPurchaseUnit<'a>>,
}

#[derive(Debug, Serialize)]
struct PayPalPurchaseUnit<'a> {
    amount: PayPalAmount<'a>,
}

#[derive(Debug, Serialize)]
struct PayPalAmount<'a> {
    currency_code: &'static str,
    value: &'a str,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn mount_token(server: &MockServer) {
        Mock::given(method("POST"))
            .and(path("/v1/oauth2/token"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "access_token": "test-token",
                "token_type": "Bearer",
                "expires_in": 32400
            })))
            .mount(server)
            .await;
    }

    fn client_for(server: &MockServer) -> PayPalOrderClient {
        let config = PayPalConfig::new("client-id", "client-secret").with_api_base_url(server.uri());
        PayPalOrderClient::new(config).unwrap()
    }

    #[test]
    fn test_order_payload_shape() {
        let payload = serde_json::to_value(PayPalOrderClient::build_order_payload("10.00")).unwrap();
        assert_eq!(
            payload,
            json!({
                "intent": "CAPTURE",
                "purchase_units": [
                    { "amount": { "currency_code": "USD", "value": "10.00" } }
                ]
            })
        );
    }

    #[tokio::test]
    async fn test_create_order_relays_created() {
        let server = MockServer::start().await;
        mount_token(&server).await;
        Mock::given(method("POST"))
            .and(path("/v2/checkout/orders"))
            .and(header("authorization", "Bearer test-token"))
            .and(header("content-type", "application/json"))
            .and(body_json(json!({
                "intent": "CAPTURE",
                "purchase_units": [
                    { "amount": { "currency_code": "USD", "value": "10.00" } }
                ]
            })))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({"id": "O1"})))
            .expect(1)
            .mount(&server)
            .await;

        let result = client_for(&server)
            .create_order(&OrderRequest::new("10.00"))
            .await
            .unwrap();
        assert_eq!(result.status, 201);
        assert_eq!(result.body, json!({"id": "O1"}));
    }

    #[tokio::test]
    async fn test_create_order_rejects_non_2xx() {
        let server = MockServer::start().await;
        mount_token(&server).await;
        Mock::given(method("POST"))
            .and(path("/v2/checkout/orders"))
            .respond_with(
                ResponseTemplate::new(400)
                    .set_body_string(r#"{"name":"INVALID_REQUEST","message":"Request is not well-formed"}"#),
            )
            .mount(&server)
            .await;

        let err = client_for(&server)
            .create_order(&OrderRequest::new("abc"))
            .await
            .unwrap_err();
        match err {
            PaymentError::OrderCreateFailed { status, body } => {
                assert_eq!(status, 400);
                assert!(body.contains("INVALID_REQUEST"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_create_order_fetches_fresh_token_each_call() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/oauth2/token"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"access_token": "t"})))
            .expect(2)
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(path("/v2/checkout/orders"))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({"id": "O1"})))
            .expect(2)
            .mount(&server)
            .await;

        let client = client_for(&server);
        client.create_order(&OrderRequest::new("1.00")).await.unwrap();
        client.create_order(&OrderRequest::new("2.00")).await.unwrap();
    }

    #[tokio::test]
    async fn test_create_order_stops_on_auth_failure() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/oauth2/token"))
            .respond_with(ResponseTemplate::new(401).set_body_json(json!({
                "error": "invalid_client",
                "error_description": "Client Authentication failed"
            })))
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(path("/v2/checkout/orders"))
            .respond_with(ResponseTemplate::new(201))
            .expect(0)
            .mount(&server)
            .await;

        let err = client_for(&server)
            .create_order(&OrderRequest::new("10.00"))
            .await
            .unwrap_err();
        assert!(matches!(err, PaymentError::AuthenticationFailed { status: 401, .. }));
    }

    #[tokio::test]
    async fn test_capture_order_success() {
        let server = MockServer::start().await;
        mount_token(&server).await;
        Mock::given(method("POST"))
            .and(path("/v2/checkout/orders/O1/capture"))
            .and(header("authorization", "Bearer test-token"))
            .respond_with(
                ResponseTemplate::new(201).set_body_json(json!({"id": "O1", "status": "COMPLETED"})),
            )
            .expect(1)
            .mount(&server)
            .await;

        let result = client_for(&server).capture_order("O1").await.unwrap();
        assert_eq!(result.status, 201);
        assert_eq!(result.body["status"], "COMPLETED");
    }

    #[tokio::test]
    async fn test_capture_order_relays_processor_failure() {
        let server = MockServer::start().await;
        mount_token(&server).await;
        Mock::given(method("POST"))
            .and(path("/v2/checkout/orders/O1/capture"))
            .respond_with(ResponseTemplate::new(422).set_body_json(json!({"error": "DECLINED"})))
            .mount(&server)
            .await;

        let result = client_for(&server).capture_order("O1").await.unwrap();
        assert_eq!(result, OrderResult::new(json!({"error": "DECLINED"}), 422));
    }

    #[tokio::test]
    async fn test_capture_order_id_cannot_escape_capture_path() {
        let server = MockServer::start().await;
        mount_token(&server).await;
        Mock::given(method("POST"))
            .and(path("/v2/checkout/orders/O1%3Fx=/capture"))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({"id": "O1?x="})))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(path("/v2/checkout/orders/O1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
            .expect(0)
            .mount(&server)
            .await;

        let result = client_for(&server).capture_order("O1?x=").await.unwrap();
        assert_eq!(result.status, 201);

        // Fragment and traversal ids never reach a known endpoint
        for order_id in ["O1#", "X/../../../v1/payments/refund?"] {
            let err = client_for(&server).capture_order(order_id).await.unwrap_err();
            assert!(matches!(err, PaymentError::Serialization(_)), "{order_id:?}");
        }
    }

    #[tokio::test]
    async fn test_capture_order_rejects_dot_segment_id() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let err = client_for(&server).capture_order("..").await.unwrap_err();
        assert!(matches!(err, PaymentError::InvalidRequest(_)));
    }

    #[tokio::test]
    async fn test_capture_order_non_json_is_error() {
        let server = MockServer::start().await;
        mount_token(&server).await;
        Mock::given(method("POST"))
            .and(path("/v2/checkout/orders/O1/capture"))
            .respond_with(ResponseTemplate::new(502).set_body_string("<html>Bad Gateway</html>"))
            .mount(&server)
            .await;

        let err = client_for(&server).capture_order("O1").await.unwrap_err();
        assert!(matches!(err, PaymentError::Serialization(_)));
    }

    #[tokio::test]
    async fn test_slow_processor_hits_deadline() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/oauth2/token"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"access_token": "t"}))
                    .set_delay(std::time::Duration::from_secs(2)),
            )
            .mount(&server)
            .await;

        let config = PayPalConfig::new("client-id", "client-secret")
            .with_api_base_url(server.uri())
            .with_timeout(std::time::Duration::from_millis(100));
        let err = PayPalOrderClient::new(config)
            .unwrap()
            .capture_order("O1")
            .await
            .unwrap_err();
        assert!(matches!(err, PaymentError::Transport(_)));
    }
}
