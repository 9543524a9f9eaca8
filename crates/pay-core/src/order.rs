//! # Order Types
//!
//! Request and result types exchanged between the HTTP layer and a
//! payment strategy. Nothing here is persisted.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Product being paid for
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Product {
    /// Monetary amount as a decimal string (e.g. "10.00"), used verbatim
    #[serde(deserialize_with = "cost_from_json")]
    pub cost: String,
}

/// Caller payload for order creation: `{ "product": { "cost": "10.00" } }`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct OrderRequest {
    pub product: Product,
}

impl OrderRequest {
    pub fn new(cost: impl Into<String>) -> Self {
        Self {
            product: Product { cost: cost.into() },
        }
    }

    /// Parse a raw request body.
    ///
    /// Any failure (not JSON, missing `product.cost`, wrong type) is reported
    /// as `InvalidRequest` so the caller can route it like every other error.
    pub fn from_slice(body: &[u8]) -> crate::PaymentResult<Self> {
        serde_json::from_slice(body)
            .map_err(|e| crate::PaymentError::InvalidRequest(e.to_string()))
    }

    pub fn cost(&self) -> &str {
        &self.product.cost
    }
}

/// Processor response relayed back to the caller
#[derive(Debug, Clone, PartialEq)]
pub struct OrderResult {
    /// Processor JSON body, untouched
    pub body: Value,
    /// Processor HTTP status code
    pub status: u16,
}

impl OrderResult {
    pub fn new(body: Value, status: u16) -> Self {
        Self { body, status }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

// Browsers and SDK samples send the cost either as "10.00" or 10.00.
fn cost_from_json<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Cost {
        Text(String),
        Number(serde_json::Number),
    }

    Ok(match Cost::deserialize(deserializer)? {
        Cost::Text(s) => s,
        Cost::Number(n) => n.to_string(),
    })
}
