use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentRequest {
    pub order_id: String,
    #[serde(default)]
    pub amount: Option<f64>,
    #[serde(default)]
    pub method: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentDecision {
    Approved,
}

#[derive(Debug, Clone, Serialize)]
pub struct PaymentResponse {
    pub status: PaymentDecision,
}

pub const DEFAULT_PAYMENT_METHOD: &str = "CARD";
