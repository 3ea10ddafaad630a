use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub const ORDER_CREATED: &str = "order.created";
pub const ORDER_PAID: &str = "order.paid";

/// Single-level wildcard covering every order-domain verb.
pub const ORDER_SUBJECTS: &str = "order.*";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderCreated {
    pub order_id: String,
    pub user_id: String,
    pub items: serde_json::Value,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderPaid {
    pub order_id: String,
    pub paid_at: DateTime<Utc>,
    pub amount: f64,
    pub method: String,
}
