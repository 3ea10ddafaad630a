use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    Created,
    Paid,
}

impl OrderStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            OrderStatus::Created => "CREATED",
            OrderStatus::Paid => "PAID",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "CREATED" => Some(OrderStatus::Created),
            "PAID" => Some(OrderStatus::Paid),
            _ => None,
        }
    }

    /// Transition rule mirrored by the conditional update in the store:
    /// CREATED moves to PAID, PAID stays PAID. The flag reports whether a
    /// transition actually occurred.
    pub fn apply_payment(self) -> (Self, bool) {
        match self {
            OrderStatus::Created => (OrderStatus::Paid, true),
            OrderStatus::Paid => (OrderStatus::Paid, false),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Order {
    pub id: i64,
    pub user_id: String,
    pub status: OrderStatus,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderRequest {
    #[serde(default)]
    pub user_id: Option<String>,
    #[serde(default)]
    pub items: Option<serde_json::Value>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderResponse {
    pub order_id: String,
    pub status: OrderStatus,
}

#[derive(Debug, Clone, Serialize)]
pub struct OrderView {
    pub id: i64,
    pub status: OrderStatus,
}

impl From<Order> for OrderView {
    fn from(order: Order) -> Self {
        Self {
            id: order.id,
            status: order.status,
        }
    }
}
