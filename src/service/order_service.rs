use crate::domain::event::{OrderCreated, ORDER_CREATED};
use crate::domain::order::{CreateOrderRequest, CreateOrderResponse, Order};
use crate::error::ServiceError;
use crate::repo::orders_repo::OrdersRepo;
use crate::repo::outbox_repo::OutboxRepo;
use chrono::Utc;
use sqlx::PgPool;

#[derive(Clone)]
pub struct OrderService {
    pub pool: PgPool,
    pub orders_repo: OrdersRepo,
    pub default_user_id: String,
}

impl OrderService {
    /// Persists the order and its `order.created` event in one transaction.
    /// The event becomes visible on the bus only after the relay picks up the
    /// committed outbox row, so no event ever refers to an uncommitted order.
    pub async fn create(&self, req: CreateOrderRequest) -> Result<CreateOrderResponse, ServiceError> {
        let user_id = resolve_user_id(req.user_id.as_deref(), &self.default_user_id)?;
        let items = req
            .items
            .unwrap_or_else(|| serde_json::Value::Array(Vec::new()));

        let mut tx = self.pool.begin().await?;
        let order = OrdersRepo::create_tx(&mut tx, &user_id).await?;

        let event = OrderCreated {
            order_id: order.id.to_string(),
            user_id,
            items,
            created_at: Utc::now(),
        };
        OutboxRepo::enqueue_tx(&mut tx, order.id, ORDER_CREATED, serde_json::to_value(&event)?)
            .await?;
        tx.commit().await?;

        tracing::info!("order {} created for {}", order.id, event.user_id);

        Ok(CreateOrderResponse {
            order_id: order.id.to_string(),
            status: order.status,
        })
    }

    pub async fn get(&self, order_id: i64) -> Result<Order, ServiceError> {
        self.orders_repo
            .get(order_id)
            .await?
            .ok_or(ServiceError::NotFound(order_id))
    }
}

/// A missing userId falls back to the configured default; a present but blank
/// one is a caller error.
pub fn resolve_user_id(requested: Option<&str>, fallback: &str) -> Result<String, ServiceError> {
    match requested {
        Some(s) if !s.trim().is_empty() => Ok(s.to_string()),
        Some(_) => Err(ServiceError::Validation("userId must not be blank".to_string())),
        None => Ok(fallback.to_string()),
    }
}
