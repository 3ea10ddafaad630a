use crate::domain::event::{OrderPaid, ORDER_PAID};
use crate::domain::payment::{PaymentDecision, PaymentRequest, PaymentResponse, DEFAULT_PAYMENT_METHOD};
use crate::error::ServiceError;
use crate::repo::orders_repo::{OrdersRepo, PaidUpdate};
use crate::repo::outbox_repo::OutboxRepo;
use chrono::Utc;
use sqlx::PgPool;

#[derive(Clone)]
pub struct PaymentService {
    pub pool: PgPool,
}

impl PaymentService {
    /// Approval is assumed; no gateway authorization is modeled. The
    /// conditional update and the `order.paid` outbox row commit together,
    /// and a request for an absent order fails instead of reporting approval.
    pub async fn process(&self, req: PaymentRequest) -> Result<PaymentResponse, ServiceError> {
        let order_id = parse_order_id(&req.order_id)?;
        let amount = req.amount.unwrap_or(0.0);
        let method = req
            .method
            .unwrap_or_else(|| DEFAULT_PAYMENT_METHOD.to_string());

        let mut tx = self.pool.begin().await?;
        let update = OrdersRepo::mark_paid_tx(&mut tx, order_id).await?;

        let order = match update {
            PaidUpdate::Applied(order) => {
                tracing::info!("order {} transitioned to PAID", order.id);
                order
            }
            // Re-applying PAID is a no-op; the outbox unique key below keeps
            // the event set unchanged as well.
            PaidUpdate::AlreadyPaid(order) => order,
            PaidUpdate::Missing => {
                tx.rollback().await?;
                return Err(ServiceError::NotFound(order_id));
            }
        };

        let event = OrderPaid {
            order_id: order.id.to_string(),
            paid_at: Utc::now(),
            amount,
            method,
        };
        OutboxRepo::enqueue_tx(&mut tx, order.id, ORDER_PAID, serde_json::to_value(&event)?)
            .await?;
        tx.commit().await?;

        Ok(PaymentResponse {
            status: PaymentDecision::Approved,
        })
    }
}

pub fn parse_order_id(raw: &str) -> Result<i64, ServiceError> {
    raw.trim()
        .parse()
        .map_err(|_| ServiceError::Validation(format!("orderId must be numeric, got {raw:?}")))
}
