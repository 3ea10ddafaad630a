use crate::domain::order::{Order, OrderStatus};
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Postgres, Row, Transaction};

/// Outcome of the conditional CREATED -> PAID update.
#[derive(Debug, Clone)]
pub enum PaidUpdate {
    Applied(Order),
    AlreadyPaid(Order),
    Missing,
}

#[derive(Clone)]
pub struct OrdersRepo {
    pub pool: PgPool,
}

impl OrdersRepo {
    pub async fn create_tx(
        tx: &mut Transaction<'_, Postgres>,
        user_id: &str,
    ) -> Result<Order, sqlx::Error> {
        let row = sqlx::query(
            "INSERT INTO orders (user_id, status) VALUES ($1, $2) RETURNING id, user_id, status",
        )
        .bind(user_id)
        .bind(OrderStatus::Created.as_str())
        .fetch_one(tx.as_mut())
        .await?;

        order_from_row(&row)
    }

    /// Atomic conditional transition. The WHERE clause only matches a CREATED
    /// row, so concurrent payments for the same id serialize on the row lock
    /// and at most one caller observes `Applied`.
    pub async fn mark_paid_tx(
        tx: &mut Transaction<'_, Postgres>,
        order_id: i64,
    ) -> Result<PaidUpdate, sqlx::Error> {
        let row = sqlx::query(
            r#"
            UPDATE orders SET status = $2
            WHERE id = $1 AND status = $3
            RETURNING id, user_id, status
            "#,
        )
        .bind(order_id)
        .bind(OrderStatus::Paid.as_str())
        .bind(OrderStatus::Created.as_str())
        .fetch_optional(tx.as_mut())
        .await?;

        if let Some(row) = row {
            return Ok(PaidUpdate::Applied(order_from_row(&row)?));
        }

        let existing = sqlx::query("SELECT id, user_id, status FROM orders WHERE id = $1")
            .bind(order_id)
            .fetch_optional(tx.as_mut())
            .await?;

        match existing {
            Some(row) => Ok(PaidUpdate::AlreadyPaid(order_from_row(&row)?)),
            None => Ok(PaidUpdate::Missing),
        }
    }

    pub async fn get(&self, order_id: i64) -> Result<Option<Order>, sqlx::Error> {
        let row = sqlx::query("SELECT id, user_id, status FROM orders WHERE id = $1")
            .bind(order_id)
            .fetch_optional(&self.pool)
            .await?;

        row.map(|r| order_from_row(&r)).transpose()
    }
}

fn order_from_row(row: &PgRow) -> Result<Order, sqlx::Error> {
    let status: String = row.get("status");
    let status = OrderStatus::parse(&status)
        .ok_or_else(|| sqlx::Error::Decode(format!("unknown order status {status}").into()))?;

    Ok(Order {
        id: row.get("id"),
        user_id: row.get("user_id"),
        status,
    })
}
