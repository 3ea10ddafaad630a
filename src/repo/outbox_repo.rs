use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{PgPool, Postgres, Row, Transaction};

/// Rows stuck in PROCESSING longer than this belong to a crashed relay and
/// are returned to PENDING.
const STALE_PROCESSING_SECS: i64 = 30;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutboxEvent {
    pub id: i64,
    pub order_id: i64,
    pub event_type: String,
    pub payload_json: serde_json::Value,
    pub attempts: i32,
}

#[derive(Clone)]
pub struct OutboxRepo {
    pub pool: PgPool,
}

impl OutboxRepo {
    /// Enqueues an event in the caller's transaction so the event commits or
    /// rolls back with the order mutation that produced it. The unique key on
    /// (order_id, event_type) makes repeated enqueues of the same lifecycle
    /// verb a no-op.
    pub async fn enqueue_tx(
        tx: &mut Transaction<'_, Postgres>,
        order_id: i64,
        event_type: &str,
        payload_json: serde_json::Value,
    ) -> Result<(), sqlx::Error> {
        sqlx::query(
            r#"
            INSERT INTO order_events_outbox (order_id, event_type, payload_json, status, attempts, next_attempt_at)
            VALUES ($1, $2, $3, 'PENDING', 0, now())
            ON CONFLICT (order_id, event_type) DO NOTHING
            "#,
        )
        .bind(order_id)
        .bind(event_type)
        .bind(payload_json)
        .execute(tx.as_mut())
        .await?;

        Ok(())
    }

    pub async fn lock_pending(&self, batch_size: i64) -> Result<Vec<OutboxEvent>, sqlx::Error> {
        let mut tx = self.pool.begin().await?;
        let rows = sqlx::query(
            r#"
            SELECT id, order_id, event_type, payload_json, attempts
            FROM order_events_outbox
            WHERE status = 'PENDING' AND next_attempt_at <= now()
            ORDER BY id ASC
            LIMIT $1
            FOR UPDATE SKIP LOCKED
            "#,
        )
        .bind(batch_size)
        .fetch_all(tx.as_mut())
        .await?;

        if rows.is_empty() {
            tx.rollback().await?;
            return Ok(Vec::new());
        }

        let ids: Vec<i64> = rows.iter().map(|r| r.get("id")).collect();
        sqlx::query(
            "UPDATE order_events_outbox SET status = 'PROCESSING', updated_at = now() WHERE id = ANY($1)",
        )
        .bind(&ids)
        .execute(tx.as_mut())
        .await?;

        tx.commit().await?;

        Ok(rows
            .into_iter()
            .map(|r| OutboxEvent {
                id: r.get("id"),
                order_id: r.get("order_id"),
                event_type: r.get("event_type"),
                payload_json: r.get("payload_json"),
                attempts: r.get("attempts"),
            })
            .collect())
    }

    pub async fn mark_published(&self, id: i64) -> Result<(), sqlx::Error> {
        sqlx::query(
            "UPDATE order_events_outbox SET status='PUBLISHED', published_at=now(), updated_at=now() WHERE id=$1",
        )
        .bind(id)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    pub async fn mark_retry(
        &self,
        id: i64,
        attempts: i32,
        next_attempt_at: DateTime<Utc>,
    ) -> Result<(), sqlx::Error> {
        sqlx::query(
            "UPDATE order_events_outbox SET status='PENDING', attempts=$2, next_attempt_at=$3, updated_at=now() WHERE id=$1",
        )
        .bind(id)
        .bind(attempts)
        .bind(next_attempt_at)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    pub async fn release_stale(&self) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(
            r#"
            UPDATE order_events_outbox
            SET status = 'PENDING', updated_at = now()
            WHERE status = 'PROCESSING' AND updated_at < now() - make_interval(secs => $1)
            "#,
        )
        .bind(STALE_PROCESSING_SECS as f64)
        .execute(&self.pool)
        .await?;
        Ok(result.rows_affected())
    }
}
