use crate::bus::EventBus;
use crate::repo::outbox_repo::OutboxRepo;
use anyhow::Result;
use chrono::{Duration, Utc};

#[derive(Clone)]
pub struct OutboxRelay {
    pub outbox_repo: OutboxRepo,
    pub bus: EventBus,
}

impl OutboxRelay {
    pub async fn run(self) {
        loop {
            if let Err(err) = self.tick().await {
                tracing::error!("outbox relay error: {}", err);
            }
            tokio::time::sleep(std::time::Duration::from_millis(200)).await;
        }
    }

    async fn tick(&self) -> Result<()> {
        let released = self.outbox_repo.release_stale().await?;
        if released > 0 {
            tracing::warn!("released {} stale outbox rows back to PENDING", released);
        }

        let batch = self.outbox_repo.lock_pending(100).await?;
        if batch.is_empty() {
            return Ok(());
        }

        for item in batch {
            match self.bus.publish(&item.event_type, &item.payload_json).await {
                Ok(()) => {
                    self.outbox_repo.mark_published(item.id).await?;
                }
                Err(e) => {
                    let attempts = item.attempts + 1;
                    let next_attempt_at = Utc::now() + Duration::seconds(retry_backoff_secs(attempts));
                    self.outbox_repo.mark_retry(item.id, attempts, next_attempt_at).await?;
                    tracing::warn!("publish failed for outbox id {}: {}", item.id, e);
                }
            }
        }

        Ok(())
    }
}

pub fn retry_backoff_secs(attempts: i32) -> i64 {
    i64::min(300, 2_i64.pow(attempts.min(8) as u32))
}
