use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BusError {
    #[error("bus connection failed: {0}")]
    Connect(#[from] async_nats::ConnectError),
    #[error("publish failed: {0}")]
    Publish(#[from] async_nats::PublishError),
    #[error("subscribe failed: {0}")]
    Subscribe(#[from] async_nats::SubscribeError),
    #[error("payload encode failed: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Connection handle shared by publishers and subscribers. Constructed once at
/// process start; reconnection policy is left to the broker client.
#[derive(Clone)]
pub struct EventBus {
    client: async_nats::Client,
}

impl EventBus {
    pub async fn connect(url: &str) -> Result<Self, BusError> {
        let client = async_nats::connect(url).await?;
        Ok(Self { client })
    }

    /// Fire-and-forget publish. Delivery is at-least-once per the broker's
    /// own semantics; callers that must not lose events go through the outbox.
    pub async fn publish(&self, subject: &str, payload: &impl Serialize) -> Result<(), BusError> {
        let bytes = serde_json::to_vec(payload)?;
        self.client.publish(subject.to_string(), bytes.into()).await?;
        Ok(())
    }

    /// Subscribes to a subject pattern. `order.*` matches any single-level
    /// verb under the namespace, not deeper hierarchies.
    pub async fn subscribe(&self, pattern: &str) -> Result<async_nats::Subscriber, BusError> {
        Ok(self.client.subscribe(pattern.to_string()).await?)
    }
}
