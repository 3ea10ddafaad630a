use futures::StreamExt;
use std::sync::Arc;

/// Side-effectful reaction to an order-domain event. Implementations must
/// treat every event as independent; an `order.paid` can arrive for an order
/// whose `order.created` was never seen on this connection.
#[async_trait::async_trait]
pub trait Reaction: Send + Sync {
    fn name(&self) -> &'static str;

    async fn react(&self, subject: &str, payload: &serde_json::Value) -> anyhow::Result<()>;
}

pub struct LogReaction;

#[async_trait::async_trait]
impl Reaction for LogReaction {
    fn name(&self) -> &'static str {
        "log"
    }

    async fn react(&self, subject: &str, payload: &serde_json::Value) -> anyhow::Result<()> {
        tracing::info!("event {}: {}", subject, payload);
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reception {
    Reacted,
    Dropped,
}

#[derive(Clone)]
pub struct NotificationObserver {
    pub reactions: Vec<Arc<dyn Reaction>>,
}

impl NotificationObserver {
    pub fn new(reactions: Vec<Arc<dyn Reaction>>) -> Self {
        Self { reactions }
    }

    /// Drains the subscription sequentially: the next message is only taken
    /// after every reaction to the previous one has finished.
    pub async fn run(self, mut subscriber: async_nats::Subscriber) {
        while let Some(message) = subscriber.next().await {
            self.handle(message.subject.as_str(), &message.payload).await;
        }
        tracing::warn!("subscription closed, observer stopping");
    }

    /// Never fails: malformed payloads are dropped and reaction errors are
    /// logged so the drain loop keeps going.
    pub async fn handle(&self, subject: &str, payload: &[u8]) -> Reception {
        let value: serde_json::Value = match serde_json::from_slice(payload) {
            Ok(value) => value,
            Err(err) => {
                tracing::warn!("dropping malformed event on {}: {}", subject, err);
                return Reception::Dropped;
            }
        };

        for reaction in &self.reactions {
            if let Err(err) = reaction.react(subject, &value).await {
                tracing::error!("reaction {} failed on {}: {}", reaction.name(), subject, err);
            }
        }

        Reception::Reacted
    }
}
