use order_lifecycle::service::notifier::{NotificationObserver, Reaction, Reception};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

struct CountingReaction {
    hits: AtomicUsize,
}

#[async_trait::async_trait]
impl Reaction for CountingReaction {
    fn name(&self) -> &'static str {
        "counting"
    }

    async fn react(&self, _subject: &str, _payload: &serde_json::Value) -> anyhow::Result<()> {
        self.hits.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

struct FailingReaction;

#[async_trait::async_trait]
impl Reaction for FailingReaction {
    fn name(&self) -> &'static str {
        "failing"
    }

    async fn react(&self, _subject: &str, _payload: &serde_json::Value) -> anyhow::Result<()> {
        anyhow::bail!("reaction blew up")
    }
}

#[tokio::test]
async fn malformed_payload_is_dropped_without_reacting() {
    let counting = Arc::new(CountingReaction {
        hits: AtomicUsize::new(0),
    });
    let observer = NotificationObserver::new(vec![counting.clone()]);

    let outcome = observer.handle("order.created", b"{not json").await;

    assert_eq!(outcome, Reception::Dropped);
    assert_eq!(counting.hits.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn valid_message_after_malformed_one_still_reacts() {
    let counting = Arc::new(CountingReaction {
        hits: AtomicUsize::new(0),
    });
    let observer = NotificationObserver::new(vec![counting.clone()]);

    observer.handle("order.created", b"garbage").await;
    let outcome = observer
        .handle("order.created", br#"{"orderId":"1","userId":"u1"}"#)
        .await;

    assert_eq!(outcome, Reception::Reacted);
    assert_eq!(counting.hits.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn failing_reaction_does_not_suppress_later_reactions() {
    let counting = Arc::new(CountingReaction {
        hits: AtomicUsize::new(0),
    });
    let observer = NotificationObserver::new(vec![Arc::new(FailingReaction), counting.clone()]);

    let outcome = observer
        .handle("order.paid", br#"{"orderId":"7","amount":25.5}"#)
        .await;

    assert_eq!(outcome, Reception::Reacted);
    assert_eq!(counting.hits.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn paid_event_without_created_event_is_still_handled() {
    let counting = Arc::new(CountingReaction {
        hits: AtomicUsize::new(0),
    });
    let observer = NotificationObserver::new(vec![counting.clone()]);

    let outcome = observer
        .handle("order.paid", br#"{"orderId":"42","amount":1.0,"method":"CARD"}"#)
        .await;

    assert_eq!(outcome, Reception::Reacted);
    assert_eq!(counting.hits.load(Ordering::SeqCst), 1);
}
