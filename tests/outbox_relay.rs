use order_lifecycle::service::outbox_relay::retry_backoff_secs;

#[test]
fn backoff_doubles_per_attempt() {
    assert_eq!(retry_backoff_secs(1), 2);
    assert_eq!(retry_backoff_secs(2), 4);
    assert_eq!(retry_backoff_secs(3), 8);
}

#[test]
fn backoff_caps_at_five_minutes() {
    assert_eq!(retry_backoff_secs(8), 256);
    assert_eq!(retry_backoff_secs(9), 300);
    assert_eq!(retry_backoff_secs(100), 300);
}
