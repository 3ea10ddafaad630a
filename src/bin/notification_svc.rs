use axum::routing::get;
use axum::Router;
use order_lifecycle::bus::EventBus;
use order_lifecycle::config::AppConfig;
use order_lifecycle::domain::event::ORDER_SUBJECTS;
use order_lifecycle::service::notifier::{LogReaction, NotificationObserver};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cfg = AppConfig::from_env();

    let bus = EventBus::connect(&cfg.bus_url).await?;
    let subscriber = bus.subscribe(ORDER_SUBJECTS).await?;

    let observer = NotificationObserver::new(vec![Arc::new(LogReaction)]);
    tokio::spawn(observer.run(subscriber));

    let app = Router::new().route("/healthz", get(order_lifecycle::http::handlers::ops::healthz));

    let listener = tokio::net::TcpListener::bind(&cfg.bind_addr).await?;
    tracing::info!("notification-svc listening on {}", cfg.bind_addr);
    axum::serve(listener, app).await?;
    Ok(())
}
