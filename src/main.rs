use axum::routing::{get, post};
use axum::Router;
use order_lifecycle::bus::EventBus;
use order_lifecycle::config::AppConfig;
use order_lifecycle::repo::orders_repo::OrdersRepo;
use order_lifecycle::repo::outbox_repo::OutboxRepo;
use order_lifecycle::service::order_service::OrderService;
use order_lifecycle::service::outbox_relay::OutboxRelay;
use order_lifecycle::OrderState;
use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cfg = AppConfig::from_env();

    let pool = PgPoolOptions::new()
        .max_connections(10)
        .connect(&cfg.store_url)
        .await?;

    sqlx::migrate!("./migrations").run(&pool).await?;

    let bus = EventBus::connect(&cfg.bus_url).await?;

    let orders_repo = OrdersRepo { pool: pool.clone() };
    let outbox_repo = OutboxRepo { pool: pool.clone() };

    let order_service = OrderService {
        pool,
        orders_repo,
        default_user_id: cfg.default_user_id.clone(),
    };

    let relay = OutboxRelay { outbox_repo, bus };
    tokio::spawn(relay.run());

    let state = OrderState { order_service };

    let app = Router::new()
        .route("/healthz", get(order_lifecycle::http::handlers::ops::healthz))
        .route("/orders", post(order_lifecycle::http::handlers::orders::create_order))
        .route("/orders/:id", get(order_lifecycle::http::handlers::orders::get_order))
        .with_state(state);

    let listener = tokio::net::TcpListener::bind(&cfg.bind_addr).await?;
    tracing::info!("order-svc listening on {}", cfg.bind_addr);
    axum::serve(listener, app).await?;
    Ok(())
}
