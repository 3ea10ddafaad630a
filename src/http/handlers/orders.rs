use crate::domain::order::{CreateOrderRequest, OrderView};
use crate::OrderState;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

pub async fn create_order(
    State(state): State<OrderState>,
    Json(req): Json<CreateOrderRequest>,
) -> impl IntoResponse {
    match state.order_service.create(req).await {
        Ok(resp) => (StatusCode::CREATED, Json(resp)).into_response(),
        Err(err) => err.into_response(),
    }
}

pub async fn get_order(
    State(state): State<OrderState>,
    Path(id): Path<i64>,
) -> impl IntoResponse {
    match state.order_service.get(id).await {
        Ok(order) => (StatusCode::OK, Json(OrderView::from(order))).into_response(),
        Err(err) => err.into_response(),
    }
}
