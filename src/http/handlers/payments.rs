use crate::domain::payment::PaymentRequest;
use crate::PaymentState;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

pub async fn create_payment(
    State(state): State<PaymentState>,
    Json(req): Json<PaymentRequest>,
) -> impl IntoResponse {
    match state.payment_service.process(req).await {
        Ok(resp) => (StatusCode::OK, Json(resp)).into_response(),
        Err(err) => err.into_response(),
    }
}
