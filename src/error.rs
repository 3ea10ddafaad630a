use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("{0}")]
    Validation(String),
    #[error("order {0} not found")]
    NotFound(i64),
    #[error("store failure: {0}")]
    Store(#[from] sqlx::Error),
    #[error("event encode failed: {0}")]
    Encode(#[from] serde_json::Error),
}

impl ServiceError {
    pub fn code(&self) -> &'static str {
        match self {
            ServiceError::Validation(_) => "INVALID_REQUEST",
            ServiceError::NotFound(_) => "ORDER_NOT_FOUND",
            ServiceError::Store(_) => "STORE_UNAVAILABLE",
            ServiceError::Encode(_) => "EVENT_ENCODE_FAILED",
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ServiceError::Validation(_) => StatusCode::BAD_REQUEST,
            ServiceError::NotFound(_) => StatusCode::NOT_FOUND,
            ServiceError::Store(_) | ServiceError::Encode(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorEnvelope {
    pub error: ErrorPayload,
}

#[derive(Debug, Serialize)]
pub struct ErrorPayload {
    pub code: String,
    pub message: String,
    pub details: Option<String>,
}

impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        let status = self.status();
        // Internal failures keep their cause in the logs, not the response body.
        let message = if status.is_server_error() {
            tracing::error!("request failed: {}", self);
            "internal failure".to_string()
        } else {
            self.to_string()
        };
        let body = ErrorEnvelope {
            error: ErrorPayload {
                code: self.code().to_string(),
                message,
                details: None,
            },
        };
        (status, Json(body)).into_response()
    }
}
