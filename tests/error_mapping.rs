use axum::http::StatusCode;
use order_lifecycle::error::ServiceError;

#[test]
fn validation_maps_to_bad_request() {
    let err = ServiceError::Validation("userId must not be blank".to_string());
    assert_eq!(err.status(), StatusCode::BAD_REQUEST);
    assert_eq!(err.code(), "INVALID_REQUEST");
}

#[test]
fn not_found_maps_to_404() {
    let err = ServiceError::NotFound(999);
    assert_eq!(err.status(), StatusCode::NOT_FOUND);
    assert_eq!(err.code(), "ORDER_NOT_FOUND");
    assert_eq!(err.to_string(), "order 999 not found");
}

#[test]
fn store_failure_maps_to_500() {
    let err = ServiceError::Store(sqlx::Error::RowNotFound);
    assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(err.code(), "STORE_UNAVAILABLE");
}
