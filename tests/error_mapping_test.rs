use axum::http::StatusCode;
use portfolio_service::errors::{AppError, ContentError};
use portfolio_service::models::FieldError;
use portfolio_service::repository::StoreError;
use uuid::Uuid;

#[test]
fn validation_maps_to_400() {
    let e = AppError::Validation(vec![FieldError::new("name", "must be at least 2 characters")]);
    assert_eq!(e.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(e.error_type(), "validation_error");
}

#[test]
fn storage_unavailable_maps_to_503() {
    let e = AppError::from(StoreError::Unavailable("down".into()));
    assert_eq!(e.status_code(), StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(e.error_type(), "storage_unavailable");
}

#[test]
fn duplicate_id_is_a_500_storage_error() {
    let e = AppError::from(StoreError::DuplicateId(Uuid::new_v4()));
    assert_eq!(e.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(e.error_type(), "storage_error");
}

#[test]
fn content_group_maps_to_500() {
    let e1 = AppError::from(ContentError::Invalid { reason: "duplicate service id 1".into() });
    let e2 = AppError::from(ContentError::Malformed {
        path: "content/profile.json".into(),
        source: serde_json::from_str::<serde_json::Value>("{").unwrap_err(),
    });
    assert_eq!(e1.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(e2.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(e1.error_type(), "content_error");
}

#[test]
fn invalid_message_is_a_server_error_not_a_client_one() {
    let e = AppError::InvalidMessage { reason: "1 field(s) failed the re-check".into() };
    assert_eq!(e.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(e.error_type(), "invalid_message");
}

#[test]
fn internal_maps_to_500() {
    let e = AppError::internal("unexpected");
    assert_eq!(e.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(e.error_type(), "internal_error");
}
