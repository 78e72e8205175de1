//! HTTP error handling and response types.

use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::error;
use utoipa::ToSchema;

use crate::errors::StoreError;

/// API error response body.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ApiError {
    /// Error code for programmatic handling
    pub code: String,
    /// Human-readable explanation
    pub detail: String,
}

impl ApiError {
    pub fn new(code: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            detail: detail.into(),
        }
    }
}

/// Application error type for HTTP handlers.
#[derive(Debug)]
pub enum AppError {
    /// Resource not found
    NotFound(String),
    /// Invalid request (validation or malformed body)
    BadRequest(String),
    /// Internal server error
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error) = match self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, ApiError::new("NOT_FOUND", msg)),
            AppError::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, ApiError::new("BAD_REQUEST", msg))
            }
            AppError::Internal(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ApiError::new("INTERNAL_ERROR", msg),
            ),
        };

        (status, Json(error)).into_response()
    }
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        if !err.is_client_error() {
            error!("Store operation failed: {}", err);
        }

        match err {
            StoreError::NotFound { entity, .. } => AppError::NotFound(format!("{entity} not found")),
            StoreError::Validation(msg) => AppError::BadRequest(msg),
            _ => AppError::Internal("Internal server error".to_string()),
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_uses_entity_name() {
        match AppError::from(StoreError::not_found("Report", 9)) {
            AppError::NotFound(msg) => assert_eq!(msg, "Report not found"),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_status_codes() {
        let cases = [
            (AppError::NotFound("x".into()), StatusCode::NOT_FOUND),
            (AppError::BadRequest("x".into()), StatusCode::BAD_REQUEST),
            (AppError::Internal("x".into()), StatusCode::INTERNAL_SERVER_ERROR),
        ];

        for (err, status) in cases {
            assert_eq!(err.into_response().status(), status);
        }
    }

    #[test]
    fn test_internal_detail_hides_store_error() {
        let source = serde_json::from_str::<serde_json::Value>("[{").unwrap_err();
        let err = AppError::from(StoreError::serialization("layout", source));
        assert!(matches!(err, AppError::Internal(msg) if msg == "Internal server error"));

        let err = AppError::from(StoreError::Database(sea_orm::DbErr::Custom(
            "no such table: reports".to_string(),
        )));
        assert!(matches!(err, AppError::Internal(msg) if msg == "Internal server error"));
    }

    #[test]
    fn test_validation_maps_to_bad_request() {
        let err = AppError::from(StoreError::validation("Report name is required"));
        assert!(matches!(err, AppError::BadRequest(msg) if msg == "Report name is required"));
    }
}
