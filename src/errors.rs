use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::models::FieldError;
use crate::repository::StoreError;

/// Failures loading or verifying the content store.
///
/// These indicate server misconfiguration: the seed files are missing,
/// unreadable or inconsistent. Load failures abort startup; if one ever
/// surfaces on a request path it maps to a 500.
#[derive(Error, Debug)]
pub enum ContentError {
    #[error("content file unreadable: {path}")]
    Unreadable {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("content file malformed: {path}")]
    Malformed {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("content invalid: {reason}")]
    Invalid { reason: String },
}

#[derive(Error, Debug)]
pub enum AppError {
    /// Client-fixable, field-scoped form violations. Every violation is
    /// carried so the form can surface all of them at once.
    #[error("validation failed")]
    Validation(Vec<FieldError>),

    #[error(transparent)]
    Content(#[from] ContentError),

    #[error(transparent)]
    Storage(#[from] StoreError),

    /// A message failed the defensive re-check at the submission
    /// boundary. Validated input should never get here, so this is a
    /// caller contract violation, not a client error.
    #[error("message rejected at submission: {reason}")]
    InvalidMessage { reason: String },

    #[error("internal server error: {context}")]
    Internal { context: String },
}

impl AppError {
    pub fn internal(context: impl Into<String>) -> Self {
        Self::Internal { context: context.into() }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,

            AppError::Storage(StoreError::Unavailable(_)) => StatusCode::SERVICE_UNAVAILABLE,

            AppError::Content(_)
            | AppError::Storage(_)
            | AppError::InvalidMessage { .. }
            | AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn error_type(&self) -> &'static str {
        match self {
            AppError::Validation(_) => "validation_error",
            AppError::Content(_) => "content_error",
            AppError::Storage(StoreError::Unavailable(_)) => "storage_unavailable",
            AppError::Storage(_) => "storage_error",
            AppError::InvalidMessage { .. } => "invalid_message",
            AppError::Internal { .. } => "internal_error",
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        // Validation failures use the contact-form response shape so the
        // client can render per-field messages; everything else uses the
        // generic error envelope.
        let body = match &self {
            AppError::Validation(violations) => Json(json!({
                "success": false,
                "errors": violations,
            })),
            other => Json(json!({
                "error": {
                    "type": other.error_type(),
                    "message": other.to_string(),
                    "status": status.as_u16(),
                }
            })),
        };

        (status, body).into_response()
    }
}
