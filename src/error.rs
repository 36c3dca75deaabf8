use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use sea_orm::DbErr;
use serde_json::json;
use std::fmt;

use crate::schema::ValidationError;

/// Errors a route handler can surface to a client.
#[derive(Debug)]
pub enum ApiError {
    /// The request body failed schema validation.
    Validation(ValidationError),
    /// The path id resolved to no record.
    NotFound,
    /// The storage collaborator failed.
    Storage(DbErr),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Validation(err) => write!(f, "Validation failed: {}", err),
            ApiError::NotFound => write!(f, "Scholarship not found"),
            ApiError::Storage(err) => write!(f, "Storage error: {}", err),
        }
    }
}

impl std::error::Error for ApiError {}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        ApiError::Validation(err)
    }
}

impl From<DbErr> for ApiError {
    fn from(err: DbErr) -> Self {
        ApiError::Storage(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Validation(err) => {
                let first = err.into_first();
                (
                    StatusCode::BAD_REQUEST,
                    Json(json!({ "message": first.message, "field": first.path })),
                )
                    .into_response()
            }
            ApiError::NotFound => (
                StatusCode::NOT_FOUND,
                Json(json!({ "message": "Scholarship not found" })),
            )
                .into_response(),
            ApiError::Storage(err) => {
                tracing::error!("storage error: {err}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "message": "internal storage error" })),
                )
                    .into_response()
            }
        }
    }
}
