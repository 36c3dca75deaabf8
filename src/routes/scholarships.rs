use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde_json::Value;

use crate::entities::scholarship;
use crate::error::ApiError;
use crate::schema::{validate_create, validate_update, NewScholarship};
use crate::AppState;

/// List every tracked scholarship application
#[utoipa::path(
    get,
    path = "/api/scholarships",
    responses(
        (status = 200, description = "All scholarship records, oldest first", body = Vec<scholarship::Model>)
    )
)]
pub async fn list_scholarships(
    State(state): State<AppState>,
) -> Result<Json<Vec<scholarship::Model>>, ApiError> {
    let records = state.store.list().await?;
    Ok(Json(records))
}

/// Fetch a single scholarship by id
#[utoipa::path(
    get,
    path = "/api/scholarships/{id}",
    params(
        ("id" = i64, Path, description = "Scholarship id")
    ),
    responses(
        (status = 200, description = "The requested record", body = scholarship::Model),
        (status = 404, description = "No record with that id")
    )
)]
pub async fn get_scholarship(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<scholarship::Model>, ApiError> {
    let record = state
        .store
        .get_by_id(id)
        .await?
        .ok_or(ApiError::NotFound)?;
    Ok(Json(record))
}

/// Create a scholarship record
#[utoipa::path(
    post,
    path = "/api/scholarships",
    request_body = NewScholarship,
    responses(
        (status = 201, description = "Created record with its assigned id", body = scholarship::Model),
        (status = 400, description = "Request body failed validation")
    )
)]
pub async fn create_scholarship(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<(StatusCode, Json<scholarship::Model>), ApiError> {
    let input = validate_create(&body)?;
    let created = state.store.create(input).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// Update an existing scholarship; omitted fields keep their stored values
#[utoipa::path(
    put,
    path = "/api/scholarships/{id}",
    params(
        ("id" = i64, Path, description = "Scholarship id")
    ),
    request_body(content = NewScholarship, description = "Any subset of the create fields"),
    responses(
        (status = 200, description = "The record after the update", body = scholarship::Model),
        (status = 400, description = "Request body failed validation"),
        (status = 404, description = "No record with that id")
    )
)]
pub async fn update_scholarship(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(body): Json<Value>,
) -> Result<Json<scholarship::Model>, ApiError> {
    let patch = validate_update(&body)?;
    let updated = state
        .store
        .update(id, patch)
        .await?
        .ok_or(ApiError::NotFound)?;
    Ok(Json(updated))
}

/// Delete a scholarship; deleting an unknown id still succeeds
#[utoipa::path(
    delete,
    path = "/api/scholarships/{id}",
    params(
        ("id" = i64, Path, description = "Scholarship id")
    ),
    responses(
        (status = 204, description = "The record is gone")
    )
)]
pub async fn delete_scholarship(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    state.store.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
