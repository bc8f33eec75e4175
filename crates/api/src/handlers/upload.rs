//! Handlers for the `/uploads` resource (admin blob uploads).
//!
//! Content entities reference images by storage key (`image_key`
//! columns). An admin uploads the raw bytes here first, then uses the
//! returned key when creating or updating the entity.

use axum::body::Bytes;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use uuid::Uuid;
use kurort_core::error::CoreError;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireAdmin;
use crate::state::AppState;

/// Maximum accepted upload size (8 MiB).
const MAX_UPLOAD_BYTES: usize = 8 * 1024 * 1024;

/// Query parameters for `POST /uploads` (`?ext=jpg`).
#[derive(Debug, Deserialize)]
pub struct UploadParams {
    /// File extension for the generated key. Lowercase alphanumeric only.
    pub ext: String,
}

/// POST /api/v1/uploads?ext=jpg
///
/// Store the raw request body and return the generated storage key.
pub async fn upload(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Query(params): Query<UploadParams>,
    body: Bytes,
) -> AppResult<(StatusCode, Json<serde_json::Value>)> {
    if body.is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "Upload body must not be empty".into(),
        )));
    }
    if body.len() > MAX_UPLOAD_BYTES {
        return Err(AppError::Core(CoreError::Validation(format!(
            "Upload exceeds the {MAX_UPLOAD_BYTES} byte limit"
        ))));
    }

    let ext = params.ext.to_ascii_lowercase();
    if ext.is_empty() || ext.len() > 8 || !ext.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err(AppError::Core(CoreError::Validation(format!(
            "Invalid file extension '{}'",
            params.ext
        ))));
    }

    let key = format!("uploads/{}.{ext}", Uuid::new_v4());
    state.file_store.put(&key, &body).await?;

    Ok((
        StatusCode::CREATED,
        Json(serde_json::json!({ "data": { "key": key } })),
    ))
}

/// DELETE /api/v1/uploads/{*key}
///
/// Delete a stored blob. Deleting a missing key succeeds (idempotent).
pub async fn delete(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(key): Path<String>,
) -> AppResult<StatusCode> {
    state.file_store.delete(&key).await?;
    Ok(StatusCode::NO_CONTENT)
}
