//! Handlers for the `/awards` resource (certificates and diplomas).

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use kurort_core::error::CoreError;
use kurort_core::types::DbId;
use kurort_db::models::award::{Award, AwardView, CreateAward, UpdateAward};
use kurort_db::repositories::AwardRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireAdmin;
use crate::query::LocaleParams;
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Public handlers
// ---------------------------------------------------------------------------

/// GET /api/v1/awards
///
/// List published awards in display order, localized.
pub async fn list_public(
    State(state): State<AppState>,
    Query(params): Query<LocaleParams>,
) -> AppResult<Json<DataResponse<Vec<AwardView>>>> {
    let awards = AwardRepo::list(&state.pool, true).await?;
    let views = awards.iter().map(|a| a.localize(params.locale)).collect();
    Ok(Json(DataResponse { data: views }))
}

// ---------------------------------------------------------------------------
// Admin handlers
// ---------------------------------------------------------------------------

/// POST /api/v1/awards
pub async fn create(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Json(input): Json<CreateAward>,
) -> AppResult<(StatusCode, Json<Award>)> {
    let award = AwardRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(award)))
}

/// GET /api/v1/awards/all
pub async fn list_all(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
) -> AppResult<Json<Vec<Award>>> {
    let awards = AwardRepo::list(&state.pool, false).await?;
    Ok(Json(awards))
}

/// PUT /api/v1/awards/{id}
pub async fn update(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateAward>,
) -> AppResult<Json<Award>> {
    let award = AwardRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Award",
            id,
        }))?;
    Ok(Json(award))
}

/// DELETE /api/v1/awards/{id}
pub async fn delete(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = AwardRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Award",
            id,
        }))
    }
}
