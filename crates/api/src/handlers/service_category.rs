//! Handlers for the `/services` resource (treatment service categories).

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use kurort_core::error::CoreError;
use kurort_core::types::DbId;
use kurort_db::models::service_category::{
    CreateServiceCategory, ServiceCategory, ServiceCategoryView, UpdateServiceCategory,
};
use kurort_db::repositories::ServiceCategoryRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireAdmin;
use crate::query::LocaleParams;
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Public handlers
// ---------------------------------------------------------------------------

/// GET /api/v1/services
///
/// List published service categories in display order, localized.
pub async fn list_public(
    State(state): State<AppState>,
    Query(params): Query<LocaleParams>,
) -> AppResult<Json<DataResponse<Vec<ServiceCategoryView>>>> {
    let categories = ServiceCategoryRepo::list(&state.pool, true).await?;
    let views = categories
        .iter()
        .map(|c| c.localize(params.locale))
        .collect();
    Ok(Json(DataResponse { data: views }))
}

/// GET /api/v1/services/{id}
///
/// Get a single published service category, localized.
pub async fn get_public(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Query(params): Query<LocaleParams>,
) -> AppResult<Json<DataResponse<ServiceCategoryView>>> {
    let category = ServiceCategoryRepo::find_by_id(&state.pool, id)
        .await?
        .filter(|c| c.is_published)
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "ServiceCategory",
            id,
        }))?;
    Ok(Json(DataResponse {
        data: category.localize(params.locale),
    }))
}

// ---------------------------------------------------------------------------
// Admin handlers
// ---------------------------------------------------------------------------

/// POST /api/v1/services
pub async fn create(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Json(input): Json<CreateServiceCategory>,
) -> AppResult<(StatusCode, Json<ServiceCategory>)> {
    let category = ServiceCategoryRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(category)))
}

/// GET /api/v1/services/all
pub async fn list_all(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
) -> AppResult<Json<Vec<ServiceCategory>>> {
    let categories = ServiceCategoryRepo::list(&state.pool, false).await?;
    Ok(Json(categories))
}

/// PUT /api/v1/services/{id}
pub async fn update(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateServiceCategory>,
) -> AppResult<Json<ServiceCategory>> {
    let category = ServiceCategoryRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "ServiceCategory",
            id,
        }))?;
    Ok(Json(category))
}

/// DELETE /api/v1/services/{id}
pub async fn delete(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = ServiceCategoryRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "ServiceCategory",
            id,
        }))
    }
}
