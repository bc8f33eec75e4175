//! Handlers for the `/faqs` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use kurort_core::error::CoreError;
use kurort_core::types::DbId;
use kurort_db::models::faq::{CreateFaq, Faq, FaqView, UpdateFaq};
use kurort_db::repositories::FaqRepo;
use kurort_db::{clamp_limit, clamp_offset};

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireAdmin;
use crate::query::{LocaleParams, SearchParams};
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Public handlers
// ---------------------------------------------------------------------------

/// GET /api/v1/faqs
///
/// List published FAQ entries in display order, localized.
pub async fn list_public(
    State(state): State<AppState>,
    Query(params): Query<LocaleParams>,
) -> AppResult<Json<DataResponse<Vec<FaqView>>>> {
    let faqs = FaqRepo::list(&state.pool, true).await?;
    let views = faqs.iter().map(|f| f.localize(params.locale)).collect();
    Ok(Json(DataResponse { data: views }))
}

/// GET /api/v1/faqs/search
///
/// Search FAQ questions in both locales, returning localized views.
pub async fn search(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> AppResult<Json<DataResponse<Vec<FaqView>>>> {
    let limit = clamp_limit(params.limit);
    let offset = clamp_offset(params.offset);
    let faqs = FaqRepo::search(&state.pool, &params.q, limit, offset).await?;
    let views = faqs.iter().map(|f| f.localize(params.locale)).collect();
    Ok(Json(DataResponse { data: views }))
}

// ---------------------------------------------------------------------------
// Admin handlers
// ---------------------------------------------------------------------------

/// POST /api/v1/faqs
pub async fn create(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Json(input): Json<CreateFaq>,
) -> AppResult<(StatusCode, Json<Faq>)> {
    let faq = FaqRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(faq)))
}

/// GET /api/v1/faqs/all
pub async fn list_all(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
) -> AppResult<Json<Vec<Faq>>> {
    let faqs = FaqRepo::list(&state.pool, false).await?;
    Ok(Json(faqs))
}

/// GET /api/v1/faqs/all/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<DbId>,
) -> AppResult<Json<Faq>> {
    let faq = FaqRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Faq", id }))?;
    Ok(Json(faq))
}

/// PUT /api/v1/faqs/{id}
pub async fn update(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateFaq>,
) -> AppResult<Json<Faq>> {
    let faq = FaqRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Faq", id }))?;
    Ok(Json(faq))
}

/// DELETE /api/v1/faqs/{id}
pub async fn delete(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = FaqRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound { entity: "Faq", id }))
    }
}
