//! Handlers for the `/banners` resource.
//!
//! Public endpoints serve published banners projected into a single
//! locale; admin endpoints operate on the full bilingual rows.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use kurort_core::error::CoreError;
use kurort_core::types::DbId;
use kurort_db::models::banner::{Banner, BannerView, CreateBanner, UpdateBanner};
use kurort_db::repositories::BannerRepo;
use kurort_db::{clamp_limit, clamp_offset};

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireAdmin;
use crate::query::{LocaleParams, SearchParams};
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Public handlers
// ---------------------------------------------------------------------------

/// GET /api/v1/banners
///
/// List published banners in display order, localized.
pub async fn list_public(
    State(state): State<AppState>,
    Query(params): Query<LocaleParams>,
) -> AppResult<Json<DataResponse<Vec<BannerView>>>> {
    let banners = BannerRepo::list(&state.pool, true).await?;
    let views = banners.iter().map(|b| b.localize(params.locale)).collect();
    Ok(Json(DataResponse { data: views }))
}

/// GET /api/v1/banners/{id}
///
/// Get a single published banner, localized. Unpublished banners are
/// indistinguishable from missing ones.
pub async fn get_public(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Query(params): Query<LocaleParams>,
) -> AppResult<Json<DataResponse<BannerView>>> {
    let banner = BannerRepo::find_by_id(&state.pool, id)
        .await?
        .filter(|b| b.is_published)
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Banner",
            id,
        }))?;
    Ok(Json(DataResponse {
        data: banner.localize(params.locale),
    }))
}

/// GET /api/v1/banners/search
///
/// Search banner titles in both locales, returning localized views.
pub async fn search(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> AppResult<Json<DataResponse<Vec<BannerView>>>> {
    let limit = clamp_limit(params.limit);
    let offset = clamp_offset(params.offset);
    let banners = BannerRepo::search(&state.pool, &params.q, limit, offset).await?;
    let views = banners.iter().map(|b| b.localize(params.locale)).collect();
    Ok(Json(DataResponse { data: views }))
}

// ---------------------------------------------------------------------------
// Admin handlers
// ---------------------------------------------------------------------------

/// POST /api/v1/banners
pub async fn create(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Json(input): Json<CreateBanner>,
) -> AppResult<(StatusCode, Json<Banner>)> {
    let banner = BannerRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(banner)))
}

/// GET /api/v1/banners/all
///
/// List every banner including unpublished ones, with both locales.
pub async fn list_all(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
) -> AppResult<Json<Vec<Banner>>> {
    let banners = BannerRepo::list(&state.pool, false).await?;
    Ok(Json(banners))
}

/// GET /api/v1/banners/all/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<DbId>,
) -> AppResult<Json<Banner>> {
    let banner =
        BannerRepo::find_by_id(&state.pool, id)
            .await?
            .ok_or(AppError::Core(CoreError::NotFound {
                entity: "Banner",
                id,
            }))?;
    Ok(Json(banner))
}

/// PUT /api/v1/banners/{id}
pub async fn update(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateBanner>,
) -> AppResult<Json<Banner>> {
    let banner =
        BannerRepo::update(&state.pool, id, &input)
            .await?
            .ok_or(AppError::Core(CoreError::NotFound {
                entity: "Banner",
                id,
            }))?;
    Ok(Json(banner))
}

/// DELETE /api/v1/banners/{id}
pub async fn delete(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = BannerRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Banner",
            id,
        }))
    }
}
