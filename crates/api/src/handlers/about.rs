//! Handlers for the `/about` resource (slug-addressed page blocks).

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use kurort_core::error::CoreError;
use kurort_core::types::DbId;
use kurort_db::models::about::{AboutPage, AboutPageView, CreateAboutPage, UpdateAboutPage};
use kurort_db::repositories::AboutRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireAdmin;
use crate::query::LocaleParams;
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Public handlers
// ---------------------------------------------------------------------------

/// GET /api/v1/about
///
/// List published about-page blocks, localized.
pub async fn list_public(
    State(state): State<AppState>,
    Query(params): Query<LocaleParams>,
) -> AppResult<Json<DataResponse<Vec<AboutPageView>>>> {
    let pages = AboutRepo::list(&state.pool, true).await?;
    let views = pages.iter().map(|p| p.localize(params.locale)).collect();
    Ok(Json(DataResponse { data: views }))
}

/// GET /api/v1/about/{slug}
///
/// Get a single published page block by its slug, localized.
pub async fn get_by_slug(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    Query(params): Query<LocaleParams>,
) -> AppResult<Json<DataResponse<AboutPageView>>> {
    // Missing and unpublished blocks both surface as a 404.
    let page = AboutRepo::find_by_slug(&state.pool, &slug)
        .await?
        .filter(|p| p.is_published)
        .ok_or_else(|| AppError::NotFound(format!("About page '{slug}' not found")))?;
    Ok(Json(DataResponse {
        data: page.localize(params.locale),
    }))
}

// ---------------------------------------------------------------------------
// Admin handlers
// ---------------------------------------------------------------------------

/// POST /api/v1/about
pub async fn create(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Json(input): Json<CreateAboutPage>,
) -> AppResult<(StatusCode, Json<AboutPage>)> {
    let page = AboutRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(page)))
}

/// GET /api/v1/about/all
pub async fn list_all(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
) -> AppResult<Json<Vec<AboutPage>>> {
    let pages = AboutRepo::list(&state.pool, false).await?;
    Ok(Json(pages))
}

/// PUT /api/v1/about/{id}
pub async fn update(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateAboutPage>,
) -> AppResult<Json<AboutPage>> {
    let page = AboutRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "AboutPage",
            id,
        }))?;
    Ok(Json(page))
}

/// DELETE /api/v1/about/{id}
pub async fn delete(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = AboutRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "AboutPage",
            id,
        }))
    }
}
