//! Handlers for the `/offers` resource (special offers and promotions).

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use kurort_core::error::CoreError;
use kurort_core::types::DbId;
use kurort_db::models::offer::{CreateOffer, Offer, OfferView, UpdateOffer};
use kurort_db::repositories::OfferRepo;
use kurort_db::{clamp_limit, clamp_offset};

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireAdmin;
use crate::query::{LocaleParams, SearchParams};
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Public handlers
// ---------------------------------------------------------------------------

/// GET /api/v1/offers
///
/// List published offers, localized.
pub async fn list_public(
    State(state): State<AppState>,
    Query(params): Query<LocaleParams>,
) -> AppResult<Json<DataResponse<Vec<OfferView>>>> {
    let offers =
        OfferRepo::list(&state.pool, true, clamp_limit(None), clamp_offset(None)).await?;
    let views = offers.iter().map(|o| o.localize(params.locale)).collect();
    Ok(Json(DataResponse { data: views }))
}

/// GET /api/v1/offers/{id}
///
/// Get a single published offer, localized.
pub async fn get_public(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Query(params): Query<LocaleParams>,
) -> AppResult<Json<DataResponse<OfferView>>> {
    let offer = OfferRepo::find_by_id(&state.pool, id)
        .await?
        .filter(|o| o.is_published)
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Offer",
            id,
        }))?;
    Ok(Json(DataResponse {
        data: offer.localize(params.locale),
    }))
}

/// GET /api/v1/offers/search
///
/// Search offer titles in both locales, returning localized views.
pub async fn search(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> AppResult<Json<DataResponse<Vec<OfferView>>>> {
    let limit = clamp_limit(params.limit);
    let offset = clamp_offset(params.offset);
    let offers = OfferRepo::search(&state.pool, &params.q, limit, offset).await?;
    let views = offers.iter().map(|o| o.localize(params.locale)).collect();
    Ok(Json(DataResponse { data: views }))
}

// ---------------------------------------------------------------------------
// Admin handlers
// ---------------------------------------------------------------------------

/// POST /api/v1/offers
pub async fn create(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Json(input): Json<CreateOffer>,
) -> AppResult<(StatusCode, Json<Offer>)> {
    let offer = OfferRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(offer)))
}

/// GET /api/v1/offers/all
pub async fn list_all(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
) -> AppResult<Json<Vec<Offer>>> {
    let offers =
        OfferRepo::list(&state.pool, false, clamp_limit(None), clamp_offset(None)).await?;
    Ok(Json(offers))
}

/// GET /api/v1/offers/all/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<DbId>,
) -> AppResult<Json<Offer>> {
    let offer = OfferRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Offer",
            id,
        }))?;
    Ok(Json(offer))
}

/// PUT /api/v1/offers/{id}
pub async fn update(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateOffer>,
) -> AppResult<Json<Offer>> {
    let offer = OfferRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Offer",
            id,
        }))?;
    Ok(Json(offer))
}

/// DELETE /api/v1/offers/{id}
pub async fn delete(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = OfferRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Offer",
            id,
        }))
    }
}
