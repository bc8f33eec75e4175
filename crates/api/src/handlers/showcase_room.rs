//! Handlers for the `/rooms` resource (showcase room cards).

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use kurort_core::error::CoreError;
use kurort_core::types::DbId;
use kurort_db::models::showcase_room::{
    CreateShowcaseRoom, ShowcaseRoom, ShowcaseRoomView, UpdateShowcaseRoom,
};
use kurort_db::repositories::ShowcaseRoomRepo;
use kurort_db::{clamp_limit, clamp_offset};

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireAdmin;
use crate::query::{LocaleParams, SearchParams};
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Public handlers
// ---------------------------------------------------------------------------

/// GET /api/v1/rooms
///
/// List published room cards, localized.
pub async fn list_public(
    State(state): State<AppState>,
    Query(params): Query<LocaleParams>,
) -> AppResult<Json<DataResponse<Vec<ShowcaseRoomView>>>> {
    let rooms =
        ShowcaseRoomRepo::list(&state.pool, true, clamp_limit(None), clamp_offset(None)).await?;
    let views = rooms.iter().map(|r| r.localize(params.locale)).collect();
    Ok(Json(DataResponse { data: views }))
}

/// GET /api/v1/rooms/{id}
///
/// Get a single published room card, localized.
pub async fn get_public(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Query(params): Query<LocaleParams>,
) -> AppResult<Json<DataResponse<ShowcaseRoomView>>> {
    let room = ShowcaseRoomRepo::find_by_id(&state.pool, id)
        .await?
        .filter(|r| r.is_published)
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "ShowcaseRoom",
            id,
        }))?;
    Ok(Json(DataResponse {
        data: room.localize(params.locale),
    }))
}

/// GET /api/v1/rooms/search
///
/// Search room names in both locales, returning localized views.
pub async fn search(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> AppResult<Json<DataResponse<Vec<ShowcaseRoomView>>>> {
    let limit = clamp_limit(params.limit);
    let offset = clamp_offset(params.offset);
    let rooms = ShowcaseRoomRepo::search(&state.pool, &params.q, limit, offset).await?;
    let views = rooms.iter().map(|r| r.localize(params.locale)).collect();
    Ok(Json(DataResponse { data: views }))
}

// ---------------------------------------------------------------------------
// Admin handlers
// ---------------------------------------------------------------------------

/// POST /api/v1/rooms
pub async fn create(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Json(input): Json<CreateShowcaseRoom>,
) -> AppResult<(StatusCode, Json<ShowcaseRoom>)> {
    let room = ShowcaseRoomRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(room)))
}

/// GET /api/v1/rooms/all
pub async fn list_all(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
) -> AppResult<Json<Vec<ShowcaseRoom>>> {
    let rooms =
        ShowcaseRoomRepo::list(&state.pool, false, clamp_limit(None), clamp_offset(None)).await?;
    Ok(Json(rooms))
}

/// GET /api/v1/rooms/all/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<DbId>,
) -> AppResult<Json<ShowcaseRoom>> {
    let room = ShowcaseRoomRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "ShowcaseRoom",
            id,
        }))?;
    Ok(Json(room))
}

/// PUT /api/v1/rooms/{id}
pub async fn update(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateShowcaseRoom>,
) -> AppResult<Json<ShowcaseRoom>> {
    let room = ShowcaseRoomRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "ShowcaseRoom",
            id,
        }))?;
    Ok(Json(room))
}

/// DELETE /api/v1/rooms/{id}
pub async fn delete(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = ShowcaseRoomRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "ShowcaseRoom",
            id,
        }))
    }
}
