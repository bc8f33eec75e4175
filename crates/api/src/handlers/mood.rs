//! Handlers for the `/moods` resource (patient photo gallery).
//!
//! Patients submit moods which enter the moderation queue; only moods
//! an admin approved (`ok`) appear in the public gallery. Moderation
//! verdicts publish `mood.approved` / `mood.rejected` events so the
//! author gets notified.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use kurort_core::error::CoreError;
use kurort_core::moderation::ModerationStatus;
use kurort_core::roles::ROLE_ADMIN;
use kurort_core::types::DbId;
use kurort_db::models::mood::{CreateMood, Mood, MoodView};
use kurort_db::repositories::MoodRepo;
use kurort_db::{clamp_limit, clamp_offset};
use kurort_events::PlatformEvent;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::middleware::rbac::RequireAdmin;
use crate::query::PaginationParams;
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Query types
// ---------------------------------------------------------------------------

/// Query parameters for the admin moderation queue.
#[derive(Debug, Deserialize)]
pub struct ModerationQueueParams {
    /// Filter by moderation status; omitted means all statuses.
    pub status: Option<ModerationStatus>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

/// Combined locale + pagination for the public gallery.
#[derive(Debug, Deserialize)]
pub struct GalleryParams {
    #[serde(default)]
    pub locale: kurort_core::locale::Locale,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

// ---------------------------------------------------------------------------
// Public / patient handlers
// ---------------------------------------------------------------------------

/// GET /api/v1/moods
///
/// Public gallery: approved moods only, localized, newest first.
pub async fn list_gallery(
    State(state): State<AppState>,
    Query(params): Query<GalleryParams>,
) -> AppResult<Json<DataResponse<Vec<MoodView>>>> {
    let limit = clamp_limit(params.limit);
    let offset = clamp_offset(params.offset);
    let moods = MoodRepo::list_by_status(
        &state.pool,
        Some(ModerationStatus::Ok.as_str()),
        limit,
        offset,
    )
    .await?;
    let views = moods.iter().map(|m| m.localize(params.locale)).collect();
    Ok(Json(DataResponse { data: views }))
}

/// POST /api/v1/moods
///
/// Submit a mood. Any authenticated user may submit; the new mood
/// starts in the `on_moderate` queue.
pub async fn submit(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<CreateMood>,
) -> AppResult<(StatusCode, Json<Mood>)> {
    let mood = MoodRepo::create(&state.pool, auth.user_id, &input).await?;
    Ok((StatusCode::CREATED, Json(mood)))
}

/// GET /api/v1/moods/mine
///
/// List the authenticated user's own moods in every status.
pub async fn list_mine(
    auth: AuthUser,
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> AppResult<Json<DataResponse<Vec<Mood>>>> {
    let limit = clamp_limit(params.limit);
    let offset = clamp_offset(params.offset);
    let moods = MoodRepo::list_by_author(&state.pool, auth.user_id, limit, offset).await?;
    Ok(Json(DataResponse { data: moods }))
}

/// DELETE /api/v1/moods/{id}
///
/// Delete a mood. Allowed for the author or an admin.
pub async fn delete(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let mood = MoodRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Mood", id }))?;

    if mood.author_id != auth.user_id && auth.role != ROLE_ADMIN {
        return Err(AppError::Core(CoreError::Forbidden(
            "Only the author or an admin may delete a mood".into(),
        )));
    }

    MoodRepo::delete(&state.pool, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

// ---------------------------------------------------------------------------
// Admin moderation handlers
// ---------------------------------------------------------------------------

/// GET /api/v1/moods/queue
///
/// Admin moderation queue, optionally filtered by status.
pub async fn moderation_queue(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Query(params): Query<ModerationQueueParams>,
) -> AppResult<Json<DataResponse<Vec<Mood>>>> {
    let limit = clamp_limit(params.limit);
    let offset = clamp_offset(params.offset);
    let status = params.status.map(|s| s.as_str());
    let moods = MoodRepo::list_by_status(&state.pool, status, limit, offset).await?;
    Ok(Json(DataResponse { data: moods }))
}

/// POST /api/v1/moods/{id}/approve
///
/// Approve a mood for the public gallery.
pub async fn approve(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    Path(id): Path<DbId>,
) -> AppResult<Json<Mood>> {
    moderate(&state, admin.user_id, id, ModerationStatus::Ok).await
}

/// POST /api/v1/moods/{id}/reject
///
/// Reject a mood. Rejected moods stay visible to their author only.
pub async fn reject(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    Path(id): Path<DbId>,
) -> AppResult<Json<Mood>> {
    moderate(&state, admin.user_id, id, ModerationStatus::Reject).await
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Apply a moderation verdict and publish the matching event.
async fn moderate(
    state: &AppState,
    admin_id: DbId,
    id: DbId,
    verdict: ModerationStatus,
) -> AppResult<Json<Mood>> {
    let mood = MoodRepo::set_moderation_status(&state.pool, id, verdict.as_str())
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Mood", id }))?;

    let event_type = match verdict {
        ModerationStatus::Ok => "mood.approved",
        _ => "mood.rejected",
    };
    state.event_bus.publish(
        PlatformEvent::new(event_type)
            .with_source("mood", mood.id)
            .with_actor(admin_id)
            .with_payload(serde_json::json!({ "author_id": mood.author_id })),
    );

    Ok(Json(mood))
}
