//! Handlers for messages inside a friendship thread.
//!
//! Mounted under `/friends/{id}/messages`. Every handler verifies that
//! the caller is a party to the friendship and that it is `accepted` --
//! pending or rejected relations have no thread.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use kurort_core::error::CoreError;
use kurort_core::types::DbId;
use kurort_db::models::friendship::{Friendship, STATUS_ACCEPTED};
use kurort_db::models::patient_message::PatientMessage;
use kurort_db::repositories::{FriendshipRepo, PatientMessageRepo};
use kurort_db::{clamp_limit, clamp_offset};
use kurort_events::PlatformEvent;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::query::PaginationParams;
use crate::response::DataResponse;
use crate::state::AppState;

/// Request body for `POST /friends/{id}/messages`.
#[derive(Debug, Deserialize)]
pub struct SendMessageBody {
    pub body: String,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/v1/friends/{id}/messages
///
/// Send a message in an accepted friendship thread.
pub async fn send(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(friendship_id): Path<DbId>,
    Json(input): Json<SendMessageBody>,
) -> AppResult<(StatusCode, Json<PatientMessage>)> {
    if input.body.trim().is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "Message body must not be empty".into(),
        )));
    }

    let friendship = load_accepted_thread(&state, friendship_id, auth.user_id).await?;

    let message =
        PatientMessageRepo::create(&state.pool, friendship.id, auth.user_id, &input.body).await?;

    state.event_bus.publish(
        PlatformEvent::new("message.sent")
            .with_source("patient_message", message.id)
            .with_actor(auth.user_id)
            .with_payload(serde_json::json!({
                "friendship_id": friendship.id,
                "recipient_id": friendship.other_party(auth.user_id),
            })),
    );

    Ok((StatusCode::CREATED, Json(message)))
}

/// GET /api/v1/friends/{id}/messages
///
/// List the thread's messages, oldest first.
pub async fn list(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(friendship_id): Path<DbId>,
    Query(params): Query<PaginationParams>,
) -> AppResult<Json<DataResponse<Vec<PatientMessage>>>> {
    let friendship = load_accepted_thread(&state, friendship_id, auth.user_id).await?;

    let limit = clamp_limit(params.limit);
    let offset = clamp_offset(params.offset);
    let messages =
        PatientMessageRepo::list_for_friendship(&state.pool, friendship.id, limit, offset).await?;
    Ok(Json(DataResponse { data: messages }))
}

/// POST /api/v1/friends/{id}/messages/read
///
/// Mark every message addressed to the caller in this thread as read.
/// Returns the number of messages marked.
pub async fn mark_read(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(friendship_id): Path<DbId>,
) -> AppResult<Json<serde_json::Value>> {
    let friendship = load_accepted_thread(&state, friendship_id, auth.user_id).await?;

    let marked =
        PatientMessageRepo::mark_thread_read(&state.pool, friendship.id, auth.user_id).await?;

    Ok(Json(serde_json::json!({
        "data": { "marked_read": marked }
    })))
}

/// GET /api/v1/friends/messages/unread-count
///
/// Count unread messages addressed to the caller across all threads.
pub async fn unread_count(
    auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<Json<serde_json::Value>> {
    let count = PatientMessageRepo::unread_count_for_user(&state.pool, auth.user_id).await?;

    Ok(Json(serde_json::json!({
        "data": { "count": count }
    })))
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Load a friendship and verify the caller may use its message thread.
async fn load_accepted_thread(
    state: &AppState,
    friendship_id: DbId,
    user_id: DbId,
) -> AppResult<Friendship> {
    let friendship = FriendshipRepo::find_by_id(&state.pool, friendship_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Friendship",
            id: friendship_id,
        }))?;

    if !friendship.involves(user_id) {
        return Err(AppError::Core(CoreError::Forbidden(
            "You are not a party to this friendship".into(),
        )));
    }

    if friendship.status != STATUS_ACCEPTED {
        return Err(AppError::Core(CoreError::Conflict(
            "The friendship is not accepted; there is no message thread".into(),
        )));
    }

    Ok(friendship)
}
