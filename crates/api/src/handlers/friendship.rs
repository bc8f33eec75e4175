//! Handlers for the `/friends` resource (patient friendships).
//!
//! A friendship starts as a `pending` request and becomes a private
//! message thread only once the addressee accepts it. Requests and
//! acceptances publish events that the notification router turns into
//! in-app notifications.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use kurort_core::error::CoreError;
use kurort_core::types::DbId;
use kurort_db::models::friendship::{
    Friendship, STATUS_ACCEPTED, STATUS_PENDING, STATUS_REJECTED,
};
use kurort_db::repositories::{FriendshipRepo, UserRepo};
use kurort_events::PlatformEvent;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / query types
// ---------------------------------------------------------------------------

/// Request body for `POST /friends/requests`.
#[derive(Debug, Deserialize)]
pub struct FriendRequestBody {
    pub addressee_id: DbId,
}

/// Request body for `POST /friends/requests/{id}/respond`.
#[derive(Debug, Deserialize)]
pub struct RespondBody {
    pub accept: bool,
}

/// Query parameters for `GET /friends` (`?status=pending|accepted|rejected`).
#[derive(Debug, Deserialize)]
pub struct FriendListParams {
    pub status: Option<String>,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/v1/friends/requests
///
/// Send a friend request to another patient. A request to yourself is a
/// validation error; a pre-existing relation in either direction (any
/// status) is a conflict.
pub async fn send_request(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<FriendRequestBody>,
) -> AppResult<(StatusCode, Json<Friendship>)> {
    if input.addressee_id == auth.user_id {
        return Err(AppError::Core(CoreError::Validation(
            "Cannot send a friend request to yourself".into(),
        )));
    }

    let addressee = UserRepo::find_by_id(&state.pool, input.addressee_id)
        .await?
        .filter(|u| u.is_active)
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "User",
            id: input.addressee_id,
        }))?;

    // A reverse pending request also lands here: the unique pair index
    // alone would catch it, but an explicit check gives a clearer message.
    if let Some(existing) =
        FriendshipRepo::find_between(&state.pool, auth.user_id, addressee.id).await?
    {
        let msg = match existing.status.as_str() {
            STATUS_PENDING => "A friend request between these users is already pending",
            STATUS_ACCEPTED => "These users are already friends",
            _ => "A previous request between these users exists",
        };
        return Err(AppError::Core(CoreError::Conflict(msg.into())));
    }

    let friendship = FriendshipRepo::create_request(&state.pool, auth.user_id, addressee.id).await?;

    state.event_bus.publish(
        PlatformEvent::new("friendship.requested")
            .with_source("friendship", friendship.id)
            .with_actor(auth.user_id)
            .with_payload(serde_json::json!({ "addressee_id": friendship.addressee_id })),
    );

    Ok((StatusCode::CREATED, Json(friendship)))
}

/// POST /api/v1/friends/requests/{id}/respond
///
/// Accept or reject a pending request. Only the addressee may respond,
/// and only while the request is still pending.
pub async fn respond(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<RespondBody>,
) -> AppResult<Json<Friendship>> {
    let new_status = if input.accept {
        STATUS_ACCEPTED
    } else {
        STATUS_REJECTED
    };

    let friendship = FriendshipRepo::respond(&state.pool, id, auth.user_id, new_status)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::Conflict(
                "Request does not exist, is not pending, or you are not its addressee".into(),
            ))
        })?;

    let event_type = if input.accept {
        "friendship.accepted"
    } else {
        "friendship.rejected"
    };
    state.event_bus.publish(
        PlatformEvent::new(event_type)
            .with_source("friendship", friendship.id)
            .with_actor(auth.user_id)
            .with_payload(serde_json::json!({ "requester_id": friendship.requester_id })),
    );

    Ok(Json(friendship))
}

/// GET /api/v1/friends
///
/// List the authenticated user's friendships, optionally filtered by
/// status (`?status=pending` shows the request inbox/outbox).
pub async fn list(
    auth: AuthUser,
    State(state): State<AppState>,
    Query(params): Query<FriendListParams>,
) -> AppResult<Json<Vec<Friendship>>> {
    let friendships =
        FriendshipRepo::list_for_user(&state.pool, auth.user_id, params.status.as_deref()).await?;
    Ok(Json(friendships))
}

/// DELETE /api/v1/friends/{id}
///
/// Remove a friendship (or withdraw a request). Either party may do
/// this; the message thread is deleted with it.
pub async fn remove(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let friendship = FriendshipRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Friendship",
            id,
        }))?;

    if !friendship.involves(auth.user_id) {
        return Err(AppError::Core(CoreError::Forbidden(
            "Only a party to the friendship may remove it".into(),
        )));
    }

    FriendshipRepo::delete(&state.pool, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
