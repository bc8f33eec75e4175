//! Handlers for lead chats (`/crm/leads/{id}/chat`).
//!
//! The visitor side is public and keyed by lead id, because visitors
//! are not user accounts. The manager side requires the manager role.
//! Visitor messages publish `chat.message.sent` carrying the assigned
//! manager so they get notified; manager messages publish the same
//! event with no target (there is no visitor account to notify).

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use kurort_core::error::CoreError;
use kurort_core::types::DbId;
use kurort_db::models::chat::{Chat, ChatMessage, SENDER_MANAGER, SENDER_VISITOR};
use kurort_db::repositories::{ChatRepo, LeadRepo};
use kurort_db::{clamp_limit, clamp_offset};
use kurort_events::PlatformEvent;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireManager;
use crate::query::PaginationParams;
use crate::response::DataResponse;
use crate::state::AppState;

/// Request body for sending a chat message (either side).
#[derive(Debug, Deserialize)]
pub struct ChatMessageBody {
    pub body: String,
}

// ---------------------------------------------------------------------------
// Visitor handlers (public, keyed by lead id)
// ---------------------------------------------------------------------------

/// POST /api/v1/crm/leads/{id}/chat/messages
///
/// Visitor sends a message. Opens the chat on first use.
pub async fn visitor_send(
    State(state): State<AppState>,
    Path(lead_id): Path<DbId>,
    Json(input): Json<ChatMessageBody>,
) -> AppResult<(StatusCode, Json<ChatMessage>)> {
    let chat = open_chat(&state, lead_id).await?;
    let message = send_message(&state, &chat, SENDER_VISITOR, &input.body).await?;
    Ok((StatusCode::CREATED, Json(message)))
}

/// GET /api/v1/crm/leads/{id}/chat/messages
///
/// Visitor view of the conversation, oldest first.
pub async fn visitor_list(
    State(state): State<AppState>,
    Path(lead_id): Path<DbId>,
    Query(params): Query<PaginationParams>,
) -> AppResult<Json<DataResponse<Vec<ChatMessage>>>> {
    let chat = open_chat(&state, lead_id).await?;
    list_messages(&state, &chat, params).await
}

/// POST /api/v1/crm/leads/{id}/chat/read
///
/// Visitor marks manager messages as read.
pub async fn visitor_mark_read(
    State(state): State<AppState>,
    Path(lead_id): Path<DbId>,
) -> AppResult<Json<serde_json::Value>> {
    let chat = open_chat(&state, lead_id).await?;
    let marked = ChatRepo::mark_read(&state.pool, chat.id, SENDER_VISITOR).await?;
    Ok(Json(serde_json::json!({
        "data": { "marked_read": marked }
    })))
}

// ---------------------------------------------------------------------------
// Manager handlers
// ---------------------------------------------------------------------------

/// GET /api/v1/crm/leads/{id}/chat
///
/// Manager opens (or fetches) the chat for a lead.
pub async fn manager_open(
    State(state): State<AppState>,
    RequireManager(_manager): RequireManager,
    Path(lead_id): Path<DbId>,
) -> AppResult<Json<Chat>> {
    let chat = open_chat(&state, lead_id).await?;
    Ok(Json(chat))
}

/// POST /api/v1/crm/leads/{id}/chat/reply
///
/// Manager replies in the lead's chat.
pub async fn manager_send(
    State(state): State<AppState>,
    RequireManager(_manager): RequireManager,
    Path(lead_id): Path<DbId>,
    Json(input): Json<ChatMessageBody>,
) -> AppResult<(StatusCode, Json<ChatMessage>)> {
    let chat = open_chat(&state, lead_id).await?;
    let message = send_message(&state, &chat, SENDER_MANAGER, &input.body).await?;
    Ok((StatusCode::CREATED, Json(message)))
}

/// POST /api/v1/crm/leads/{id}/chat/manager-read
///
/// Manager marks visitor messages as read.
pub async fn manager_mark_read(
    State(state): State<AppState>,
    RequireManager(_manager): RequireManager,
    Path(lead_id): Path<DbId>,
) -> AppResult<Json<serde_json::Value>> {
    let chat = open_chat(&state, lead_id).await?;
    let marked = ChatRepo::mark_read(&state.pool, chat.id, SENDER_MANAGER).await?;
    Ok(Json(serde_json::json!({
        "data": { "marked_read": marked }
    })))
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Resolve the lead and open (or fetch) its chat.
async fn open_chat(state: &AppState, lead_id: DbId) -> AppResult<Chat> {
    let lead = LeadRepo::find_by_id(&state.pool, lead_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Lead",
            id: lead_id,
        }))?;

    let chat = ChatRepo::open_for_lead(&state.pool, lead.id, lead.assigned_manager_id).await?;
    Ok(chat)
}

/// Validate, store, and announce a chat message from either side.
async fn send_message(
    state: &AppState,
    chat: &Chat,
    sender: &str,
    body: &str,
) -> AppResult<ChatMessage> {
    if body.trim().is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "Message body must not be empty".into(),
        )));
    }

    let message = ChatRepo::add_message(&state.pool, chat.id, sender, body).await?;

    // Only visitor messages target a user; the visitor has no account.
    let manager_target = if sender == SENDER_VISITOR {
        chat.manager_id
    } else {
        None
    };
    state.event_bus.publish(
        PlatformEvent::new("chat.message.sent")
            .with_source("chat", chat.id)
            .with_payload(serde_json::json!({
                "lead_id": chat.lead_id,
                "sender": sender,
                "manager_id": manager_target,
            })),
    );

    Ok(message)
}

/// Shared message listing for both sides.
async fn list_messages(
    state: &AppState,
    chat: &Chat,
    params: PaginationParams,
) -> AppResult<Json<DataResponse<Vec<ChatMessage>>>> {
    let limit = clamp_limit(params.limit);
    let offset = clamp_offset(params.offset);
    let messages = ChatRepo::list_messages(&state.pool, chat.id, limit, offset).await?;
    Ok(Json(DataResponse { data: messages }))
}
