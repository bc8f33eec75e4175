//! Route definitions for the `/crm/leads` resource (leads and their
//! visitor/manager chats).

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{chat, lead};
use crate::state::AppState;

/// Routes mounted at `/crm/leads`.
///
/// The lead form and the visitor chat side are public (visitors are not
/// user accounts); everything else requires the manager role.
///
/// ```text
/// POST   /                          -> submit (public lead form)
/// GET    /                          -> list (manager; ?status=&q=)
/// GET    /{id}                      -> get_by_id (manager)
/// PUT    /{id}                      -> update (manager)
/// POST   /{id}/reassign             -> reassign (manager)
///
/// GET    /{id}/chat                 -> manager_open (manager)
/// GET    /{id}/chat/messages        -> visitor_list (public)
/// POST   /{id}/chat/messages        -> visitor_send (public)
/// POST   /{id}/chat/read            -> visitor_mark_read (public)
/// POST   /{id}/chat/reply           -> manager_send (manager)
/// POST   /{id}/chat/manager-read    -> manager_mark_read (manager)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(lead::list).post(lead::submit))
        .route("/{id}", get(lead::get_by_id).put(lead::update))
        .route("/{id}/reassign", post(lead::reassign))
        // Lead chat: one per lead, visitor side public.
        .route("/{id}/chat", get(chat::manager_open))
        .route(
            "/{id}/chat/messages",
            get(chat::visitor_list).post(chat::visitor_send),
        )
        .route("/{id}/chat/read", post(chat::visitor_mark_read))
        .route("/{id}/chat/reply", post(chat::manager_send))
        .route("/{id}/chat/manager-read", post(chat::manager_mark_read))
}
