//! Route definitions for the `/friends` resource (friendships and
//! their message threads).

use axum::routing::{delete, get, post};
use axum::Router;

use crate::handlers::{friendship, patient_message};
use crate::state::AppState;

/// Routes mounted at `/friends`. All require authentication.
///
/// ```text
/// GET    /                          -> list (?status=)
/// POST   /requests                  -> send_request
/// POST   /requests/{id}/respond     -> respond (accept/reject)
/// DELETE /{id}                      -> remove
///
/// GET    /{id}/messages             -> messages::list
/// POST   /{id}/messages             -> messages::send
/// POST   /{id}/messages/read        -> messages::mark_read
/// GET    /messages/unread-count     -> messages::unread_count
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(friendship::list))
        .route("/requests", post(friendship::send_request))
        .route("/requests/{id}/respond", post(friendship::respond))
        .route("/{id}", delete(friendship::remove))
        // Message thread within an accepted friendship.
        .route(
            "/{id}/messages",
            get(patient_message::list).post(patient_message::send),
        )
        .route("/{id}/messages/read", post(patient_message::mark_read))
        .route(
            "/messages/unread-count",
            get(patient_message::unread_count),
        )
}
