//! Route definitions for the `/moods` resource.

use axum::routing::{delete, get, post};
use axum::Router;

use crate::handlers::mood;
use crate::state::AppState;

/// Routes mounted at `/moods`.
///
/// ```text
/// GET    /              -> list_gallery (approved only, localized)
/// POST   /              -> submit (authenticated)
/// GET    /mine          -> list_mine (authenticated)
/// GET    /queue         -> moderation_queue (admin)
/// POST   /{id}/approve  -> approve (admin)
/// POST   /{id}/reject   -> reject (admin)
/// DELETE /{id}          -> delete (author or admin)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(mood::list_gallery).post(mood::submit))
        .route("/mine", get(mood::list_mine))
        .route("/queue", get(mood::moderation_queue))
        .route("/{id}/approve", post(mood::approve))
        .route("/{id}/reject", post(mood::reject))
        .route("/{id}", delete(mood::delete))
}
