//! Route definitions for the `/uploads` resource.

use axum::routing::{delete, post};
use axum::Router;

use crate::handlers::upload;
use crate::state::AppState;

/// Routes mounted at `/uploads`. Admin only.
///
/// ```text
/// POST   /         -> upload (raw body, ?ext=)
/// DELETE /{*key}   -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(upload::upload))
        .route("/{*key}", delete(upload::delete))
}
