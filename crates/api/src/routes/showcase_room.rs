//! Route definitions for the `/rooms` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::showcase_room;
use crate::state::AppState;

/// Routes mounted at `/rooms`.
///
/// ```text
/// GET    /          -> list_public (published, localized)
/// POST   /          -> create (admin)
/// GET    /search    -> search
/// GET    /all       -> list_all (admin)
/// GET    /all/{id}  -> get_by_id (admin)
/// GET    /{id}      -> get_public
/// PUT    /{id}      -> update (admin)
/// DELETE /{id}      -> delete (admin)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(showcase_room::list_public).post(showcase_room::create),
        )
        .route("/search", get(showcase_room::search))
        .route("/all", get(showcase_room::list_all))
        .route("/all/{id}", get(showcase_room::get_by_id))
        .route(
            "/{id}",
            get(showcase_room::get_public)
                .put(showcase_room::update)
                .delete(showcase_room::delete),
        )
}
