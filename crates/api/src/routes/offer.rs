//! Route definitions for the `/offers` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::offer;
use crate::state::AppState;

/// Routes mounted at `/offers`.
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
        .route("/", get(offer::list_public).post(offer::create))
        .route("/search", get(offer::search))
        .route("/all", get(offer::list_all))
        .route("/all/{id}", get(offer::get_by_id))
        .route(
            "/{id}",
            get(offer::get_public)
                .put(offer::update)
                .delete(offer::delete),
        )
}
