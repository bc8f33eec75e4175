//! Route definitions for the `/banners` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::banner;
use crate::state::AppState;

/// Routes mounted at `/banners`.
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
        .route("/", get(banner::list_public).post(banner::create))
        .route("/search", get(banner::search))
        .route("/all", get(banner::list_all))
        .route("/all/{id}", get(banner::get_by_id))
        .route(
            "/{id}",
            get(banner::get_public)
                .put(banner::update)
                .delete(banner::delete),
        )
}
