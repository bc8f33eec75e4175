//! Route definitions for the `/about` resource (page blocks).

use axum::routing::get;
use axum::Router;

use crate::handlers::about;
use crate::state::AppState;

/// Routes mounted at `/about`.
///
/// Public lookup is by slug; admin mutation is by numeric id. Both ride
/// the same `/{param}` segment, so the handlers disambiguate by method.
///
/// ```text
/// GET    /        -> list_public (published, localized)
/// POST   /        -> create (admin)
/// GET    /all     -> list_all (admin)
/// GET    /{slug}  -> get_by_slug
/// PUT    /{id}    -> update (admin)
/// DELETE /{id}    -> delete (admin)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(about::list_public).post(about::create))
        .route("/all", get(about::list_all))
        .route(
            "/{slug}",
            get(about::get_by_slug)
                .put(about::update)
                .delete(about::delete),
        )
}
