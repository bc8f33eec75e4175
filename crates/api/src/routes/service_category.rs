//! Route definitions for the `/services` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::service_category;
use crate::state::AppState;

/// Routes mounted at `/services`.
///
/// ```text
/// GET    /      -> list_public (published, localized)
/// POST   /      -> create (admin)
/// GET    /all   -> list_all (admin)
/// GET    /{id}  -> get_public
/// PUT    /{id}  -> update (admin)
/// DELETE /{id}  -> delete (admin)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(service_category::list_public).post(service_category::create),
        )
        .route("/all", get(service_category::list_all))
        .route(
            "/{id}",
            get(service_category::get_public)
                .put(service_category::update)
                .delete(service_category::delete),
        )
}
