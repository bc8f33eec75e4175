//! Route definitions for the `/awards` resource.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::award;
use crate::state::AppState;

/// Routes mounted at `/awards`.
///
/// ```text
/// GET    /      -> list_public (published, localized)
/// POST   /      -> create (admin)
/// GET    /all   -> list_all (admin)
/// PUT    /{id}  -> update (admin)
/// DELETE /{id}  -> delete (admin)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(award::list_public).post(award::create))
        .route("/all", get(award::list_all))
        .route("/{id}", put(award::update).delete(award::delete))
}
