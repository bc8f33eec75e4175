//! Route definitions for the `/faqs` resource.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::faq;
use crate::state::AppState;

/// Routes mounted at `/faqs`.
///
/// ```text
/// GET    /          -> list_public (published, localized)
/// POST   /          -> create (admin)
/// GET    /search    -> search
/// GET    /all       -> list_all (admin)
/// GET    /all/{id}  -> get_by_id (admin)
/// PUT    /{id}      -> update (admin)
/// DELETE /{id}      -> delete (admin)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(faq::list_public).post(faq::create))
        .route("/search", get(faq::search))
        .route("/all", get(faq::list_all))
        .route("/all/{id}", get(faq::get_by_id))
        .route("/{id}", put(faq::update).delete(faq::delete))
}
