pub mod about;
pub mod admin;
pub mod auth;
pub mod award;
pub mod banner;
pub mod faq;
pub mod friendship;
pub mod health;
pub mod lead;
pub mod mood;
pub mod notification;
pub mod offer;
pub mod service_category;
pub mod showcase_room;
pub mod upload;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/login                        login (public)
/// /auth/refresh                      refresh (public)
/// /auth/logout                       logout (requires auth)
///
/// /admin/users                       list, create (admin only)
/// /admin/users/{id}                  get, update, deactivate
/// /admin/users/{id}/reset-password   reset password
///
/// /banners[...]                      banner cards (public + admin)
/// /faqs[...]                         FAQ entries (public + admin)
/// /offers[...]                       special offers (public + admin)
/// /rooms[...]                        showcase room cards (public + admin)
/// /awards[...]                       certificates (public + admin)
/// /services[...]                     service categories (public + admin)
/// /about[...]                        slug-addressed page blocks (public + admin)
/// /uploads[...]                      image/blob storage (admin only)
///
/// /moods                             public gallery, submissions, moderation
///
/// /friends                           friendships and message threads
///
/// /crm/leads                         public lead form + manager CRM + chats
///
/// /notifications                     in-app notification inbox
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Authentication routes (login, refresh, logout).
        .nest("/auth", auth::router())
        // Admin routes (user management).
        .nest("/admin", admin::router())
        // Site content resources.
        .nest("/banners", banner::router())
        .nest("/faqs", faq::router())
        .nest("/offers", offer::router())
        .nest("/rooms", showcase_room::router())
        .nest("/awards", award::router())
        .nest("/services", service_category::router())
        .nest("/about", about::router())
        // Blob uploads backing the content image keys.
        .nest("/uploads", upload::router())
        // Patient mood gallery and moderation queue.
        .nest("/moods", mood::router())
        // Friendships and patient messaging.
        .nest("/friends", friendship::router())
        // CRM: public lead form, manager pipeline, lead chats.
        .nest("/crm/leads", lead::router())
        // In-app notification inbox.
        .nest("/notifications", notification::router())
}
