use std::sync::Arc;

use kurort_core::storage::FileStore;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: kurort_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Blob storage for uploaded images and files.
    pub file_store: Arc<dyn FileStore>,
    /// Centralized event bus for publishing platform events.
    pub event_bus: Arc<kurort_events::EventBus>,
}
