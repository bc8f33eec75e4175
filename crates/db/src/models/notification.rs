//! Notification entity model.

use serde::Serialize;
use sqlx::FromRow;
use kurort_core::types::{DbId, Timestamp};

/// A row from the `notifications` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Notification {
    pub id: DbId,
    pub event_id: DbId,
    pub user_id: DbId,
    pub channel: String,
    pub is_read: bool,
    pub read_at: Option<Timestamp>,
    pub is_delivered: bool,
    pub delivered_at: Option<Timestamp>,
    pub created_at: Timestamp,
}
