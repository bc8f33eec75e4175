//! CRM chat and chat message models.

use serde::Serialize;
use sqlx::FromRow;
use kurort_core::types::{DbId, Timestamp};

/// Chat message sender sides stored in `chat_messages.sender`.
pub const SENDER_VISITOR: &str = "visitor";
pub const SENDER_MANAGER: &str = "manager";

/// A row from the `chats` table. One chat per lead.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Chat {
    pub id: DbId,
    pub lead_id: DbId,
    pub manager_id: Option<DbId>,
    pub created_at: Timestamp,
}

/// A row from the `chat_messages` table.
///
/// `is_read` is set by the opposite side: the manager reading visitor
/// messages and vice versa.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ChatMessage {
    pub id: DbId,
    pub chat_id: DbId,
    pub sender: String,
    pub body: String,
    pub is_read: bool,
    pub read_at: Option<Timestamp>,
    pub created_at: Timestamp,
}
