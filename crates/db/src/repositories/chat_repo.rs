//! Repository for the `chats` and `chat_messages` tables.

use sqlx::PgPool;
use kurort_core::types::DbId;

use crate::models::chat::{Chat, ChatMessage};

const CHAT_COLUMNS: &str = "id, lead_id, manager_id, created_at";
const MESSAGE_COLUMNS: &str = "id, chat_id, sender, body, is_read, read_at, created_at";

/// CRM chat persistence (one chat per lead).
pub struct ChatRepo;

impl ChatRepo {
    /// Get the chat for a lead, creating it if missing (idempotent).
    ///
    /// The upsert rides on `uq_chats_lead_id`; `manager_id` is only set on
    /// first creation.
    pub async fn open_for_lead(
        pool: &PgPool,
        lead_id: DbId,
        manager_id: Option<DbId>,
    ) -> Result<Chat, sqlx::Error> {
        let query = format!(
            "INSERT INTO chats (lead_id, manager_id)
             VALUES ($1, $2)
             ON CONFLICT (lead_id) DO UPDATE SET lead_id = EXCLUDED.lead_id
             RETURNING {CHAT_COLUMNS}"
        );
        sqlx::query_as::<_, Chat>(&query)
            .bind(lead_id)
            .bind(manager_id)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Chat>, sqlx::Error> {
        let query = format!("SELECT {CHAT_COLUMNS} FROM chats WHERE id = $1");
        sqlx::query_as::<_, Chat>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn find_by_lead(pool: &PgPool, lead_id: DbId) -> Result<Option<Chat>, sqlx::Error> {
        let query = format!("SELECT {CHAT_COLUMNS} FROM chats WHERE lead_id = $1");
        sqlx::query_as::<_, Chat>(&query)
            .bind(lead_id)
            .fetch_optional(pool)
            .await
    }

    /// Append a message from `sender` (`visitor` or `manager`).
    pub async fn add_message(
        pool: &PgPool,
        chat_id: DbId,
        sender: &str,
        body: &str,
    ) -> Result<ChatMessage, sqlx::Error> {
        let query = format!(
            "INSERT INTO chat_messages (chat_id, sender, body)
             VALUES ($1, $2, $3)
             RETURNING {MESSAGE_COLUMNS}"
        );
        sqlx::query_as::<_, ChatMessage>(&query)
            .bind(chat_id)
            .bind(sender)
            .bind(body)
            .fetch_one(pool)
            .await
    }

    /// List a chat's messages, oldest first, paginated.
    pub async fn list_messages(
        pool: &PgPool,
        chat_id: DbId,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<ChatMessage>, sqlx::Error> {
        let query = format!(
            "SELECT {MESSAGE_COLUMNS} FROM chat_messages
             WHERE chat_id = $1
             ORDER BY created_at ASC
             LIMIT $2 OFFSET $3"
        );
        sqlx::query_as::<_, ChatMessage>(&query)
            .bind(chat_id)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// Mark all messages from the opposite side of `reader_side` as read.
    ///
    /// Returns the number of messages marked.
    pub async fn mark_read(
        pool: &PgPool,
        chat_id: DbId,
        reader_side: &str,
    ) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE chat_messages
             SET is_read = true, read_at = NOW()
             WHERE chat_id = $1 AND sender <> $2 AND is_read = false",
        )
        .bind(chat_id)
        .bind(reader_side)
        .execute(pool)
        .await?;
        Ok(result.rows_affected())
    }
}
