//! Repository for the `patient_messages` table.

use sqlx::PgPool;
use kurort_core::types::DbId;

use crate::models::patient_message::PatientMessage;

const COLUMNS: &str = "id, friendship_id, sender_id, body, is_read, read_at, created_at";

/// Messages within a friendship thread.
pub struct PatientMessageRepo;

impl PatientMessageRepo {
    /// Append a message to a thread.
    pub async fn create(
        pool: &PgPool,
        friendship_id: DbId,
        sender_id: DbId,
        body: &str,
    ) -> Result<PatientMessage, sqlx::Error> {
        let query = format!(
            "INSERT INTO patient_messages (friendship_id, sender_id, body)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, PatientMessage>(&query)
            .bind(friendship_id)
            .bind(sender_id)
            .bind(body)
            .fetch_one(pool)
            .await
    }

    /// List a thread's messages, oldest first, paginated.
    pub async fn list_for_friendship(
        pool: &PgPool,
        friendship_id: DbId,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<PatientMessage>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM patient_messages
             WHERE friendship_id = $1
             ORDER BY created_at ASC
             LIMIT $2 OFFSET $3"
        );
        sqlx::query_as::<_, PatientMessage>(&query)
            .bind(friendship_id)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// Mark every message in a thread that was sent TO `reader_id` as read.
    ///
    /// Returns the number of messages marked (the read receipt).
    pub async fn mark_thread_read(
        pool: &PgPool,
        friendship_id: DbId,
        reader_id: DbId,
    ) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE patient_messages
             SET is_read = true, read_at = NOW()
             WHERE friendship_id = $1 AND sender_id <> $2 AND is_read = false",
        )
        .bind(friendship_id)
        .bind(reader_id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected())
    }

    /// Count unread messages addressed to a user across all their accepted
    /// threads.
    pub async fn unread_count_for_user(pool: &PgPool, user_id: DbId) -> Result<i64, sqlx::Error> {
        let count: Option<i64> = sqlx::query_scalar(
            "SELECT COUNT(*) FROM patient_messages m
             JOIN friendships f ON f.id = m.friendship_id
             WHERE (f.requester_id = $1 OR f.addressee_id = $1)
               AND m.sender_id <> $1
               AND m.is_read = false",
        )
        .bind(user_id)
        .fetch_one(pool)
        .await?;
        Ok(count.unwrap_or(0))
    }
}
