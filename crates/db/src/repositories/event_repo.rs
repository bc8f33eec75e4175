//! Repository for the `events` table.

use sqlx::PgPool;
use kurort_core::types::DbId;

use crate::models::event::Event;

const COLUMNS: &str =
    "id, event_type, source_entity_type, source_entity_id, actor_user_id, payload, created_at";

/// Persisted platform events.
pub struct EventRepo;

impl EventRepo {
    /// Insert an event row, returning the generated ID.
    pub async fn create(
        pool: &PgPool,
        event_type: &str,
        source_entity_type: Option<&str>,
        source_entity_id: Option<DbId>,
        actor_user_id: Option<DbId>,
        payload: &serde_json::Value,
    ) -> Result<DbId, sqlx::Error> {
        sqlx::query_scalar(
            "INSERT INTO events (event_type, source_entity_type, source_entity_id, actor_user_id, payload)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING id",
        )
        .bind(event_type)
        .bind(source_entity_type)
        .bind(source_entity_id)
        .bind(actor_user_id)
        .bind(payload)
        .fetch_one(pool)
        .await
    }

    /// List recent events of a type, newest first.
    pub async fn list_by_type(
        pool: &PgPool,
        event_type: &str,
        limit: i64,
    ) -> Result<Vec<Event>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM events
             WHERE event_type = $1
             ORDER BY created_at DESC
             LIMIT $2"
        );
        sqlx::query_as::<_, Event>(&query)
            .bind(event_type)
            .bind(limit)
            .fetch_all(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Event>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM events WHERE id = $1");
        sqlx::query_as::<_, Event>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}
