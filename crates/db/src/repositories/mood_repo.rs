//! Repository for the `moods` table.

use sqlx::PgPool;
use kurort_core::types::DbId;

use crate::models::mood::{CreateMood, Mood};

const COLUMNS: &str = "id, author_id, caption_ru, caption_en, image_key, \
                       moderation_status, created_at, updated_at";

/// Provides CRUD and moderation operations for patient moods.
pub struct MoodRepo;

impl MoodRepo {
    /// Insert a new mood. New rows start in `on_moderate` (schema default).
    pub async fn create(
        pool: &PgPool,
        author_id: DbId,
        input: &CreateMood,
    ) -> Result<Mood, sqlx::Error> {
        let query = format!(
            "INSERT INTO moods (author_id, caption_ru, caption_en, image_key)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Mood>(&query)
            .bind(author_id)
            .bind(&input.caption_ru)
            .bind(&input.caption_en)
            .bind(&input.image_key)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Mood>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM moods WHERE id = $1");
        sqlx::query_as::<_, Mood>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List moods filtered by moderation status, newest first.
    ///
    /// `status = None` returns all moods (admin queue overview).
    pub async fn list_by_status(
        pool: &PgPool,
        status: Option<&str>,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Mood>, sqlx::Error> {
        let filter = if status.is_some() {
            "WHERE moderation_status = $3"
        } else {
            ""
        };
        let query = format!(
            "SELECT {COLUMNS} FROM moods {filter}
             ORDER BY created_at DESC
             LIMIT $1 OFFSET $2"
        );
        let mut q = sqlx::query_as::<_, Mood>(&query).bind(limit).bind(offset);
        if let Some(status) = status {
            q = q.bind(status);
        }
        q.fetch_all(pool).await
    }

    /// List a single author's moods, newest first.
    pub async fn list_by_author(
        pool: &PgPool,
        author_id: DbId,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Mood>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM moods
             WHERE author_id = $1
             ORDER BY created_at DESC
             LIMIT $2 OFFSET $3"
        );
        sqlx::query_as::<_, Mood>(&query)
            .bind(author_id)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// Move a mood to a new moderation status.
    ///
    /// Returns the updated row, or `None` if no row with the given `id`
    /// exists.
    pub async fn set_moderation_status(
        pool: &PgPool,
        id: DbId,
        status: &str,
    ) -> Result<Option<Mood>, sqlx::Error> {
        let query = format!(
            "UPDATE moods SET moderation_status = $2, updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Mood>(&query)
            .bind(id)
            .bind(status)
            .fetch_optional(pool)
            .await
    }

    /// Delete a mood. The author or an admin may do this; ownership is
    /// checked at the handler layer.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM moods WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
