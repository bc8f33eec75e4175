//! Repository for the `showcase_rooms` table.

use sqlx::PgPool;
use kurort_core::types::DbId;

use crate::models::showcase_room::{CreateShowcaseRoom, ShowcaseRoom, UpdateShowcaseRoom};

const COLUMNS: &str = "id, name_ru, name_en, description_ru, description_en, image_keys, \
                       capacity, price_per_night_rub, is_published, created_at, updated_at";

/// Provides CRUD operations for showcase rooms.
pub struct ShowcaseRoomRepo;

impl ShowcaseRoomRepo {
    pub async fn create(
        pool: &PgPool,
        input: &CreateShowcaseRoom,
    ) -> Result<ShowcaseRoom, sqlx::Error> {
        let query = format!(
            "INSERT INTO showcase_rooms
                (name_ru, name_en, description_ru, description_en, image_keys, capacity, price_per_night_rub)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ShowcaseRoom>(&query)
            .bind(&input.name_ru)
            .bind(&input.name_en)
            .bind(&input.description_ru)
            .bind(&input.description_en)
            .bind(&input.image_keys)
            .bind(input.capacity)
            .bind(input.price_per_night_rub)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<ShowcaseRoom>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM showcase_rooms WHERE id = $1");
        sqlx::query_as::<_, ShowcaseRoom>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List rooms, cheapest first (unpriced rooms last).
    pub async fn list(
        pool: &PgPool,
        published_only: bool,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<ShowcaseRoom>, sqlx::Error> {
        let filter = if published_only {
            "WHERE is_published = true"
        } else {
            ""
        };
        let query = format!(
            "SELECT {COLUMNS} FROM showcase_rooms {filter}
             ORDER BY price_per_night_rub ASC NULLS LAST, id
             LIMIT $1 OFFSET $2"
        );
        sqlx::query_as::<_, ShowcaseRoom>(&query)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// Case-insensitive search over name and description, both locales.
    pub async fn search(
        pool: &PgPool,
        term: &str,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<ShowcaseRoom>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM showcase_rooms
             WHERE name_ru ILIKE $1 OR name_en ILIKE $1
                OR description_ru ILIKE $1 OR description_en ILIKE $1
             ORDER BY created_at DESC
             LIMIT $2 OFFSET $3"
        );
        sqlx::query_as::<_, ShowcaseRoom>(&query)
            .bind(format!("%{term}%"))
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateShowcaseRoom,
    ) -> Result<Option<ShowcaseRoom>, sqlx::Error> {
        let query = format!(
            "UPDATE showcase_rooms SET
                name_ru = COALESCE($2, name_ru),
                name_en = COALESCE($3, name_en),
                description_ru = COALESCE($4, description_ru),
                description_en = COALESCE($5, description_en),
                image_keys = COALESCE($6, image_keys),
                capacity = COALESCE($7, capacity),
                price_per_night_rub = COALESCE($8, price_per_night_rub),
                is_published = COALESCE($9, is_published),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ShowcaseRoom>(&query)
            .bind(id)
            .bind(&input.name_ru)
            .bind(&input.name_en)
            .bind(&input.description_ru)
            .bind(&input.description_en)
            .bind(&input.image_keys)
            .bind(input.capacity)
            .bind(input.price_per_night_rub)
            .bind(input.is_published)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM showcase_rooms WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
