//! Repository for the `awards` table.

use sqlx::PgPool;
use kurort_core::types::DbId;

use crate::models::award::{Award, CreateAward, UpdateAward};

const COLUMNS: &str =
    "id, title_ru, title_en, year, image_key, sort_order, is_published, created_at, updated_at";

/// Provides CRUD operations for awards.
pub struct AwardRepo;

impl AwardRepo {
    pub async fn create(pool: &PgPool, input: &CreateAward) -> Result<Award, sqlx::Error> {
        let query = format!(
            "INSERT INTO awards (title_ru, title_en, year, image_key, sort_order)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Award>(&query)
            .bind(&input.title_ru)
            .bind(&input.title_en)
            .bind(input.year)
            .bind(&input.image_key)
            .bind(input.sort_order)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Award>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM awards WHERE id = $1");
        sqlx::query_as::<_, Award>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List awards, most recent year first, then display order.
    pub async fn list(pool: &PgPool, published_only: bool) -> Result<Vec<Award>, sqlx::Error> {
        let filter = if published_only {
            "WHERE is_published = true"
        } else {
            ""
        };
        let query =
            format!("SELECT {COLUMNS} FROM awards {filter} ORDER BY year DESC, sort_order, id");
        sqlx::query_as::<_, Award>(&query).fetch_all(pool).await
    }

    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateAward,
    ) -> Result<Option<Award>, sqlx::Error> {
        let query = format!(
            "UPDATE awards SET
                title_ru = COALESCE($2, title_ru),
                title_en = COALESCE($3, title_en),
                year = COALESCE($4, year),
                image_key = COALESCE($5, image_key),
                sort_order = COALESCE($6, sort_order),
                is_published = COALESCE($7, is_published),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Award>(&query)
            .bind(id)
            .bind(&input.title_ru)
            .bind(&input.title_en)
            .bind(input.year)
            .bind(&input.image_key)
            .bind(input.sort_order)
            .bind(input.is_published)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM awards WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
