//! Repository for the `banners` table.

use sqlx::PgPool;
use kurort_core::types::DbId;

use crate::models::banner::{Banner, CreateBanner, UpdateBanner};

const COLUMNS: &str = "id, title_ru, title_en, subtitle_ru, subtitle_en, image_key, \
                       link_url, sort_order, is_published, created_at, updated_at";

/// Provides CRUD operations for banners.
pub struct BannerRepo;

impl BannerRepo {
    /// Insert a new banner, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateBanner) -> Result<Banner, sqlx::Error> {
        let query = format!(
            "INSERT INTO banners (title_ru, title_en, subtitle_ru, subtitle_en, image_key, link_url, sort_order)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Banner>(&query)
            .bind(&input.title_ru)
            .bind(&input.title_en)
            .bind(&input.subtitle_ru)
            .bind(&input.subtitle_en)
            .bind(&input.image_key)
            .bind(&input.link_url)
            .bind(input.sort_order)
            .fetch_one(pool)
            .await
    }

    /// Find a banner by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Banner>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM banners WHERE id = $1");
        sqlx::query_as::<_, Banner>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List banners in display order.
    ///
    /// When `published_only` is `true`, unpublished banners are filtered out
    /// (the public site view).
    pub async fn list(pool: &PgPool, published_only: bool) -> Result<Vec<Banner>, sqlx::Error> {
        let filter = if published_only {
            "WHERE is_published = true"
        } else {
            ""
        };
        let query = format!("SELECT {COLUMNS} FROM banners {filter} ORDER BY sort_order, id");
        sqlx::query_as::<_, Banner>(&query).fetch_all(pool).await
    }

    /// Case-insensitive search over both locale title columns, paginated,
    /// newest first.
    pub async fn search(
        pool: &PgPool,
        term: &str,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Banner>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM banners
             WHERE title_ru ILIKE $1 OR title_en ILIKE $1
             ORDER BY created_at DESC
             LIMIT $2 OFFSET $3"
        );
        sqlx::query_as::<_, Banner>(&query)
            .bind(format!("%{term}%"))
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// Update a banner. Only non-`None` fields in `input` are applied.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateBanner,
    ) -> Result<Option<Banner>, sqlx::Error> {
        let query = format!(
            "UPDATE banners SET
                title_ru = COALESCE($2, title_ru),
                title_en = COALESCE($3, title_en),
                subtitle_ru = COALESCE($4, subtitle_ru),
                subtitle_en = COALESCE($5, subtitle_en),
                image_key = COALESCE($6, image_key),
                link_url = COALESCE($7, link_url),
                sort_order = COALESCE($8, sort_order),
                is_published = COALESCE($9, is_published),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Banner>(&query)
            .bind(id)
            .bind(&input.title_ru)
            .bind(&input.title_en)
            .bind(&input.subtitle_ru)
            .bind(&input.subtitle_en)
            .bind(&input.image_key)
            .bind(&input.link_url)
            .bind(input.sort_order)
            .bind(input.is_published)
            .fetch_optional(pool)
            .await
    }

    /// Delete a banner. Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM banners WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
