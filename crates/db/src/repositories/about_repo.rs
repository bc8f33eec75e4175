//! Repository for the `about_pages` table.

use sqlx::PgPool;
use kurort_core::types::DbId;

use crate::models::about::{AboutPage, CreateAboutPage, UpdateAboutPage};

const COLUMNS: &str =
    "id, slug, title_ru, title_en, body_ru, body_en, is_published, created_at, updated_at";

/// Provides CRUD operations for slug-addressed about page blocks.
pub struct AboutRepo;

impl AboutRepo {
    pub async fn create(pool: &PgPool, input: &CreateAboutPage) -> Result<AboutPage, sqlx::Error> {
        let query = format!(
            "INSERT INTO about_pages (slug, title_ru, title_en, body_ru, body_en)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, AboutPage>(&query)
            .bind(&input.slug)
            .bind(&input.title_ru)
            .bind(&input.title_en)
            .bind(&input.body_ru)
            .bind(&input.body_en)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<AboutPage>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM about_pages WHERE id = $1");
        sqlx::query_as::<_, AboutPage>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a page block by its public slug.
    pub async fn find_by_slug(
        pool: &PgPool,
        slug: &str,
    ) -> Result<Option<AboutPage>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM about_pages WHERE slug = $1");
        sqlx::query_as::<_, AboutPage>(&query)
            .bind(slug)
            .fetch_optional(pool)
            .await
    }

    pub async fn list(pool: &PgPool, published_only: bool) -> Result<Vec<AboutPage>, sqlx::Error> {
        let filter = if published_only {
            "WHERE is_published = true"
        } else {
            ""
        };
        let query = format!("SELECT {COLUMNS} FROM about_pages {filter} ORDER BY slug");
        sqlx::query_as::<_, AboutPage>(&query).fetch_all(pool).await
    }

    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateAboutPage,
    ) -> Result<Option<AboutPage>, sqlx::Error> {
        let query = format!(
            "UPDATE about_pages SET
                title_ru = COALESCE($2, title_ru),
                title_en = COALESCE($3, title_en),
                body_ru = COALESCE($4, body_ru),
                body_en = COALESCE($5, body_en),
                is_published = COALESCE($6, is_published),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, AboutPage>(&query)
            .bind(id)
            .bind(&input.title_ru)
            .bind(&input.title_en)
            .bind(&input.body_ru)
            .bind(&input.body_en)
            .bind(input.is_published)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM about_pages WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
