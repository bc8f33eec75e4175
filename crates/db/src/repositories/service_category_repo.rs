//! Repository for the `service_categories` table.

use sqlx::PgPool;
use kurort_core::types::DbId;

use crate::models::service_category::{
    CreateServiceCategory, ServiceCategory, UpdateServiceCategory,
};

const COLUMNS: &str =
    "id, name_ru, name_en, icon_key, sort_order, is_published, created_at, updated_at";

/// Provides CRUD operations for service categories.
pub struct ServiceCategoryRepo;

impl ServiceCategoryRepo {
    pub async fn create(
        pool: &PgPool,
        input: &CreateServiceCategory,
    ) -> Result<ServiceCategory, sqlx::Error> {
        let query = format!(
            "INSERT INTO service_categories (name_ru, name_en, icon_key, sort_order)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ServiceCategory>(&query)
            .bind(&input.name_ru)
            .bind(&input.name_en)
            .bind(&input.icon_key)
            .bind(input.sort_order)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<ServiceCategory>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM service_categories WHERE id = $1");
        sqlx::query_as::<_, ServiceCategory>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List service categories in display order.
    pub async fn list(
        pool: &PgPool,
        published_only: bool,
    ) -> Result<Vec<ServiceCategory>, sqlx::Error> {
        let filter = if published_only {
            "WHERE is_published = true"
        } else {
            ""
        };
        let query =
            format!("SELECT {COLUMNS} FROM service_categories {filter} ORDER BY sort_order, id");
        sqlx::query_as::<_, ServiceCategory>(&query)
            .fetch_all(pool)
            .await
    }

    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateServiceCategory,
    ) -> Result<Option<ServiceCategory>, sqlx::Error> {
        let query = format!(
            "UPDATE service_categories SET
                name_ru = COALESCE($2, name_ru),
                name_en = COALESCE($3, name_en),
                icon_key = COALESCE($4, icon_key),
                sort_order = COALESCE($5, sort_order),
                is_published = COALESCE($6, is_published),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ServiceCategory>(&query)
            .bind(id)
            .bind(&input.name_ru)
            .bind(&input.name_en)
            .bind(&input.icon_key)
            .bind(input.sort_order)
            .bind(input.is_published)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM service_categories WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
