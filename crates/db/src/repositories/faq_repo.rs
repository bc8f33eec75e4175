//! Repository for the `faqs` table.

use sqlx::PgPool;
use kurort_core::types::DbId;

use crate::models::faq::{CreateFaq, Faq, UpdateFaq};

const COLUMNS: &str = "id, question_ru, question_en, answer_ru, answer_en, \
                       sort_order, is_published, created_at, updated_at";

/// Provides CRUD operations for FAQ entries.
pub struct FaqRepo;

impl FaqRepo {
    pub async fn create(pool: &PgPool, input: &CreateFaq) -> Result<Faq, sqlx::Error> {
        let query = format!(
            "INSERT INTO faqs (question_ru, question_en, answer_ru, answer_en, sort_order)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Faq>(&query)
            .bind(&input.question_ru)
            .bind(&input.question_en)
            .bind(&input.answer_ru)
            .bind(&input.answer_en)
            .bind(input.sort_order)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Faq>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM faqs WHERE id = $1");
        sqlx::query_as::<_, Faq>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List FAQ entries in display order.
    pub async fn list(pool: &PgPool, published_only: bool) -> Result<Vec<Faq>, sqlx::Error> {
        let filter = if published_only {
            "WHERE is_published = true"
        } else {
            ""
        };
        let query = format!("SELECT {COLUMNS} FROM faqs {filter} ORDER BY sort_order, id");
        sqlx::query_as::<_, Faq>(&query).fetch_all(pool).await
    }

    /// Case-insensitive search over question and answer text, both locales.
    pub async fn search(
        pool: &PgPool,
        term: &str,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Faq>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM faqs
             WHERE question_ru ILIKE $1 OR question_en ILIKE $1
                OR answer_ru ILIKE $1 OR answer_en ILIKE $1
             ORDER BY created_at DESC
             LIMIT $2 OFFSET $3"
        );
        sqlx::query_as::<_, Faq>(&query)
            .bind(format!("%{term}%"))
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateFaq,
    ) -> Result<Option<Faq>, sqlx::Error> {
        let query = format!(
            "UPDATE faqs SET
                question_ru = COALESCE($2, question_ru),
                question_en = COALESCE($3, question_en),
                answer_ru = COALESCE($4, answer_ru),
                answer_en = COALESCE($5, answer_en),
                sort_order = COALESCE($6, sort_order),
                is_published = COALESCE($7, is_published),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Faq>(&query)
            .bind(id)
            .bind(&input.question_ru)
            .bind(&input.question_en)
            .bind(&input.answer_ru)
            .bind(&input.answer_en)
            .bind(input.sort_order)
            .bind(input.is_published)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM faqs WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
