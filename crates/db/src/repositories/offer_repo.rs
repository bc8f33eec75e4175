//! Repository for the `offers` table.

use sqlx::PgPool;
use kurort_core::types::DbId;

use crate::models::offer::{CreateOffer, Offer, UpdateOffer};

const COLUMNS: &str = "id, title_ru, title_en, body_ru, body_en, image_key, price_rub, \
                       valid_from, valid_until, is_published, created_at, updated_at";

/// Provides CRUD operations for special offers.
pub struct OfferRepo;

impl OfferRepo {
    pub async fn create(pool: &PgPool, input: &CreateOffer) -> Result<Offer, sqlx::Error> {
        let query = format!(
            "INSERT INTO offers (title_ru, title_en, body_ru, body_en, image_key, price_rub, valid_from, valid_until)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Offer>(&query)
            .bind(&input.title_ru)
            .bind(&input.title_en)
            .bind(&input.body_ru)
            .bind(&input.body_en)
            .bind(&input.image_key)
            .bind(input.price_rub)
            .bind(input.valid_from)
            .bind(input.valid_until)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Offer>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM offers WHERE id = $1");
        sqlx::query_as::<_, Offer>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List offers, newest first.
    ///
    /// The public view (`published_only`) additionally hides offers whose
    /// validity window has not started or has already ended.
    pub async fn list(
        pool: &PgPool,
        published_only: bool,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Offer>, sqlx::Error> {
        let filter = if published_only {
            "WHERE is_published = true
               AND (valid_from IS NULL OR valid_from <= NOW())
               AND (valid_until IS NULL OR valid_until >= NOW())"
        } else {
            ""
        };
        let query = format!(
            "SELECT {COLUMNS} FROM offers {filter}
             ORDER BY created_at DESC
             LIMIT $1 OFFSET $2"
        );
        sqlx::query_as::<_, Offer>(&query)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// Case-insensitive search over title and body, both locales.
    pub async fn search(
        pool: &PgPool,
        term: &str,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Offer>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM offers
             WHERE title_ru ILIKE $1 OR title_en ILIKE $1
                OR body_ru ILIKE $1 OR body_en ILIKE $1
             ORDER BY created_at DESC
             LIMIT $2 OFFSET $3"
        );
        sqlx::query_as::<_, Offer>(&query)
            .bind(format!("%{term}%"))
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateOffer,
    ) -> Result<Option<Offer>, sqlx::Error> {
        let query = format!(
            "UPDATE offers SET
                title_ru = COALESCE($2, title_ru),
                title_en = COALESCE($3, title_en),
                body_ru = COALESCE($4, body_ru),
                body_en = COALESCE($5, body_en),
                image_key = COALESCE($6, image_key),
                price_rub = COALESCE($7, price_rub),
                valid_from = COALESCE($8, valid_from),
                valid_until = COALESCE($9, valid_until),
                is_published = COALESCE($10, is_published),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Offer>(&query)
            .bind(id)
            .bind(&input.title_ru)
            .bind(&input.title_en)
            .bind(&input.body_ru)
            .bind(&input.body_en)
            .bind(&input.image_key)
            .bind(input.price_rub)
            .bind(input.valid_from)
            .bind(input.valid_until)
            .bind(input.is_published)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM offers WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
