//! Special offer entity model, DTOs, and localized projection.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use kurort_core::locale::Locale;
use kurort_core::types::{DbId, Timestamp};

/// A row from the `offers` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Offer {
    pub id: DbId,
    pub title_ru: String,
    pub title_en: String,
    pub body_ru: String,
    pub body_en: String,
    pub image_key: String,
    pub price_rub: Option<i64>,
    pub valid_from: Option<Timestamp>,
    pub valid_until: Option<Timestamp>,
    pub is_published: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Offer {
    pub fn localize(&self, locale: Locale) -> OfferView {
        OfferView {
            id: self.id,
            title: locale.pick(&self.title_ru, &self.title_en).to_string(),
            body: locale.pick(&self.body_ru, &self.body_en).to_string(),
            image_key: self.image_key.clone(),
            price_rub: self.price_rub,
            valid_from: self.valid_from,
            valid_until: self.valid_until,
        }
    }
}

/// Single-locale offer projection.
#[derive(Debug, Clone, Serialize)]
pub struct OfferView {
    pub id: DbId,
    pub title: String,
    pub body: String,
    pub image_key: String,
    pub price_rub: Option<i64>,
    pub valid_from: Option<Timestamp>,
    pub valid_until: Option<Timestamp>,
}

/// DTO for creating an offer.
#[derive(Debug, Deserialize)]
pub struct CreateOffer {
    pub title_ru: String,
    #[serde(default)]
    pub title_en: String,
    pub body_ru: String,
    #[serde(default)]
    pub body_en: String,
    #[serde(default)]
    pub image_key: String,
    pub price_rub: Option<i64>,
    pub valid_from: Option<Timestamp>,
    pub valid_until: Option<Timestamp>,
}

/// DTO for updating an offer.
#[derive(Debug, Deserialize)]
pub struct UpdateOffer {
    pub title_ru: Option<String>,
    pub title_en: Option<String>,
    pub body_ru: Option<String>,
    pub body_en: Option<String>,
    pub image_key: Option<String>,
    pub price_rub: Option<i64>,
    pub valid_from: Option<Timestamp>,
    pub valid_until: Option<Timestamp>,
    pub is_published: Option<bool>,
}
