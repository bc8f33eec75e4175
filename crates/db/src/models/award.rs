//! Award entity model, DTOs, and localized projection.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use kurort_core::locale::Locale;
use kurort_core::types::{DbId, Timestamp};

/// A row from the `awards` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Award {
    pub id: DbId,
    pub title_ru: String,
    pub title_en: String,
    pub year: i32,
    pub image_key: String,
    pub sort_order: i32,
    pub is_published: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Award {
    pub fn localize(&self, locale: Locale) -> AwardView {
        AwardView {
            id: self.id,
            title: locale.pick(&self.title_ru, &self.title_en).to_string(),
            year: self.year,
            image_key: self.image_key.clone(),
            sort_order: self.sort_order,
        }
    }
}

/// Single-locale award projection.
#[derive(Debug, Clone, Serialize)]
pub struct AwardView {
    pub id: DbId,
    pub title: String,
    pub year: i32,
    pub image_key: String,
    pub sort_order: i32,
}

/// DTO for creating an award.
#[derive(Debug, Deserialize)]
pub struct CreateAward {
    pub title_ru: String,
    #[serde(default)]
    pub title_en: String,
    pub year: i32,
    #[serde(default)]
    pub image_key: String,
    #[serde(default)]
    pub sort_order: i32,
}

/// DTO for updating an award.
#[derive(Debug, Deserialize)]
pub struct UpdateAward {
    pub title_ru: Option<String>,
    pub title_en: Option<String>,
    pub year: Option<i32>,
    pub image_key: Option<String>,
    pub sort_order: Option<i32>,
    pub is_published: Option<bool>,
}
