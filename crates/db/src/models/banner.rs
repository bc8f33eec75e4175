//! Banner entity model, DTOs, and localized projection.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use kurort_core::locale::Locale;
use kurort_core::types::{DbId, Timestamp};

/// A row from the `banners` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Banner {
    pub id: DbId,
    pub title_ru: String,
    pub title_en: String,
    pub subtitle_ru: String,
    pub subtitle_en: String,
    pub image_key: String,
    pub link_url: String,
    pub sort_order: i32,
    pub is_published: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Banner {
    /// Project the bilingual columns into a single-locale view.
    pub fn localize(&self, locale: Locale) -> BannerView {
        BannerView {
            id: self.id,
            title: locale.pick(&self.title_ru, &self.title_en).to_string(),
            subtitle: locale.pick(&self.subtitle_ru, &self.subtitle_en).to_string(),
            image_key: self.image_key.clone(),
            link_url: self.link_url.clone(),
            sort_order: self.sort_order,
        }
    }
}

/// Single-locale banner projection for public responses.
#[derive(Debug, Clone, Serialize)]
pub struct BannerView {
    pub id: DbId,
    pub title: String,
    pub subtitle: String,
    pub image_key: String,
    pub link_url: String,
    pub sort_order: i32,
}

/// DTO for creating a banner.
#[derive(Debug, Deserialize)]
pub struct CreateBanner {
    pub title_ru: String,
    #[serde(default)]
    pub title_en: String,
    #[serde(default)]
    pub subtitle_ru: String,
    #[serde(default)]
    pub subtitle_en: String,
    pub image_key: String,
    #[serde(default)]
    pub link_url: String,
    #[serde(default)]
    pub sort_order: i32,
}

/// DTO for updating a banner. All fields are optional.
#[derive(Debug, Deserialize)]
pub struct UpdateBanner {
    pub title_ru: Option<String>,
    pub title_en: Option<String>,
    pub subtitle_ru: Option<String>,
    pub subtitle_en: Option<String>,
    pub image_key: Option<String>,
    pub link_url: Option<String>,
    pub sort_order: Option<i32>,
    pub is_published: Option<bool>,
}
