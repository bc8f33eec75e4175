//! About page entity model, DTOs, and localized projection.
//!
//! About content is organized as slug-addressed blocks (`history`,
//! `medicine`, `team`, ...) rather than a single row.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use kurort_core::locale::Locale;
use kurort_core::types::{DbId, Timestamp};

/// A row from the `about_pages` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct AboutPage {
    pub id: DbId,
    pub slug: String,
    pub title_ru: String,
    pub title_en: String,
    pub body_ru: String,
    pub body_en: String,
    pub is_published: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl AboutPage {
    pub fn localize(&self, locale: Locale) -> AboutPageView {
        AboutPageView {
            id: self.id,
            slug: self.slug.clone(),
            title: locale.pick(&self.title_ru, &self.title_en).to_string(),
            body: locale.pick(&self.body_ru, &self.body_en).to_string(),
        }
    }
}

/// Single-locale about page projection.
#[derive(Debug, Clone, Serialize)]
pub struct AboutPageView {
    pub id: DbId,
    pub slug: String,
    pub title: String,
    pub body: String,
}

/// DTO for creating an about page block.
#[derive(Debug, Deserialize)]
pub struct CreateAboutPage {
    pub slug: String,
    pub title_ru: String,
    #[serde(default)]
    pub title_en: String,
    pub body_ru: String,
    #[serde(default)]
    pub body_en: String,
}

/// DTO for updating an about page block.
#[derive(Debug, Deserialize)]
pub struct UpdateAboutPage {
    pub title_ru: Option<String>,
    pub title_en: Option<String>,
    pub body_ru: Option<String>,
    pub body_en: Option<String>,
    pub is_published: Option<bool>,
}
