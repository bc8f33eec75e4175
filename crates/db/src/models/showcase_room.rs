//! Showcase room entity model, DTOs, and localized projection.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use kurort_core::locale::Locale;
use kurort_core::types::{DbId, Timestamp};

/// A row from the `showcase_rooms` table.
///
/// `image_keys` is a JSON array of FileStore keys; ordering is the gallery
/// display order.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ShowcaseRoom {
    pub id: DbId,
    pub name_ru: String,
    pub name_en: String,
    pub description_ru: String,
    pub description_en: String,
    pub image_keys: serde_json::Value,
    pub capacity: i32,
    pub price_per_night_rub: Option<i64>,
    pub is_published: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl ShowcaseRoom {
    pub fn localize(&self, locale: Locale) -> ShowcaseRoomView {
        ShowcaseRoomView {
            id: self.id,
            name: locale.pick(&self.name_ru, &self.name_en).to_string(),
            description: locale
                .pick(&self.description_ru, &self.description_en)
                .to_string(),
            image_keys: self.image_keys.clone(),
            capacity: self.capacity,
            price_per_night_rub: self.price_per_night_rub,
        }
    }
}

/// Single-locale room projection.
#[derive(Debug, Clone, Serialize)]
pub struct ShowcaseRoomView {
    pub id: DbId,
    pub name: String,
    pub description: String,
    pub image_keys: serde_json::Value,
    pub capacity: i32,
    pub price_per_night_rub: Option<i64>,
}

/// DTO for creating a showcase room.
#[derive(Debug, Deserialize)]
pub struct CreateShowcaseRoom {
    pub name_ru: String,
    #[serde(default)]
    pub name_en: String,
    #[serde(default)]
    pub description_ru: String,
    #[serde(default)]
    pub description_en: String,
    #[serde(default = "default_image_keys")]
    pub image_keys: serde_json::Value,
    #[serde(default = "default_capacity")]
    pub capacity: i32,
    pub price_per_night_rub: Option<i64>,
}

fn default_image_keys() -> serde_json::Value {
    serde_json::Value::Array(vec![])
}

fn default_capacity() -> i32 {
    1
}

/// DTO for updating a showcase room.
#[derive(Debug, Deserialize)]
pub struct UpdateShowcaseRoom {
    pub name_ru: Option<String>,
    pub name_en: Option<String>,
    pub description_ru: Option<String>,
    pub description_en: Option<String>,
    pub image_keys: Option<serde_json::Value>,
    pub capacity: Option<i32>,
    pub price_per_night_rub: Option<i64>,
    pub is_published: Option<bool>,
}
