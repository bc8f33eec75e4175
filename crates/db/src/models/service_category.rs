//! Service category entity model, DTOs, and localized projection.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use kurort_core::locale::Locale;
use kurort_core::types::{DbId, Timestamp};

/// A row from the `service_categories` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ServiceCategory {
    pub id: DbId,
    pub name_ru: String,
    pub name_en: String,
    pub icon_key: String,
    pub sort_order: i32,
    pub is_published: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl ServiceCategory {
    pub fn localize(&self, locale: Locale) -> ServiceCategoryView {
        ServiceCategoryView {
            id: self.id,
            name: locale.pick(&self.name_ru, &self.name_en).to_string(),
            icon_key: self.icon_key.clone(),
            sort_order: self.sort_order,
        }
    }
}

/// Single-locale service category projection.
#[derive(Debug, Clone, Serialize)]
pub struct ServiceCategoryView {
    pub id: DbId,
    pub name: String,
    pub icon_key: String,
    pub sort_order: i32,
}

/// DTO for creating a service category.
#[derive(Debug, Deserialize)]
pub struct CreateServiceCategory {
    pub name_ru: String,
    #[serde(default)]
    pub name_en: String,
    #[serde(default)]
    pub icon_key: String,
    #[serde(default)]
    pub sort_order: i32,
}

/// DTO for updating a service category.
#[derive(Debug, Deserialize)]
pub struct UpdateServiceCategory {
    pub name_ru: Option<String>,
    pub name_en: Option<String>,
    pub icon_key: Option<String>,
    pub sort_order: Option<i32>,
    pub is_published: Option<bool>,
}
