//! FAQ entity model, DTOs, and localized projection.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use kurort_core::locale::Locale;
use kurort_core::types::{DbId, Timestamp};

/// A row from the `faqs` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Faq {
    pub id: DbId,
    pub question_ru: String,
    pub question_en: String,
    pub answer_ru: String,
    pub answer_en: String,
    pub sort_order: i32,
    pub is_published: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Faq {
    pub fn localize(&self, locale: Locale) -> FaqView {
        FaqView {
            id: self.id,
            question: locale.pick(&self.question_ru, &self.question_en).to_string(),
            answer: locale.pick(&self.answer_ru, &self.answer_en).to_string(),
            sort_order: self.sort_order,
        }
    }
}

/// Single-locale FAQ projection.
#[derive(Debug, Clone, Serialize)]
pub struct FaqView {
    pub id: DbId,
    pub question: String,
    pub answer: String,
    pub sort_order: i32,
}

/// DTO for creating a FAQ entry.
#[derive(Debug, Deserialize)]
pub struct CreateFaq {
    pub question_ru: String,
    #[serde(default)]
    pub question_en: String,
    pub answer_ru: String,
    #[serde(default)]
    pub answer_en: String,
    #[serde(default)]
    pub sort_order: i32,
}

/// DTO for updating a FAQ entry.
#[derive(Debug, Deserialize)]
pub struct UpdateFaq {
    pub question_ru: Option<String>,
    pub question_en: Option<String>,
    pub answer_ru: Option<String>,
    pub answer_en: Option<String>,
    pub sort_order: Option<i32>,
    pub is_published: Option<bool>,
}
