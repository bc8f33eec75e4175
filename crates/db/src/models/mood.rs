//! Mood (patient-submitted photo) entity model and DTOs.
//!
//! Moods are the only patient-submitted content type and therefore the
//! only one carrying a moderation status.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use kurort_core::locale::Locale;
use kurort_core::types::{DbId, Timestamp};

/// A row from the `moods` table.
///
/// `moderation_status` holds the text encoding of
/// [`kurort_core::ModerationStatus`].
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Mood {
    pub id: DbId,
    pub author_id: DbId,
    pub caption_ru: String,
    pub caption_en: String,
    pub image_key: String,
    pub moderation_status: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Mood {
    pub fn localize(&self, locale: Locale) -> MoodView {
        MoodView {
            id: self.id,
            author_id: self.author_id,
            caption: locale.pick(&self.caption_ru, &self.caption_en).to_string(),
            image_key: self.image_key.clone(),
            created_at: self.created_at,
        }
    }
}

/// Single-locale mood projection for the public gallery.
#[derive(Debug, Clone, Serialize)]
pub struct MoodView {
    pub id: DbId,
    pub author_id: DbId,
    pub caption: String,
    pub image_key: String,
    pub created_at: Timestamp,
}

/// DTO for a patient submitting a mood.
#[derive(Debug, Deserialize)]
pub struct CreateMood {
    #[serde(default)]
    pub caption_ru: String,
    #[serde(default)]
    pub caption_en: String,
    pub image_key: String,
}
