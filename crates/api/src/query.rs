//! Shared query parameter types for API handlers.
//!
//! Common query structs that appear across multiple handler modules are
//! extracted here to avoid duplication.

use serde::Deserialize;
use kurort_core::locale::Locale;

/// Generic pagination parameters (`?limit=&offset=`).
///
/// Values are clamped via `kurort_db::clamp_limit` / `clamp_offset`.
#[derive(Debug, Deserialize)]
pub struct PaginationParams {
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

/// Query parameters for public content endpoints (`?locale=ru|en`).
#[derive(Debug, Default, Deserialize)]
pub struct LocaleParams {
    #[serde(default)]
    pub locale: Locale,
}

/// Query parameters for content search endpoints
/// (`?q=&locale=&limit=&offset=`).
#[derive(Debug, Deserialize)]
pub struct SearchParams {
    pub q: String,
    #[serde(default)]
    pub locale: Locale,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}
