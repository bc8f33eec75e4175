//! CRM lead entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use kurort_core::types::{DbId, Timestamp};

/// Lead status values stored in `leads.status`.
pub const STATUS_NEW: &str = "new";
pub const STATUS_IN_PROGRESS: &str = "in_progress";
pub const STATUS_CLOSED: &str = "closed";

/// A row from the `leads` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Lead {
    pub id: DbId,
    pub name: String,
    pub phone: String,
    pub email: String,
    pub comment: String,
    pub source: String,
    pub status: String,
    pub assigned_manager_id: Option<DbId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for the public lead form.
#[derive(Debug, Deserialize)]
pub struct CreateLead {
    pub name: String,
    pub phone: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub comment: String,
    #[serde(default)]
    pub source: String,
}

/// DTO for manager-side lead updates.
#[derive(Debug, Deserialize)]
pub struct UpdateLead {
    pub status: Option<String>,
    pub comment: Option<String>,
    pub assigned_manager_id: Option<DbId>,
}
