//! Patient-to-patient message model.

use serde::Serialize;
use sqlx::FromRow;
use kurort_core::types::{DbId, Timestamp};

/// A row from the `patient_messages` table.
///
/// Messages belong to an accepted friendship thread. `is_read`/`read_at`
/// are the recipient's read receipt.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct PatientMessage {
    pub id: DbId,
    pub friendship_id: DbId,
    pub sender_id: DbId,
    pub body: String,
    pub is_read: bool,
    pub read_at: Option<Timestamp>,
    pub created_at: Timestamp,
}
