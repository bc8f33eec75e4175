//! Refresh-token session model.

use sqlx::FromRow;
use kurort_core::types::{DbId, Timestamp};

/// A row from the `sessions` table.
///
/// Stores only the SHA-256 hash of the opaque refresh token so a database
/// leak does not compromise active sessions.
#[derive(Debug, Clone, FromRow)]
pub struct Session {
    pub id: DbId,
    pub user_id: DbId,
    pub refresh_token_hash: String,
    pub expires_at: Timestamp,
    pub revoked_at: Option<Timestamp>,
    pub created_at: Timestamp,
}
