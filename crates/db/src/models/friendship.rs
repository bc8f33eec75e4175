//! Friendship entity model.

use serde::Serialize;
use sqlx::FromRow;
use kurort_core::types::{DbId, Timestamp};

/// Friendship status values stored in `friendships.status`.
pub const STATUS_PENDING: &str = "pending";
pub const STATUS_ACCEPTED: &str = "accepted";
pub const STATUS_REJECTED: &str = "rejected";

/// A row from the `friendships` table.
///
/// A `pending` row is a friend request from `requester_id` awaiting a
/// response from `addressee_id`. Only an `accepted` row opens the private
/// message thread between the two users.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Friendship {
    pub id: DbId,
    pub requester_id: DbId,
    pub addressee_id: DbId,
    pub status: String,
    pub responded_at: Option<Timestamp>,
    pub created_at: Timestamp,
}

impl Friendship {
    /// Whether `user_id` is one of the two parties.
    pub fn involves(&self, user_id: DbId) -> bool {
        self.requester_id == user_id || self.addressee_id == user_id
    }

    /// The other party from `user_id`'s perspective.
    pub fn other_party(&self, user_id: DbId) -> DbId {
        if self.requester_id == user_id {
            self.addressee_id
        } else {
            self.requester_id
        }
    }
}
