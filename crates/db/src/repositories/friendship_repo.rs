//! Repository for the `friendships` table.
//!
//! State transitions are enforced in SQL: a response only lands when the
//! row is still `pending` and the caller is the addressee, so concurrent
//! responses cannot double-apply.

use sqlx::PgPool;
use kurort_core::types::DbId;

use crate::models::friendship::Friendship;

const COLUMNS: &str = "id, requester_id, addressee_id, status, responded_at, created_at";

/// Friendship requests and state transitions.
pub struct FriendshipRepo;

impl FriendshipRepo {
    /// Insert a new `pending` friend request.
    ///
    /// The unique index on the unordered user pair turns a duplicate
    /// request (either direction) into a constraint violation.
    pub async fn create_request(
        pool: &PgPool,
        requester_id: DbId,
        addressee_id: DbId,
    ) -> Result<Friendship, sqlx::Error> {
        let query = format!(
            "INSERT INTO friendships (requester_id, addressee_id)
             VALUES ($1, $2)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Friendship>(&query)
            .bind(requester_id)
            .bind(addressee_id)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Friendship>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM friendships WHERE id = $1");
        sqlx::query_as::<_, Friendship>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find the relation between two users, in either direction.
    pub async fn find_between(
        pool: &PgPool,
        user_a: DbId,
        user_b: DbId,
    ) -> Result<Option<Friendship>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM friendships
             WHERE (requester_id = $1 AND addressee_id = $2)
                OR (requester_id = $2 AND addressee_id = $1)"
        );
        sqlx::query_as::<_, Friendship>(&query)
            .bind(user_a)
            .bind(user_b)
            .fetch_optional(pool)
            .await
    }

    /// Apply the addressee's response to a pending request.
    ///
    /// Returns the updated row, or `None` if the row does not exist, is not
    /// `pending`, or `user_id` is not its addressee.
    pub async fn respond(
        pool: &PgPool,
        id: DbId,
        user_id: DbId,
        new_status: &str,
    ) -> Result<Option<Friendship>, sqlx::Error> {
        let query = format!(
            "UPDATE friendships
             SET status = $3, responded_at = NOW()
             WHERE id = $1 AND addressee_id = $2 AND status = 'pending'
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Friendship>(&query)
            .bind(id)
            .bind(user_id)
            .bind(new_status)
            .fetch_optional(pool)
            .await
    }

    /// List friendships involving a user, optionally filtered by status,
    /// newest first.
    pub async fn list_for_user(
        pool: &PgPool,
        user_id: DbId,
        status: Option<&str>,
    ) -> Result<Vec<Friendship>, sqlx::Error> {
        let filter = if status.is_some() { "AND status = $2" } else { "" };
        let query = format!(
            "SELECT {COLUMNS} FROM friendships
             WHERE (requester_id = $1 OR addressee_id = $1) {filter}
             ORDER BY created_at DESC"
        );
        let mut q = sqlx::query_as::<_, Friendship>(&query).bind(user_id);
        if let Some(status) = status {
            q = q.bind(status);
        }
        q.fetch_all(pool).await
    }

    /// Delete a friendship (messages cascade). Returns `true` if deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM friendships WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
