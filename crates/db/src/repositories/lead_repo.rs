//! Repository for the `leads` and `manager_rotation` tables.

use sqlx::PgPool;
use kurort_core::types::DbId;

use crate::models::lead::{CreateLead, Lead, UpdateLead};

const COLUMNS: &str = "id, name, phone, email, comment, source, status, \
                       assigned_manager_id, created_at, updated_at";

/// CRM lead persistence and round-robin manager rotation.
pub struct LeadRepo;

impl LeadRepo {
    /// Insert a new lead with `new` status and no assignment.
    pub async fn create(pool: &PgPool, input: &CreateLead, phone: &str) -> Result<Lead, sqlx::Error> {
        let query = format!(
            "INSERT INTO leads (name, phone, email, comment, source)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Lead>(&query)
            .bind(&input.name)
            .bind(phone)
            .bind(&input.email)
            .bind(&input.comment)
            .bind(&input.source)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Lead>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM leads WHERE id = $1");
        sqlx::query_as::<_, Lead>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List leads, newest first, optionally filtered by status or assignee.
    pub async fn list(
        pool: &PgPool,
        status: Option<&str>,
        assigned_manager_id: Option<DbId>,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Lead>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM leads
             WHERE ($3::text IS NULL OR status = $3)
               AND ($4::bigint IS NULL OR assigned_manager_id = $4)
             ORDER BY created_at DESC
             LIMIT $1 OFFSET $2"
        );
        sqlx::query_as::<_, Lead>(&query)
            .bind(limit)
            .bind(offset)
            .bind(status)
            .bind(assigned_manager_id)
            .fetch_all(pool)
            .await
    }

    /// Case-insensitive search over name, phone, and email.
    pub async fn search(
        pool: &PgPool,
        term: &str,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Lead>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM leads
             WHERE name ILIKE $1 OR phone ILIKE $1 OR email ILIKE $1
             ORDER BY created_at DESC
             LIMIT $2 OFFSET $3"
        );
        sqlx::query_as::<_, Lead>(&query)
            .bind(format!("%{term}%"))
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// Update a lead. Only non-`None` fields in `input` are applied.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateLead,
    ) -> Result<Option<Lead>, sqlx::Error> {
        let query = format!(
            "UPDATE leads SET
                status = COALESCE($2, status),
                comment = COALESCE($3, comment),
                assigned_manager_id = COALESCE($4, assigned_manager_id),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Lead>(&query)
            .bind(id)
            .bind(&input.status)
            .bind(&input.comment)
            .bind(input.assigned_manager_id)
            .fetch_optional(pool)
            .await
    }

    /// Assign a lead to a manager. Returns the updated row.
    pub async fn assign(
        pool: &PgPool,
        id: DbId,
        manager_id: DbId,
    ) -> Result<Option<Lead>, sqlx::Error> {
        let query = format!(
            "UPDATE leads SET assigned_manager_id = $2, updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Lead>(&query)
            .bind(id)
            .bind(manager_id)
            .fetch_optional(pool)
            .await
    }

    // -- Manager rotation ---------------------------------------------------

    /// Enroll a manager in the lead rotation (idempotent).
    pub async fn enroll_manager(pool: &PgPool, manager_id: DbId) -> Result<(), sqlx::Error> {
        sqlx::query(
            "INSERT INTO manager_rotation (manager_id) VALUES ($1)
             ON CONFLICT (manager_id) DO NOTHING",
        )
        .bind(manager_id)
        .execute(pool)
        .await?;
        Ok(())
    }

    /// Remove a manager from the rotation.
    pub async fn withdraw_manager(pool: &PgPool, manager_id: DbId) -> Result<(), sqlx::Error> {
        sqlx::query("DELETE FROM manager_rotation WHERE manager_id = $1")
            .bind(manager_id)
            .execute(pool)
            .await?;
        Ok(())
    }

    /// Pick the next manager in the round-robin rotation and stamp them.
    ///
    /// Selection is "least recently assigned active manager, NULLs first,
    /// id ascending". The row lock (`FOR UPDATE SKIP LOCKED`) makes
    /// concurrent lead submissions pick distinct managers instead of
    /// racing for the same rotation row.
    ///
    /// Returns `None` when no active manager is enrolled.
    pub async fn next_manager(pool: &PgPool) -> Result<Option<DbId>, sqlx::Error> {
        sqlx::query_scalar(
            "UPDATE manager_rotation
             SET last_assigned_at = NOW()
             WHERE manager_id = (
                 SELECT mr.manager_id
                 FROM manager_rotation mr
                 JOIN users u ON u.id = mr.manager_id
                 WHERE u.is_active = true
                 ORDER BY mr.last_assigned_at ASC NULLS FIRST, mr.manager_id ASC
                 LIMIT 1
                 FOR UPDATE OF mr SKIP LOCKED
             )
             RETURNING manager_id",
        )
        .fetch_optional(pool)
        .await
    }
}
