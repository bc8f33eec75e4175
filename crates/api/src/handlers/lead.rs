//! Handlers for the `/crm/leads` resource.
//!
//! The lead form is public (site visitors are not users). Submission
//! normalizes the phone number, picks the next manager in the
//! round-robin rotation, and publishes `lead.created` so the manager
//! gets an in-app notification. Everything else is manager-side.

use std::sync::LazyLock;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use regex::Regex;
use serde::Deserialize;
use kurort_core::error::CoreError;
use kurort_core::types::DbId;
use kurort_db::models::lead::{CreateLead, Lead, UpdateLead};
use kurort_db::repositories::LeadRepo;
use kurort_db::{clamp_limit, clamp_offset};
use kurort_events::PlatformEvent;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireManager;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Query / request types
// ---------------------------------------------------------------------------

/// Query parameters for `GET /crm/leads`.
#[derive(Debug, Deserialize)]
pub struct LeadListParams {
    /// Filter by lead status (`new`, `in_progress`, `closed`).
    pub status: Option<String>,
    /// Filter by assigned manager.
    pub assigned_manager_id: Option<DbId>,
    /// Free-text search over name, phone, and email. When present the
    /// status/assignee filters are ignored.
    pub q: Option<String>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

/// Request body for `POST /crm/leads/{id}/reassign`.
#[derive(Debug, Deserialize)]
pub struct ReassignBody {
    pub manager_id: DbId,
}

// ---------------------------------------------------------------------------
// Public handler
// ---------------------------------------------------------------------------

/// POST /api/v1/crm/leads
///
/// Public lead form submission. Returns the created lead with 201.
pub async fn submit(
    State(state): State<AppState>,
    Json(input): Json<CreateLead>,
) -> AppResult<(StatusCode, Json<Lead>)> {
    if input.name.trim().is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "Name must not be empty".into(),
        )));
    }

    let phone = normalize_phone(&input.phone)
        .map_err(|msg| AppError::Core(CoreError::Validation(msg)))?;

    let lead = LeadRepo::create(&state.pool, &input, &phone).await?;

    // Round-robin assignment. A lead stays unassigned when no active
    // manager is enrolled; a manager can pick it up later.
    let lead = match LeadRepo::next_manager(&state.pool).await? {
        Some(manager_id) => LeadRepo::assign(&state.pool, lead.id, manager_id)
            .await?
            .unwrap_or(lead),
        None => {
            tracing::warn!(lead_id = lead.id, "No active manager in rotation");
            lead
        }
    };

    state.event_bus.publish(
        PlatformEvent::new("lead.created")
            .with_source("lead", lead.id)
            .with_payload(serde_json::json!({
                "manager_id": lead.assigned_manager_id,
            })),
    );

    Ok((StatusCode::CREATED, Json(lead)))
}

// ---------------------------------------------------------------------------
// Manager handlers
// ---------------------------------------------------------------------------

/// GET /api/v1/crm/leads
///
/// List or search leads, newest first.
pub async fn list(
    State(state): State<AppState>,
    RequireManager(_manager): RequireManager,
    Query(params): Query<LeadListParams>,
) -> AppResult<Json<Vec<Lead>>> {
    let limit = clamp_limit(params.limit);
    let offset = clamp_offset(params.offset);

    let leads = match params.q.as_deref() {
        Some(term) if !term.trim().is_empty() => {
            LeadRepo::search(&state.pool, term.trim(), limit, offset).await?
        }
        _ => {
            LeadRepo::list(
                &state.pool,
                params.status.as_deref(),
                params.assigned_manager_id,
                limit,
                offset,
            )
            .await?
        }
    };
    Ok(Json(leads))
}

/// GET /api/v1/crm/leads/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    RequireManager(_manager): RequireManager,
    Path(id): Path<DbId>,
) -> AppResult<Json<Lead>> {
    let lead = LeadRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Lead", id }))?;
    Ok(Json(lead))
}

/// PUT /api/v1/crm/leads/{id}
///
/// Update lead status, comment, or assignment.
pub async fn update(
    State(state): State<AppState>,
    RequireManager(_manager): RequireManager,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateLead>,
) -> AppResult<Json<Lead>> {
    if let Some(status) = input.status.as_deref() {
        validate_status(status)?;
    }

    let lead = LeadRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Lead", id }))?;
    Ok(Json(lead))
}

/// POST /api/v1/crm/leads/{id}/reassign
///
/// Hand a lead to a specific manager, bypassing the rotation.
pub async fn reassign(
    State(state): State<AppState>,
    RequireManager(_manager): RequireManager,
    Path(id): Path<DbId>,
    Json(input): Json<ReassignBody>,
) -> AppResult<Json<Lead>> {
    let lead = LeadRepo::assign(&state.pool, id, input.manager_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Lead", id }))?;
    Ok(Json(lead))
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Separator characters stripped from raw phone input.
static PHONE_SEPARATORS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[\s\-\(\)\.]+").expect("phone separator pattern is valid")
});

/// Normalize a phone number to `+<digits>` form.
///
/// Strips separators, rewrites the Russian `8` trunk prefix to `+7`, and
/// requires 10-15 digits total.
fn normalize_phone(raw: &str) -> Result<String, String> {
    let cleaned = PHONE_SEPARATORS.replace_all(raw.trim(), "").to_string();

    let (had_plus, rest) = match cleaned.strip_prefix('+') {
        Some(rest) => (true, rest),
        None => (false, cleaned.as_str()),
    };

    if rest.is_empty() || rest.chars().any(|c| !c.is_ascii_digit()) {
        return Err("Phone number contains invalid characters".to_string());
    }

    // Russian trunk prefix: 8 XXX XXX-XX-XX means +7 XXX XXX-XX-XX.
    let digits = match rest.strip_prefix('8') {
        Some(tail) if !had_plus && rest.len() == 11 => format!("7{tail}"),
        _ => rest.to_string(),
    };

    if !(10..=15).contains(&digits.len()) {
        return Err("Phone number must contain 10 to 15 digits".to_string());
    }

    Ok(format!("+{digits}"))
}

/// Reject unknown lead status values before they hit the database.
fn validate_status(status: &str) -> Result<(), AppError> {
    use kurort_db::models::lead::{STATUS_CLOSED, STATUS_IN_PROGRESS, STATUS_NEW};

    match status {
        STATUS_NEW | STATUS_IN_PROGRESS | STATUS_CLOSED => Ok(()),
        other => Err(AppError::Core(CoreError::Validation(format!(
            "Unknown lead status '{other}'"
        )))),
    }
}
