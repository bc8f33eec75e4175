//! HTTP-level integration tests for the CRM: public lead submission,
//! round-robin assignment, manager-side lead handling, and lead chats.

mod common;

use axum::http::StatusCode;
use common::{body_json, get_auth, post_json, post_json_auth, put_json_auth};
use sqlx::PgPool;
use kurort_api::auth::password::hash_password;
use kurort_db::models::user::CreateUser;
use kurort_db::repositories::{LeadRepo, UserRepo};

const ROLE_MANAGER_ID: i64 = 2;
const ROLE_PATIENT_ID: i64 = 3;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Create a user with the given role and return `(user_id, access_token)`.
async fn login_as(pool: &PgPool, username: &str, role_id: i64) -> (i64, String) {
    let password = "test_password_123";
    let hashed = hash_password(password).unwrap();
    let user = UserRepo::create(
        pool,
        &CreateUser {
            username: username.to_string(),
            email: format!("{username}@test.com"),
            password_hash: hashed,
            role_id,
        },
    )
    .await
    .unwrap();

    let app = common::build_test_app(pool.clone());
    let body = serde_json::json!({ "username": username, "password": password });
    let response = post_json(app, "/api/v1/auth/login", body).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    (user.id, json["access_token"].as_str().unwrap().to_string())
}

/// Create a manager, enroll them in the rotation, and log them in.
async fn login_manager(pool: &PgPool, username: &str) -> (i64, String) {
    let (id, token) = login_as(pool, username, ROLE_MANAGER_ID).await;
    LeadRepo::enroll_manager(pool, id).await.unwrap();
    (id, token)
}

/// Submit the public lead form and return the created lead.
async fn submit_lead(pool: &PgPool, name: &str, phone: &str) -> serde_json::Value {
    let app = common::build_test_app(pool.clone());
    let body = serde_json::json!({ "name": name, "phone": phone });
    let response = post_json(app, "/api/v1/crm/leads", body).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await
}

// ---------------------------------------------------------------------------
// Public lead form
// ---------------------------------------------------------------------------

/// Submission normalizes the phone and assigns the lead to a manager.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_submit_normalizes_phone_and_assigns(pool: PgPool) {
    let (manager_id, _token) = login_manager(&pool, "maria").await;

    let lead = submit_lead(&pool, "Иван Петров", "8 (912) 345-67-89").await;

    assert_eq!(lead["phone"], "+79123456789");
    assert_eq!(lead["status"], "new");
    assert_eq!(lead["assigned_manager_id"], manager_id);
}

/// With nobody in the rotation the lead is accepted but left unassigned.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_submit_without_managers_stays_unassigned(pool: PgPool) {
    let lead = submit_lead(&pool, "Иван Петров", "+79123456789").await;

    assert_eq!(lead["status"], "new");
    assert!(lead["assigned_manager_id"].is_null());
}

/// Two leads in a row alternate between two enrolled managers.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_submit_rotates_between_managers(pool: PgPool) {
    let (m1_id, _t1) = login_manager(&pool, "maria").await;
    let (m2_id, _t2) = login_manager(&pool, "nikolai").await;

    let first = submit_lead(&pool, "Первый", "+79990000001").await;
    let second = submit_lead(&pool, "Второй", "+79990000002").await;
    let third = submit_lead(&pool, "Третий", "+79990000003").await;

    assert_eq!(first["assigned_manager_id"], m1_id);
    assert_eq!(second["assigned_manager_id"], m2_id);
    assert_eq!(third["assigned_manager_id"], m1_id);
}

/// Blank name and unparseable phone are rejected.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_submit_validation(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let body = serde_json::json!({ "name": "   ", "phone": "+79123456789" });
    let response = post_json(app, "/api/v1/crm/leads", body).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let app = common::build_test_app(pool);
    let body = serde_json::json!({ "name": "Иван", "phone": "call me" });
    let response = post_json(app, "/api/v1/crm/leads", body).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// ---------------------------------------------------------------------------
// Manager-side lead handling
// ---------------------------------------------------------------------------

/// Lead listing is manager-only; patients get a 403, admins are allowed.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_listing_requires_manager_role(pool: PgPool) {
    let (_mid, manager_token) = login_manager(&pool, "maria").await;
    let (_pid, patient_token) = login_as(&pool, "anna", ROLE_PATIENT_ID).await;

    let app = common::build_test_app(pool.clone());
    let response = get_auth(app, "/api/v1/crm/leads", &patient_token).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let app = common::build_test_app(pool);
    let response = get_auth(app, "/api/v1/crm/leads", &manager_token).await;
    assert_eq!(response.status(), StatusCode::OK);
}

/// Status/assignee filters and free-text search over the lead list.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_list_filters_and_search(pool: PgPool) {
    let (manager_id, token) = login_manager(&pool, "maria").await;

    let first = submit_lead(&pool, "Иван Петров", "+79990000001").await;
    submit_lead(&pool, "Olga Sidorova", "+79990000002").await;

    // Close the first lead.
    let app = common::build_test_app(pool.clone());
    let uri = format!("/api/v1/crm/leads/{}", first["id"]);
    let body = serde_json::json!({ "status": "closed" });
    let response = put_json_auth(app, &uri, body, &token).await;
    assert_eq!(response.status(), StatusCode::OK);

    let app = common::build_test_app(pool.clone());
    let response = get_auth(app, "/api/v1/crm/leads?status=new", &token).await;
    let json = body_json(response).await;
    assert_eq!(json.as_array().unwrap().len(), 1);
    assert_eq!(json[0]["name"], "Olga Sidorova");

    let app = common::build_test_app(pool.clone());
    let uri = format!("/api/v1/crm/leads?assigned_manager_id={manager_id}");
    let response = get_auth(app, &uri, &token).await;
    let json = body_json(response).await;
    assert_eq!(json.as_array().unwrap().len(), 2);

    // Search matches name and phone, ignoring the status filter.
    let app = common::build_test_app(pool.clone());
    let response = get_auth(app, "/api/v1/crm/leads?q=0000001&status=new", &token).await;
    let json = body_json(response).await;
    assert_eq!(json.as_array().unwrap().len(), 1);
    assert_eq!(json[0]["phone"], "+79990000001");

    let app = common::build_test_app(pool);
    let response = get_auth(app, "/api/v1/crm/leads?q=Sidorova", &token).await;
    let json = body_json(response).await;
    assert_eq!(json.as_array().unwrap().len(), 1);
}

/// Updates validate the status value; reassignment moves the lead.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_update_and_reassign(pool: PgPool) {
    let (_m1_id, token) = login_manager(&pool, "maria").await;
    let (m2_id, _t2) = login_as(&pool, "nikolai", ROLE_MANAGER_ID).await;

    let lead = submit_lead(&pool, "Иван Петров", "+79990000001").await;
    let lead_id = lead["id"].as_i64().unwrap();

    let app = common::build_test_app(pool.clone());
    let uri = format!("/api/v1/crm/leads/{lead_id}");
    let body = serde_json::json!({ "status": "in_progress", "comment": "позвонил" });
    let response = put_json_auth(app, &uri, body, &token).await;
    let json = body_json(response).await;
    assert_eq!(json["status"], "in_progress");
    assert_eq!(json["comment"], "позвонил");

    // Unknown status values never reach the database.
    let app = common::build_test_app(pool.clone());
    let uri = format!("/api/v1/crm/leads/{lead_id}");
    let body = serde_json::json!({ "status": "lost" });
    let response = put_json_auth(app, &uri, body, &token).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let app = common::build_test_app(pool.clone());
    let uri = format!("/api/v1/crm/leads/{lead_id}/reassign");
    let body = serde_json::json!({ "manager_id": m2_id });
    let response = post_json_auth(app, &uri, body, &token).await;
    let json = body_json(response).await;
    assert_eq!(json["assigned_manager_id"], m2_id);

    let app = common::build_test_app(pool);
    let response = get_auth(app, "/api/v1/crm/leads/999999", &token).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Lead chat
// ---------------------------------------------------------------------------

/// Full visitor/manager conversation: first message opens the chat,
/// both sides see the thread oldest first, read marks count correctly.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_chat_conversation(pool: PgPool) {
    let (_mid, manager_token) = login_manager(&pool, "maria").await;

    let lead = submit_lead(&pool, "Иван Петров", "+79990000001").await;
    let lead_id = lead["id"].as_i64().unwrap();

    // Visitor writes twice; the first message opens the chat.
    for text in ["Здравствуйте!", "Есть ли свободные номера?"] {
        let app = common::build_test_app(pool.clone());
        let uri = format!("/api/v1/crm/leads/{lead_id}/chat/messages");
        let body = serde_json::json!({ "body": text });
        let response = post_json(app, &uri, body).await;
        assert_eq!(response.status(), StatusCode::CREATED);
        let json = body_json(response).await;
        assert_eq!(json["sender"], "visitor");
    }

    // The manager opens the chat and replies.
    let app = common::build_test_app(pool.clone());
    let uri = format!("/api/v1/crm/leads/{lead_id}/chat");
    let response = get_auth(app, &uri, &manager_token).await;
    assert_eq!(response.status(), StatusCode::OK);
    let chat = body_json(response).await;
    assert_eq!(chat["lead_id"], lead_id);

    let app = common::build_test_app(pool.clone());
    let uri = format!("/api/v1/crm/leads/{lead_id}/chat/reply");
    let body = serde_json::json!({ "body": "Да, есть." });
    let response = post_json_auth(app, &uri, body, &manager_token).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    // Visitor sees all three, oldest first.
    let app = common::build_test_app(pool.clone());
    let uri = format!("/api/v1/crm/leads/{lead_id}/chat/messages");
    let response = post_json(app, &uri, serde_json::json!({ "body": "Спасибо!" })).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let app = common::build_test_app(pool.clone());
    let uri = format!("/api/v1/crm/leads/{lead_id}/chat/messages");
    let response = common::get(app, &uri).await;
    let json = body_json(response).await;
    let messages = json["data"].as_array().unwrap();
    assert_eq!(messages.len(), 4);
    assert_eq!(messages[0]["body"], "Здравствуйте!");
    assert_eq!(messages[2]["body"], "Да, есть.");

    // Manager marks the three visitor messages read.
    let app = common::build_test_app(pool.clone());
    let uri = format!("/api/v1/crm/leads/{lead_id}/chat/manager-read");
    let response = post_json_auth(app, &uri, serde_json::json!({}), &manager_token).await;
    let json = body_json(response).await;
    assert_eq!(json["data"]["marked_read"], 3);

    // Visitor marks the single manager message read.
    let app = common::build_test_app(pool.clone());
    let uri = format!("/api/v1/crm/leads/{lead_id}/chat/read");
    let response = post_json(app, &uri, serde_json::json!({})).await;
    let json = body_json(response).await;
    assert_eq!(json["data"]["marked_read"], 1);

    // Nothing left unread on either side.
    let app = common::build_test_app(pool);
    let uri = format!("/api/v1/crm/leads/{lead_id}/chat/manager-read");
    let response = post_json_auth(app, &uri, serde_json::json!({}), &manager_token).await;
    let json = body_json(response).await;
    assert_eq!(json["data"]["marked_read"], 0);
}

/// Chat endpoints guard against unknown leads, blank bodies, and the
/// wrong role on the manager side.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_chat_guards(pool: PgPool) {
    let (_pid, patient_token) = login_as(&pool, "anna", ROLE_PATIENT_ID).await;

    let app = common::build_test_app(pool.clone());
    let body = serde_json::json!({ "body": "алло?" });
    let response = post_json(app, "/api/v1/crm/leads/999999/chat/messages", body).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let lead = submit_lead(&pool, "Иван Петров", "+79990000001").await;
    let lead_id = lead["id"].as_i64().unwrap();

    let app = common::build_test_app(pool.clone());
    let uri = format!("/api/v1/crm/leads/{lead_id}/chat/messages");
    let body = serde_json::json!({ "body": "   " });
    let response = post_json(app, &uri, body).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    // A patient token does not open the manager side.
    let app = common::build_test_app(pool);
    let uri = format!("/api/v1/crm/leads/{lead_id}/chat/reply");
    let body = serde_json::json!({ "body": "не менеджер" });
    let response = post_json_auth(app, &uri, body, &patient_token).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}
