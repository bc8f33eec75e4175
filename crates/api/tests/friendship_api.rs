//! HTTP-level integration tests for friendships and patient messaging.
//!
//! Covers the request/respond lifecycle, thread access control, read
//! receipts, and unread counts.

mod common;

use axum::http::StatusCode;
use common::{body_json, delete_auth, get_auth, post_json, post_json_auth};
use sqlx::PgPool;
use kurort_api::auth::password::hash_password;
use kurort_db::models::user::CreateUser;
use kurort_db::repositories::UserRepo;

const ROLE_PATIENT_ID: i64 = 3;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Create a patient and return `(user_id, access_token)`.
async fn login_patient(pool: &PgPool, username: &str) -> (i64, String) {
    let password = "test_password_123";
    let hashed = hash_password(password).unwrap();
    let user = UserRepo::create(
        pool,
        &CreateUser {
            username: username.to_string(),
            email: format!("{username}@test.com"),
            password_hash: hashed,
            role_id: ROLE_PATIENT_ID,
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

/// Send a friend request and return the friendship id.
async fn send_request(pool: &PgPool, token: &str, addressee_id: i64) -> i64 {
    let app = common::build_test_app(pool.clone());
    let body = serde_json::json!({ "addressee_id": addressee_id });
    let response = post_json_auth(app, "/api/v1/friends/requests", body, token).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await["id"].as_i64().unwrap()
}

/// Respond to a friend request.
async fn respond(pool: &PgPool, token: &str, friendship_id: i64, accept: bool) -> StatusCode {
    let app = common::build_test_app(pool.clone());
    let body = serde_json::json!({ "accept": accept });
    let uri = format!("/api/v1/friends/requests/{friendship_id}/respond");
    post_json_auth(app, &uri, body, token).await.status()
}

// ---------------------------------------------------------------------------
// Request lifecycle
// ---------------------------------------------------------------------------

/// Request, accept, and see the friendship in both users' lists.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_request_accept_flow(pool: PgPool) {
    let (_anna_id, anna_token) = login_patient(&pool, "anna").await;
    let (boris_id, boris_token) = login_patient(&pool, "boris").await;

    let friendship_id = send_request(&pool, &anna_token, boris_id).await;

    // Boris sees a pending request.
    let app = common::build_test_app(pool.clone());
    let response = get_auth(app, "/api/v1/friends?status=pending", &boris_token).await;
    let json = body_json(response).await;
    assert_eq!(json.as_array().unwrap().len(), 1);
    assert_eq!(json[0]["id"], friendship_id);

    assert_eq!(
        respond(&pool, &boris_token, friendship_id, true).await,
        StatusCode::OK
    );

    // Both now list an accepted friendship.
    for token in [&anna_token, &boris_token] {
        let app = common::build_test_app(pool.clone());
        let response = get_auth(app, "/api/v1/friends?status=accepted", token).await;
        let json = body_json(response).await;
        assert_eq!(json.as_array().unwrap().len(), 1);
        assert_eq!(json[0]["status"], "accepted");
    }
}

/// A request to yourself is a 400, to a stranger id a 404, a duplicate a 409.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_request_validation(pool: PgPool) {
    let (anna_id, anna_token) = login_patient(&pool, "anna").await;
    let (boris_id, boris_token) = login_patient(&pool, "boris").await;

    let app = common::build_test_app(pool.clone());
    let body = serde_json::json!({ "addressee_id": anna_id });
    let response = post_json_auth(app, "/api/v1/friends/requests", body, &anna_token).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let app = common::build_test_app(pool.clone());
    let body = serde_json::json!({ "addressee_id": 999_999 });
    let response = post_json_auth(app, "/api/v1/friends/requests", body, &anna_token).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    send_request(&pool, &anna_token, boris_id).await;

    // Same pair again, from the other side.
    let app = common::build_test_app(pool);
    let body = serde_json::json!({ "addressee_id": anna_id });
    let response = post_json_auth(app, "/api/v1/friends/requests", body, &boris_token).await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
}

/// Only the addressee may respond, and only once.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_respond_guards(pool: PgPool) {
    let (_anna_id, anna_token) = login_patient(&pool, "anna").await;
    let (boris_id, boris_token) = login_patient(&pool, "boris").await;

    let friendship_id = send_request(&pool, &anna_token, boris_id).await;

    // The requester cannot respond to their own request.
    assert_eq!(
        respond(&pool, &anna_token, friendship_id, true).await,
        StatusCode::CONFLICT
    );

    assert_eq!(
        respond(&pool, &boris_token, friendship_id, false).await,
        StatusCode::OK
    );

    // The decision is final.
    assert_eq!(
        respond(&pool, &boris_token, friendship_id, true).await,
        StatusCode::CONFLICT
    );
}

// ---------------------------------------------------------------------------
// Message threads
// ---------------------------------------------------------------------------

/// Messages flow in an accepted thread; read receipts and unread counts work.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_thread_messaging(pool: PgPool) {
    let (_anna_id, anna_token) = login_patient(&pool, "anna").await;
    let (boris_id, boris_token) = login_patient(&pool, "boris").await;

    let friendship_id = send_request(&pool, &anna_token, boris_id).await;
    respond(&pool, &boris_token, friendship_id, true).await;

    // Anna sends two messages.
    for text in ["Привет!", "Как дела?"] {
        let app = common::build_test_app(pool.clone());
        let body = serde_json::json!({ "body": text });
        let uri = format!("/api/v1/friends/{friendship_id}/messages");
        let response = post_json_auth(app, &uri, body, &anna_token).await;
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    // Boris has 2 unread.
    let app = common::build_test_app(pool.clone());
    let response = get_auth(app, "/api/v1/friends/messages/unread-count", &boris_token).await;
    let json = body_json(response).await;
    assert_eq!(json["data"]["count"], 2);

    // Boris lists the thread, oldest first.
    let app = common::build_test_app(pool.clone());
    let uri = format!("/api/v1/friends/{friendship_id}/messages");
    let response = get_auth(app, &uri, &boris_token).await;
    let json = body_json(response).await;
    let messages = json["data"].as_array().unwrap();
    assert_eq!(messages.len(), 2);
    assert_eq!(messages[0]["body"], "Привет!");

    // Boris marks the thread read.
    let app = common::build_test_app(pool.clone());
    let uri = format!("/api/v1/friends/{friendship_id}/messages/read");
    let response = post_json_auth(app, &uri, serde_json::json!({}), &boris_token).await;
    let json = body_json(response).await;
    assert_eq!(json["data"]["marked_read"], 2);

    let app = common::build_test_app(pool);
    let response = get_auth(app, "/api/v1/friends/messages/unread-count", &boris_token).await;
    let json = body_json(response).await;
    assert_eq!(json["data"]["count"], 0);
}

/// No thread exists while the request is pending; outsiders are forbidden.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_thread_access_control(pool: PgPool) {
    let (_anna_id, anna_token) = login_patient(&pool, "anna").await;
    let (boris_id, boris_token) = login_patient(&pool, "boris").await;
    let (_vera_id, vera_token) = login_patient(&pool, "vera").await;

    let friendship_id = send_request(&pool, &anna_token, boris_id).await;

    // Pending: no thread yet.
    let app = common::build_test_app(pool.clone());
    let uri = format!("/api/v1/friends/{friendship_id}/messages");
    let body = serde_json::json!({ "body": "рано" });
    let response = post_json_auth(app, &uri, body, &anna_token).await;
    assert_eq!(response.status(), StatusCode::CONFLICT);

    // A third party is not allowed near the thread.
    let app = common::build_test_app(pool.clone());
    let uri = format!("/api/v1/friends/{friendship_id}/messages");
    let response = get_auth(app, &uri, &vera_token).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    // An empty message body is rejected even in an accepted thread.
    respond(&pool, &boris_token, friendship_id, true).await;

    let app = common::build_test_app(pool);
    let uri = format!("/api/v1/friends/{friendship_id}/messages");
    let body = serde_json::json!({ "body": "   " });
    let response = post_json_auth(app, &uri, body, &anna_token).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

/// Removing a friendship deletes its thread; only a party may remove it.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_remove_friendship(pool: PgPool) {
    let (_anna_id, anna_token) = login_patient(&pool, "anna").await;
    let (boris_id, boris_token) = login_patient(&pool, "boris").await;
    let (_vera_id, vera_token) = login_patient(&pool, "vera").await;

    let friendship_id = send_request(&pool, &anna_token, boris_id).await;
    respond(&pool, &boris_token, friendship_id, true).await;

    let app = common::build_test_app(pool.clone());
    let uri = format!("/api/v1/friends/{friendship_id}/messages");
    let body = serde_json::json!({ "body": "скоро удалю" });
    post_json_auth(app, &uri, body, &anna_token).await;

    // An outsider cannot remove it.
    let app = common::build_test_app(pool.clone());
    let response = delete_auth(app, &format!("/api/v1/friends/{friendship_id}"), &vera_token).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    // A party can.
    let app = common::build_test_app(pool.clone());
    let response = delete_auth(app, &format!("/api/v1/friends/{friendship_id}"), &boris_token).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let remaining: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM patient_messages")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(remaining.0, 0, "thread messages are deleted with the friendship");
}
