//! HTTP-level integration tests for auth and admin user management.
//!
//! Tests cover login, token refresh, logout, RBAC enforcement,
//! admin user management, account lockout, and rotation upkeep.

mod common;

use axum::http::StatusCode;
use common::{body_json, delete_auth, get, get_auth, post_json, post_json_auth};
use sqlx::PgPool;
use kurort_api::auth::password::hash_password;
use kurort_db::models::user::CreateUser;
use kurort_db::repositories::UserRepo;

// Role ids as seeded by the first migration.
const ROLE_ADMIN_ID: i64 = 1;
const ROLE_MANAGER_ID: i64 = 2;
const ROLE_PATIENT_ID: i64 = 3;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Create a test user directly in the database and return the user row plus
/// the plaintext password used.
async fn create_test_user(
    pool: &PgPool,
    username: &str,
    role_id: i64,
) -> (kurort_db::models::user::User, String) {
    let password = "test_password_123";
    let hashed = hash_password(password).expect("hashing should succeed");
    let input = CreateUser {
        username: username.to_string(),
        email: format!("{username}@test.com"),
        password_hash: hashed,
        role_id,
    };
    let user = UserRepo::create(pool, &input)
        .await
        .expect("user creation should succeed");
    (user, password.to_string())
}

/// Log in a user via the API and return the JSON response containing
/// `access_token`, `refresh_token`, and `user` info.
async fn login_user(app: axum::Router, username: &str, password: &str) -> serde_json::Value {
    let body = serde_json::json!({ "username": username, "password": password });
    let response = post_json(app, "/api/v1/auth/login", body).await;
    assert_eq!(response.status(), StatusCode::OK);
    body_json(response).await
}

// ---------------------------------------------------------------------------
// Auth flow tests
// ---------------------------------------------------------------------------

/// Successful login returns 200 with access_token, refresh_token, and user info.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_login_success(pool: PgPool) {
    let (user, password) = create_test_user(&pool, "loginuser", ROLE_ADMIN_ID).await;
    let app = common::build_test_app(pool);

    let json = login_user(app, "loginuser", &password).await;

    assert!(json["access_token"].is_string(), "response must contain access_token");
    assert!(json["refresh_token"].is_string(), "response must contain refresh_token");
    assert!(json["expires_in"].is_number(), "response must contain expires_in");
    assert_eq!(json["user"]["id"], user.id);
    assert_eq!(json["user"]["username"], "loginuser");
    assert_eq!(json["user"]["email"], "loginuser@test.com");
    assert_eq!(json["user"]["role"], "admin");
}

/// Login with an incorrect password returns 401.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_login_wrong_password(pool: PgPool) {
    let (_user, _password) = create_test_user(&pool, "wrongpw", ROLE_ADMIN_ID).await;
    let app = common::build_test_app(pool);

    let body = serde_json::json!({ "username": "wrongpw", "password": "incorrect_password" });
    let response = post_json(app, "/api/v1/auth/login", body).await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

/// Login with a nonexistent username returns 401.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_login_nonexistent_user(pool: PgPool) {
    let app = common::build_test_app(pool);

    let body = serde_json::json!({ "username": "ghost", "password": "whatever" });
    let response = post_json(app, "/api/v1/auth/login", body).await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

/// Login to a deactivated account returns 403.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_login_inactive_user(pool: PgPool) {
    let (user, password) = create_test_user(&pool, "inactive", ROLE_PATIENT_ID).await;
    UserRepo::deactivate(&pool, user.id)
        .await
        .expect("deactivation should succeed");

    let app = common::build_test_app(pool);

    let body = serde_json::json!({ "username": "inactive", "password": password });
    let response = post_json(app, "/api/v1/auth/login", body).await;

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

/// A valid refresh token returns new tokens.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_token_refresh(pool: PgPool) {
    let (_user, password) = create_test_user(&pool, "refresher", ROLE_PATIENT_ID).await;

    let app = common::build_test_app(pool.clone());
    let login_json = login_user(app, "refresher", &password).await;
    let refresh_token = login_json["refresh_token"].as_str().unwrap();

    let app = common::build_test_app(pool);
    let body = serde_json::json!({ "refresh_token": refresh_token });
    let response = post_json(app, "/api/v1/auth/refresh", body).await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert!(json["access_token"].is_string());
    assert!(json["refresh_token"].is_string());
    // Token rotation: the new refresh token must differ from the original.
    assert_ne!(
        json["refresh_token"].as_str().unwrap(),
        refresh_token,
        "refresh token must rotate on use"
    );
}

/// A rotated-out refresh token cannot be reused.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_refresh_token_single_use(pool: PgPool) {
    let (_user, password) = create_test_user(&pool, "oneshot", ROLE_PATIENT_ID).await;

    let app = common::build_test_app(pool.clone());
    let login_json = login_user(app, "oneshot", &password).await;
    let refresh_token = login_json["refresh_token"].as_str().unwrap().to_string();

    let app = common::build_test_app(pool.clone());
    let body = serde_json::json!({ "refresh_token": refresh_token });
    let response = post_json(app, "/api/v1/auth/refresh", body.clone()).await;
    assert_eq!(response.status(), StatusCode::OK);

    // Second use of the same token fails.
    let app = common::build_test_app(pool);
    let response = post_json(app, "/api/v1/auth/refresh", body).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

/// Refreshing with a garbage token returns 401.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_refresh_with_invalid_token(pool: PgPool) {
    let app = common::build_test_app(pool);

    let body = serde_json::json!({ "refresh_token": "not-a-real-token" });
    let response = post_json(app, "/api/v1/auth/refresh", body).await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

/// Logout revokes sessions and returns 204 No Content.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_logout(pool: PgPool) {
    let (_user, password) = create_test_user(&pool, "logoutuser", ROLE_PATIENT_ID).await;

    let app = common::build_test_app(pool.clone());
    let login_json = login_user(app, "logoutuser", &password).await;
    let access_token = login_json["access_token"].as_str().unwrap();
    let refresh_token = login_json["refresh_token"].as_str().unwrap();

    let app = common::build_test_app(pool.clone());
    let response =
        post_json_auth(app, "/api/v1/auth/logout", serde_json::json!({}), access_token).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    // The refresh token issued before logout is now dead.
    let app = common::build_test_app(pool);
    let body = serde_json::json!({ "refresh_token": refresh_token });
    let response = post_json(app, "/api/v1/auth/refresh", body).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

// ---------------------------------------------------------------------------
// RBAC enforcement tests
// ---------------------------------------------------------------------------

/// Admin endpoints require authentication; a missing token returns 401.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_admin_endpoint_requires_auth(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/admin/users").await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

/// A patient is forbidden from admin endpoints.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_admin_endpoint_requires_admin_role(pool: PgPool) {
    let (_user, password) = create_test_user(&pool, "patientuser", ROLE_PATIENT_ID).await;

    let app = common::build_test_app(pool.clone());
    let login_json = login_user(app, "patientuser", &password).await;
    let token = login_json["access_token"].as_str().unwrap();

    let app = common::build_test_app(pool);
    let response = get_auth(app, "/api/v1/admin/users", token).await;

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

/// A manager is forbidden from admin endpoints too.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_manager_forbidden_from_admin(pool: PgPool) {
    let (_user, password) = create_test_user(&pool, "manageruser", ROLE_MANAGER_ID).await;

    let app = common::build_test_app(pool.clone());
    let login_json = login_user(app, "manageruser", &password).await;
    let token = login_json["access_token"].as_str().unwrap();

    let app = common::build_test_app(pool);
    let response = get_auth(app, "/api/v1/admin/users", token).await;

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

// ---------------------------------------------------------------------------
// Admin user management tests
// ---------------------------------------------------------------------------

/// Admin can create a new user via POST /admin/users and receives 201.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_admin_create_user(pool: PgPool) {
    let (_admin, admin_pw) = create_test_user(&pool, "adminmgr", ROLE_ADMIN_ID).await;

    let app = common::build_test_app(pool.clone());
    let login_json = login_user(app, "adminmgr", &admin_pw).await;
    let token = login_json["access_token"].as_str().unwrap();

    let app = common::build_test_app(pool);
    let new_user_body = serde_json::json!({
        "username": "newpatient",
        "email": "newpatient@test.com",
        "password": "strong_password_123",
        "role_id": ROLE_PATIENT_ID
    });
    let response = post_json_auth(app, "/api/v1/admin/users", new_user_body, token).await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["username"], "newpatient");
    assert_eq!(json["email"], "newpatient@test.com");
    assert_eq!(json["role"], "patient");
    assert_eq!(json["role_id"], ROLE_PATIENT_ID);
    assert!(json["is_active"].as_bool().unwrap());
    assert!(json.get("password_hash").is_none(), "hash must never leak");
}

/// A weak password is rejected with 400.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_admin_create_user_weak_password(pool: PgPool) {
    let (_admin, admin_pw) = create_test_user(&pool, "pwadmin", ROLE_ADMIN_ID).await;

    let app = common::build_test_app(pool.clone());
    let login_json = login_user(app, "pwadmin", &admin_pw).await;
    let token = login_json["access_token"].as_str().unwrap();

    let app = common::build_test_app(pool);
    let body = serde_json::json!({
        "username": "weakling",
        "email": "weakling@test.com",
        "password": "short",
        "role_id": ROLE_PATIENT_ID
    });
    let response = post_json_auth(app, "/api/v1/admin/users", body, token).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

/// Creating a manager enrolls them in the lead rotation.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_admin_create_manager_enrolls_rotation(pool: PgPool) {
    let (_admin, admin_pw) = create_test_user(&pool, "rotadmin", ROLE_ADMIN_ID).await;

    let app = common::build_test_app(pool.clone());
    let login_json = login_user(app, "rotadmin", &admin_pw).await;
    let token = login_json["access_token"].as_str().unwrap();

    let app = common::build_test_app(pool.clone());
    let body = serde_json::json!({
        "username": "newmanager",
        "email": "newmanager@test.com",
        "password": "strong_password_123",
        "role_id": ROLE_MANAGER_ID
    });
    let response = post_json_auth(app, "/api/v1/admin/users", body, token).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    let manager_id = json["id"].as_i64().unwrap();

    let enrolled: (i64,) =
        sqlx::query_as("SELECT COUNT(*) FROM manager_rotation WHERE manager_id = $1")
            .bind(manager_id)
            .fetch_one(&pool)
            .await
            .unwrap();
    assert_eq!(enrolled.0, 1);
}

/// Admin can list users via GET /admin/users.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_admin_list_users(pool: PgPool) {
    let (_admin, admin_pw) = create_test_user(&pool, "listadmin", ROLE_ADMIN_ID).await;
    let (_user2, _) = create_test_user(&pool, "listuser2", ROLE_PATIENT_ID).await;

    let app = common::build_test_app(pool.clone());
    let login_json = login_user(app, "listadmin", &admin_pw).await;
    let token = login_json["access_token"].as_str().unwrap();

    let app = common::build_test_app(pool);
    let response = get_auth(app, "/api/v1/admin/users", token).await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let users = json.as_array().expect("response body should be an array");
    assert!(
        users.len() >= 2,
        "list should contain at least the two created users"
    );
}

/// Deactivating a manager drops them from the rotation and kills sessions.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_admin_deactivate_manager(pool: PgPool) {
    let (_admin, admin_pw) = create_test_user(&pool, "deacadmin", ROLE_ADMIN_ID).await;
    let (manager, manager_pw) = create_test_user(&pool, "doomedmgr", ROLE_MANAGER_ID).await;
    kurort_db::repositories::LeadRepo::enroll_manager(&pool, manager.id)
        .await
        .unwrap();

    // The manager logs in so they hold a live session.
    let app = common::build_test_app(pool.clone());
    let manager_json = login_user(app, "doomedmgr", &manager_pw).await;
    let manager_refresh = manager_json["refresh_token"].as_str().unwrap().to_string();

    let app = common::build_test_app(pool.clone());
    let login_json = login_user(app, "deacadmin", &admin_pw).await;
    let token = login_json["access_token"].as_str().unwrap();

    let app = common::build_test_app(pool.clone());
    let uri = format!("/api/v1/admin/users/{}", manager.id);
    let response = delete_auth(app, &uri, token).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let enrolled: (i64,) =
        sqlx::query_as("SELECT COUNT(*) FROM manager_rotation WHERE manager_id = $1")
            .bind(manager.id)
            .fetch_one(&pool)
            .await
            .unwrap();
    assert_eq!(enrolled.0, 0, "deactivated manager leaves the rotation");

    // Their refresh token is revoked.
    let app = common::build_test_app(pool);
    let body = serde_json::json!({ "refresh_token": manager_refresh });
    let response = post_json(app, "/api/v1/auth/refresh", body).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

/// Account lockout: after 5 failed login attempts the account is locked.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_account_lockout(pool: PgPool) {
    let (_user, _password) = create_test_user(&pool, "lockme", ROLE_PATIENT_ID).await;

    // Fail login 5 times with the wrong password to trigger the lock.
    for _ in 0..5 {
        let app = common::build_test_app(pool.clone());
        let body = serde_json::json!({ "username": "lockme", "password": "wrong_pass" });
        let response = post_json(app, "/api/v1/auth/login", body).await;
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    // The 6th attempt (even with the wrong password) should return 403 (locked).
    let app = common::build_test_app(pool);
    let body = serde_json::json!({ "username": "lockme", "password": "wrong_pass" });
    let response = post_json(app, "/api/v1/auth/login", body).await;

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    let json = body_json(response).await;
    let error_msg = json["error"].as_str().unwrap_or("");
    assert!(
        error_msg.contains("locked"),
        "error message should mention the account is locked, got: {error_msg}"
    );
}
