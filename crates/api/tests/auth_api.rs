//! HTTP-level integration tests for the `/auth/register` endpoint.
//!
//! Registration is the only auth surface: it validates the payload, checks
//! email uniqueness up front, hashes the password with Argon2id, and stores
//! the user. There is no login endpoint, so hash correctness is verified by
//! reading the stored hash back directly.

mod common;

use axum::http::StatusCode;
use common::{body_json, build_test_app, post_json};
use sqlx::PgPool;

use civicdesk_api::auth::password::verify_password;

/// Fetch the stored password hash for an email straight from the table.
async fn stored_hash(pool: &PgPool, email: &str) -> String {
    sqlx::query_scalar::<_, String>("SELECT password_hash FROM users WHERE email = $1")
        .bind(email)
        .fetch_one(pool)
        .await
        .expect("registered user should exist")
}

// ---------------------------------------------------------------------------
// Test: successful registration returns 201 without the hash
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn register_returns_201_with_user(pool: PgPool) {
    let app = build_test_app(pool);
    let response = post_json(
        app,
        "/api/auth/register",
        serde_json::json!({
            "name": "Asha",
            "email": "asha@example.com",
            "password": "correct-horse-battery-staple"
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert!(json["user_id"].is_number());
    assert_eq!(json["email"], "asha@example.com");
    // Role defaults to citizen when omitted.
    assert_eq!(json["role"], "citizen");
    // The hash must never appear in API output.
    assert!(
        json.get("password_hash").is_none(),
        "response must not carry the password hash"
    );
}

// ---------------------------------------------------------------------------
// Test: the stored credential is an Argon2id hash of the password
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn register_stores_argon2id_hash(pool: PgPool) {
    let app = build_test_app(pool.clone());
    let response = post_json(
        app,
        "/api/auth/register",
        serde_json::json!({
            "name": "Hasher",
            "email": "hasher@example.com",
            "password": "s3cret-enough"
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let hash = stored_hash(&pool, "hasher@example.com").await;
    assert!(
        hash.starts_with("$argon2id$"),
        "expected a PHC-format argon2id hash, got: {hash}"
    );
    assert!(verify_password("s3cret-enough", &hash).unwrap());
    assert!(!verify_password("wrong-password", &hash).unwrap());
}

// ---------------------------------------------------------------------------
// Test: duplicate email returns 409 and inserts nothing
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn register_duplicate_email_returns_409(pool: PgPool) {
    let body = serde_json::json!({
        "name": "First",
        "email": "taken@example.com",
        "password": "pw-first"
    });

    let app = build_test_app(pool.clone());
    let response = post_json(app, "/api/auth/register", body.clone()).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let app = build_test_app(pool.clone());
    let response = post_json(app, "/api/auth/register", body).await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
    let json = body_json(response).await;
    assert_eq!(json["code"], "CONFLICT");

    // No duplicate row.
    let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM users WHERE email = $1")
        .bind("taken@example.com")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count, 1);
}

// ---------------------------------------------------------------------------
// Test: payload validation rejects bad email shape and unknown roles
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn register_rejects_malformed_email(pool: PgPool) {
    let app = build_test_app(pool);
    let response = post_json(
        app,
        "/api/auth/register",
        serde_json::json!({
            "name": "No At Sign",
            "email": "not-an-email",
            "password": "pw"
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn register_rejects_unknown_role(pool: PgPool) {
    let app = build_test_app(pool.clone());
    let response = post_json(
        app,
        "/api/auth/register",
        serde_json::json!({
            "name": "Pretender",
            "email": "pretender@example.com",
            "role": "mayor",
            "password": "pw"
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");

    // Rejected before storage: nothing was inserted.
    let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM users")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count, 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn register_accepts_explicit_role(pool: PgPool) {
    let app = build_test_app(pool);
    let response = post_json(
        app,
        "/api/auth/register",
        serde_json::json!({
            "name": "Inspector",
            "email": "inspector@example.com",
            "role": "officer",
            "phone": "555-0131",
            "password": "pw"
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["role"], "officer");
    assert_eq!(json["phone"], "555-0131");
}
