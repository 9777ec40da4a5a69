mod common;

use axum::http::StatusCode;
use common::{TestApp, PASSWORD};
use serde_json::json;

#[tokio::test]
async fn test_register_then_login_returns_same_visitor() {
    let app = TestApp::new().await;

    let (status, body) = app
        .post_json(
            "/register",
            json!({
                "first_name": "Grace",
                "last_name": "Hopper",
                "email": "grace@example.com",
                "password": PASSWORD
            }),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body, json!({ "message": "Visitor registered successfully!" }));

    let stored_id: i64 = sqlx::query_scalar("SELECT id FROM visitors WHERE email = ?")
        .bind("grace@example.com")
        .fetch_one(&app.pool)
        .await
        .unwrap();

    let (status, body) = app
        .post_json(
            "/login",
            json!({ "email": "grace@example.com", "password": PASSWORD }),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Login successful!");
    assert_eq!(body["visitor_id"], stored_id);
    assert_eq!(body["first_name"], "Grace");
    assert_eq!(body["last_name"], "Hopper");
    assert_eq!(body["email"], "grace@example.com");
    assert!(body.get("password_hash").is_none());
}

#[tokio::test]
async fn test_duplicate_email_is_rejected() {
    let app = TestApp::new().await;
    app.register_visitor("dup@example.com").await;

    let (status, body) = app
        .post_json(
            "/register",
            json!({
                "first_name": "Other",
                "last_name": "Person",
                "email": "dup@example.com",
                "password": "different"
            }),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Email already registered");
    assert_eq!(app.count("visitors").await, 1);
}

#[tokio::test]
async fn test_register_missing_fields() {
    let app = TestApp::new().await;

    let (status, body) = app
        .post_json(
            "/register",
            json!({ "first_name": "Ada", "email": "ada@example.com" }),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["error"],
        "Please fill in all required fields (First Name, Last Name, Email, Password)"
    );
    assert_eq!(app.count("visitors").await, 0);
}

#[tokio::test]
async fn test_register_rejects_malformed_body() {
    let app = TestApp::new().await;

    let (status, body) = app.post_raw("/register", "{not json".to_string()).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_password_is_not_stored_in_cleartext() {
    let app = TestApp::new().await;
    app.register_visitor("hash@example.com").await;

    let hash: String = sqlx::query_scalar("SELECT password_hash FROM visitors WHERE email = ?")
        .bind("hash@example.com")
        .fetch_one(&app.pool)
        .await
        .unwrap();
    assert!(hash.starts_with("$argon2"));
    assert!(!hash.contains(PASSWORD));
}

#[tokio::test]
async fn test_login_wrong_password() {
    let app = TestApp::new().await;
    app.register_visitor("ada@example.com").await;

    let (status, body) = app
        .post_json(
            "/login",
            json!({ "email": "ada@example.com", "password": "wrong" }),
        )
        .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], "Invalid email or password");
}

#[tokio::test]
async fn test_login_unknown_email() {
    let app = TestApp::new().await;

    let (status, body) = app
        .post_json(
            "/login",
            json!({ "email": "nobody@example.com", "password": PASSWORD }),
        )
        .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], "Invalid email or password");
}

#[tokio::test]
async fn test_login_requires_both_fields() {
    let app = TestApp::new().await;

    let (status, body) = app
        .post_json("/login", json!({ "email": "ada@example.com" }))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Please enter both email and password");
}
