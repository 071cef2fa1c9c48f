mod common;

use axum::http::StatusCode;
use common::{register, send, test_app};
use serde_json::json;

#[tokio::test]
async fn register_returns_usable_identity_and_token() {
    let app = test_app();

    let (status, body) = send(
        &app,
        "POST",
        "/api/v1/register",
        None,
        Some(json!({ "login": "alice", "password": "123456", "name": "Alice" })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["user"]["id"], 1);
    assert_eq!(body["user"]["login"], "alice");
    assert_eq!(body["user"]["name"], "Alice");
    // The hash never leaves the store
    assert!(body["user"].get("password").is_none());
    assert!(body["user"].get("passwordHash").is_none());

    // Token from registration works immediately
    let token = body["token"].as_str().unwrap();
    let (status, _) = send(&app, "GET", "/api/v1/users", Some(token), None).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn login_after_register_returns_same_user_id() {
    let app = test_app();
    let (id, _) = register(&app, "alice", "123456", "Alice").await;

    let (status, body) = send(
        &app,
        "POST",
        "/api/v1/login",
        None,
        Some(json!({ "login": "alice", "password": "123456" })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["user"]["id"].as_u64().unwrap(), id);
    assert!(!body["token"].as_str().unwrap().is_empty());
}

#[tokio::test]
async fn missing_fields_fail_registration() {
    let app = test_app();

    for body in [
        json!({ "login": "", "password": "123456", "name": "Alice" }),
        json!({ "login": "alice", "password": "", "name": "Alice" }),
        json!({ "login": "alice", "password": "123456", "name": "" }),
        json!({ "password": "123456", "name": "Alice" }),
    ] {
        let (status, _) = send(&app, "POST", "/api/v1/register", None, Some(body)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }
}

#[tokio::test]
async fn duplicate_login_is_rejected_and_original_account_survives() {
    let app = test_app();
    let (id, _) = register(&app, "alice", "123456", "Alice").await;

    let (status, _) = send(
        &app,
        "POST",
        "/api/v1/register",
        None,
        Some(json!({ "login": "alice", "password": "other", "name": "Impostor" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    // First registration is unaffected
    let (status, body) = send(
        &app,
        "POST",
        "/api/v1/login",
        None,
        Some(json!({ "login": "alice", "password": "123456" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["user"]["id"].as_u64().unwrap(), id);
    assert_eq!(body["user"]["name"], "Alice");
}

#[tokio::test]
async fn wrong_password_and_unknown_login_are_indistinguishable() {
    let app = test_app();
    register(&app, "alice", "123456", "Alice").await;

    let (status_a, body_a) = send(
        &app,
        "POST",
        "/api/v1/login",
        None,
        Some(json!({ "login": "alice", "password": "654321" })),
    )
    .await;
    let (status_b, body_b) = send(
        &app,
        "POST",
        "/api/v1/login",
        None,
        Some(json!({ "login": "nobody", "password": "123456" })),
    )
    .await;

    assert_eq!(status_a, StatusCode::UNAUTHORIZED);
    assert_eq!(status_b, StatusCode::UNAUTHORIZED);
    assert_eq!(body_a["message"], body_b["message"]);
    assert_eq!(body_a["code"], body_b["code"]);
}
