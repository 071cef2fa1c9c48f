use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use chat_service::{config::Config, routes, state::AppState};
use serde_json::Value;
use tower::util::ServiceExt;

pub const TEST_SECRET: &str = "integration-test-secret-integration!";

/// Fresh app with empty stores and an ephemeral signing secret.
pub fn test_app() -> Router {
    let config = Config {
        port: 0,
        jwt_secret: TEST_SECRET.into(),
        token_ttl_hours: 24,
    };
    routes::build_router(AppState::new(config))
}

pub async fn send(
    app: &Router,
    method: &str,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header("authorization", format!("Bearer {token}"));
    }
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, value)
}

/// Register a user and return (user_id, token).
pub async fn register(app: &Router, login: &str, password: &str, name: &str) -> (u64, String) {
    let (status, body) = send(
        app,
        "POST",
        "/api/v1/register",
        None,
        Some(serde_json::json!({ "login": login, "password": password, "name": name })),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "register failed: {body}");
    (
        body["user"]["id"].as_u64().unwrap(),
        body["token"].as_str().unwrap().to_string(),
    )
}
