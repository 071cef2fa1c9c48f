use crate::models::PublicUser;
use crate::state::AppState;
use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

#[derive(Deserialize)]
pub struct RegisterRequest {
    #[serde(default)]
    pub login: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub name: String,
}

#[derive(Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub login: String,
    #[serde(default)]
    pub password: String,
}

/// Returned by both register and login: the public identity plus a fresh
/// bearer token, so a new account is usable immediately.
#[derive(Serialize)]
pub struct AuthResponse {
    pub user: PublicUser,
    pub token: String,
}

pub async fn register(
    State(state): State<AppState>,
    Json(body): Json<RegisterRequest>,
) -> Result<Json<AuthResponse>, crate::error::AppError> {
    let user = state
        .users
        .register(&body.login, &body.password, &body.name)
        .await?;
    let token = state.tokens.issue(user.id)?;
    Ok(Json(AuthResponse { user, token }))
}

pub async fn login(
    State(state): State<AppState>,
    Json(body): Json<LoginRequest>,
) -> Result<Json<AuthResponse>, crate::error::AppError> {
    let user = state
        .users
        .verify_credentials(&body.login, &body.password)
        .await?;
    let token = state.tokens.issue(user.id)?;
    Ok(Json(AuthResponse { user, token }))
}
