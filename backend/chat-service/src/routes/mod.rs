use crate::state::AppState;
use axum::middleware;
use axum::{
    routing::{get, post},
    Router,
};
pub mod auth;
use auth::{login, register};
pub mod users;
use users::list_users;
pub mod chats;
use chats::{create_chat, list_chats};
pub mod messages;
use messages::send_message;

pub fn build_router(state: AppState) -> Router {
    // Service introspection endpoints (no API version prefix, no auth)
    let introspection = Router::new().route("/health", get(|| async { "OK" }));

    // Credential issuance is the one unauthenticated part of the API
    let public_api = Router::new()
        .route("/register", post(register))
        .route("/login", post(login));

    // Everything else requires a verified bearer token
    let secured_api = Router::new()
        .route("/users", get(list_users))
        .route("/chats", get(list_chats).post(create_chat))
        .route("/chats/:chat_id/messages", post(send_message))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            crate::middleware::auth::auth_middleware,
        ));

    let api_v1 = public_api.merge(secured_api);

    let router = introspection
        .merge(Router::new().nest("/api/v1", api_v1))
        .with_state(state);

    crate::middleware::with_defaults(router)
}
