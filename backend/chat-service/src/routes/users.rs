use crate::middleware::guards::User;
use crate::models::PublicUser;
use crate::state::AppState;
use axum::{extract::State, Json};

/// GET /users — everyone except the caller, in registration order.
pub async fn list_users(
    State(state): State<AppState>,
    user: User,
) -> Json<Vec<PublicUser>> {
    Json(state.users.list_other_users(user.id).await)
}
