use crate::middleware::guards::User;
use crate::models::Chat;
use crate::state::AppState;
use axum::{extract::State, Json};
use serde::Deserialize;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateChatRequest {
    pub participant_id: Option<u64>,
}

/// GET /chats — the caller's chats in creation order, messages embedded.
pub async fn list_chats(State(state): State<AppState>, user: User) -> Json<Vec<Chat>> {
    Json(state.chats.list_for(user.id).await)
}

/// POST /chats — return the existing direct chat with the given participant
/// or create one. Never produces a second chat for the same pair.
pub async fn create_chat(
    State(state): State<AppState>,
    user: User,
    Json(body): Json<CreateChatRequest>,
) -> Result<Json<Chat>, crate::error::AppError> {
    let other_id = body
        .participant_id
        .ok_or_else(|| crate::error::AppError::Validation("invalid participant id".into()))?;

    if !state.users.exists(other_id).await {
        return Err(crate::error::AppError::Validation(
            "invalid participant id".into(),
        ));
    }

    let (chat, _created) = state.chats.create_or_get(user.id, other_id).await;
    Ok(Json(chat))
}
