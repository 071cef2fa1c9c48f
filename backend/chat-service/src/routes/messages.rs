use crate::middleware::guards::User;
use crate::models::Message;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    Json,
};
use serde::Deserialize;

#[derive(Deserialize)]
pub struct SendMessageRequest {
    // Absent text behaves like empty text (400), not a deserialization error
    #[serde(default)]
    pub text: String,
}

/// POST /chats/{chat_id}/messages — append to a chat the caller is in.
pub async fn send_message(
    State(state): State<AppState>,
    user: User,
    Path(chat_id): Path<String>,
    Json(body): Json<SendMessageRequest>,
) -> Result<Json<Message>, crate::error::AppError> {
    // A non-numeric id behaves like an unknown chat, not a malformed request
    let chat_id: u64 = chat_id
        .parse()
        .map_err(|_| crate::error::AppError::ChatNotFound)?;

    let message = state
        .chats
        .append_message(user.id, chat_id, &body.text)
        .await?;
    Ok(Json(message))
}
