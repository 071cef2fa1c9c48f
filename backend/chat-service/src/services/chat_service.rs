use crate::error::{AppError, AppResult};
use crate::models::{Chat, Message};
use chrono::Local;
use tokio::sync::RwLock;

#[derive(Default)]
struct ChatDirectory {
    chats: Vec<Chat>,
    next_id: u64,
}

/// In-memory chat directory and message ledger. Pair-uniqueness checks, id
/// assignment and message appends all run under one lock region.
#[derive(Default)]
pub struct ChatStore {
    inner: RwLock<ChatDirectory>,
}

impl ChatStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// All chats the caller participates in, in creation order. Messages are
    /// embedded, matching what the API returns.
    pub async fn list_for(&self, caller_id: u64) -> Vec<Chat> {
        let dir = self.inner.read().await;
        dir.chats
            .iter()
            .filter(|c| c.has_participant(caller_id))
            .cloned()
            .collect()
    }

    /// Return the existing chat for the unordered pair {caller, other}, or
    /// create one. Idempotent regardless of which participant asks first.
    /// The boolean reports whether a chat was created.
    pub async fn create_or_get(&self, caller_id: u64, other_id: u64) -> (Chat, bool) {
        let mut dir = self.inner.write().await;
        if let Some(existing) = dir.chats.iter().find(|c| c.is_between(caller_id, other_id)) {
            return (existing.clone(), false);
        }

        dir.next_id += 1;
        let chat = Chat {
            id: dir.next_id,
            participants: [caller_id, other_id],
            messages: Vec::new(),
        };
        dir.chats.push(chat.clone());

        tracing::info!(chat_id = chat.id, "created direct chat");
        (chat, true)
    }

    /// Append a message to a chat the caller participates in.
    ///
    /// A missing chat and a foreign chat fail identically, and that check
    /// runs before text validation so non-participants cannot tell whether
    /// the chat id was real.
    pub async fn append_message(
        &self,
        caller_id: u64,
        chat_id: u64,
        text: &str,
    ) -> AppResult<Message> {
        let mut dir = self.inner.write().await;

        let chat = dir
            .chats
            .iter_mut()
            .find(|c| c.id == chat_id)
            .filter(|c| c.has_participant(caller_id))
            .ok_or(AppError::ChatNotFound)?;

        if text.is_empty() {
            return Err(AppError::Validation("message text cannot be empty".into()));
        }

        // Sequence restarts per chat; count-based ids are safe because
        // messages are never deleted.
        let message = Message {
            id: chat.messages.len() as u64 + 1,
            sender_id: caller_id,
            text: text.to_string(),
            time: Local::now().format("%H:%M").to_string(),
        };
        chat.messages.push(message.clone());

        Ok(message)
    }
}
