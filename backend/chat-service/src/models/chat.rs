use super::message::Message;
use serde::{Deserialize, Serialize};

/// A direct conversation between exactly two users. At most one chat exists
/// per unordered participant pair; chats are never deleted.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Chat {
    pub id: u64,
    pub participants: [u64; 2],
    pub messages: Vec<Message>,
}

impl Chat {
    pub fn has_participant(&self, user_id: u64) -> bool {
        self.participants.contains(&user_id)
    }

    /// Order-independent pair match: {A,B} equals {B,A}.
    pub fn is_between(&self, a: u64, b: u64) -> bool {
        self.has_participant(a) && self.has_participant(b)
    }
}
