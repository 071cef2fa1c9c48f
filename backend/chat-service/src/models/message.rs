use serde::{Deserialize, Serialize};

/// A single text message. Ids are a per-chat sequence starting at 1;
/// messages are immutable once appended.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub id: u64,
    pub sender_id: u64,
    pub text: String,
    /// Wall-clock send time, formatted as hour:minute
    pub time: String,
}
