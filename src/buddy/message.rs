use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Buddy,
}

/// One entry in the Writing Buddy transcript. Messages are append-only and
/// never mutated after insertion.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct BuddyMessage {
    pub id: u64,
    pub sender: Sender,
    pub content: String,
    pub timestamp: DateTime<Utc>,
}

impl BuddyMessage {
    pub fn new(id: u64, sender: Sender, content: &str) -> Self {
        Self {
            id,
            sender,
            content: content.to_string(),
            timestamp: Utc::now(),
        }
    }
}
