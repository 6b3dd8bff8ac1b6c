//! Chat entries, tagged by origin.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Who produced a chat entry. Exactly two parties exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Origin {
    Guest,
    Assistant,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: Uuid,
    pub origin: Origin,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

impl ChatMessage {
    pub fn new(content: impl Into<String>, origin: Origin) -> Self {
        Self {
            id: Uuid::new_v4(),
            origin,
            content: content.into(),
            created_at: Utc::now(),
        }
    }
}
