//! Session configuration. Defaults mirror the original widget's
//! constants (1 s acknowledgement delay, seeded assistant greeting).

use serde::{Deserialize, Serialize};
use std::time::Duration;

pub const DEFAULT_ACK_DELAY_MS: u64 = 1000;

const DEFAULT_GREETING: &str = "Hello! I'm your AI assistant. How can I help you today?";

/// Who the session belongs to. Purely descriptive.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Guest {
    pub name: String,
    pub room_number: String,
}

impl Default for Guest {
    fn default() -> Self {
        Self {
            name: "Guest".to_string(),
            room_number: "101".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Delay before the assistant acknowledges a filed service request.
    pub ack_delay_ms: u64,
    /// Assistant message seeded into a fresh session; `None` starts empty.
    pub greeting: Option<String>,
    pub guest: Guest,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            ack_delay_ms: DEFAULT_ACK_DELAY_MS,
            greeting: Some(DEFAULT_GREETING.to_string()),
            guest: Guest::default(),
        }
    }
}

impl SessionConfig {
    pub fn ack_delay(&self) -> Duration {
        Duration::from_millis(self.ack_delay_ms)
    }
}
