//! Service requests: lifecycle status + priority.

use crate::error::ConciergeError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use uuid::Uuid;

/// Request lifecycle. Requests are created `Pending`; advancing them
/// belongs to the fulfilment side, outside this core.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RequestStatus {
    Pending,
    InProgress,
    Completed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    #[default]
    Normal,
    Urgent,
    Emergency,
}

impl FromStr for Priority {
    type Err = ConciergeError;

    /// Untrusted labels are rejected, not silently normalized.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "normal" => Ok(Self::Normal),
            "urgent" => Ok(Self::Urgent),
            "emergency" => Ok(Self::Emergency),
            other => Err(ConciergeError::InvalidPriority(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceRequest {
    pub id: Uuid,
    pub category: String,
    pub description: String,
    pub status: RequestStatus,
    pub priority: Priority,
    pub created_at: DateTime<Utc>,
}

impl ServiceRequest {
    pub fn new(
        category: impl Into<String>,
        description: impl Into<String>,
        priority: Priority,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            category: category.into(),
            description: description.into(),
            status: RequestStatus::Pending,
            priority,
            created_at: Utc::now(),
        }
    }
}
