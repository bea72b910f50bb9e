use crate::models::event_status::EventStatus;
use serde::{Deserialize, Serialize};

/// One extracted SoF entry. Sequences of these are kept in chronological
/// (= insertion) order everywhere.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineEvent {
    pub timestamp: String,
    pub event: String,
    pub status: EventStatus,
    pub description: String,
}

impl TimelineEvent {
    pub fn new(timestamp: &str, event: &str, status: EventStatus, description: &str) -> Self {
        Self {
            timestamp: timestamp.to_string(),
            event: event.to_string(),
            status,
            description: description.to_string(),
        }
    }
}
