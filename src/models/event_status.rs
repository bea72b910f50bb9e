use serde::{Deserialize, Serialize};

/// Status tag of a Statement of Facts event.
///
/// Parsing never fails: any tag outside the three known values is kept as
/// `Unrecognized` so renderers can flag it instead of dropping the row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum EventStatus {
    Operational,
    Waiting,
    Delay,
    Unrecognized(String),
}

impl EventStatus {
    pub fn from_tag(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "operational" => Self::Operational,
            "waiting" => Self::Waiting,
            "delay" => Self::Delay,
            _ => Self::Unrecognized(s.to_string()),
        }
    }

    /// Raw enumeration label, as written in spreadsheets and CSV.
    pub fn as_str(&self) -> &str {
        match self {
            EventStatus::Operational => "operational",
            EventStatus::Waiting => "waiting",
            EventStatus::Delay => "delay",
            EventStatus::Unrecognized(raw) => raw,
        }
    }

    /// Human label for the terminal screens.
    pub fn display_label(&self) -> String {
        match self {
            EventStatus::Operational => "Operational".to_string(),
            EventStatus::Waiting => "Waiting".to_string(),
            EventStatus::Delay => "Delay".to_string(),
            EventStatus::Unrecognized(raw) => format!("{raw}?"),
        }
    }

    pub fn is_flagged(&self) -> bool {
        matches!(self, EventStatus::Unrecognized(_))
    }
}

impl From<String> for EventStatus {
    fn from(s: String) -> Self {
        EventStatus::from_tag(&s)
    }
}

impl From<EventStatus> for String {
    fn from(status: EventStatus) -> Self {
        status.as_str().to_string()
    }
}
