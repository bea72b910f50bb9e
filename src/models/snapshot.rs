use crate::errors::{AppError, AppResult};
use crate::models::{EventStatus, LaytimeSummary, TimelineEvent};
use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Voyage data handed to the exporters: summary + ordered events.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub summary: LaytimeSummary,
    #[serde(default)]
    pub events: Vec<TimelineEvent>,
}

impl Snapshot {
    /// Load a snapshot previously saved as JSON (`export --format json`
    /// writes the same shape).
    pub fn from_json_file(path: &Path) -> AppResult<Self> {
        let content = fs::read_to_string(path)?;
        serde_json::from_str(&content).map_err(|e| AppError::InvalidSnapshot {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }

    /// The MV PACIFIC GLORY voyage used throughout the demo.
    pub fn pacific_glory() -> Self {
        let summary = LaytimeSummary {
            vessel_name: "MV PACIFIC GLORY".into(),
            port: "Hamburg, Germany".into(),
            cargo: "Containerized Goods".into(),
            charter_party: "GENCON 1994".into(),
            laycan_period: "72 hours".into(),
            total_time_used: "38.25 hours".into(),
            excluded_time: "4.75 hours (Weather)".into(),
            net_laytime: "33.5 hours".into(),
            balance: "+38.5 hours".into(),
            dispatch: "$15,400".into(),
            status: "Under Laytime".into(),
        };

        let events = vec![
            TimelineEvent::new(
                "2024-01-15 08:30",
                "Vessel Arrival",
                EventStatus::Operational,
                "MV PACIFIC GLORY arrived at anchorage",
            ),
            TimelineEvent::new(
                "2024-01-15 09:15",
                "NOR Tendered",
                EventStatus::Operational,
                "Notice of Readiness tendered to terminal",
            ),
            TimelineEvent::new(
                "2024-01-15 14:20",
                "Berth Available",
                EventStatus::Operational,
                "Terminal confirmed berth availability",
            ),
            TimelineEvent::new(
                "2024-01-15 15:45",
                "Loading Commenced",
                EventStatus::Operational,
                "Cargo operations started",
            ),
            TimelineEvent::new(
                "2024-01-16 03:30",
                "Weather Delay",
                EventStatus::Delay,
                "Operations suspended due to heavy rain",
            ),
            TimelineEvent::new(
                "2024-01-16 08:15",
                "Loading Resumed",
                EventStatus::Operational,
                "Weather cleared, operations resumed",
            ),
            TimelineEvent::new(
                "2024-01-16 22:45",
                "Loading Completed",
                EventStatus::Operational,
                "All cargo loaded, vessel ready to sail",
            ),
        ];

        Self { summary, events }
    }
}

/// "January 2024"-style label taken from the first event timestamp.
///
/// Returns `None` for an empty timeline or an unparseable timestamp.
pub fn period_label(events: &[TimelineEvent]) -> Option<String> {
    let first = events.first()?;
    let ts = first.timestamp.trim();

    let dt_formats = ["%Y-%m-%d %H:%M", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M:%S"];
    for fmt in dt_formats.iter() {
        if let Ok(dt) = NaiveDateTime::parse_from_str(ts, fmt) {
            return Some(dt.format("%B %Y").to_string());
        }
    }

    NaiveDate::parse_from_str(ts, "%Y-%m-%d")
        .ok()
        .map(|d| d.format("%B %Y").to_string())
}
