use serde::{Deserialize, Serialize};

/// Display-ready laytime outcome of one voyage.
///
/// Every quantity is already formatted ("38.25 hours", "$15,400"):
/// nothing downstream parses or computes with these strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LaytimeSummary {
    pub vessel_name: String,
    pub port: String,
    pub cargo: String,
    pub charter_party: String,
    /// Laytime allowed
    pub laycan_period: String,
    pub total_time_used: String,
    /// Excluded time including its reason, e.g. "4.75 hours (Weather)"
    pub excluded_time: String,
    pub net_laytime: String,
    /// Signed time balance
    pub balance: String,
    /// Dispatch or demurrage amount payable
    pub dispatch: String,
    pub status: String,
}
