// src/export/model.rs

use crate::models::{LaytimeSummary, TimelineEvent};

/// Nome fisso del documento PDF.
pub const PDF_FILE_NAME: &str = "Laytime_Statement_Pacific_Glory.pdf";
/// Nome fisso del workbook XLSX.
pub const XLSX_FILE_NAME: &str = "Laytime_Analysis_Pacific_Glory.xlsx";
pub const CSV_FILE_NAME: &str = "Laytime_Events_Pacific_Glory.csv";
pub const JSON_FILE_NAME: &str = "Laytime_Snapshot_Pacific_Glory.json";

// Charter terms printed on every report. They are not part of the snapshot.
pub(crate) const RATE_BASIS: &str = "PWWD SHEX";
pub(crate) const DEMURRAGE_RATE: &str = "$8,500/day";
pub(crate) const DISPATCH_RATE: &str = "$4,250/day";

/// Header for the event table (PDF, XLSX, CSV).
pub(crate) fn get_headers() -> [&'static str; 4] {
    ["Date/Time", "Event", "Status", "Description"]
}

/// Event → row of raw strings, same column order as `get_headers`.
pub(crate) fn event_to_row(e: &TimelineEvent) -> Vec<String> {
    vec![
        e.timestamp.clone(),
        e.event.clone(),
        e.status.as_str().to_string(),
        e.description.clone(),
    ]
}

pub(crate) fn events_to_table(events: &[TimelineEvent]) -> Vec<Vec<String>> {
    events.iter().map(event_to_row).collect()
}

/// Left panel of the statement ("Vessel Details").
pub(crate) fn vessel_details(s: &LaytimeSummary) -> Vec<(&'static str, String)> {
    vec![
        ("Vessel", s.vessel_name.clone()),
        ("Port", s.port.clone()),
        ("Cargo", s.cargo.clone()),
        ("Charter Party", s.charter_party.clone()),
    ]
}

/// Right panel of the statement ("Laytime Terms").
pub(crate) fn laytime_terms(s: &LaytimeSummary) -> Vec<(&'static str, String)> {
    vec![
        ("Laytime Allowed", s.laycan_period.clone()),
        ("Rate", RATE_BASIS.to_string()),
        ("Demurrage", DEMURRAGE_RATE.to_string()),
        ("Dispatch", DISPATCH_RATE.to_string()),
    ]
}

/// Calculation summary block, before the payable line.
pub(crate) fn calculation_lines(s: &LaytimeSummary) -> Vec<(&'static str, String)> {
    vec![
        ("Total Time Used", s.total_time_used.clone()),
        ("Excluded Time", s.excluded_time.clone()),
        ("Net Laytime", s.net_laytime.clone()),
        ("Balance", s.balance.clone()),
    ]
}
