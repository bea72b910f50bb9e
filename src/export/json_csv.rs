// src/export/json_csv.rs

use crate::errors::{AppError, AppResult};
use crate::export::model::{CSV_FILE_NAME, JSON_FILE_NAME, event_to_row, get_headers};
use crate::export::notify_export_success;
use crate::models::{Snapshot, TimelineEvent};
use crate::ui::messages::info;
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Snapshot JSON pretty-printed; `--data` reads the same shape back.
pub(crate) fn export_snapshot_json(snapshot: &Snapshot, out_dir: &Path) -> AppResult<PathBuf> {
    let path = out_dir.join(JSON_FILE_NAME);
    info(format!("Exporting to JSON: {}", path.display()));

    let json_data = serde_json::to_string_pretty(snapshot)?;

    let mut file = File::create(&path)?;
    file.write_all(json_data.as_bytes())?;

    notify_export_success("JSON", &path);
    Ok(path)
}

/// Timeline CSV with the same header as the Events Timeline sheet.
pub(crate) fn export_events_csv(events: &[TimelineEvent], out_dir: &Path) -> AppResult<PathBuf> {
    let path = out_dir.join(CSV_FILE_NAME);
    info(format!("Exporting to CSV: {}", path.display()));

    let mut wtr = csv::Writer::from_path(&path)?;

    wtr.write_record(get_headers())?;
    for ev in events {
        wtr.write_record(event_to_row(ev))?;
    }

    wtr.flush()
        .map_err(|e| AppError::Export(format!("CSV flush error: {e}")))?;

    notify_export_success("CSV", &path);
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn csv_has_header_and_one_line_per_event() {
        let dir = tempdir().unwrap();
        let snap = Snapshot::pacific_glory();

        let path = export_events_csv(&snap.events, dir.path()).unwrap();
        let content = std::fs::read_to_string(path).unwrap();
        let lines: Vec<&str> = content.lines().collect();

        assert_eq!(lines[0], "Date/Time,Event,Status,Description");
        assert_eq!(lines.len(), 1 + snap.events.len());
        assert_eq!(
            lines[6],
            "2024-01-16 08:15,Loading Resumed,operational,\"Weather cleared, operations resumed\""
        );
    }

    #[test]
    fn json_reloads_as_the_same_snapshot() {
        let dir = tempdir().unwrap();
        let snap = Snapshot::pacific_glory();

        let path = export_snapshot_json(&snap, dir.path()).unwrap();
        let back = Snapshot::from_json_file(&path).unwrap();
        assert_eq!(back, snap);
    }
}
