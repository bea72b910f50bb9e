#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Binary with HOME inside `home`, so no real user config is read.
pub fn sof(home: &Path) -> Command {
    let mut cmd = cargo_bin_cmd!("sofreport");
    cmd.env("HOME", home)
        .env_remove("DISPLAY")
        .env_remove("WAYLAND_DISPLAY");
    cmd
}

pub fn temp_home() -> TempDir {
    tempfile::tempdir().expect("create temp home")
}

/// Output directory path (not yet created) inside `home`
pub fn out_dir(home: &Path, name: &str) -> String {
    home.join(name).to_string_lossy().to_string()
}

/// Write a snapshot JSON file with the given events array and return its path
pub fn write_snapshot(dir: &Path, events_json: &str) -> PathBuf {
    let path = dir.join("snapshot.json");
    let body = format!(
        r#"{{
  "summary": {{
    "vesselName": "MV NORTHERN STAR",
    "port": "Santos",
    "cargo": "Soybeans",
    "charterParty": "GENCON 1994",
    "laycanPeriod": "48 hours",
    "totalTimeUsed": "50 hours",
    "excludedTime": "0 hours",
    "netLaytime": "50 hours",
    "balance": "-2 hours",
    "dispatch": "$708",
    "status": "On Demurrage"
  }},
  "events": {events_json}
}}"#
    );
    fs::write(&path, body).expect("write snapshot");
    path
}
