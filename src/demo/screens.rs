// src/demo/screens.rs
//
// Text rendering of each walkthrough screen.

use crate::demo::flow::{DemoFlow, DemoStep, PROGRESS_STEPS};
use crate::export::{PDF_FILE_NAME, XLSX_FILE_NAME, truncate_description};
use crate::models::{EventStatus, Snapshot, period_label};
use crate::utils::Table;
use crate::utils::colors::{CYAN, color_for_balance, color_for_status, colorize};
use std::fmt::Write;

pub fn title(step: DemoStep) -> &'static str {
    match step {
        DemoStep::Intro => "SoF Event Extractor - Laytime Intelligence",
        DemoStep::Upload => "Step 1: Upload SoF Document",
        DemoStep::Processing => "Step 2: Processing",
        DemoStep::Extraction => "Step 3: Event Extraction Results",
        DemoStep::Calculation => "Step 4: Laytime Calculation",
        DemoStep::Results => "Step 5: Laytime Statement",
        DemoStep::Dashboard => "Visualization Dashboard",
        DemoStep::Export => "Export & Share",
    }
}

/// Body of the current screen (no title).
pub fn render(flow: &DemoFlow, snapshot: &Snapshot, dashboard_url: &str) -> String {
    match flow.step() {
        DemoStep::Intro => intro(),
        DemoStep::Upload => upload(),
        DemoStep::Processing => processing(flow),
        DemoStep::Extraction => extraction(snapshot),
        DemoStep::Calculation => calculation(snapshot),
        DemoStep::Results => results(snapshot),
        DemoStep::Dashboard => dashboard(snapshot),
        DemoStep::Export => export(dashboard_url),
    }
}

fn intro() -> String {
    [
        "Manual laytime calculation from Statement of Facts documents is time-consuming,",
        "error-prone, and often leads to costly disputes.",
        "",
        "  - Hours of manual work: analysts spend 4-8 hours per SoF document",
        "  - Human errors: calculation mistakes lead to disputes",
        "  - Financial impact: disputes can cost $50K+ per incident",
        "",
        "This walkthrough extracts the events of one SoF, computes laytime and",
        "exports the statement.",
        "",
    ]
    .join("\n")
}

fn upload() -> String {
    "Upload your Statement of Facts in PDF, Excel, or Word format.\n".to_string()
}

fn processing(flow: &DemoFlow) -> String {
    let mut out = String::new();
    if let Some(file) = flow.uploaded_file() {
        let _ = writeln!(out, "Document: {file}");
    }
    for (i, step) in PROGRESS_STEPS.iter().enumerate() {
        let _ = writeln!(out, "  [{}/{}] {step}", i + 1, PROGRESS_STEPS.len());
    }
    out
}

fn extraction(snapshot: &Snapshot) -> String {
    let mut out = format!("Extracted {} events from the SoF document\n\n", snapshot.events.len());

    let mut table = Table::new(&["Date/Time", "Event", "Status", "Description"]);
    for ev in &snapshot.events {
        table.add_row(vec![
            ev.timestamp.clone(),
            ev.event.clone(),
            ev.status.display_label(),
            truncate_description(&ev.description).into_owned(),
        ]);
    }
    out.push_str(&table.render());
    out
}

fn calculation(snapshot: &Snapshot) -> String {
    let s = &snapshot.summary;
    let mut out = String::new();
    let lines = [
        ("Laytime Allowed", s.laycan_period.clone()),
        ("Total Time Used", s.total_time_used.clone()),
        ("Excluded Time", s.excluded_time.clone()),
        ("Net Laytime", s.net_laytime.clone()),
        ("Status", s.status.clone()),
        ("Time Balance", colorize(&s.balance, color_for_balance(&s.balance))),
        ("Dispatch Due", s.dispatch.clone()),
    ];
    for (label, value) in lines {
        let _ = writeln!(out, "{:<16} {}", format!("{label}:"), value);
    }
    out
}

fn results(snapshot: &Snapshot) -> String {
    let s = &snapshot.summary;
    let heading = match period_label(&snapshot.events) {
        Some(p) => format!("{} - {}", s.vessel_name, p),
        None => s.vessel_name.clone(),
    };

    let mut out = String::new();
    let _ = writeln!(out, "LAYTIME STATEMENT");
    let _ = writeln!(out, "{heading}\n");
    let _ = writeln!(out, "Vessel: {}  |  Port: {}", s.vessel_name, s.port);
    let _ = writeln!(out, "Cargo: {}  |  Charter Party: {}", s.cargo, s.charter_party);
    let _ = writeln!(out, "Laytime Allowed: {}\n", s.laycan_period);
    let _ = writeln!(out, "DISPATCH PAYABLE: {}", s.dispatch);
    out
}

fn dashboard(snapshot: &Snapshot) -> String {
    let mut counts = [0usize; 4];
    for ev in &snapshot.events {
        let slot = match ev.status {
            EventStatus::Operational => 0,
            EventStatus::Waiting => 1,
            EventStatus::Delay => 2,
            EventStatus::Unrecognized(_) => 3,
        };
        counts[slot] += 1;
    }

    let mut out = String::new();
    let _ = writeln!(out, "Time balance: {}", snapshot.summary.balance);
    let _ = writeln!(out, "Dispatch:     {}", snapshot.summary.dispatch);
    let _ = writeln!(out, "Status:       {}\n", snapshot.summary.status);

    let legend = [
        (EventStatus::Operational, "Operations", counts[0]),
        (EventStatus::Waiting, "Waiting", counts[1]),
        (EventStatus::Delay, "Delays", counts[2]),
    ];
    for (status, label, n) in legend {
        let name = colorize(&format!("{label:<11}"), color_for_status(&status));
        let _ = writeln!(out, "{name} {n}");
    }
    if counts[3] > 0 {
        let _ = writeln!(out, "Unrecognized {}", counts[3]);
    }

    let _ = writeln!(out);
    for ev in &snapshot.events {
        let marker = colorize("●", color_for_status(&ev.status));
        let _ = writeln!(out, "{marker} {}  {}", ev.timestamp, ev.event);
    }
    out
}

fn export(dashboard_url: &str) -> String {
    let mut out = String::new();
    let link = colorize(dashboard_url, CYAN);
    let options = [
        ("PDF Report", "sofreport export --format pdf", PDF_FILE_NAME),
        ("Excel Analysis", "sofreport export --format xlsx", XLSX_FILE_NAME),
        ("Dashboard Link", "sofreport share", link.as_str()),
    ];
    for (label, command, target) in options {
        let _ = writeln!(out, "{label:<16} {command:<31} -> {target}");
    }
    out
}
