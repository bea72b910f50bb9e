// src/export/xlsx.rs

use crate::errors::AppResult;
use crate::export::model::{
    DEMURRAGE_RATE, DISPATCH_RATE, RATE_BASIS, XLSX_FILE_NAME, event_to_row, get_headers,
};
use crate::export::notify_export_success;
use crate::models::{EventStatus, LaytimeSummary, TimelineEvent};
use crate::ui::messages::info;
use rust_xlsxwriter::{
    Color, DocProperties, ExcelDateTime, Format, FormatBorder, FormatPattern, Workbook, Worksheet,
};
use std::fs;
use std::path::{Path, PathBuf};
use unicode_width::UnicodeWidthStr;

pub const VESSEL_INFO_SHEET: &str = "Vessel Info";
pub const EVENTS_SHEET: &str = "Events Timeline";
pub const CALCULATIONS_SHEET: &str = "Calculations";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowStyle {
    Title,
    Section,
    Header,
    Plain,
    Highlight,
    Event(EventStatus),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedRow {
    pub cells: Vec<String>,
    pub style: RowStyle,
}

/// One worksheet as ordered rows of strings, before any styling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetPlan {
    pub name: &'static str,
    pub rows: Vec<PlannedRow>,
}

impl SheetPlan {
    /// Cell text only, row by row.
    pub fn values(&self) -> Vec<Vec<String>> {
        self.rows.iter().map(|r| r.cells.clone()).collect()
    }
}

fn row(style: RowStyle, cells: &[&str]) -> PlannedRow {
    PlannedRow {
        cells: cells.iter().map(|c| c.to_string()).collect(),
        style,
    }
}

fn blank() -> PlannedRow {
    row(RowStyle::Plain, &[""])
}

/// The three sheets, always in the order Vessel Info, Events Timeline,
/// Calculations.
pub fn workbook_plan(summary: &LaytimeSummary, events: &[TimelineEvent]) -> Vec<SheetPlan> {
    use RowStyle::*;

    let vessel = SheetPlan {
        name: VESSEL_INFO_SHEET,
        rows: vec![
            row(Title, &["LAYTIME STATEMENT"]),
            blank(),
            row(Section, &["Vessel Details", ""]),
            row(Plain, &["Vessel Name", summary.vessel_name.as_str()]),
            row(Plain, &["Port", summary.port.as_str()]),
            row(Plain, &["Cargo", summary.cargo.as_str()]),
            row(Plain, &["Charter Party", summary.charter_party.as_str()]),
            blank(),
            row(Section, &["Laytime Terms", ""]),
            row(Plain, &["Laytime Allowed", summary.laycan_period.as_str()]),
            row(Plain, &["Rate", RATE_BASIS]),
            row(Plain, &["Demurrage Rate", DEMURRAGE_RATE]),
            row(Plain, &["Dispatch Rate", DISPATCH_RATE]),
        ],
    };

    let mut timeline = vec![row(Header, &get_headers())];
    timeline.extend(events.iter().map(|ev| PlannedRow {
        cells: event_to_row(ev),
        style: Event(ev.status.clone()),
    }));
    let timeline = SheetPlan {
        name: EVENTS_SHEET,
        rows: timeline,
    };

    let calculations = SheetPlan {
        name: CALCULATIONS_SHEET,
        rows: vec![
            row(Title, &["LAYTIME CALCULATION"]),
            blank(),
            row(Header, &["Item", "Value"]),
            row(Plain, &["Laytime Allowed", summary.laycan_period.as_str()]),
            row(Plain, &["Total Time Used", summary.total_time_used.as_str()]),
            row(Plain, &["Excluded Time", summary.excluded_time.as_str()]),
            row(Plain, &["Net Laytime Used", summary.net_laytime.as_str()]),
            row(Plain, &["Balance", summary.balance.as_str()]),
            row(Plain, &["Status", summary.status.as_str()]),
            blank(),
            row(Section, &["FINANCIAL SUMMARY"]),
            row(Highlight, &["Dispatch Payable", summary.dispatch.as_str()]),
        ],
    };

    vec![vessel, timeline, calculations]
}

fn format_for(style: &RowStyle) -> Format {
    match style {
        RowStyle::Title => Format::new().set_bold().set_font_size(14.0),
        RowStyle::Section => Format::new()
            .set_bold()
            .set_font_color(Color::RGB(0x1F4E78)),
        RowStyle::Header => Format::new()
            .set_bold()
            .set_font_color(Color::RGB(0xFFFFFF))
            .set_background_color(Color::RGB(0x2F75B5))
            .set_pattern(FormatPattern::Solid)
            .set_border(FormatBorder::Thin),
        RowStyle::Plain => Format::new(),
        RowStyle::Highlight => Format::new()
            .set_bold()
            .set_font_color(Color::RGB(0x008000)),
        RowStyle::Event(status) => Format::new()
            .set_background_color(Color::RGB(status_fill(status)))
            .set_pattern(FormatPattern::Solid)
            .set_border(FormatBorder::Thin),
    }
}

fn status_fill(status: &EventStatus) -> u32 {
    match status {
        EventStatus::Operational => 0xE2F0D9,
        EventStatus::Waiting => 0xFFF2CC,
        EventStatus::Delay => 0xFCE4D6,
        EventStatus::Unrecognized(_) => 0xD9D9D9,
    }
}

fn write_sheet(worksheet: &mut Worksheet, sheet: &SheetPlan) -> AppResult<()> {
    worksheet.set_name(sheet.name)?;

    let n_cols = sheet.rows.iter().map(|r| r.cells.len()).max().unwrap_or(0);
    let mut col_widths = vec![0usize; n_cols];

    for (r, planned) in sheet.rows.iter().enumerate() {
        let format = format_for(&planned.style);

        for (c, value) in planned.cells.iter().enumerate() {
            // celle vuote: niente da scrivere
            if value.is_empty() {
                continue;
            }
            worksheet.write_string_with_format(r as u32, c as u16, value, &format)?;

            // i titoli non allargano la colonna A
            if planned.style != RowStyle::Title {
                col_widths[c] = col_widths[c].max(UnicodeWidthStr::width(value.as_str()));
            }
        }
    }

    for (c, w) in col_widths.iter().enumerate() {
        worksheet.set_column_width(c as u16, *w as f64 + 2.0)?;
    }

    if sheet.name == EVENTS_SHEET {
        worksheet.set_freeze_panes(1, 0)?;
    }

    Ok(())
}

/// Build the workbook in memory. The creation timestamp is pinned so the
/// same input always produces the same bytes.
pub fn render_workbook(summary: &LaytimeSummary, events: &[TimelineEvent]) -> AppResult<Vec<u8>> {
    let mut workbook = Workbook::new();

    let created = ExcelDateTime::from_ymd(2024, 1, 1)?;
    let properties = DocProperties::new()
        .set_title("Laytime Analysis")
        .set_subject(&summary.vessel_name)
        .set_creation_datetime(&created);
    workbook.set_properties(&properties);

    for sheet in workbook_plan(summary, events) {
        let worksheet = workbook.add_worksheet();
        write_sheet(worksheet, &sheet)?;
    }

    Ok(workbook.save_to_buffer()?)
}

/// Render and save the workbook as `Laytime_Analysis_Pacific_Glory.xlsx`
/// inside `out_dir`.
pub fn generate_excel_report(
    summary: &LaytimeSummary,
    events: &[TimelineEvent],
    out_dir: &Path,
) -> AppResult<PathBuf> {
    let path = out_dir.join(XLSX_FILE_NAME);
    info(format!("Exporting to XLSX: {}", path.display()));

    let bytes = render_workbook(summary, events)?;
    fs::write(&path, bytes)?;

    notify_export_success("XLSX", &path);
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Snapshot;

    #[test]
    fn three_sheets_in_fixed_order() {
        let snap = Snapshot::pacific_glory();
        let plan = workbook_plan(&snap.summary, &snap.events);
        let names: Vec<&str> = plan.iter().map(|s| s.name).collect();
        assert_eq!(names, vec!["Vessel Info", "Events Timeline", "Calculations"]);
    }

    #[test]
    fn timeline_sheet_keeps_raw_values_in_order() {
        let snap = Snapshot::pacific_glory();
        let plan = workbook_plan(&snap.summary, &snap.events);
        let values = plan[1].values();

        assert_eq!(values[0], vec!["Date/Time", "Event", "Status", "Description"]);
        assert_eq!(values.len(), 1 + snap.events.len());
        assert_eq!(
            values[5],
            vec![
                "2024-01-16 03:30",
                "Weather Delay",
                "delay",
                "Operations suspended due to heavy rain"
            ]
        );
        assert_eq!(values[7][1], "Loading Completed");
    }

    #[test]
    fn empty_timeline_has_only_header() {
        let snap = Snapshot::pacific_glory();
        let plan = workbook_plan(&snap.summary, &[]);
        assert_eq!(plan.len(), 3);
        assert_eq!(plan[1].values(), vec![vec!["Date/Time", "Event", "Status", "Description"]]);
    }

    #[test]
    fn vessel_sheet_reproduces_boilerplate_rates() {
        let snap = Snapshot::pacific_glory();
        let values = workbook_plan(&snap.summary, &snap.events)[0].values();

        assert_eq!(values[0], vec!["LAYTIME STATEMENT"]);
        assert_eq!(values[3], vec!["Vessel Name", "MV PACIFIC GLORY"]);
        assert_eq!(values[10], vec!["Rate", "PWWD SHEX"]);
        assert_eq!(values[11], vec!["Demurrage Rate", "$8,500/day"]);
        assert_eq!(values[12], vec!["Dispatch Rate", "$4,250/day"]);
    }

    #[test]
    fn calculations_end_with_financial_summary() {
        let snap = Snapshot::pacific_glory();
        let plan = workbook_plan(&snap.summary, &snap.events);
        let calc = &plan[2];

        let last = calc.rows.last().unwrap();
        assert_eq!(last.cells, vec!["Dispatch Payable", "$15,400"]);
        assert_eq!(last.style, RowStyle::Highlight);
        assert_eq!(calc.rows[10].cells, vec!["FINANCIAL SUMMARY"]);
        assert_eq!(calc.rows[8].cells, vec!["Status", "Under Laytime"]);
    }

    #[test]
    fn unrecognized_status_is_written_raw() {
        let snap = Snapshot::pacific_glory();
        let ev = TimelineEvent::new(
            "2024-01-17 10:00",
            "Shifting",
            EventStatus::from_tag("shift"),
            "Moved to berth 4",
        );
        let plan = workbook_plan(&snap.summary, &[ev]);
        assert_eq!(plan[1].rows[1].cells[2], "shift");
        assert_eq!(status_fill(&plan[1].rows[1].style_status()), 0xD9D9D9);
    }

    #[test]
    fn workbook_bytes_are_reproducible() {
        let snap = Snapshot::pacific_glory();
        let a = render_workbook(&snap.summary, &snap.events).unwrap();
        let b = render_workbook(&snap.summary, &snap.events).unwrap();
        assert!(a.starts_with(b"PK"));
        assert_eq!(a, b);
    }

    impl PlannedRow {
        fn style_status(&self) -> EventStatus {
            match &self.style {
                RowStyle::Event(s) => s.clone(),
                other => panic!("not an event row: {other:?}"),
            }
        }
    }
}
