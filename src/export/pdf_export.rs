// src/export/pdf_export.rs

use crate::errors::AppResult;
use crate::export::layout::{Placement, TableLayout, layout_table};
use crate::export::model::{
    PDF_FILE_NAME, calculation_lines, events_to_table, get_headers, laytime_terms, vessel_details,
};
use crate::export::pdf::{Align, PdfManager, Rgb, TextStyle};
use crate::export::text::truncate_description;
use crate::export::notify_export_success;
use crate::models::{EventStatus, LaytimeSummary, TimelineEvent, period_label};
use crate::ui::messages::info;
use std::fs;
use std::path::{Path, PathBuf};

// Colonne della tabella eventi (mm)
const COL_X: [f32; 4] = [20.0, 60.0, 120.0, 150.0];
const CENTER_X: f32 = 105.0;
const LEFT_PANEL_X: f32 = 20.0;
const RIGHT_PANEL_X: f32 = 110.0;

const PAYABLE_GREEN: Rgb = Rgb::from_u8(0, 128, 0);

/// Output of `render_statement`.
#[derive(Debug, Clone)]
pub struct RenderedPdf {
    pub bytes: Vec<u8>,
    pub pages: usize,
    pub layout: TableLayout,
}

fn status_color(status: &EventStatus) -> Rgb {
    match status {
        EventStatus::Operational => Rgb::from_u8(22, 128, 61),
        EventStatus::Waiting => Rgb::from_u8(180, 120, 0),
        EventStatus::Delay => Rgb::from_u8(200, 30, 30),
        EventStatus::Unrecognized(_) => Rgb::GREY,
    }
}

/// Label printed in the status column; unknown tags carry a trailing '?'.
fn status_cell(status: &EventStatus) -> String {
    if status.is_flagged() {
        format!("{}?", status.as_str())
    } else {
        status.as_str().to_string()
    }
}

/// Render the laytime statement in memory. Same input, same bytes.
pub fn render_statement(summary: &LaytimeSummary, events: &[TimelineEvent]) -> RenderedPdf {
    let layout = layout_table(events.len());
    let mut pdf = PdfManager::new();
    pdf.new_page();

    // ---------------------------
    // Title block
    // ---------------------------
    let subtitle = match period_label(events) {
        Some(period) => format!("{} - {}", summary.vessel_name, period),
        None => summary.vessel_name.clone(),
    };
    pdf.text(CENTER_X, 20.0, TextStyle::bold(20.0).align(Align::Center), "LAYTIME STATEMENT");
    pdf.text(CENTER_X, 30.0, TextStyle::regular(12.0).align(Align::Center), &subtitle);

    // ---------------------------
    // Detail panels
    // ---------------------------
    draw_panel(&mut pdf, LEFT_PANEL_X, "Vessel Details", &vessel_details(summary));
    draw_panel(&mut pdf, RIGHT_PANEL_X, "Laytime Terms", &laytime_terms(summary));

    // ---------------------------
    // Event table
    // ---------------------------
    pdf.text(LEFT_PANEL_X, 105.0, TextStyle::bold(14.0), "Event Timeline");
    for (x, h) in COL_X.iter().zip(get_headers()) {
        pdf.text(*x, 115.0, TextStyle::bold(9.0), h);
    }
    pdf.rule(COL_X[0], 190.0, 118.0);

    let rows = events_to_table(events);
    let mut page = 0;
    for ((ev, row), place) in events.iter().zip(&rows).zip(&layout.rows) {
        while page < place.page {
            pdf.new_page();
            page += 1;
        }

        let y = place.y;
        pdf.text(COL_X[0], y, TextStyle::regular(9.0), &row[0]);
        pdf.text(COL_X[1], y, TextStyle::regular(9.0), &row[1]);
        pdf.text(
            COL_X[2],
            y,
            TextStyle::regular(9.0).color(status_color(&ev.status)),
            &status_cell(&ev.status),
        );
        pdf.text(COL_X[3], y, TextStyle::regular(9.0), &truncate_description(&row[3]));
    }

    // ---------------------------
    // Calculation summary
    // ---------------------------
    while page < layout.summary.page {
        pdf.new_page();
        page += 1;
    }
    draw_summary(&mut pdf, layout.summary, summary);

    let pages = pdf.page_count();
    RenderedPdf {
        bytes: pdf.finish(),
        pages,
        layout,
    }
}

fn draw_panel(pdf: &mut PdfManager, x: f32, title: &str, lines: &[(&str, String)]) {
    pdf.text(x, 50.0, TextStyle::bold(14.0), title);
    for (i, (label, value)) in lines.iter().enumerate() {
        let y = 60.0 + 8.0 * i as f32;
        pdf.text(x, y, TextStyle::regular(10.0), &format!("{label}: {value}"));
    }
}

fn draw_summary(pdf: &mut PdfManager, at: Placement, summary: &LaytimeSummary) {
    let x = LEFT_PANEL_X;
    pdf.text(x, at.y, TextStyle::bold(12.0), "LAYTIME CALCULATION SUMMARY");

    let first = at.y + 15.0;
    for (i, (label, value)) in calculation_lines(summary).iter().enumerate() {
        let y = first + 8.0 * i as f32;
        pdf.text(x, y, TextStyle::regular(10.0), &format!("{label}: {value}"));
    }

    pdf.text(
        x,
        first + 40.0,
        TextStyle::bold(14.0).color(PAYABLE_GREEN),
        &format!("DISPATCH PAYABLE: {}", summary.dispatch),
    );
}

/// Render and save the statement as `Laytime_Statement_Pacific_Glory.pdf`
/// inside `out_dir`.
pub fn generate_pdf_report(
    summary: &LaytimeSummary,
    events: &[TimelineEvent],
    out_dir: &Path,
) -> AppResult<PathBuf> {
    let path = out_dir.join(PDF_FILE_NAME);
    info(format!("Exporting to PDF: {}", path.display()));

    let rendered = render_statement(summary, events);
    fs::write(&path, &rendered.bytes)?;

    notify_export_success("PDF", &path);
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Snapshot;

    fn many_events(n: usize) -> Vec<TimelineEvent> {
        (0..n)
            .map(|i| {
                TimelineEvent::new(
                    &format!("2024-02-{:02} {:02}:00", i % 28 + 1, i % 24),
                    &format!("Event {i}"),
                    EventStatus::Waiting,
                    "Awaiting berth",
                )
            })
            .collect()
    }

    #[test]
    fn demo_statement_is_single_page() {
        let snap = Snapshot::pacific_glory();
        let out = render_statement(&snap.summary, &snap.events);
        assert_eq!(out.pages, 1);
        assert_eq!(out.layout.rows.len(), 7);
        assert!(out.bytes.starts_with(b"%PDF-"));
    }

    #[test]
    fn empty_timeline_still_renders_one_page() {
        let snap = Snapshot::pacific_glory();
        let out = render_statement(&snap.summary, &[]);
        assert_eq!(out.pages, 1);
        assert!(out.layout.rows.is_empty());
    }

    #[test]
    fn long_timeline_paginates() {
        let snap = Snapshot::pacific_glory();
        let events = many_events(60);
        let out = render_statement(&snap.summary, &events);

        assert_eq!(out.layout.rows.len(), 60);
        assert_eq!(out.pages, out.layout.pages());
        assert!(out.pages > 1);
    }

    fn offsets_of(haystack: &[u8], needle: &[u8]) -> Vec<usize> {
        haystack
            .windows(needle.len())
            .enumerate()
            .filter(|(_, w)| *w == needle)
            .map(|(i, _)| i)
            .collect()
    }

    #[test]
    fn drawn_rows_keep_input_order_across_pages() {
        let snap = Snapshot::pacific_glory();
        let events = many_events(60);
        let out = render_statement(&snap.summary, &events);

        // content streams are not compressed: each row name is a literal operand
        let offsets: Vec<usize> = (0..events.len())
            .map(|i| {
                let hits = offsets_of(&out.bytes, format!("(Event {i})").as_bytes());
                assert_eq!(hits.len(), 1, "row {i} drawn {} times", hits.len());
                hits[0]
            })
            .collect();

        assert!(offsets.windows(2).all(|w| w[0] < w[1]));

        // a page ends between two rows only where the layout breaks
        for i in 1..offsets.len() {
            let between = &out.bytes[offsets[i - 1]..offsets[i]];
            let page_break = !offsets_of(between, b"endstream").is_empty();
            assert_eq!(page_break, i == 16 || i == 45, "row {i}");
        }
        assert_eq!(out.pages, 3);
    }

    #[test]
    fn rendering_is_deterministic() {
        let snap = Snapshot::pacific_glory();
        let a = render_statement(&snap.summary, &snap.events);
        let b = render_statement(&snap.summary, &snap.events);
        assert_eq!(a.bytes, b.bytes);
    }

    #[test]
    fn unknown_status_is_rendered_flagged() {
        assert_eq!(status_cell(&EventStatus::from_tag("shifting")), "shifting?");
        assert_eq!(status_cell(&EventStatus::Delay), "delay");
        assert_eq!(status_color(&EventStatus::from_tag("x")), Rgb::GREY);
    }
}
