//! Plain-text tables for the terminal screens.

use crate::utils::colors::colorize;
use unicode_width::UnicodeWidthStr;

pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
    /// ANSI colour per cell, parallel to `rows`
    colors: Vec<Vec<Option<&'static str>>>,
}

impl Table {
    pub fn new(headers: &[&str]) -> Self {
        Self {
            headers: headers.iter().map(|h| h.to_string()).collect(),
            rows: Vec::new(),
            colors: Vec::new(),
        }
    }

    /// Missing trailing cells render empty; extra cells are ignored.
    pub fn add_row(&mut self, row: Vec<String>) {
        self.add_colored_row(row, Vec::new());
    }

    /// Like `add_row`, with an optional colour per cell. Colour codes wrap
    /// the cell text only, so padding is computed on the plain text.
    pub fn add_colored_row(&mut self, row: Vec<String>, colors: Vec<Option<&'static str>>) {
        self.rows.push(row);
        self.colors.push(colors);
    }

    fn widths(&self) -> Vec<usize> {
        let mut widths: Vec<usize> = self.headers.iter().map(|h| h.width()).collect();
        for row in &self.rows {
            for (i, cell) in row.iter().take(widths.len()).enumerate() {
                widths[i] = widths[i].max(cell.width());
            }
        }
        widths
    }

    pub fn render(&self) -> String {
        let widths = self.widths();
        let mut out = String::new();

        push_line(&mut out, &self.headers, &[], &widths);
        let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
        push_line(&mut out, &rule, &[], &widths);

        for (row, colors) in self.rows.iter().zip(&self.colors) {
            push_line(&mut out, row, colors, &widths);
        }

        out
    }
}

// pad per larghezza visuale, non per numero di char
fn push_line(
    out: &mut String,
    cells: &[String],
    colors: &[Option<&'static str>],
    widths: &[usize],
) {
    let mut line = String::new();
    for (i, w) in widths.iter().enumerate() {
        let cell = cells.get(i).map(String::as_str).unwrap_or("");
        match colors.get(i).copied().flatten() {
            Some(color) if !cell.is_empty() => line.push_str(&colorize(cell, color)),
            _ => line.push_str(cell),
        }
        line.push_str(&" ".repeat(w.saturating_sub(cell.width()) + 1));
    }
    out.push_str(line.trim_end());
    out.push('\n');
}
