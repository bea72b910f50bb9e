// src/export/layout.rs
//
// Vertical placement of the statement, in millimetres from the top of an
// A4 page.

pub const PAGE_WIDTH_MM: f32 = 210.0;
pub const PAGE_HEIGHT_MM: f32 = 297.0;

pub const TABLE_START_Y: f32 = 125.0;
pub const ROW_PITCH: f32 = 8.0;
/// A row whose cursor is past this line goes to the next page.
pub const PAGE_BREAK_Y: f32 = 250.0;
pub const TOP_MARGIN: f32 = 20.0;

/// Gap between the last table row and the summary heading.
pub const SUMMARY_GAP: f32 = 10.0;
/// Heading → payable line.
pub const SUMMARY_HEIGHT: f32 = 55.0;
pub const BOTTOM_LIMIT: f32 = 280.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    /// 0-based page index
    pub page: usize,
    pub y: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TableLayout {
    pub rows: Vec<Placement>,
    /// Where the "LAYTIME CALCULATION SUMMARY" heading goes.
    pub summary: Placement,
}

impl TableLayout {
    /// Total pages of the document.
    pub fn pages(&self) -> usize {
        self.summary.page + 1
    }

    /// Pages spanned by the event table alone (at least one).
    pub fn table_pages(&self) -> usize {
        self.rows.last().map_or(1, |r| r.page + 1)
    }
}

/// Lay out `n_rows` table rows at a fixed pitch, breaking the page before
/// any row whose cursor has gone past `PAGE_BREAK_Y`. Rows are never split.
pub fn layout_table(n_rows: usize) -> TableLayout {
    let mut rows = Vec::with_capacity(n_rows);
    let mut page = 0;
    let mut y = TABLE_START_Y;

    for _ in 0..n_rows {
        if y > PAGE_BREAK_Y {
            page += 1;
            y = TOP_MARGIN;
        }
        rows.push(Placement { page, y });
        y += ROW_PITCH;
    }

    let mut heading_y = y + SUMMARY_GAP;
    if heading_y + SUMMARY_HEIGHT > BOTTOM_LIMIT {
        page += 1;
        heading_y = TOP_MARGIN;
    }

    TableLayout {
        rows,
        summary: Placement { page, y: heading_y },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIRST_PAGE_ROWS: usize = 16;
    const NEXT_PAGE_ROWS: usize = 29;

    fn expected_table_pages(n: usize) -> usize {
        if n <= FIRST_PAGE_ROWS {
            1
        } else {
            1 + (n - FIRST_PAGE_ROWS).div_ceil(NEXT_PAGE_ROWS)
        }
    }

    #[test]
    fn empty_table_is_single_page() {
        let l = layout_table(0);
        assert!(l.rows.is_empty());
        assert_eq!(l.pages(), 1);
        assert_eq!(l.summary, Placement { page: 0, y: TABLE_START_Y + SUMMARY_GAP });
    }

    #[test]
    fn demo_timeline_fits_one_page() {
        let l = layout_table(7);
        assert_eq!(l.pages(), 1);
        assert_eq!(l.rows[6].y, TABLE_START_Y + 6.0 * ROW_PITCH);
    }

    #[test]
    fn seventeenth_row_starts_second_page() {
        let l = layout_table(FIRST_PAGE_ROWS + 1);
        assert_eq!(l.rows[FIRST_PAGE_ROWS - 1], Placement { page: 0, y: 245.0 });
        assert_eq!(l.rows[FIRST_PAGE_ROWS], Placement { page: 1, y: TOP_MARGIN });
        assert_eq!(l.table_pages(), 2);
    }

    #[test]
    fn rows_never_cross_the_break_line_and_keep_order() {
        for n in [1, 15, 16, 17, 45, 46, 100, 333] {
            let l = layout_table(n);
            assert_eq!(l.rows.len(), n);
            assert_eq!(l.table_pages(), expected_table_pages(n), "n = {n}");

            for w in l.rows.windows(2) {
                let (a, b) = (w[0], w[1]);
                let same_page = b.page == a.page && b.y == a.y + ROW_PITCH;
                let next_page = b.page == a.page + 1 && b.y == TOP_MARGIN;
                assert!(same_page || next_page);
            }
            for r in &l.rows {
                assert!(r.y <= PAGE_BREAK_Y);
                assert!(r.y + ROW_PITCH <= PAGE_HEIGHT_MM);
            }
        }
    }

    #[test]
    fn long_table_needs_more_than_one_page() {
        let n = (PAGE_HEIGHT_MM / ROW_PITCH) as usize + 1;
        assert!(layout_table(n).pages() > 1);
    }

    #[test]
    fn summary_moves_to_fresh_page_when_it_would_overflow() {
        let l = layout_table(FIRST_PAGE_ROWS);
        assert_eq!(l.table_pages(), 1);
        assert_eq!(l.summary, Placement { page: 1, y: TOP_MARGIN });
        assert_eq!(l.pages(), 2);

        let l = layout_table(10);
        assert_eq!(l.summary.page, 0);
        assert!(l.summary.y + SUMMARY_HEIGHT <= BOTTOM_LIMIT);
    }
}
