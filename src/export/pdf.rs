use crate::export::layout::{PAGE_HEIGHT_MM, PAGE_WIDTH_MM};
use crate::export::text::to_win_ansi;
use pdf_writer::{Content, Name, Pdf, Rect, Ref, Str};

const PT_PER_MM: f32 = 72.0 / 25.4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontStyle {
    Regular,
    Bold,
}

impl FontStyle {
    fn resource_name(self) -> Name<'static> {
        match self {
            FontStyle::Regular => Name(b"F1"),
            FontStyle::Bold => Name(b"F2"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Center,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgb(pub f32, pub f32, pub f32);

impl Rgb {
    pub const BLACK: Rgb = Rgb(0.0, 0.0, 0.0);
    pub const GREY: Rgb = Rgb(0.45, 0.45, 0.45);

    pub const fn from_u8(r: u8, g: u8, b: u8) -> Self {
        Rgb(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0)
    }
}

/// Text style for one `PdfManager::text` call.
#[derive(Debug, Clone, Copy)]
pub struct TextStyle {
    pub size: f32,
    pub font: FontStyle,
    pub color: Rgb,
    pub align: Align,
}

impl TextStyle {
    pub const fn regular(size: f32) -> Self {
        Self {
            size,
            font: FontStyle::Regular,
            color: Rgb::BLACK,
            align: Align::Left,
        }
    }

    pub const fn bold(size: f32) -> Self {
        Self {
            size,
            font: FontStyle::Bold,
            color: Rgb::BLACK,
            align: Align::Left,
        }
    }

    pub const fn color(mut self, color: Rgb) -> Self {
        self.color = color;
        self
    }

    pub const fn align(mut self, align: Align) -> Self {
        self.align = align;
        self
    }
}

/// Low-level page writer. Callers place text in millimetres measured from
/// the top-left corner of an A4 page; conversion to PDF points happens here.
pub struct PdfManager {
    pdf: Pdf,
    catalog_id: Ref,
    pages_id: Ref,
    page_refs: Vec<Ref>,
    current: Option<(Ref, Content)>,

    page_w: f32,
    page_h: f32,

    next_id: i32,
    font_id: Ref,
    bold_font_id: Ref,
}

impl Default for PdfManager {
    fn default() -> Self {
        Self::new()
    }
}

impl PdfManager {
    pub fn new() -> Self {
        let mut pdf = Pdf::new();

        // ID gestiti a mano
        let catalog_id = Ref::new(1);
        let pages_id = Ref::new(2);
        let font_id = Ref::new(3);
        let bold_font_id = Ref::new(4);
        let next_id = 5;

        pdf.type1_font(font_id)
            .base_font(Name(b"Helvetica"))
            .encoding_predefined(Name(b"WinAnsiEncoding"));
        pdf.type1_font(bold_font_id)
            .base_font(Name(b"Helvetica-Bold"))
            .encoding_predefined(Name(b"WinAnsiEncoding"));

        Self {
            pdf,
            catalog_id,
            pages_id,
            page_refs: Vec::new(),
            current: None,

            page_w: PAGE_WIDTH_MM * PT_PER_MM,
            page_h: PAGE_HEIGHT_MM * PT_PER_MM,

            next_id,
            font_id,
            bold_font_id,
        }
    }

    /// Genera un nuovo Ref univoco
    fn fresh_ref(&mut self) -> Ref {
        let id = self.next_id;
        self.next_id += 1;
        Ref::new(id)
    }

    /// Close the current page (if any) and open a new one.
    pub fn new_page(&mut self) {
        self.finalize_page();

        let page_id = self.fresh_ref();
        let content_id = self.fresh_ref();
        self.page_refs.push(page_id);

        let mut page = self.pdf.page(page_id);
        page.parent(self.pages_id)
            .media_box(Rect::new(0.0, 0.0, self.page_w, self.page_h))
            .contents(content_id);

        let mut resources = page.resources();
        let mut fonts = resources.fonts();
        fonts.pair(FontStyle::Regular.resource_name(), self.font_id);
        fonts.pair(FontStyle::Bold.resource_name(), self.bold_font_id);
        drop(fonts);
        drop(resources);
        drop(page);

        self.current = Some((content_id, Content::new()));
    }

    /// Scrive lo stream della pagina corrente
    fn finalize_page(&mut self) {
        if let Some((id, content)) = self.current.take() {
            self.pdf.stream(id, &content.finish());
        }
    }

    pub fn page_count(&self) -> usize {
        self.page_refs.len()
    }

    /// Draw one line of text. Opens the first page on demand.
    pub fn text(&mut self, x_mm: f32, y_mm: f32, style: TextStyle, text: &str) {
        if self.current.is_none() {
            self.new_page();
        }

        let width = text_width_mm(text, style.size, style.font);
        let left_mm = match style.align {
            Align::Left => x_mm,
            Align::Center => x_mm - width / 2.0,
            Align::Right => x_mm - width,
        };

        let x = left_mm * PT_PER_MM;
        let y = self.page_h - y_mm * PT_PER_MM;
        let bytes = to_win_ansi(text);

        let Some((_, content)) = self.current.as_mut() else {
            return;
        };

        content.save_state();
        content.begin_text();
        content.set_font(style.font.resource_name(), style.size);
        content.set_fill_rgb(style.color.0, style.color.1, style.color.2);
        content.set_text_matrix([1.0, 0.0, 0.0, 1.0, x, y]);
        content.show(Str(&bytes));
        content.end_text();
        content.restore_state();
    }

    /// Thin horizontal rule, used under table headers.
    pub fn rule(&mut self, x1_mm: f32, x2_mm: f32, y_mm: f32) {
        if self.current.is_none() {
            self.new_page();
        }
        let y = self.page_h - y_mm * PT_PER_MM;
        let Some((_, content)) = self.current.as_mut() else {
            return;
        };

        content.save_state();
        content.set_stroke_rgb(0.65, 0.65, 0.65);
        content.set_line_width(0.5);
        content.move_to(x1_mm * PT_PER_MM, y);
        content.line_to(x2_mm * PT_PER_MM, y);
        content.stroke();
        content.restore_state();
    }

    /// Imposta il nodo `Pages` con count e kids
    fn build_pages_tree(&mut self) {
        let mut pages = self.pdf.pages(self.pages_id);
        pages.count(self.page_refs.len() as i32);
        pages.kids(self.page_refs.iter().copied());
    }

    /// Close the document and return its bytes. An untouched manager still
    /// yields one blank page.
    pub fn finish(mut self) -> Vec<u8> {
        if self.page_refs.is_empty() {
            self.new_page();
        }
        self.finalize_page();

        // Catalog + Pages una sola volta, qui
        self.pdf.catalog(self.catalog_id).pages(self.pages_id);
        self.build_pages_tree();

        self.pdf.finish()
    }
}

/// Approximate Helvetica advance width, in millimetres.
pub(crate) fn text_width_mm(text: &str, size_pt: f32, font: FontStyle) -> f32 {
    let em: f32 = text
        .chars()
        .map(|c| match c {
            ' ' | '.' | ',' | ':' | ';' | '!' | '|' | 'i' | 'j' | 'l' | 'I' | '\'' => 0.278,
            'f' | 't' | 'r' | '(' | ')' | '[' | ']' | '/' | '-' => 0.333,
            'm' | 'M' | 'W' => 0.833,
            'w' => 0.722,
            c if c.is_ascii_uppercase() => 0.667,
            _ => 0.556,
        })
        .sum();

    let factor = match font {
        FontStyle::Regular => 1.0,
        FontStyle::Bold => 1.06,
    };

    em * factor * size_pt / PT_PER_MM
}
