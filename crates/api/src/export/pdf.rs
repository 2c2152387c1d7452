//! Paginated PDF table report built with `pdf-writer`.
//!
//! Layout positions are measured from the top-left corner of an A4
//! landscape page and converted to PDF user space when drawn.

use cib_core::export::{pdf_safe_text, truncate_chars, PdfColumn, PDF_COLUMNS, PDF_TITLE};
use cib_db::models::project::Project;
use pdf_writer::{Content, Name, Pdf, Rect, Ref, Str};

use super::cell_text;

const PAGE_W: f32 = 842.0;
const PAGE_H: f32 = 595.0;

const TITLE_TOP: f32 = 40.0;
const TITLE_SIZE: f32 = 18.0;
const HEADER_SIZE: f32 = 10.0;
const BODY_SIZE: f32 = 9.0;
const ROW_H: f32 = 20.0;

/// Table header position on the first page (below the title).
const FIRST_TABLE_TOP: f32 = 100.0;
/// Table header position on continuation pages.
const NEXT_TABLE_TOP: f32 = 50.0;
/// A row starting below this line moves to a new page.
const BOTTOM_THRESHOLD: f32 = 500.0;

/// Approximate Helvetica advance width as a fraction of the font size.
const AVG_GLYPH_WIDTH: f32 = 0.5;

const REGULAR: Name<'static> = Name(b"F1");
const BOLD: Name<'static> = Name(b"F2");

/// Render `projects` as a PDF report and return the file bytes.
pub fn render(projects: &[Project]) -> Vec<u8> {
    let mut report = ReportPdf::new();
    report.write_projects(projects);
    report.finish()
}

/// Incremental PDF builder holding one open page at a time.
struct ReportPdf {
    pdf: Pdf,
    catalog_id: Ref,
    pages_id: Ref,
    regular_font_id: Ref,
    bold_font_id: Ref,
    page_refs: Vec<Ref>,
    next_id: i32,
}

impl ReportPdf {
    fn new() -> Self {
        let mut pdf = Pdf::new();
        let catalog_id = Ref::new(1);
        let pages_id = Ref::new(2);
        let regular_font_id = Ref::new(3);
        let bold_font_id = Ref::new(4);

        pdf.type1_font(regular_font_id)
            .base_font(Name(b"Helvetica"))
            .encoding_predefined(Name(b"WinAnsiEncoding"));
        pdf.type1_font(bold_font_id)
            .base_font(Name(b"Helvetica-Bold"))
            .encoding_predefined(Name(b"WinAnsiEncoding"));

        Self {
            pdf,
            catalog_id,
            pages_id,
            regular_font_id,
            bold_font_id,
            page_refs: Vec::new(),
            next_id: 5,
        }
    }

    fn fresh_ref(&mut self) -> Ref {
        let id = self.next_id;
        self.next_id += 1;
        Ref::new(id)
    }

    fn page_count(&self) -> usize {
        self.page_refs.len()
    }

    fn write_projects(&mut self, projects: &[Project]) {
        let mut content = Content::new();
        draw_title(&mut content);
        draw_header_row(&mut content, FIRST_TABLE_TOP);
        let mut y = FIRST_TABLE_TOP + ROW_H;

        for project in projects {
            if y > BOTTOM_THRESHOLD {
                self.push_page(content);
                content = Content::new();
                draw_header_row(&mut content, NEXT_TABLE_TOP);
                y = NEXT_TABLE_TOP + ROW_H;
            }
            for column in &PDF_COLUMNS {
                draw_text(&mut content, REGULAR, BODY_SIZE, column.x, y, &cell(project, column));
            }
            y += ROW_H;
        }

        self.push_page(content);
    }

    /// Write `content` as a new page appended to the page tree.
    fn push_page(&mut self, content: Content) {
        let page_id = self.fresh_ref();
        let content_id = self.fresh_ref();
        self.page_refs.push(page_id);

        {
            let mut page = self.pdf.page(page_id);
            page.parent(self.pages_id)
                .media_box(Rect::new(0.0, 0.0, PAGE_W, PAGE_H))
                .contents(content_id);
            page.resources()
                .fonts()
                .pair(REGULAR, self.regular_font_id)
                .pair(BOLD, self.bold_font_id);
        }

        self.pdf.stream(content_id, &content.finish());
    }

    fn finish(mut self) -> Vec<u8> {
        self.pdf.catalog(self.catalog_id).pages(self.pages_id);
        let count = self.page_refs.len() as i32;
        self.pdf
            .pages(self.pages_id)
            .count(count)
            .kids(self.page_refs.iter().copied());
        self.pdf.finish()
    }
}

fn cell(project: &Project, column: &PdfColumn) -> String {
    let text = cell_text(project, column.field);
    match column.max_chars {
        Some(max) => truncate_chars(&text, max),
        None => text,
    }
}

fn draw_title(content: &mut Content) {
    let width = PDF_TITLE.chars().count() as f32 * TITLE_SIZE * AVG_GLYPH_WIDTH;
    let x = ((PAGE_W - width) / 2.0).max(0.0);
    draw_text(content, BOLD, TITLE_SIZE, x, TITLE_TOP, PDF_TITLE);
}

fn draw_header_row(content: &mut Content, top: f32) {
    for column in &PDF_COLUMNS {
        draw_text(content, BOLD, HEADER_SIZE, column.x, top, column.header);
    }
}

/// Draw `text` with its top edge `top` points below the top of the page.
fn draw_text(content: &mut Content, font: Name, size: f32, x: f32, top: f32, text: &str) {
    let baseline = PAGE_H - top - size;
    let encoded = latin1_bytes(&pdf_safe_text(text));
    content.begin_text();
    content.set_font(font, size);
    content.set_text_matrix([1.0, 0.0, 0.0, 1.0, x, baseline]);
    content.show(Str(&encoded));
    content.end_text();
}

/// Single-byte encoding of text already reduced to Latin-1.
fn latin1_bytes(text: &str) -> Vec<u8> {
    text.chars()
        .map(|c| u8::try_from(u32::from(c)).unwrap_or(b'?'))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::export::fixtures;

    fn rows(n: usize) -> Vec<Project> {
        (0..n)
            .map(|i| fixtures::project(i as i32 + 1, &format!("Project {i}")))
            .collect()
    }

    fn pages_for(n: usize) -> usize {
        let mut report = ReportPdf::new();
        report.write_projects(&rows(n));
        report.page_count()
    }

    #[test]
    fn renders_pdf_document_with_title() {
        let bytes = render(&rows(3));
        assert!(bytes.starts_with(b"%PDF-"));
        let needle = PDF_TITLE.as_bytes();
        assert!(bytes.windows(needle.len()).any(|w| w == needle));
    }

    #[test]
    fn empty_listing_renders_single_page() {
        assert_eq!(pages_for(0), 1);
    }

    #[test]
    fn rows_overflow_onto_new_pages() {
        // First page fits rows at 120..=500, continuation pages 70..=500.
        assert_eq!(pages_for(20), 1);
        assert_eq!(pages_for(21), 2);
        assert_eq!(pages_for(42), 2);
        assert_eq!(pages_for(43), 3);
    }

    #[test]
    fn long_text_is_truncated_per_column() {
        let mut p = fixtures::project(1, &"N".repeat(50));
        p.ministry_dept = "M".repeat(40);
        assert_eq!(cell(&p, &PDF_COLUMNS[1]).len(), 35);
        assert_eq!(cell(&p, &PDF_COLUMNS[2]).len(), 25);
    }

    #[test]
    fn latin1_text_encodes_to_single_bytes() {
        assert_eq!(latin1_bytes("Café"), vec![b'C', b'a', b'f', 0xE9]);
    }
}
