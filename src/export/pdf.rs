use pdf_writer::{Content, Name, Pdf, Rect, Ref, Str};
use std::fs::File;
use std::io::Write;
use std::path::Path;

pub struct PdfManager {
    pdf: Pdf,
    catalog_id: Ref,
    pages_id: Ref,
    page_refs: Vec<Ref>,
    current_content_id: Option<Ref>,

    page_w: f32,
    page_h: f32,
    margin: f32,
    row_h: f32,

    next_id: i32,
    font_id: Ref,

    font_size: f32,
    header_font_size: f32,
    title_font_size: f32,
    total_font_size: f32,
}

impl Default for PdfManager {
    fn default() -> Self {
        Self::new()
    }
}

/// Encode text for the built-in Helvetica with WinAnsi encoding.
/// Latin-1 maps 1:1; anything else becomes '?'.
fn win_ansi(text: &str) -> Vec<u8> {
    text.chars()
        .map(|c| match c as u32 {
            0x20..=0x7E | 0xA0..=0xFF => c as u32 as u8,
            0x20AC => 0x80, // €
            0x2013 => 0x96, // –
            0x2014 => 0x97, // —
            _ => b'?',
        })
        .collect()
}

impl PdfManager {
    pub fn new() -> Self {
        let mut pdf = Pdf::new();

        // object ids assigned by hand
        let catalog_id = Ref::new(1);
        let pages_id = Ref::new(2);
        let font_id = Ref::new(3);
        let next_id = 4;

        pdf.type1_font(font_id)
            .base_font(Name(b"Helvetica"))
            .encoding_predefined(Name(b"WinAnsiEncoding"));

        Self {
            pdf,
            catalog_id,
            pages_id,
            page_refs: Vec::new(),
            current_content_id: None,

            page_w: 595.0,
            page_h: 842.0,
            margin: 50.0,
            row_h: 20.0,

            next_id,
            font_id,

            font_size: 10.0,
            header_font_size: 11.0,
            title_font_size: 14.0,
            total_font_size: 12.0,
        }
    }

    pub fn page_count(&self) -> usize {
        self.page_refs.len()
    }

    fn fresh_ref(&mut self) -> Ref {
        let id = self.next_id;
        self.next_id += 1;
        Ref::new(id)
    }

    fn new_page(&mut self) -> Content {
        let page_id = self.fresh_ref();
        let content_id = self.fresh_ref();

        self.page_refs.push(page_id);

        let mut page = self.pdf.page(page_id);
        page.parent(self.pages_id)
            .media_box(Rect::new(0.0, 0.0, self.page_w, self.page_h))
            .contents(content_id);

        page.resources().fonts().pair(Name(b"F1"), self.font_id);

        self.current_content_id = Some(content_id);

        Content::new()
    }

    fn finalize_page(&mut self, content: Content) {
        if let Some(id) = self.current_content_id.take() {
            self.pdf.stream(id, &content.finish());
        }
    }

    fn build_pages_tree(&mut self) {
        let mut pages = self.pdf.pages(self.pages_id);
        pages.count(self.page_refs.len() as i32);
        pages.kids(self.page_refs.clone());
    }

    fn draw_text(&self, content: &mut Content, x: f32, y: f32, size: f32, text: &str) {
        let bytes = win_ansi(text);
        content.begin_text();
        content.set_font(Name(b"F1"), size);
        content.set_text_matrix([1.0, 0.0, 0.0, 1.0, x, y]);
        content.show(Str(&bytes));
        content.end_text();
    }

    fn draw_cell_borders(&self, content: &mut Content, x: f32, y: f32, w: f32, h: f32) {
        content.save_state();
        content.set_stroke_rgb(0.65, 0.65, 0.65);
        content.rect(x, y, w, h);
        content.stroke();
        content.restore_state();
    }

    fn fill_band(&self, content: &mut Content, y: f32, width: f32, gray: f32) {
        content.save_state();
        content.set_fill_rgb(gray, gray, gray + 0.03);
        content.rect(self.margin, y, width, self.row_h);
        content.fill_nonzero();
        content.restore_state();
    }

    fn draw_row(
        &self,
        content: &mut Content,
        y: f32,
        col_widths: &[f32],
        row: &[String],
        font_size: f32,
    ) {
        let mut x = self.margin;

        for (text, w) in row.iter().zip(col_widths) {
            self.draw_text(content, x + 4.0, y + 5.0, font_size, text);
            self.draw_cell_borders(content, x, y, *w, self.row_h);
            x += w;
        }
    }

    /// Column widths from header + content, scaled down to fit the page.
    fn compute_col_widths(&self, headers: &[&str], rows: &[Vec<String>]) -> Vec<f32> {
        let mut widths: Vec<f32> = headers
            .iter()
            .map(|h| h.chars().count() as f32 * 6.5 + 8.0)
            .collect();

        for row in rows {
            for (w, cell) in widths.iter_mut().zip(row) {
                *w = (cell.chars().count() as f32 * 6.2 + 8.0).max(*w);
            }
        }

        let total: f32 = widths.iter().sum();
        let max = self.page_w - 2.0 * self.margin;

        if total > max {
            let scale = max / total;
            for w in &mut widths {
                *w *= scale;
            }
        }

        widths
    }

    fn draw_page_header_footer(&self, content: &mut Content, title: &str, page: usize) {
        self.draw_text(
            content,
            self.margin,
            self.page_h - self.margin + 15.0,
            self.title_font_size,
            title,
        );

        let pg = format!("Page {}", page);
        self.draw_text(
            content,
            self.page_w - self.margin - 60.0,
            self.margin - 35.0,
            self.font_size,
            &pg,
        );
    }

    /// Opens a page with title, footer and table header; returns the y of
    /// the first free row.
    fn start_table_page(
        &mut self,
        title: &str,
        header_row: &[String],
        col_widths: &[f32],
    ) -> (Content, f32) {
        let page_no = self.page_refs.len() + 1;
        let mut content = self.new_page();
        self.draw_page_header_footer(&mut content, title, page_no);

        let y = self.page_h - self.margin - 30.0;
        self.fill_band(&mut content, y, col_widths.iter().sum(), 0.85);
        self.draw_row(&mut content, y, col_widths, header_row, self.header_font_size);

        (content, y - self.row_h)
    }

    /// Multi-page table followed by a summary line (e.g. the monthly total).
    pub fn write_report(
        &mut self,
        title: &str,
        headers: &[&str],
        rows: &[Vec<String>],
        summary: &str,
    ) {
        let col_widths = self.compute_col_widths(headers, rows);
        let header_row: Vec<String> = headers.iter().map(|s| s.to_string()).collect();

        let (mut content, mut y) = self.start_table_page(title, &header_row, &col_widths);

        for (i, row) in rows.iter().enumerate() {
            if y - self.row_h < self.margin {
                self.finalize_page(content);
                (content, y) = self.start_table_page(title, &header_row, &col_widths);
            }

            // zebra stripe
            if i % 2 == 0 {
                self.fill_band(&mut content, y, col_widths.iter().sum(), 0.96);
            }

            self.draw_row(&mut content, y, &col_widths, row, self.font_size);
            y -= self.row_h;
        }

        // Summary needs two rows of space below the table
        if y - 2.0 * self.row_h < self.margin {
            self.finalize_page(content);
            let page_no = self.page_refs.len() + 1;
            content = self.new_page();
            self.draw_page_header_footer(&mut content, title, page_no);
            y = self.page_h - self.margin - 30.0;
        }

        self.draw_text(
            &mut content,
            self.margin,
            y - self.row_h,
            self.total_font_size,
            summary,
        );

        self.finalize_page(content);
    }

    pub fn finish(mut self) -> Vec<u8> {
        self.pdf.catalog(self.catalog_id).pages(self.pages_id);
        self.build_pages_tree();
        self.pdf.finish()
    }

    pub fn save(self, path: &Path) -> std::io::Result<()> {
        let bytes = self.finish();
        let mut f = File::create(path)?;
        f.write_all(&bytes)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows(n: usize) -> Vec<Vec<String>> {
        (0..n)
            .map(|i| vec![format!("2025-03-{:02}", i % 28 + 1), "08:00".into()])
            .collect()
    }

    #[test]
    fn accented_text_is_latin1() {
        assert_eq!(win_ansi("Durée"), b"Dur\xe9e".to_vec());
        assert_eq!(win_ansi("→"), b"?".to_vec());
    }

    #[test]
    fn short_report_fits_one_page() {
        let mut pdf = PdfManager::new();
        pdf.write_report("Synthèse", &["Date", "Heure Début"], &rows(3), "Total");
        assert_eq!(pdf.page_count(), 1);
        let bytes = pdf.finish();
        assert!(bytes.starts_with(b"%PDF"));
    }

    #[test]
    fn empty_report_still_has_a_page() {
        let mut pdf = PdfManager::new();
        pdf.write_report("Synthèse", &["Date"], &[], "Total mensuel : 0.00 heures");
        assert_eq!(pdf.page_count(), 1);
    }

    #[test]
    fn long_report_paginates() {
        let mut pdf = PdfManager::new();
        pdf.write_report("Synthèse", &["Date", "Heure Début"], &rows(80), "Total");
        assert!(pdf.page_count() >= 3);
    }
}
