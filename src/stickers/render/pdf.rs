use super::{metrics, Canvas, Font};
use crate::error::Result;
use chrono::{DateTime, Datelike, Timelike, Utc};
use flate2::write::ZlibEncoder;
use flate2::Compression;
use pdf_writer::{Content, Date, Filter, Name, Pdf, Rect, Ref, Str, TextStr};
use std::io::Write;

const PRODUCER: &str = concat!("stickers ", env!("CARGO_PKG_VERSION"));

/// Control point distance for approximating a quarter circle with one cubic Bézier.
const KAPPA: f32 = 0.552_284_75;

/// Builds a PDF document in memory, one page at a time.
///
/// Pages are closed with [`Canvas::show_page`]; [`PdfCanvas::finish`] closes a page that
/// still has drawing on it and assembles the file. Nothing touches the disk here.
pub struct PdfCanvas {
    page_width: f32,
    page_height: f32,
    title: Option<String>,
    created_at: Option<DateTime<Utc>>,
    pages: Vec<Vec<u8>>,
    current: Content,
    page_dirty: bool,
}

impl PdfCanvas {
    pub fn new(page_width: f32, page_height: f32) -> Self {
        Self {
            page_width,
            page_height,
            title: None,
            created_at: None,
            pages: Vec::new(),
            current: Content::new(),
            page_dirty: false,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Stamp the document info with a creation date. Left out, the output is
    /// byte-for-byte reproducible.
    pub fn with_creation_date(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = Some(created_at);
        self
    }

    /// Number of pages closed so far.
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    pub fn finish(self) -> Result<Vec<u8>> {
        let PdfCanvas {
            page_width,
            page_height,
            title,
            created_at,
            mut pages,
            current,
            page_dirty,
        } = self;

        if page_dirty {
            pages.push(current.finish().to_vec());
        }
        // A PDF needs at least one page
        if pages.is_empty() {
            pages.push(Vec::new());
        }

        let mut next_id = 1;
        let mut alloc = || {
            let id = Ref::new(next_id);
            next_id += 1;
            id
        };

        let catalog_id = alloc();
        let page_tree_id = alloc();
        let info_id = alloc();
        let font_ids: Vec<(Font, Ref)> = Font::ALL.iter().map(|font| (*font, alloc())).collect();
        let page_ids: Vec<(Ref, Ref)> = pages.iter().map(|_| (alloc(), alloc())).collect();

        let mut pdf = Pdf::new();
        pdf.catalog(catalog_id).pages(page_tree_id);
        pdf.pages(page_tree_id)
            .kids(page_ids.iter().map(|(page_id, _)| *page_id))
            .count(page_ids.len() as i32);

        {
            let mut info = pdf.document_info(info_id);
            info.producer(TextStr(PRODUCER));
            if let Some(title) = &title {
                info.title(TextStr(title.as_str()));
            }
            if let Some(created_at) = created_at {
                info.creation_date(pdf_date(created_at));
            }
        }

        for (font, font_id) in &font_ids {
            pdf.type1_font(*font_id)
                .base_font(Name(font.base_name().as_bytes()))
                .encoding_predefined(Name(b"WinAnsiEncoding"));
        }

        for ((page_id, content_id), stream) in page_ids.iter().zip(&pages) {
            {
                let mut page = pdf.page(*page_id);
                page.media_box(Rect::new(0.0, 0.0, page_width, page_height))
                    .parent(page_tree_id)
                    .contents(*content_id);
                let mut resources = page.resources();
                let mut fonts = resources.fonts();
                for (font, font_id) in &font_ids {
                    fonts.pair(Name(font.resource_name().as_bytes()), *font_id);
                }
            }
            let compressed = deflate(stream)?;
            pdf.stream(*content_id, &compressed)
                .filter(Filter::FlateDecode);
        }

        Ok(pdf.finish())
    }
}

impl Canvas for PdfCanvas {
    fn round_rect(&mut self, x: f32, y: f32, width: f32, height: f32, radius: f32) {
        let r = radius.min(width / 2.0).min(height / 2.0).max(0.0);
        let c = &mut self.current;
        if r == 0.0 {
            c.rect(x, y, width, height);
        } else {
            let k = r * KAPPA;
            let (right, top) = (x + width, y + height);
            c.move_to(x + r, y);
            c.line_to(right - r, y);
            c.cubic_to(right - r + k, y, right, y + r - k, right, y + r);
            c.line_to(right, top - r);
            c.cubic_to(right, top - r + k, right - r + k, top, right - r, top);
            c.line_to(x + r, top);
            c.cubic_to(x + r - k, top, x, top - r + k, x, top - r);
            c.line_to(x, y + r);
            c.cubic_to(x, y + r - k, x + r - k, y, x + r, y);
            c.close_path();
        }
        c.stroke();
        self.page_dirty = true;
    }

    fn draw_centred_string(&mut self, font: Font, size: f32, x: f32, y: f32, text: &str) {
        let encoded = win_ansi(text);
        self.current
            .begin_text()
            .set_font(Name(font.resource_name().as_bytes()), size)
            .next_line(centred_start(font, size, x, text), y)
            .show(Str(&encoded))
            .end_text();
        self.page_dirty = true;
    }

    fn show_page(&mut self) {
        let content = std::mem::replace(&mut self.current, Content::new());
        self.pages.push(content.finish().to_vec());
        self.page_dirty = false;
    }
}

/// Left edge of `text` when centered on `x`.
fn centred_start(font: Font, size: f32, x: f32, text: &str) -> f32 {
    x - metrics::string_width(font, size, text) / 2.0
}

/// Encodes text for a WinAnsi simple font. Latin-1 maps one to one; the rest becomes `?`.
fn win_ansi(text: &str) -> Vec<u8> {
    text.chars()
        .map(|c| match u32::from(c) {
            0x20..=0x7E | 0xA0..=0xFF => c as u8,
            _ => b'?',
        })
        .collect()
}

fn deflate(data: &[u8]) -> Result<Vec<u8>> {
    let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(data)?;
    Ok(encoder.finish()?)
}

fn pdf_date(at: DateTime<Utc>) -> Date {
    Date::new(at.year().clamp(0, 9999) as u16)
        .month(at.month() as u8)
        .day(at.day() as u8)
        .hour(at.hour() as u8)
        .minute(at.minute() as u8)
        .second(at.second() as u8)
        .utc_offset_hour(0)
}
