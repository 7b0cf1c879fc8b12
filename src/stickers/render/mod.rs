//! # Rendering Layer
//!
//! The layout engine never talks to a PDF library directly. It issues drawing calls to a
//! [`Canvas`], the same way the command layer talks to a [`crate::store::SheetStore`]
//! instead of the filesystem.
//!
//! ## Implementations
//!
//! - [`pdf::PdfCanvas`]: production backend, builds a PDF document in memory
//!   - one content stream per page, Flate compressed
//!   - standard Type1 fonts, nothing embedded
//!
//! - [`memory::RecordingCanvas`]: records every call, for tests
//!
//! ## Coordinates
//!
//! PDF user space: points, origin at the bottom-left corner of the page.

pub mod memory;
pub mod metrics;
pub mod pdf;

/// The two standard fonts stickers are printed with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Font {
    Helvetica,
    HelveticaBold,
}

impl Font {
    pub const ALL: [Font; 2] = [Font::Helvetica, Font::HelveticaBold];

    /// PostScript name of the standard font.
    pub fn base_name(&self) -> &'static str {
        match self {
            Font::Helvetica => "Helvetica",
            Font::HelveticaBold => "Helvetica-Bold",
        }
    }

    /// Name under which the font is registered in page resources.
    pub fn resource_name(&self) -> &'static str {
        match self {
            Font::Helvetica => "F1",
            Font::HelveticaBold => "F2",
        }
    }
}

/// Drawing surface the layout engine renders onto.
pub trait Canvas {
    /// Stroke a rectangle with rounded corners; `(x, y)` is the lower-left corner.
    fn round_rect(&mut self, x: f32, y: f32, width: f32, height: f32, radius: f32);

    /// Draw `text` on a baseline at `y`, horizontally centered on `x`.
    fn draw_centred_string(&mut self, font: Font, size: f32, x: f32, y: f32, text: &str);

    /// Close the current page. Drawing afterwards goes to a fresh page.
    fn show_page(&mut self);
}
