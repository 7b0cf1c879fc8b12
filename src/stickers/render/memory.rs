use super::{Canvas, Font};

#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    RoundRect {
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        radius: f32,
    },
    Text {
        font: Font,
        size: f32,
        x: f32,
        y: f32,
        text: String,
    },
}

/// Canvas that records drawing calls instead of producing a document.
///
/// `pages` holds every closed page; `current` the one being drawn.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct RecordingCanvas {
    pub pages: Vec<Vec<DrawOp>>,
    pub current: Vec<DrawOp>,
}

impl RecordingCanvas {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of times the page was closed.
    pub fn pages_closed(&self) -> usize {
        self.pages.len()
    }

    /// Every text line drawn on a closed page, in drawing order.
    pub fn texts(&self) -> Vec<&str> {
        self.pages
            .iter()
            .flatten()
            .filter_map(|op| match op {
                DrawOp::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Rectangles drawn on closed page `index`.
    pub fn rects_on(&self, index: usize) -> Vec<(f32, f32, f32, f32)> {
        self.pages
            .get(index)
            .map(|ops| {
                ops.iter()
                    .filter_map(|op| match op {
                        DrawOp::RoundRect {
                            x,
                            y,
                            width,
                            height,
                            ..
                        } => Some((*x, *y, *width, *height)),
                        _ => None,
                    })
                    .collect()
            })
            .unwrap_or_default()
    }
}

impl Canvas for RecordingCanvas {
    fn round_rect(&mut self, x: f32, y: f32, width: f32, height: f32, radius: f32) {
        self.current.push(DrawOp::RoundRect {
            x,
            y,
            width,
            height,
            radius,
        });
    }

    fn draw_centred_string(&mut self, font: Font, size: f32, x: f32, y: f32, text: &str) {
        self.current.push(DrawOp::Text {
            font,
            size,
            x,
            y,
            text: text.to_string(),
        });
    }

    fn show_page(&mut self) {
        self.pages.push(std::mem::take(&mut self.current));
    }
}
