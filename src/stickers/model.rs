use crate::error::{Result, StickerError};
use crate::geometry::LayoutGrid;

/// One invoice worth of stickers. Built from user input, consumed once by the engine.
///
/// The invoice label is stored trimmed, whichever front end it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StickerJob {
    pub invoice: String,
    pub total_boxes: u32,
}

impl StickerJob {
    pub fn new(invoice: impl Into<String>, total_boxes: u32) -> Result<Self> {
        if total_boxes == 0 {
            return Err(StickerError::InvalidBoxCount(total_boxes.to_string()));
        }
        Ok(Self {
            invoice: invoice.into().trim().to_string(),
            total_boxes,
        })
    }

    /// Parses the box count the way both front ends receive it: as text.
    pub fn parse(invoice: impl Into<String>, boxes: &str) -> Result<Self> {
        Self::new(invoice, parse_box_count(boxes)?)
    }
}

/// Parses a user-supplied box count. Surrounding whitespace and a leading `+` are
/// accepted; anything that is not a whole number of at least one is rejected.
pub fn parse_box_count(input: &str) -> Result<u32> {
    let invalid = || StickerError::InvalidBoxCount(input.to_string());
    let value: i64 = input.trim().parse().map_err(|_| invalid())?;
    if value < 1 {
        return Err(invalid());
    }
    u32::try_from(value).map_err(|_| invalid())
}

/// A placed sticker: which box it labels and where it sits on the page.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sticker {
    pub box_number: u32,
    pub total_boxes: u32,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Sticker {
    pub fn invoice_line(invoice: &str) -> String {
        format!("Invoice: {}", invoice)
    }

    pub fn box_line(&self) -> String {
        format!("Box {} of {}", self.box_number, self.total_boxes)
    }

    pub fn center_x(&self) -> f32 {
        self.x + self.width / 2.0
    }
}

/// Next box number still to be placed. Threaded through page after page.
///
/// `next` is wider than the box count so that it can step past `u32::MAX`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderCursor {
    next: u64,
    total: u32,
}

impl RenderCursor {
    pub fn new(total: u32) -> Self {
        Self::resume(1, total)
    }

    pub fn resume(next: u64, total: u32) -> Self {
        Self { next, total }
    }

    /// Box number to place next. Above `total` once every box is placed.
    pub fn next(&self) -> u64 {
        self.next
    }

    pub fn total(&self) -> u32 {
        self.total
    }

    pub fn is_done(&self) -> bool {
        self.next > u64::from(self.total)
    }

    /// Hands out the current box number and moves past it, or `None` once done.
    pub fn take(&mut self) -> Option<u32> {
        let current = u32::try_from(self.next).ok().filter(|n| *n <= self.total)?;
        self.next += 1;
        Some(current)
    }
}

/// What a rendering run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetSummary {
    pub invoice: String,
    pub total_boxes: u32,
    pub pages: u32,
    pub stickers: u32,
    pub grid: LayoutGrid,
}
