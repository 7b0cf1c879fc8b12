//! # Layout Engine
//!
//! Places box numbers `1..=N` into a grid of fixed-size cells, one page at a time.
//!
//! ## Per page
//!
//! Rows are walked top to bottom, columns left to right. Each cell takes the next box
//! number from the [`RenderCursor`]; once the cursor is exhausted the remaining cells
//! stay blank and the page is done. [`draw_page`] returns the box number the next page
//! resumes from.
//!
//! ## Per job
//!
//! [`render_job`] is the page loop: draw a page, close it, repeat until every box has a
//! sticker. A geometry with zero capacity would make that loop spin forever, so it is
//! refused up front with [`StickerError::DegenerateGeometry`].
//!
//! The engine draws onto a [`Canvas`] owned by the caller and holds no state between
//! calls besides the cursor it is handed.

use crate::error::{Result, StickerError};
use crate::geometry::{LayoutGrid, PageGeometry};
use crate::model::{RenderCursor, SheetSummary, Sticker, StickerJob};
use crate::profile::SheetProfile;
use crate::render::Canvas;
use log::debug;

/// Positions for one page, consuming box numbers from `cursor`.
pub fn plan_page(geometry: &PageGeometry, grid: LayoutGrid, cursor: &mut RenderCursor) -> Vec<Sticker> {
    let mut stickers = Vec::new();
    for row in 0..grid.per_col {
        for col in 0..grid.per_row {
            let Some(box_number) = cursor.take() else {
                return stickers;
            };
            let (x, y) = geometry.cell_origin(row, col);
            stickers.push(Sticker {
                box_number,
                total_boxes: cursor.total(),
                x,
                y,
                width: geometry.sticker_width,
                height: geometry.sticker_height,
            });
        }
    }
    stickers
}

/// Draws one page of stickers starting at box `start_box` and returns the box number
/// to resume from. A return value above `total_boxes` means the job is complete.
pub fn draw_page<C: Canvas>(
    canvas: &mut C,
    profile: &SheetProfile,
    job: &StickerJob,
    start_box: u64,
) -> u64 {
    let mut cursor = RenderCursor::resume(start_box, job.total_boxes);
    let grid = profile.geometry.grid();
    let invoice_line = Sticker::invoice_line(&job.invoice);

    for sticker in plan_page(&profile.geometry, grid, &mut cursor) {
        draw_sticker(canvas, profile, &invoice_line, &sticker);
    }
    cursor.next()
}

fn draw_sticker<C: Canvas>(
    canvas: &mut C,
    profile: &SheetProfile,
    invoice_line: &str,
    sticker: &Sticker,
) {
    let style = &profile.style;
    canvas.round_rect(
        sticker.x,
        sticker.y,
        sticker.width,
        sticker.height,
        profile.geometry.corner_radius,
    );
    canvas.draw_centred_string(
        style.label_font,
        style.label_size,
        sticker.center_x(),
        sticker.y + sticker.height - style.label_drop,
        invoice_line,
    );
    canvas.draw_centred_string(
        style.box_font,
        style.box_size,
        sticker.center_x(),
        sticker.y + sticker.height / 2.0,
        &sticker.box_line(),
    );
}

/// Renders every sticker of `job`, closing each page after drawing it.
pub fn render_job<C: Canvas>(
    canvas: &mut C,
    profile: &SheetProfile,
    job: &StickerJob,
) -> Result<SheetSummary> {
    if job.total_boxes == 0 {
        return Err(StickerError::InvalidBoxCount(job.total_boxes.to_string()));
    }
    profile.geometry.validate()?;
    let grid = profile.geometry.grid();
    if grid.is_empty() {
        return Err(StickerError::DegenerateGeometry(format!(
            "no sticker fits on the page ({} per row, {} per column)",
            grid.per_row, grid.per_col
        )));
    }
    debug!(
        "grid {}x{} ({} per page) for {} boxes",
        grid.per_row,
        grid.per_col,
        grid.per_page(),
        job.total_boxes
    );

    let mut next_box = 1;
    let mut pages = 0;
    while next_box <= u64::from(job.total_boxes) {
        next_box = draw_page(canvas, profile, job, next_box);
        canvas.show_page();
        pages += 1;
    }

    Ok(SheetSummary {
        invoice: job.invoice.clone(),
        total_boxes: job.total_boxes,
        pages,
        stickers: job.total_boxes,
        grid,
    })
}
