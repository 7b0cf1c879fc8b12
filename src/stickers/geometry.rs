//! # Page Geometry
//!
//! Measurements that decide how many stickers fit on a page and where each one goes.
//! Everything is carried in PDF points (1/72 inch); constants are written in centimeters
//! and converted once through [`cm`].
//!
//! The grid is computed with floor divisions: whatever does not fit as a whole sticker
//! stays as page whitespace. Columns are separated by [`PageGeometry::separation`],
//! rows touch edge to edge.
//!
//! ```
//! use stickers::geometry::PageGeometry;
//!
//! let grid = PageGeometry::a4_box_stickers().grid();
//! assert_eq!((grid.per_row, grid.per_col, grid.per_page()), (3, 8, 24));
//! ```

use crate::error::{Result, StickerError};

/// Points per centimeter.
pub const POINTS_PER_CM: f32 = 72.0 / 2.54;

pub const A4_WIDTH_CM: f32 = 21.0;
pub const A4_HEIGHT_CM: f32 = 29.7;

/// Converts centimeters to points.
pub fn cm(value: f32) -> f32 {
    value * POINTS_PER_CM
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageGeometry {
    pub page_width: f32,
    pub page_height: f32,
    pub margin_left: f32,
    pub margin_right: f32,
    pub margin_top: f32,
    pub margin_bottom: f32,
    pub sticker_width: f32,
    pub sticker_height: f32,
    /// Horizontal gap between columns. There is no vertical counterpart.
    pub separation: f32,
    pub corner_radius: f32,
}

impl PageGeometry {
    /// A4 sheet of 6.4 × 3.4 cm box stickers.
    pub fn a4_box_stickers() -> Self {
        Self {
            page_width: cm(A4_WIDTH_CM),
            page_height: cm(A4_HEIGHT_CM),
            margin_left: cm(0.6),
            margin_right: cm(0.3),
            margin_top: cm(1.2),
            margin_bottom: cm(1.2),
            sticker_width: cm(6.4),
            sticker_height: cm(3.4),
            separation: cm(0.3),
            corner_radius: cm(0.2),
        }
    }

    /// Rejects non-finite or non-positive measurements.
    ///
    /// Separation and corner radius may be zero. A geometry that passes here can still
    /// have zero capacity (stickers larger than the printable area); see
    /// [`LayoutGrid::is_empty`].
    pub fn validate(&self) -> Result<()> {
        let strictly_positive = [
            ("page width", self.page_width),
            ("page height", self.page_height),
            ("left margin", self.margin_left),
            ("right margin", self.margin_right),
            ("top margin", self.margin_top),
            ("bottom margin", self.margin_bottom),
            ("sticker width", self.sticker_width),
            ("sticker height", self.sticker_height),
        ];
        for (name, value) in strictly_positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(StickerError::DegenerateGeometry(format!(
                    "{} must be positive, got {}",
                    name, value
                )));
            }
        }

        for (name, value) in [
            ("separation", self.separation),
            ("corner radius", self.corner_radius),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(StickerError::DegenerateGeometry(format!(
                    "{} must not be negative, got {}",
                    name, value
                )));
            }
        }
        Ok(())
    }

    pub fn grid(&self) -> LayoutGrid {
        let usable_width = self.page_width - self.margin_left - self.margin_right + self.separation;
        let usable_height = self.page_height - self.margin_top - self.margin_bottom;

        LayoutGrid {
            per_row: whole_fits(usable_width, self.sticker_width + self.separation),
            per_col: whole_fits(usable_height, self.sticker_height),
        }
    }

    /// Lower-left corner of the cell at `(row, col)`, row 0 being nearest the top margin.
    pub fn cell_origin(&self, row: u32, col: u32) -> (f32, f32) {
        let x = self.margin_left + col as f32 * (self.sticker_width + self.separation);
        let y = self.page_height
            - self.margin_top
            - self.sticker_height
            - row as f32 * self.sticker_height;
        (x, y)
    }

    /// Right edge of the printable area.
    pub fn printable_right(&self) -> f32 {
        self.page_width - self.margin_right
    }
}

impl Default for PageGeometry {
    fn default() -> Self {
        Self::a4_box_stickers()
    }
}

fn whole_fits(available: f32, step: f32) -> u32 {
    let count = (available / step).floor();
    if count.is_finite() && count > 0.0 {
        count as u32
    } else {
        0
    }
}

/// How many stickers fit on one page. Derived from [`PageGeometry`], never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutGrid {
    pub per_row: u32,
    pub per_col: u32,
}

impl LayoutGrid {
    pub fn per_page(&self) -> u32 {
        self.per_row.saturating_mul(self.per_col)
    }

    pub fn is_empty(&self) -> bool {
        self.per_page() == 0
    }

    /// Pages needed for `total` stickers, or `None` when nothing fits.
    pub fn pages_for(&self, total: u32) -> Option<u32> {
        if self.is_empty() {
            return None;
        }
        Some(total.div_ceil(self.per_page()))
    }
}
