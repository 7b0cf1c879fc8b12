use crate::geometry::{cm, PageGeometry};
use crate::render::Font;

/// Fonts and sizes for the two text lines of a sticker.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    pub label_font: Font,
    pub label_size: f32,
    pub box_font: Font,
    pub box_size: f32,
    /// Distance from the top edge of the sticker down to the label baseline.
    pub label_drop: f32,
}

impl TextStyle {
    pub fn console() -> Self {
        Self {
            label_font: Font::HelveticaBold,
            label_size: 12.0,
            box_font: Font::Helvetica,
            box_size: 10.0,
            label_drop: cm(1.0),
        }
    }

    /// Slightly smaller type used by the web form.
    pub fn web() -> Self {
        Self {
            label_size: 10.0,
            box_size: 9.0,
            ..Self::console()
        }
    }
}

/// Everything the layout engine needs besides the job itself.
///
/// Each front end builds one profile and hands it to its [`crate::api::StickerApi`];
/// nothing here is global.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SheetProfile {
    pub geometry: PageGeometry,
    pub style: TextStyle,
}

impl SheetProfile {
    pub fn new(geometry: PageGeometry, style: TextStyle) -> Self {
        Self { geometry, style }
    }

    pub fn console() -> Self {
        Self::new(PageGeometry::a4_box_stickers(), TextStyle::console())
    }

    pub fn web() -> Self {
        Self::new(PageGeometry::a4_box_stickers(), TextStyle::web())
    }
}
