//! Advance widths of the standard Helvetica faces, taken from the Adobe AFM files.
//!
//! Widths are in thousandths of the font size and cover the printable ASCII range
//! (`0x20..=0x7E`) under WinAnsi encoding. Anything else measures as
//! [`FALLBACK_WIDTH`], which is close enough for centering Latin-1 text.

use super::Font;

pub const FALLBACK_WIDTH: u16 = 556;

#[rustfmt::skip]
const HELVETICA: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278, // ' '..'/'
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 278, 278, 584, 584, 584, 556, // '0'..'?'
    1015, 667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, 722, 778, // '@'..'O'
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 278, 278, 278, 469, 556, // 'P'..'_'
    333, 556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, 556, 556, // '`'..'o'
    556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, 334, 260, 334, 584,      // 'p'..'~'
];

#[rustfmt::skip]
const HELVETICA_BOLD: [u16; 95] = [
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278, // ' '..'/'
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 333, 333, 584, 584, 584, 611, // '0'..'?'
    975, 722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833, 722, 778, // '@'..'O'
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 333, 278, 333, 584, 556, // 'P'..'_'
    333, 556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889, 611, 611, // '`'..'o'
    611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500, 389, 280, 389, 584,      // 'p'..'~'
];

fn glyph_width(font: Font, c: char) -> u16 {
    let table = match font {
        Font::Helvetica => &HELVETICA,
        Font::HelveticaBold => &HELVETICA_BOLD,
    };
    match c {
        ' '..='~' => table[c as usize - 0x20],
        _ => FALLBACK_WIDTH,
    }
}

/// Width of `text` in points when set in `font` at `size`.
pub fn string_width(font: Font, size: f32, text: &str) -> f32 {
    let units: u64 = text.chars().map(|c| u64::from(glyph_width(font, c))).sum();
    units as f32 * size / 1000.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_string_has_no_width() {
        assert_eq!(string_width(Font::Helvetica, 12.0, ""), 0.0);
    }

    #[test]
    fn test_digits_are_tabular() {
        let a = string_width(Font::Helvetica, 10.0, "Box 1 of 9");
        let b = string_width(Font::Helvetica, 10.0, "Box 7 of 3");
        assert_eq!(a, b);
    }

    #[test]
    fn test_very_long_label() {
        // 5M glyphs of 944 units is past u32::MAX
        let text = "W".repeat(5_000_000);
        let width = string_width(Font::Helvetica, 1.0, &text);
        assert!((width - 4_720_000.0).abs() < 1.0, "got {}", width);
    }

    #[test]
    fn test_known_widths() {
        // "Box" = 667 + 556 + 500
        assert_eq!(string_width(Font::Helvetica, 1000.0, "Box"), 1723.0);
        // Bold "Box" = 722 + 611 + 556
        assert_eq!(string_width(Font::HelveticaBold, 1000.0, "Box"), 1889.0);
    }

    #[test]
    fn test_bold_is_wider() {
        let text = "Invoice: INV-2024-001";
        assert!(
            string_width(Font::HelveticaBold, 12.0, text) > string_width(Font::Helvetica, 12.0, text)
        );
    }

    #[test]
    fn test_non_ascii_uses_fallback() {
        assert_eq!(
            string_width(Font::Helvetica, 1000.0, "é"),
            f32::from(FALLBACK_WIDTH)
        );
    }
}
