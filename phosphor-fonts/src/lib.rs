//! Static glyph data for the phosphor OLED engine.
//!
//! Two fixed-width ASCII faces (6x8 and 8x16) covering the printable range
//! `' '..='~'`, and a catalog of 16x16 glyphs for multi-byte (CJK)
//! characters keyed by their UTF-8 encoding. All tables are immutable and
//! consumed read-only by the renderer.

#![no_std]
#![deny(unsafe_code)]

mod ascii;
mod cjk;

pub use ascii::{ASCII_GLYPH_COUNT, FONT_6X8, FONT_8X16};
pub use cjk::CJK_16X16;

/// One 16x16 glyph: a UTF-8 key and its packed bitmap.
///
/// `data` holds 16 page-0 columns followed by 16 page-1 columns, with the
/// least significant bit of each byte as the topmost row of its page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CjkGlyph {
    pub key: &'static str,
    pub data: [u8; 32],
}

/// Looks up the 6x8 glyph for a printable ASCII byte.
pub fn glyph_6x8(c: u8) -> Option<&'static [u8; 6]> {
    if (b' '..=b'~').contains(&c) {
        Some(&FONT_6X8[(c - b' ') as usize])
    } else {
        None
    }
}

/// Looks up the 8x16 glyph for a printable ASCII byte.
pub fn glyph_8x16(c: u8) -> Option<&'static [u8; 16]> {
    if (b' '..=b'~').contains(&c) {
        Some(&FONT_8X16[(c - b' ') as usize])
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tables_cover_printable_range() {
        assert_eq!(FONT_6X8.len(), ASCII_GLYPH_COUNT);
        assert_eq!(FONT_8X16.len(), ASCII_GLYPH_COUNT);
        assert!(glyph_6x8(b' ').is_some());
        assert!(glyph_6x8(b'~').is_some());
        assert!(glyph_6x8(0x1F).is_none());
        assert!(glyph_6x8(0x7F).is_none());
    }

    #[test]
    fn space_is_blank() {
        assert_eq!(glyph_6x8(b' '), Some(&[0u8; 6]));
        assert_eq!(glyph_8x16(b' '), Some(&[0u8; 16]));
    }

    #[test]
    fn exclamation_mark_column() {
        // Single lit column, rows 1..=6 of the 5x7 art.
        assert_eq!(glyph_6x8(b'!'), Some(&[0x00, 0x00, 0x5F, 0x00, 0x00, 0x00]));
    }

    #[test]
    fn tall_face_doubles_rows() {
        // The '!' column is 0x5F: stem on rows 0..=4 plus a dot on row 6.
        // Doubled and shifted down one row that becomes rows 1..=10 and
        // 13..=14, split across the two page halves. The lit column sits at
        // index 3 because of the blank pad column on the left.
        let g = glyph_8x16(b'!').unwrap();
        assert_eq!(g[3], 0xFE); // top page, rows 1..=7
        assert_eq!(g[8 + 3], 0x67); // bottom page, rows 8..=10 and 13..=14
    }

    #[test]
    fn cjk_keys_are_three_byte_utf8() {
        for glyph in CJK_16X16 {
            assert_eq!(glyph.key.len(), 3, "key {:?}", glyph.key);
            assert!(glyph.key.as_bytes()[0] >= 0x80);
        }
    }

    #[test]
    fn cjk_keys_are_unique() {
        for (i, a) in CJK_16X16.iter().enumerate() {
            for b in &CJK_16X16[i + 1..] {
                assert_ne!(a.key, b.key);
            }
        }
    }

    #[test]
    fn catalog_holds_chart_labels() {
        let mut keys = CJK_16X16.iter().map(|g| g.key);
        assert!(keys.any(|k| k == "均"));
        let mut keys = CJK_16X16.iter().map(|g| g.key);
        assert!(keys.any(|k| k == "值"));
    }
}
