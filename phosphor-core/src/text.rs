//! Text rendering: embedded ASCII faces plus a hashed CJK glyph catalog.
//!
//! ASCII glyphs are blitted column by column straight into the page
//! store, splitting across two pages when the baseline is not a
//! multiple of 8. CJK characters ride the generic image blit: each one
//! is a 16x16 bitmap found by a three-byte UTF-8 key in an
//! open-addressed index built lazily on the first lookup.

use core::fmt;

use heapless::String;
use phosphor_fonts::{glyph_6x8, glyph_8x16, CjkGlyph, CJK_16X16};

use crate::framebuffer::{FrameBuffer, HEIGHT, PAGE_COUNT, WIDTH};
use crate::raster::Image;

const W: i16 = WIDTH as i16;
const H: i16 = HEIGHT as i16;

/// Advance of one CJK cell in pixels.
const CJK_CELL: i16 = 16;

/// Number of slots in the glyph index. Prime, and comfortably larger
/// than the catalog so probe chains stay short and a miss always finds
/// an empty slot.
const SLOT_COUNT: usize = 131;

/// Built-in ASCII faces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Font {
    /// 6 pixel advance, single page tall.
    F6x8,
    /// 8 pixel advance, two pages tall.
    F8x16,
}

impl Font {
    pub const fn width(self) -> i16 {
        match self {
            Font::F6x8 => 6,
            Font::F8x16 => 8,
        }
    }

    pub const fn height(self) -> i16 {
        match self {
            Font::F6x8 => 8,
            Font::F8x16 => 16,
        }
    }
}

/// Open-addressed index over the CJK catalog, keyed by the three UTF-8
/// bytes of each character. Linear probing; the table never fills
/// because [`SLOT_COUNT`] exceeds the catalog size.
pub struct GlyphIndex {
    slots: [Option<&'static CjkGlyph>; SLOT_COUNT],
    built: bool,
}

impl GlyphIndex {
    pub const fn new() -> Self {
        Self {
            slots: [None; SLOT_COUNT],
            built: false,
        }
    }

    fn hash(key: &[u8]) -> usize {
        let mut h: u16 = 0;
        for &b in key.iter().take(3) {
            h = h.wrapping_mul(31).wrapping_add(b as u16);
        }
        h as usize % SLOT_COUNT
    }

    fn build(&mut self) {
        for glyph in CJK_16X16 {
            self.insert(glyph);
        }
        self.built = true;
    }

    fn insert(&mut self, glyph: &'static CjkGlyph) {
        let mut idx = Self::hash(glyph.key.as_bytes());
        for _ in 0..SLOT_COUNT {
            if self.slots[idx].is_none() {
                self.slots[idx] = Some(glyph);
                return;
            }
            idx = (idx + 1) % SLOT_COUNT;
        }
    }

    /// Find the catalog glyph for a three-byte key, building the index
    /// on first use.
    pub fn lookup(&mut self, key: &[u8]) -> Option<&'static CjkGlyph> {
        if !self.built {
            self.build();
        }
        let mut idx = Self::hash(key);
        for _ in 0..SLOT_COUNT {
            match self.slots[idx] {
                None => return None,
                Some(glyph) if glyph.key.as_bytes() == key => return Some(glyph),
                Some(_) => idx = (idx + 1) % SLOT_COUNT,
            }
        }
        None
    }
}

impl Default for GlyphIndex {
    fn default() -> Self {
        Self::new()
    }
}

/// OR one glyph column byte into the frame at an arbitrary bit offset,
/// carrying the overflow into the next page.
fn blit_column(fb: &mut FrameBuffer, x: i16, page: i16, bit: u32, data: u8) {
    if page < 0 || page >= PAGE_COUNT as i16 {
        return;
    }
    let col = x as usize;
    fb.page_mut(page as usize)[col] |= data << bit;
    if bit > 0 && page + 1 < PAGE_COUNT as i16 {
        fb.page_mut(page as usize + 1)[col] |= data >> (8 - bit);
    }
}

/// Draw one printable ASCII character with its top-left corner at
/// `(x, y)`. Off-screen origins and characters outside `' '..='~'` are
/// ignored; columns running past the right edge are clipped.
pub fn draw_char(fb: &mut FrameBuffer, x: i16, y: i16, c: u8, font: Font) {
    if x < 0 || x >= W || y < 0 || y >= H || !(b' '..=b'~').contains(&c) {
        return;
    }
    let page_start = y / 8;
    let bit = (y % 8) as u32;

    match font {
        Font::F6x8 => {
            if let Some(glyph) = glyph_6x8(c) {
                for (col, &data) in glyph.iter().enumerate() {
                    let cx = x + col as i16;
                    if cx >= W {
                        break;
                    }
                    blit_column(fb, cx, page_start, bit, data);
                }
            }
        }
        Font::F8x16 => {
            if let Some(glyph) = glyph_8x16(c) {
                for half in 0..2usize {
                    let page = page_start + half as i16;
                    for col in 0..8usize {
                        let cx = x + col as i16;
                        if cx >= W {
                            break;
                        }
                        blit_column(fb, cx, page, bit, glyph[half * 8 + col]);
                    }
                }
            }
        }
    }
}

/// Draw a mixed ASCII/CJK string starting at `(x, y)` and return the
/// final cursor position.
///
/// `\n` moves the cursor down one font height and back to the start
/// column, `\r` only rewinds the column. A byte with the high bit set
/// starts a three-byte catalog lookup; on a hit the 16x16 glyph is
/// blitted and three bytes are consumed, on a miss (or with fewer than
/// three bytes left) the cursor skips one cell and one byte is
/// consumed. An off-screen origin rejects the whole call.
pub fn draw_str(
    fb: &mut FrameBuffer,
    glyphs: &mut GlyphIndex,
    x: i16,
    y: i16,
    s: &str,
    font: Font,
) -> (i16, i16) {
    if x < 0 || x >= W || y < 0 || y >= H {
        return (x, y);
    }

    let bytes = s.as_bytes();
    let mut cx = x;
    let mut cy = y;
    let mut i = 0;

    while i < bytes.len() {
        let b = bytes[i];
        match b {
            b'\n' => {
                cy += font.height();
                cx = x;
                i += 1;
            }
            b'\r' => {
                cx = x;
                i += 1;
            }
            0x00..=0x7F => {
                draw_char(fb, cx, cy, b, font);
                cx += font.width();
                i += 1;
            }
            _ => {
                if i + 3 <= bytes.len() {
                    if let Some(glyph) = glyphs.lookup(&bytes[i..i + 3]) {
                        fb.draw_image(cx, cy, &Image::new(16, 16, &glyph.data));
                        cx += CJK_CELL;
                        i += 3;
                        continue;
                    }
                }
                cx += font.width();
                i += 1;
            }
        }
    }

    (cx, cy)
}

/// Format into a stack buffer and draw the result, returning the final
/// cursor position. Output beyond 128 bytes is truncated.
pub fn draw_fmt(
    fb: &mut FrameBuffer,
    glyphs: &mut GlyphIndex,
    x: i16,
    y: i16,
    font: Font,
    args: fmt::Arguments<'_>,
) -> (i16, i16) {
    let mut buf: String<128> = String::new();
    let _ = fmt::write(&mut buf, args);
    draw_str(fb, glyphs, x, y, &buf, font)
}
