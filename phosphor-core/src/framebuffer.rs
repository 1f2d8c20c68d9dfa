//! Page-organized monochrome frame store.
//!
//! The panel is addressed in horizontal "pages" of 8 pixel rows; one byte
//! holds a vertical strip of 8 pixels in a single column:
//!
//! ```text
//! column:    0         1        ...    127
//! page 0   [b0..b7]  [b0..b7]  ...   rows  0..=7   (bit 0 = top row)
//! page 1   [b0..b7]  [b0..b7]  ...   rows  8..=15
//!   ...
//! page 7   [b0..b7]  [b0..b7]  ...   rows 56..=63
//! ```
//!
//! Bit `b` of `pages[page][col]` is pixel `(col, page * 8 + b)`. Every
//! drawing primitive ultimately lands here through [`FrameBuffer::set_pixel`]
//! or one of the masked area operations.

/// Screen width in pixels (also the byte span of one page row).
pub const WIDTH: usize = 128;
/// Screen height in pixels.
pub const HEIGHT: usize = 64;
/// Number of 8-row pages.
pub const PAGE_COUNT: usize = HEIGHT / 8;
/// Columns per page row.
pub const COLUMN_COUNT: usize = WIDTH;

/// Pixel color on a 1-bit panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Color {
    /// Bit cleared, pixel dark.
    Black,
    /// Bit set, pixel lit.
    White,
}

/// One full frame of pixel data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    pages: [[u8; COLUMN_COUNT]; PAGE_COUNT],
}

impl Default for FrameBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameBuffer {
    /// Create a cleared frame.
    pub const fn new() -> Self {
        Self {
            pages: [[0; COLUMN_COUNT]; PAGE_COUNT],
        }
    }

    /// Zero every page in one bulk pass.
    pub fn clear(&mut self) {
        for page in self.pages.iter_mut() {
            page.fill(0);
        }
    }

    /// Paint every pixel with one color in bulk.
    pub fn fill(&mut self, color: Color) {
        let byte = match color {
            Color::Black => 0x00,
            Color::White => 0xFF,
        };
        for page in self.pages.iter_mut() {
            page.fill(byte);
        }
    }

    /// Set or clear a single pixel. Out-of-range coordinates are ignored.
    pub fn set_pixel(&mut self, x: i16, y: i16, color: Color) {
        if x < 0 || x >= WIDTH as i16 || y < 0 || y >= HEIGHT as i16 {
            return;
        }
        let byte = &mut self.pages[(y / 8) as usize][x as usize];
        let bit = 1u8 << (y % 8);
        match color {
            Color::White => *byte |= bit,
            Color::Black => *byte &= !bit,
        }
    }

    /// Read a pixel back. Out-of-range coordinates read as dark.
    pub fn pixel(&self, x: i16, y: i16) -> bool {
        if x < 0 || x >= WIDTH as i16 || y < 0 || y >= HEIGHT as i16 {
            return false;
        }
        self.pages[(y / 8) as usize][x as usize] & (1 << (y % 8)) != 0
    }

    /// Borrow one page row. `page` must be below [`PAGE_COUNT`].
    pub fn page(&self, page: usize) -> &[u8; COLUMN_COUNT] {
        &self.pages[page]
    }

    /// Mutable access to one page row. `page` must be below [`PAGE_COUNT`].
    pub(crate) fn page_mut(&mut self, page: usize) -> &mut [u8; COLUMN_COUNT] {
        &mut self.pages[page]
    }

    /// Invert every pixel of the frame.
    pub fn invert(&mut self) {
        for page in self.pages.iter_mut() {
            for byte in page.iter_mut() {
                *byte ^= 0xFF;
            }
        }
    }

    /// Invert the pixels inside a rectangle, clamped to the screen.
    pub fn invert_area(&mut self, x: i16, y: i16, width: i16, height: i16) {
        let Some(span) = PageSpan::clamp(x, y, width, height) else {
            return;
        };
        for page in span.first_page..=span.last_page {
            let mask = span.mask_for(page);
            for byte in &mut self.pages[page][span.x0..span.x1] {
                *byte ^= mask;
            }
        }
    }

    /// Clear the pixels inside a rectangle, clamped to the screen.
    ///
    /// Page rows fully covered by the rectangle are zeroed in bulk rather
    /// than masked byte by byte.
    pub fn clear_area(&mut self, x: i16, y: i16, width: i16, height: i16) {
        let Some(span) = PageSpan::clamp(x, y, width, height) else {
            return;
        };
        for page in span.first_page..=span.last_page {
            let mask = span.mask_for(page);
            let row = &mut self.pages[page][span.x0..span.x1];
            if mask == 0xFF {
                row.fill(0);
            } else {
                for byte in row {
                    *byte &= !mask;
                }
            }
        }
    }
}

/// A rectangle resolved to page rows, bit masks and a column range.
struct PageSpan {
    x0: usize,
    x1: usize,
    first_page: usize,
    last_page: usize,
    first_bit: u8,
    last_bit: u8,
}

impl PageSpan {
    /// Clamp a rectangle to the screen. Returns `None` when nothing of it
    /// is visible or the extent is empty.
    fn clamp(mut x: i16, mut y: i16, mut width: i16, mut height: i16) -> Option<Self> {
        if width <= 0 || height <= 0 || x >= WIDTH as i16 || y >= HEIGHT as i16 {
            return None;
        }
        if x < 0 {
            width += x;
            x = 0;
        }
        if y < 0 {
            height += y;
            y = 0;
        }
        if width <= 0 || height <= 0 {
            return None;
        }
        width = width.min(WIDTH as i16 - x);
        height = height.min(HEIGHT as i16 - y);

        let last_y = y + height - 1;
        Some(Self {
            x0: x as usize,
            x1: (x + width) as usize,
            first_page: (y / 8) as usize,
            last_page: (last_y / 8) as usize,
            first_bit: (y % 8) as u8,
            last_bit: (last_y % 8) as u8,
        })
    }

    /// Bit mask covering the rows the rectangle occupies within `page`.
    fn mask_for(&self, page: usize) -> u8 {
        let mut mask = 0xFFu8;
        if page == self.first_page {
            mask &= 0xFF << self.first_bit;
        }
        if page == self.last_page {
            mask &= 0xFF >> (7 - self.last_bit);
        }
        mask
    }
}
